//! Axon Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use axon_runtime::prelude::*;
//! ```

pub use crate::linker::{InducingLinker, MatchingLinker};
pub use crate::network::Network;
pub use crate::snapshot::{ActivationSnapshot, LinkSnapshot, ThoughtSnapshot};
pub use crate::thought::Thought;
pub use crate::visitor::{DownVisitor, LinkingDownVisitor, LinkingOutcome, WalkState};

// The core surface the runtime types implement
pub use axon_core::prelude::*;
