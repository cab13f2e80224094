//! Axon Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use axon_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    Activation, ActivationId, Link, LinkId, Neuron, NeuronId, Synapse, SynapseId, ThoughtId, Tick,
};

// Re-export the Direction capability
pub use crate::direction::Direction;

// Re-export the Episode trait
pub use crate::episode::Episode;

// Re-export the TemplateGraph trait
pub use crate::template::TemplateGraph;

// Re-export the linking policy surface
pub use crate::operator::{LinkContext, LinkDecision, LinkingOperator};

// Re-export error types
pub use crate::error::{AxonError, Result};
