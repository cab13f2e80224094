//! # Axon
//!
//! Direction-agnostic traversal and linking engine for activation networks.
//!
//! An activation network keeps two graphs: a persistent template graph of
//! Neurons and Synapses, and a per-episode runtime graph of Activations and
//! Links owned by a Thought. Axon builds the runtime graph incrementally:
//! directed walks over the episode invoke a pluggable linking policy at
//! every step, and the policy decides which links (and activations) to
//! materialize. The same walk code runs toward causes or toward effects —
//! orientation is a runtime [`Direction`](prelude::Direction) value, not a
//! second algorithm.
//!
//! ## Quick Start
//!
//! ```rust
//! use axon::prelude::*;
//!
//! // Persistent templates
//! let mut net = Network::new();
//! let n1 = net.add_neuron("stimulus");
//! let n2 = net.add_neuron("response");
//! net.add_synapse(n1, n2, 1.0).unwrap();
//!
//! // One reasoning episode
//! let mut thought = Thought::new();
//! let start = thought.create_activation(n1);
//!
//! // Walk toward effects, inducing missing activations
//! let mut visitor = LinkingDownVisitor::new(&net, &thought, Direction::Output, InducingLinker);
//! let outcome = visitor.walk(&mut thought, start).unwrap();
//!
//! assert_eq!(outcome.links_created, 1);
//! assert_eq!(thought.link_count(), 1);
//! ```
//!
//! ## Architecture
//!
//! - [`axon_core`] — shared types, `Direction`, and the `Episode` /
//!   `TemplateGraph` / `LinkingOperator` capability traits
//! - [`axon_runtime`] — the petgraph-backed `Network`, the arena-backed
//!   `Thought`, the visitors, and the stock linking policies

pub use axon_core as core;
pub use axon_runtime as runtime;

/// Convenient imports for common usage.
pub mod prelude {
    pub use axon_runtime::prelude::*;
}
