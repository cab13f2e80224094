//! # Axon Runtime
//!
//! Concrete engine behind the axon-core contracts: the petgraph-backed
//! template [`Network`](network::Network), the arena-backed
//! [`Thought`](thought::Thought) episode container, the directional
//! visitors, and the stock linking policies.
//!
//! A caller holding a freshly fired activation picks a [`Direction`] and a
//! linking policy, builds a `LinkingDownVisitor`, and starts the walk; the
//! operator materializes links (and possibly activations) as the walk
//! descends.
//!
//! ```rust
//! use axon_runtime::prelude::*;
//!
//! let mut net = Network::new();
//! let cause = net.add_neuron("cause");
//! let effect = net.add_neuron("effect");
//! net.add_synapse(cause, effect, 1.0).unwrap();
//!
//! let mut thought = Thought::new();
//! let start = thought.create_activation(cause);
//!
//! let mut visitor = LinkingDownVisitor::new(&net, &thought, Direction::Output, InducingLinker);
//! let outcome = visitor.walk(&mut thought, start).unwrap();
//! assert_eq!(outcome.links_created, 1);
//! ```

pub mod linker;
pub mod network;
pub mod prelude;
pub mod snapshot;
pub mod thought;
pub mod visitor;
