//! # Axon Core
//!
//! Core types and capability traits for the axon activation-network engine.
//!
//! An activation network separates templates from instances: Neurons and
//! Synapses are the persistent template graph, Activations and Links are
//! their per-episode runtime instances, and a Thought is the episode that
//! owns them. This crate defines those shared types plus the three
//! capability seams everything else plugs into:
//!
//! - **Direction** — orientation capability (`Input`/`Output`) that makes
//!   traversal code direction-agnostic
//! - **Episode** — the per-Thought activation graph contract
//! - **TemplateGraph** — the persistent neuron/synapse network contract
//! - **LinkingOperator** — pluggable policy deciding link creation during a
//!   walk
//!
//! ## Quick Start
//!
//! ```rust
//! use axon_core::prelude::*;
//!
//! // Directions invert into each other
//! assert_eq!(Direction::Input.invert(), Direction::Output);
//!
//! // Deterministic template ids (for testing)
//! let n = NeuronId::from_seed(42);
//! ```

pub mod direction;
pub mod episode;
pub mod error;
pub mod operator;
pub mod prelude;
pub mod template;
pub mod types;
