//! Shared types used across all axon crates.
//!
//! Two worlds of identity live here. Templates (Neuron, Synapse) belong to
//! the persistent network and carry UUID identities. Runtime instances
//! (Activation, Link) belong to exactly one Thought and carry arena indices
//! that are only meaningful inside that Thought.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a neuron template in the persistent network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeuronId(pub Uuid);

impl NeuronId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic ID for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u128(seed as u128))
    }
}

impl Default for NeuronId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a synapse template in the persistent network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SynapseId(pub Uuid);

impl SynapseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic ID for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u128(seed as u128))
    }
}

impl Default for SynapseId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for one reasoning episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThoughtId(pub Uuid);

impl ThoughtId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ThoughtId {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of an activation within its Thought's arena.
///
/// Only meaningful together with the owning Thought — two Thoughts can both
/// have an activation 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivationId(pub u64);

/// Index of a link within its Thought's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkId(pub u64);

/// A neuron template — an immutable identity that many activations across
/// many Thoughts may reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neuron {
    pub id: NeuronId,
    pub label: String,
}

/// A directed, weighted template relation between two neurons.
///
/// Synapses are owned by the network-wide template graph and outlive any
/// single Thought.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synapse {
    pub id: SynapseId,
    /// The cause-side neuron.
    pub input: NeuronId,
    /// The effect-side neuron.
    pub output: NeuronId,
    pub weight: f64,
}

/// A runtime node — one firing of a neuron within one Thought.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activation {
    pub id: ActivationId,
    /// The Thought that owns this activation.
    pub thought: ThoughtId,
    pub neuron: NeuronId,
    /// Tick of the owning Thought when this activation was created.
    pub created_tick: Tick,
}

/// A runtime edge instantiating a synapse between two activations of the
/// same Thought.
///
/// The (synapse, input, output) triple is unique within a Thought; link
/// orientation always matches the synapse's declared input/output roles,
/// regardless of which direction the walk that created it was moving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub synapse: SynapseId,
    /// The cause-side activation.
    pub input: ActivationId,
    /// The effect-side activation.
    pub output: ActivationId,
}

/// The current tick of a Thought.
pub type Tick = u64;
