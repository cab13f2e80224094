//! Template graph — the persistent neuron/synapse network contract.
//!
//! Templates outlive Thoughts: the same synapse can be instantiated as a
//! link in many episodes. Traversal code only needs lookups and incident
//! synapse enumeration, so that is all this trait asks for; the stock
//! implementation is `axon_runtime::Network` (petgraph-backed).

use crate::direction::Direction;
use crate::error::Result;
use crate::types::{Neuron, NeuronId, Synapse, SynapseId};

/// Read-only view of the network-wide template graph.
pub trait TemplateGraph {
    /// Look up a neuron.
    fn neuron(&self, id: NeuronId) -> Result<&Neuron>;

    /// Look up a synapse.
    fn synapse(&self, id: SynapseId) -> Result<&Synapse>;

    /// Synapses a walk in `direction` follows out of `neuron` — the
    /// synapses on which `neuron` occupies the `direction.invert()` role.
    /// Under `Output` these are the synapses whose input neuron is
    /// `neuron`; under `Input`, those whose output neuron is.
    fn synapses(&self, neuron: NeuronId, direction: Direction) -> Vec<SynapseId>;

    /// Number of neurons.
    fn neuron_count(&self) -> usize;

    /// Number of synapses.
    fn synapse_count(&self) -> usize;
}
