//! Concrete implementation of the TemplateGraph trait using petgraph.
//!
//! The template network is the persistent backbone the per-episode
//! activation graphs instantiate. This implementation uses petgraph's
//! directed `Graph` as the backing store with HashMap indices for O(1)
//! neuron/synapse lookup by ID.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use axon_core::direction::Direction;
use axon_core::error::{AxonError, Result};
use axon_core::template::TemplateGraph;
use axon_core::types::{Neuron, NeuronId, Synapse, SynapseId};

/// Petgraph-backed implementation of the template network.
pub struct Network {
    graph: DiGraph<Neuron, Synapse>,
    /// Map from our NeuronId to petgraph's internal index.
    neuron_index: HashMap<NeuronId, NodeIndex>,
    synapse_index: HashMap<SynapseId, EdgeIndex>,
    /// Index from lowercase label to neuron IDs for O(1) exact lookup.
    label_index: HashMap<String, Vec<NeuronId>>,
}

impl Network {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            neuron_index: HashMap::new(),
            synapse_index: HashMap::new(),
            label_index: HashMap::new(),
        }
    }

    /// Add a neuron template and return its ID.
    pub fn add_neuron(&mut self, label: impl Into<String>) -> NeuronId {
        let neuron = Neuron {
            id: NeuronId::new(),
            label: label.into(),
        };
        let id = neuron.id;
        let label_key = neuron.label.to_lowercase();
        let idx = self.graph.add_node(neuron);
        self.neuron_index.insert(id, idx);
        self.label_index.entry(label_key).or_default().push(id);
        id
    }

    /// Add a directed synapse template from `input` to `output`.
    ///
    /// Both endpoint neurons must already exist. Parallel synapses between
    /// the same neuron pair are allowed — they are distinct templates.
    pub fn add_synapse(&mut self, input: NeuronId, output: NeuronId, weight: f64) -> Result<SynapseId> {
        let &input_idx = self
            .neuron_index
            .get(&input)
            .ok_or_else(|| AxonError::neuron_not_found(input))?;
        let &output_idx = self
            .neuron_index
            .get(&output)
            .ok_or_else(|| AxonError::neuron_not_found(output))?;

        let synapse = Synapse {
            id: SynapseId::new(),
            input,
            output,
            weight,
        };
        let id = synapse.id;
        let edge_idx = self.graph.add_edge(input_idx, output_idx, synapse);
        self.synapse_index.insert(id, edge_idx);
        Ok(id)
    }

    /// O(1) exact label lookup (case-insensitive).
    pub fn find_neurons_by_label(&self, label: &str) -> &[NeuronId] {
        self.label_index
            .get(&label.to_lowercase())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateGraph for Network {
    fn neuron(&self, id: NeuronId) -> Result<&Neuron> {
        self.neuron_index
            .get(&id)
            .map(|idx| &self.graph[*idx])
            .ok_or_else(|| AxonError::neuron_not_found(id))
    }

    fn synapse(&self, id: SynapseId) -> Result<&Synapse> {
        self.synapse_index
            .get(&id)
            .map(|idx| &self.graph[*idx])
            .ok_or_else(|| AxonError::synapse_not_found(id))
    }

    fn synapses(&self, neuron: NeuronId, direction: Direction) -> Vec<SynapseId> {
        let Some(&idx) = self.neuron_index.get(&neuron) else {
            return Vec::new();
        };

        // An Output walk leaves a neuron along synapses declaring it as
        // input, which petgraph stores as outgoing edges.
        let petgraph_dir = match direction {
            Direction::Output => petgraph::Direction::Outgoing,
            Direction::Input => petgraph::Direction::Incoming,
        };

        self.graph
            .edges_directed(idx, petgraph_dir)
            .map(|edge| edge.weight().id)
            .collect()
    }

    fn neuron_count(&self) -> usize {
        self.graph.node_count()
    }

    fn synapse_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synapse_endpoints_must_exist() {
        let mut net = Network::new();
        let n1 = net.add_neuron("a");
        let ghost = NeuronId::from_seed(99);
        assert!(net.add_synapse(n1, ghost, 1.0).is_err());
        assert!(net.add_synapse(ghost, n1, 1.0).is_err());
        assert_eq!(net.synapse_count(), 0);
    }

    #[test]
    fn role_enumeration_follows_direction() {
        let mut net = Network::new();
        let n1 = net.add_neuron("cause");
        let n2 = net.add_neuron("effect");
        let s = net.add_synapse(n1, n2, 1.0).unwrap();

        assert_eq!(net.synapses(n1, Direction::Output), vec![s]);
        assert!(net.synapses(n1, Direction::Input).is_empty());
        assert_eq!(net.synapses(n2, Direction::Input), vec![s]);
        assert!(net.synapses(n2, Direction::Output).is_empty());
    }

    #[test]
    fn label_lookup_is_case_insensitive() {
        let mut net = Network::new();
        let n = net.add_neuron("Membrane");
        assert_eq!(net.find_neurons_by_label("membrane"), &[n]);
        assert!(net.find_neurons_by_label("nucleus").is_empty());
    }
}
