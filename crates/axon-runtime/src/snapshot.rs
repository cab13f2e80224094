//! Serializable snapshots of a Thought's activation graph.
//!
//! A snapshot is a read-only view for inspection and export — it carries
//! no persistence semantics and cannot be loaded back into a live Thought.

use serde::Serialize;

use axon_core::episode::Episode;
use axon_core::error::Result;
use axon_core::template::TemplateGraph;
use axon_core::types::{ActivationId, SynapseId, ThoughtId, Tick};

use crate::thought::Thought;

/// A serializable snapshot of one activation.
#[derive(Debug, Clone, Serialize)]
pub struct ActivationSnapshot {
    pub id: ActivationId,
    pub neuron_label: String,
    pub created_tick: Tick,
}

/// A serializable snapshot of one link.
#[derive(Debug, Clone, Serialize)]
pub struct LinkSnapshot {
    pub synapse: SynapseId,
    pub input: ActivationId,
    pub output: ActivationId,
    pub weight: f64,
}

/// A complete serializable snapshot of a Thought at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct ThoughtSnapshot {
    pub thought: ThoughtId,
    pub tick: Tick,
    pub activations: Vec<ActivationSnapshot>,
    pub links: Vec<LinkSnapshot>,
}

impl ThoughtSnapshot {
    /// Capture the current state of a Thought, resolving template labels
    /// and weights through the network.
    pub fn capture(thought: &Thought, network: &dyn TemplateGraph) -> Result<Self> {
        let mut activations = Vec::with_capacity(thought.activation_count());
        for act in thought.activations() {
            let neuron = network.neuron(act.neuron)?;
            activations.push(ActivationSnapshot {
                id: act.id,
                neuron_label: neuron.label.clone(),
                created_tick: act.created_tick,
            });
        }

        let mut links = Vec::with_capacity(thought.link_count());
        for link in thought.links() {
            let synapse = network.synapse(link.synapse)?;
            links.push(LinkSnapshot {
                synapse: link.synapse,
                input: link.input,
                output: link.output,
                weight: synapse.weight,
            });
        }

        Ok(Self {
            thought: thought.id(),
            tick: thought.current_tick(),
            activations,
            links,
        })
    }

    /// Export as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axon_core::direction::Direction;
    use crate::linker::InducingLinker;
    use crate::network::Network;
    use crate::visitor::LinkingDownVisitor;

    #[test]
    fn snapshot_resolves_labels_and_weights() {
        let mut net = Network::new();
        let n1 = net.add_neuron("premise");
        let n2 = net.add_neuron("conclusion");
        net.add_synapse(n1, n2, 0.5).unwrap();

        let mut thought = Thought::new();
        let a1 = thought.create_activation(n1);
        let mut visitor =
            LinkingDownVisitor::new(&net, &thought, Direction::Output, InducingLinker);
        visitor.walk(&mut thought, a1).unwrap();

        let snap = ThoughtSnapshot::capture(&thought, &net).unwrap();
        assert_eq!(snap.activations.len(), 2);
        assert_eq!(snap.links.len(), 1);
        assert_eq!(snap.activations[0].neuron_label, "premise");
        assert_eq!(snap.links[0].weight, 0.5);

        let json = snap.to_json().unwrap();
        assert!(json.contains("conclusion"));
    }
}
