//! Thought — one reasoning episode and its activation graph.
//!
//! The Thought owns everything created during the episode: activations and
//! links live in Vec-backed arenas, and their ids are indices into those
//! arenas. Links reference activations bidirectionally through indices, so
//! the cyclic Activation↔Link structure needs no ownership cycles. The
//! Thought is discarded wholesale at episode end.

use std::collections::HashMap;

use tracing::debug;

use axon_core::direction::Direction;
use axon_core::episode::Episode;
use axon_core::error::{AxonError, Result};
use axon_core::types::{
    Activation, ActivationId, Link, LinkId, NeuronId, Synapse, SynapseId, ThoughtId, Tick,
};

/// The mutable container for one reasoning episode.
pub struct Thought {
    id: ThoughtId,
    tick: Tick,
    activations: Vec<Activation>,
    links: Vec<Link>,
    /// Activations by neuron, in creation order.
    by_neuron: HashMap<NeuronId, Vec<ActivationId>>,
    /// Incident links where the activation is the input side.
    links_by_input: Vec<Vec<LinkId>>,
    /// Incident links where the activation is the output side.
    links_by_output: Vec<Vec<LinkId>>,
    /// Dedup index enforcing at most one link per triple.
    link_dedup: HashMap<(SynapseId, ActivationId, ActivationId), LinkId>,
}

impl Thought {
    pub fn new() -> Self {
        Self {
            id: ThoughtId::new(),
            tick: 0,
            activations: Vec::new(),
            links: Vec::new(),
            by_neuron: HashMap::new(),
            links_by_input: Vec::new(),
            links_by_output: Vec::new(),
            link_dedup: HashMap::new(),
        }
    }

    /// All links created during this episode.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// All activations created during this episode.
    pub fn activations(&self) -> &[Activation] {
        &self.activations
    }

    fn index_of(&self, id: ActivationId) -> Result<usize> {
        let idx = id.0 as usize;
        if idx < self.activations.len() {
            Ok(idx)
        } else {
            Err(AxonError::activation_not_found(id))
        }
    }

    /// Episode-ownership check on an endpoint activation.
    fn owned(&self, id: ActivationId) -> Result<&Activation> {
        let act = &self.activations[self.index_of(id)?];
        if act.thought != self.id {
            return Err(AxonError::thought_mismatch(self.id, act.thought));
        }
        Ok(act)
    }
}

impl Default for Thought {
    fn default() -> Self {
        Self::new()
    }
}

impl Episode for Thought {
    fn id(&self) -> ThoughtId {
        self.id
    }

    fn current_tick(&self) -> Tick {
        self.tick
    }

    fn advance_tick(&mut self) {
        self.tick += 1;
    }

    fn create_activation(&mut self, neuron: NeuronId) -> ActivationId {
        let id = ActivationId(self.activations.len() as u64);
        self.activations.push(Activation {
            id,
            thought: self.id,
            neuron,
            created_tick: self.tick,
        });
        self.links_by_input.push(Vec::new());
        self.links_by_output.push(Vec::new());
        self.by_neuron.entry(neuron).or_default().push(id);
        debug!(activation = id.0, neuron = ?neuron.0, "activation created");
        id
    }

    fn activation(&self, id: ActivationId) -> Result<&Activation> {
        self.owned(id)
    }

    fn activations_of(&self, neuron: NeuronId) -> Vec<ActivationId> {
        self.by_neuron.get(&neuron).cloned().unwrap_or_default()
    }

    fn link(&self, id: LinkId) -> Result<&Link> {
        self.links
            .get(id.0 as usize)
            .ok_or_else(|| AxonError::link_not_found(id))
    }

    fn links_of(&self, activation: ActivationId, direction: Direction) -> Vec<LinkId> {
        let Ok(idx) = self.index_of(activation) else {
            return Vec::new();
        };
        // A link leads away from its `direction.invert()`-side endpoint.
        match direction {
            Direction::Output => self.links_by_input[idx].clone(),
            Direction::Input => self.links_by_output[idx].clone(),
        }
    }

    fn create_link(
        &mut self,
        synapse: &Synapse,
        input: ActivationId,
        output: ActivationId,
    ) -> Result<LinkId> {
        let input_act = self.owned(input)?;
        if input_act.neuron != synapse.input {
            return Err(AxonError::role_mismatch(
                synapse.id,
                synapse.input,
                input_act.neuron,
            ));
        }
        let output_act = self.owned(output)?;
        if output_act.neuron != synapse.output {
            return Err(AxonError::role_mismatch(
                synapse.id,
                synapse.output,
                output_act.neuron,
            ));
        }

        // At most one link per triple — re-creation is an idempotent no-op.
        if let Some(&existing) = self.link_dedup.get(&(synapse.id, input, output)) {
            return Ok(existing);
        }

        let id = LinkId(self.links.len() as u64);
        self.links.push(Link {
            id,
            synapse: synapse.id,
            input,
            output,
        });
        self.links_by_input[input.0 as usize].push(id);
        self.links_by_output[output.0 as usize].push(id);
        self.link_dedup.insert((synapse.id, input, output), id);
        debug!(
            link = id.0,
            synapse = ?synapse.id.0,
            input = input.0,
            output = output.0,
            "link created"
        );
        Ok(id)
    }

    fn activation_count(&self) -> usize {
        self.activations.len()
    }

    fn link_count(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synapse_between(input: NeuronId, output: NeuronId) -> Synapse {
        Synapse {
            id: SynapseId::new(),
            input,
            output,
            weight: 1.0,
        }
    }

    #[test]
    fn activations_are_stamped_with_the_current_tick() {
        let mut thought = Thought::new();
        let n = NeuronId::from_seed(1);
        let a0 = thought.create_activation(n);
        thought.advance_tick();
        let a1 = thought.create_activation(n);

        assert_eq!(thought.activation(a0).unwrap().created_tick, 0);
        assert_eq!(thought.activation(a1).unwrap().created_tick, 1);
        assert_eq!(thought.activations_of(n), vec![a0, a1]);
    }

    #[test]
    fn duplicate_link_is_a_silent_no_op() {
        let mut thought = Thought::new();
        let n1 = NeuronId::from_seed(1);
        let n2 = NeuronId::from_seed(2);
        let s = synapse_between(n1, n2);
        let a1 = thought.create_activation(n1);
        let a2 = thought.create_activation(n2);

        let first = thought.create_link(&s, a1, a2).unwrap();
        let second = thought.create_link(&s, a1, a2).unwrap();
        assert_eq!(first, second);
        assert_eq!(thought.link_count(), 1);
    }

    #[test]
    fn link_endpoints_must_match_synapse_roles() {
        let mut thought = Thought::new();
        let n1 = NeuronId::from_seed(1);
        let n2 = NeuronId::from_seed(2);
        let s = synapse_between(n1, n2);
        let a1 = thought.create_activation(n1);
        let a2 = thought.create_activation(n2);

        // Reversed endpoints put each activation in the wrong role
        let err = thought.create_link(&s, a2, a1).unwrap_err();
        assert!(matches!(err, AxonError::Template(_)), "got {err}");
        assert_eq!(thought.link_count(), 0);
    }

    #[test]
    fn dangling_activation_id_is_fatal() {
        let thought = Thought::new();
        assert!(thought.activation(ActivationId(0)).is_err());
    }

    #[test]
    fn incident_links_are_split_by_role() {
        let mut thought = Thought::new();
        let n1 = NeuronId::from_seed(1);
        let n2 = NeuronId::from_seed(2);
        let s = synapse_between(n1, n2);
        let a1 = thought.create_activation(n1);
        let a2 = thought.create_activation(n2);
        let link = thought.create_link(&s, a1, a2).unwrap();

        assert_eq!(thought.links_of(a1, Direction::Output), vec![link]);
        assert!(thought.links_of(a1, Direction::Input).is_empty());
        assert_eq!(thought.links_of(a2, Direction::Input), vec![link]);
        assert!(thought.links_of(a2, Direction::Output).is_empty());
    }
}
