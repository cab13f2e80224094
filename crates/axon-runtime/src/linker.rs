//! Stock linking policies.
//!
//! Each policy is one implementation of the [`LinkingOperator`] capability.
//! The visitor stays policy-free; everything that differs between linking
//! strategies lives here.

use axon_core::operator::{LinkContext, LinkDecision, LinkingOperator};
use axon_core::error::Result;

/// Link only where a counterpart activation already exists.
///
/// Steps with no counterpart are pruned — this policy never grows the
/// activation set, it only wires up what previous propagation produced.
#[derive(Debug, Default)]
pub struct MatchingLinker;

impl LinkingOperator for MatchingLinker {
    fn link(&mut self, ctx: &mut LinkContext<'_>) -> Result<LinkDecision> {
        match ctx.candidate {
            Some(candidate) => {
                ctx.materialize(candidate)?;
                Ok(LinkDecision::Continue(candidate))
            }
            None => Ok(LinkDecision::Prune),
        }
    }
}

/// Link, inducing the counterpart activation when the neuron has not fired
/// yet in this episode.
///
/// This is the policy that grows the graph during propagation: reaching a
/// synapse whose far neuron is silent triggers that neuron's activation.
#[derive(Debug, Default)]
pub struct InducingLinker;

impl LinkingOperator for InducingLinker {
    fn link(&mut self, ctx: &mut LinkContext<'_>) -> Result<LinkDecision> {
        let counterpart = match ctx.candidate {
            Some(candidate) => candidate,
            None => {
                let neuron = ctx.counterpart_neuron();
                ctx.thought.create_activation(neuron)
            }
        };
        ctx.materialize(counterpart)?;
        Ok(LinkDecision::Continue(counterpart))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Network;
    use crate::thought::Thought;
    use crate::visitor::LinkingDownVisitor;
    use axon_core::direction::Direction;
    use axon_core::episode::Episode;
    use axon_core::template::TemplateGraph;

    fn chain_network() -> (Network, Vec<axon_core::types::NeuronId>) {
        // a -> b -> c
        let mut net = Network::new();
        let a = net.add_neuron("a");
        let b = net.add_neuron("b");
        let c = net.add_neuron("c");
        net.add_synapse(a, b, 1.0).unwrap();
        net.add_synapse(b, c, 1.0).unwrap();
        (net, vec![a, b, c])
    }

    #[test]
    fn matching_linker_only_wires_existing_activations() {
        let (net, neurons) = chain_network();
        let mut thought = Thought::new();
        let a0 = thought.create_activation(neurons[0]);
        let _b0 = thought.create_activation(neurons[1]);
        // neuron c never fired

        let mut visitor =
            LinkingDownVisitor::new(&net, &thought, Direction::Output, MatchingLinker);
        let outcome = visitor.walk(&mut thought, a0).unwrap();

        assert_eq!(outcome.links_created, 1);
        assert_eq!(outcome.activations_created, 0);
        assert_eq!(outcome.visited, 2);
        assert_eq!(thought.link_count(), 1);
    }

    #[test]
    fn inducing_linker_fires_silent_neurons() {
        let (net, neurons) = chain_network();
        let mut thought = Thought::new();
        let a0 = thought.create_activation(neurons[0]);

        let mut visitor =
            LinkingDownVisitor::new(&net, &thought, Direction::Output, InducingLinker);
        let outcome = visitor.walk(&mut thought, a0).unwrap();

        // b and c were induced, the whole chain got linked
        assert_eq!(outcome.activations_created, 2);
        assert_eq!(outcome.links_created, 2);
        assert_eq!(outcome.visited, 3);
        assert_eq!(thought.activations_of(neurons[2]).len(), 1);
    }
}
