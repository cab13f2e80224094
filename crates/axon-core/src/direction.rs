//! Direction — the orientation capability.
//!
//! Every traversal algorithm in axon is written once, parametrized by a
//! `Direction` value. The algorithm never branches on "am I walking toward
//! causes or toward effects" — it asks the direction to pick the right
//! endpoint and the correct one falls out. `Input` walks toward causes,
//! `Output` toward effects.

use serde::{Deserialize, Serialize};

use crate::types::{ActivationId, Link, NeuronId, Synapse};

/// Traversal orientation over the activation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Walk toward causes (predecessors).
    Input,
    /// Walk toward effects (successors).
    Output,
}

impl Direction {
    /// The opposite orientation. Inverting twice is the identity.
    pub fn invert(self) -> Self {
        match self {
            Direction::Input => Direction::Output,
            Direction::Output => Direction::Input,
        }
    }

    /// Which of an ordered pair (declared "from → to") counts as the
    /// input side under this direction.
    ///
    /// Under `Input` the walk heads toward inputs, so the side it names
    /// first is the input; under `Output` the roles swap.
    pub fn input_side<T>(self, from: T, to: T) -> T {
        match self {
            Direction::Input => from,
            Direction::Output => to,
        }
    }

    /// The complementary selection to [`input_side`](Self::input_side).
    pub fn output_side<T>(self, from: T, to: T) -> T {
        match self {
            Direction::Input => to,
            Direction::Output => from,
        }
    }

    /// The synapse endpoint the walk continues toward: the output neuron
    /// under `Output`, the input neuron under `Input`.
    pub fn neuron_of(self, synapse: &Synapse) -> NeuronId {
        match self {
            Direction::Input => synapse.input,
            Direction::Output => synapse.output,
        }
    }

    /// The link endpoint the walk continues toward. Symmetric to
    /// [`neuron_of`](Self::neuron_of).
    pub fn activation_of(self, link: &Link) -> ActivationId {
        match self {
            Direction::Input => link.input,
            Direction::Output => link.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LinkId, SynapseId};

    fn sample_synapse() -> Synapse {
        Synapse {
            id: SynapseId::from_seed(1),
            input: NeuronId::from_seed(10),
            output: NeuronId::from_seed(20),
            weight: 1.0,
        }
    }

    #[test]
    fn invert_is_an_involution() {
        for d in [Direction::Input, Direction::Output] {
            assert_eq!(d.invert().invert(), d);
        }
        assert_eq!(Direction::Input.invert(), Direction::Output);
        assert_eq!(Direction::Output.invert(), Direction::Input);
    }

    #[test]
    fn side_selection_partitions_the_pair() {
        for d in [Direction::Input, Direction::Output] {
            let (a, b) = (1, 2);
            let input = d.input_side(a, b);
            let output = d.output_side(a, b);
            assert_ne!(input, output);
            assert!(input == a || input == b);
            assert!(output == a || output == b);
        }
    }

    #[test]
    fn input_direction_selects_the_from_side() {
        assert_eq!(Direction::Input.input_side("from", "to"), "from");
        assert_eq!(Direction::Input.output_side("from", "to"), "to");
        assert_eq!(Direction::Output.input_side("from", "to"), "to");
        assert_eq!(Direction::Output.output_side("from", "to"), "from");
    }

    #[test]
    fn neuron_selection_matches_declared_roles() {
        let s = sample_synapse();
        assert_eq!(Direction::Input.neuron_of(&s), s.input);
        assert_eq!(Direction::Output.neuron_of(&s), s.output);
    }

    #[test]
    fn activation_selection_matches_declared_roles() {
        let link = Link {
            id: LinkId(0),
            synapse: SynapseId::from_seed(1),
            input: ActivationId(3),
            output: ActivationId(7),
        };
        assert_eq!(Direction::Input.activation_of(&link), link.input);
        assert_eq!(Direction::Output.activation_of(&link), link.output);
    }
}
