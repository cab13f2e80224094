//! LinkingOperator — the pluggable linking policy.
//!
//! The linking visitor carries no policy knowledge. At every
//! (synapse, candidate) step it hands the decision to an operator: whether
//! to materialize a link, whether to spawn a counterpart activation, and
//! whether the walk should descend further. One operator implementation per
//! distinct linking policy.

use crate::direction::Direction;
use crate::episode::Episode;
use crate::error::Result;
use crate::types::{ActivationId, LinkId, NeuronId, Synapse};

/// What the walk does after an operator has handled one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDecision {
    /// Descend through the given activation (an existing candidate or one
    /// the operator just created).
    Continue(ActivationId),
    /// Do not descend past this candidate; the walk continues elsewhere.
    Prune,
    /// Stop the entire walk immediately.
    Abort,
}

/// One linking step, handed to the operator by the visitor.
///
/// `current` is the activation the walk stands on; `candidate` is an
/// existing activation of the synapse's direction-selected counterpart
/// neuron, or `None` when that neuron has not fired yet in this episode —
/// inducing policies may create one.
pub struct LinkContext<'a> {
    pub thought: &'a mut dyn Episode,
    pub synapse: &'a Synapse,
    pub current: ActivationId,
    pub candidate: Option<ActivationId>,
    pub direction: Direction,
}

impl<'a> LinkContext<'a> {
    /// The neuron the walk is heading toward across this synapse.
    pub fn counterpart_neuron(&self) -> NeuronId {
        self.direction.neuron_of(self.synapse)
    }

    /// Materialize the link between `current` and `counterpart`.
    ///
    /// The counterpart sits on the side the walk is heading toward, so the
    /// direction's pair selection recovers the synapse's declared
    /// orientation: the resulting link is identical whichever direction the
    /// walk was moving. Idempotent for an already-existing triple.
    pub fn materialize(&mut self, counterpart: ActivationId) -> Result<LinkId> {
        let input = self.direction.input_side(counterpart, self.current);
        let output = self.direction.output_side(counterpart, self.current);
        self.thought.create_link(self.synapse, input, output)
    }
}

/// A linking policy invoked at every step of a linking walk.
///
/// Side effects (link creation, activation creation) are confined to the
/// operator and scoped to the episode in the context.
pub trait LinkingOperator {
    /// Decide whether and how to link `current` with the candidate, and
    /// whether the walk continues past it.
    fn link(&mut self, ctx: &mut LinkContext<'_>) -> Result<LinkDecision>;
}
