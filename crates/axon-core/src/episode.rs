//! Episode — the per-Thought activation graph contract.
//!
//! One reasoning episode owns one activation graph. Visitors and linking
//! operators talk to it through this trait so that different arena backends
//! can sit behind it; the stock implementation is `axon_runtime::Thought`.

use crate::direction::Direction;
use crate::error::Result;
use crate::types::{Activation, ActivationId, Link, LinkId, NeuronId, Synapse, ThoughtId, Tick};

/// The mutable activation graph of one reasoning episode.
///
/// All activations and links live in arenas owned by the episode; their ids
/// are indices into those arenas and meaningless outside it. The episode is
/// mutated only by the traversal that owns it — exclusive access is the
/// caller's responsibility.
pub trait Episode {
    /// This episode's identity.
    fn id(&self) -> ThoughtId;

    /// Current tick of the episode.
    fn current_tick(&self) -> Tick;

    /// Advance the tick counter.
    fn advance_tick(&mut self);

    /// Create a new activation of the given neuron, stamped with the
    /// current tick.
    fn create_activation(&mut self, neuron: NeuronId) -> ActivationId;

    /// Look up an activation. Dangling ids are a fatal precondition
    /// violation, not an `Option`.
    fn activation(&self, id: ActivationId) -> Result<&Activation>;

    /// All activations of the given neuron, in creation order.
    fn activations_of(&self, neuron: NeuronId) -> Vec<ActivationId>;

    /// Look up a link.
    fn link(&self, id: LinkId) -> Result<&Link>;

    /// Links leaving `activation` when walking in `direction` — the links
    /// on which `activation` occupies the `direction.invert()` role.
    fn links_of(&self, activation: ActivationId, direction: Direction) -> Vec<LinkId>;

    /// Materialize a link instantiating `synapse` between two activations
    /// of this episode.
    ///
    /// Validates episode ownership and that each endpoint fires the neuron
    /// the synapse declares for its role. At most one link exists per
    /// (synapse, input, output) triple: re-creating one is a silent no-op
    /// that returns the existing id.
    fn create_link(
        &mut self,
        synapse: &Synapse,
        input: ActivationId,
        output: ActivationId,
    ) -> Result<LinkId>;

    /// Number of activations in the episode.
    fn activation_count(&self) -> usize;

    /// Number of links in the episode.
    fn link_count(&self) -> usize;
}
