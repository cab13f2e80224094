//! Directional visitors — the traversal skeleton and its linking
//! specialization.
//!
//! Both visitors walk the activation graph of one Thought in a fixed
//! [`Direction`], using an explicit worklist plus a per-walk visited set so
//! termination never depends on call-stack depth. The plain [`DownVisitor`]
//! follows existing links and never mutates the episode. The
//! [`LinkingDownVisitor`] consults the template network at every node and
//! hands each (synapse, candidate) step to a [`LinkingOperator`], which may
//! materialize links and activations as side effects.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use axon_core::direction::Direction;
use axon_core::episode::Episode;
use axon_core::error::{AxonError, Result};
use axon_core::operator::{LinkContext, LinkDecision, LinkingOperator};
use axon_core::template::TemplateGraph;
use axon_core::types::{ActivationId, ThoughtId};

/// Lifecycle of a single walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    NotStarted,
    Visiting,
    Done,
}

/// Counter summary of one linking walk.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct LinkingOutcome {
    /// Activations visited by the walk.
    pub visited: usize,
    /// Links materialized during the walk.
    pub links_created: usize,
    /// Activations induced by the operator during the walk.
    pub activations_created: usize,
    /// Whether the operator aborted the walk before exhaustion.
    pub aborted: bool,
}

/// Depth-first walk over a Thought's existing links in one direction.
///
/// Each reachable activation is visited at most once per walk; cycles in
/// the link graph terminate through the visited set. The walk itself never
/// mutates the episode.
pub struct DownVisitor {
    thought: ThoughtId,
    direction: Direction,
    state: WalkState,
    visited: HashSet<ActivationId>,
}

impl DownVisitor {
    pub fn new(thought: &dyn Episode, direction: Direction) -> Self {
        Self {
            thought: thought.id(),
            direction,
            state: WalkState::NotStarted,
            visited: HashSet::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Walk from `start`, following links in the configured direction.
    /// Returns the activations in visit order.
    pub fn walk(&mut self, thought: &dyn Episode, start: ActivationId) -> Result<Vec<ActivationId>> {
        if thought.id() != self.thought {
            return Err(AxonError::thought_mismatch(self.thought, thought.id()));
        }

        self.state = WalkState::Visiting;
        self.visited.clear();
        let mut worklist = vec![start];
        let mut order = Vec::new();

        while let Some(current) = worklist.pop() {
            if !self.visited.insert(current) {
                continue;
            }
            // Surfaces dangling ids and cross-thought activations
            let act = thought.activation(current)?;
            if act.thought != self.thought {
                return Err(AxonError::thought_mismatch(self.thought, act.thought));
            }
            order.push(current);

            for link_id in thought.links_of(current, self.direction) {
                let link = thought.link(link_id)?;
                let next = self.direction.activation_of(link);
                if !self.visited.contains(&next) {
                    worklist.push(next);
                }
            }
        }

        self.state = WalkState::Done;
        debug!(
            thought = ?self.thought.0,
            direction = ?self.direction,
            visited = order.len(),
            "walk complete"
        );
        Ok(order)
    }
}

/// A [`DownVisitor`] that materializes links as it walks.
///
/// At every visited activation it enumerates the incident synapses of the
/// activation's neuron in the walk direction, resolves candidate
/// counterpart activations, and asks the operator what to do. The visitor
/// carries no linking policy of its own; descent is driven entirely by the
/// operator's [`LinkDecision`]s.
pub struct LinkingDownVisitor<'a, O: LinkingOperator> {
    network: &'a dyn TemplateGraph,
    base: DownVisitor,
    operator: O,
}

impl<'a, O: LinkingOperator> LinkingDownVisitor<'a, O> {
    pub fn new(
        network: &'a dyn TemplateGraph,
        thought: &dyn Episode,
        direction: Direction,
        operator: O,
    ) -> Self {
        Self {
            network,
            base: DownVisitor::new(thought, direction),
            operator,
        }
    }

    pub fn direction(&self) -> Direction {
        self.base.direction
    }

    pub fn state(&self) -> WalkState {
        self.base.state
    }

    pub fn operator(&self) -> &O {
        &self.operator
    }

    /// Walk from `start`, invoking the operator at every
    /// (synapse, candidate) step.
    pub fn walk(&mut self, thought: &mut dyn Episode, start: ActivationId) -> Result<LinkingOutcome> {
        if thought.id() != self.base.thought {
            return Err(AxonError::thought_mismatch(self.base.thought, thought.id()));
        }

        let direction = self.base.direction;
        let links_before = thought.link_count();
        let activations_before = thought.activation_count();
        let mut outcome = LinkingOutcome::default();

        self.base.state = WalkState::Visiting;
        self.base.visited.clear();
        let mut worklist = vec![start];

        'walk: while let Some(current) = worklist.pop() {
            if !self.base.visited.insert(current) {
                continue;
            }
            let neuron = {
                let act = thought.activation(current)?;
                if act.thought != self.base.thought {
                    return Err(AxonError::thought_mismatch(self.base.thought, act.thought));
                }
                act.neuron
            };
            outcome.visited += 1;
            debug!(activation = current.0, neuron = ?neuron.0, "visiting");

            for synapse_id in self.network.synapses(neuron, direction) {
                let synapse = self.network.synapse(synapse_id)?;
                let counterpart = direction.neuron_of(synapse);
                let candidates = thought.activations_of(counterpart);

                // A neuron that has not fired yet is still a linking step:
                // the operator sees `None` and may induce an activation.
                let steps: Vec<Option<ActivationId>> = if candidates.is_empty() {
                    vec![None]
                } else {
                    candidates.into_iter().map(Some).collect()
                };

                for candidate in steps {
                    let mut ctx = LinkContext {
                        thought: &mut *thought,
                        synapse,
                        current,
                        candidate,
                        direction,
                    };
                    match self.operator.link(&mut ctx)? {
                        LinkDecision::Continue(next) => {
                            if !self.base.visited.contains(&next) {
                                worklist.push(next);
                            }
                        }
                        LinkDecision::Prune => {}
                        LinkDecision::Abort => {
                            outcome.aborted = true;
                            break 'walk;
                        }
                    }
                }
            }
        }

        self.base.state = WalkState::Done;
        outcome.links_created = thought.link_count() - links_before;
        outcome.activations_created = thought.activation_count() - activations_before;
        debug!(
            thought = ?self.base.thought.0,
            direction = ?direction,
            visited = outcome.visited,
            links_created = outcome.links_created,
            activations_created = outcome.activations_created,
            aborted = outcome.aborted,
            "linking walk complete"
        );
        Ok(outcome)
    }
}
