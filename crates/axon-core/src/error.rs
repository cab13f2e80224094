//! Error types for axon operations.
//!
//! Precondition violations (cross-Thought references, role mismatches,
//! dangling identifiers) are fatal and surfaced immediately — they mean the
//! graph was corrupted elsewhere. Idempotent no-ops (re-creating an existing
//! link) are not errors at all.

use std::error::Error;
use std::fmt;

use crate::types::{ActivationId, LinkId, NeuronId, SynapseId, ThoughtId};

/// Result type for axon operations.
pub type Result<T> = std::result::Result<T, AxonError>;

/// Errors that can occur during graph construction and traversal.
#[derive(Debug, Clone)]
pub enum AxonError {
    /// Thought-scoped errors (activations, links, episode ownership).
    Thought(ThoughtError),
    /// Template-graph errors (neurons, synapses).
    Template(TemplateError),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for AxonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxonError::Thought(e) => write!(f, "Thought error: {}", e),
            AxonError::Template(e) => write!(f, "Template error: {}", e),
            AxonError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for AxonError {}

impl From<serde_json::Error> for AxonError {
    fn from(e: serde_json::Error) -> Self {
        AxonError::Serialization(e.to_string())
    }
}

/// Errors scoped to one Thought's activation graph.
#[derive(Debug, Clone)]
pub enum ThoughtError {
    /// A reference crossed Thought boundaries.
    Mismatch {
        expected: ThoughtId,
        found: ThoughtId,
    },
    /// Activation not found in the Thought's arena.
    ActivationNotFound(ActivationId),
    /// Link not found in the Thought's arena.
    LinkNotFound(LinkId),
}

impl fmt::Display for ThoughtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThoughtError::Mismatch { expected, found } => {
                write!(
                    f,
                    "Cross-thought reference: expected {:?}, found {:?}",
                    expected.0, found.0
                )
            }
            ThoughtError::ActivationNotFound(id) => {
                write!(f, "Activation not found: {:?}", id)
            }
            ThoughtError::LinkNotFound(id) => write!(f, "Link not found: {:?}", id),
        }
    }
}

/// Errors in the network-wide template graph.
#[derive(Debug, Clone)]
pub enum TemplateError {
    /// Neuron not found.
    NeuronNotFound(NeuronId),
    /// Synapse not found.
    SynapseNotFound(SynapseId),
    /// A link's endpoint activation does not fire the neuron the synapse
    /// declares for that role.
    RoleMismatch {
        synapse: SynapseId,
        expected: NeuronId,
        found: NeuronId,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::NeuronNotFound(id) => write!(f, "Neuron not found: {:?}", id.0),
            TemplateError::SynapseNotFound(id) => write!(f, "Synapse not found: {:?}", id.0),
            TemplateError::RoleMismatch {
                synapse,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Role mismatch on synapse {:?}: expected neuron {:?}, found {:?}",
                    synapse.0, expected.0, found.0
                )
            }
        }
    }
}

// Convenience constructors
impl AxonError {
    pub fn thought_mismatch(expected: ThoughtId, found: ThoughtId) -> Self {
        AxonError::Thought(ThoughtError::Mismatch { expected, found })
    }

    pub fn activation_not_found(id: ActivationId) -> Self {
        AxonError::Thought(ThoughtError::ActivationNotFound(id))
    }

    pub fn link_not_found(id: LinkId) -> Self {
        AxonError::Thought(ThoughtError::LinkNotFound(id))
    }

    pub fn neuron_not_found(id: NeuronId) -> Self {
        AxonError::Template(TemplateError::NeuronNotFound(id))
    }

    pub fn synapse_not_found(id: SynapseId) -> Self {
        AxonError::Template(TemplateError::SynapseNotFound(id))
    }

    pub fn role_mismatch(synapse: SynapseId, expected: NeuronId, found: NeuronId) -> Self {
        AxonError::Template(TemplateError::RoleMismatch {
            synapse,
            expected,
            found,
        })
    }
}
