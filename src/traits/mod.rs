//! Core traits for hunters-rabbits
//!
//! Defines the interface for whole-board turn transitions.

use crate::graph::Graph;
use crate::transform::AdvanceStats;

/// Transition trait for whole-board state changes
///
/// A transition reads the board as it stands when `apply` is called and
/// rewrites vertex colors in place. It must not change the board's
/// structure.
///
/// # Example
///
/// ```
/// use hunters_rabbits::graph::Graph;
/// use hunters_rabbits::traits::Transition;
/// use hunters_rabbits::transform::AdvanceStats;
///
/// struct Freeze;
///
/// impl Transition for Freeze {
///     fn name(&self) -> &str {
///         "freeze"
///     }
///
///     fn apply(&self, graph: &mut Graph) -> AdvanceStats {
///         AdvanceStats::unchanged(graph)
///     }
/// }
/// ```
pub trait Transition {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Apply the transition to the board
    fn apply(&self, graph: &mut Graph) -> AdvanceStats;
}

/// Chainable transition that applies several transitions in sequence
pub struct TransitionChain {
    transitions: Vec<Box<dyn Transition>>,
}

impl TransitionChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Add a transition to the chain
    #[allow(clippy::should_implement_trait)]
    pub fn add<T: Transition + 'static>(mut self, transition: T) -> Self {
        self.transitions.push(Box::new(transition));
        self
    }

    /// Number of transitions in the chain
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl Default for TransitionChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Transition for TransitionChain {
    fn name(&self) -> &str {
        "chain"
    }

    /// Statistics compare the board before the first and after the last step
    fn apply(&self, graph: &mut Graph) -> AdvanceStats {
        let before = graph.colors();

        for transition in &self.transitions {
            log::trace!("Applying transition '{}'", transition.name());
            transition.apply(graph);
        }

        AdvanceStats::between(&before, graph)
    }
}
