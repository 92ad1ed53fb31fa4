use std::fmt::Debug;

use crate::algo::tabular::Hashable;

/// Terminal result of an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
}

/// A deterministic, single-agent game that an agent can learn to play.
///
/// The environment only exposes its observable state and terminal status. Rewards are derived by
/// the agent from that status, and moves are domain values the agent translates its action
/// indices into through an action map.
pub trait Environment {
    /// A representation of the state of the environment to be passed to an agent
    ///
    /// Two states that compare equal are treated as the same learning context.
    type State: Hashable + Debug;

    /// A domain-level move that the environment understands
    type Move: Copy + Debug;

    /// Reset the environment to a fresh starting state
    fn reset(&mut self);

    /// Get the current observable state
    fn current_state(&self) -> Self::State;

    /// Update the environment in response to a move
    fn apply(&mut self, mv: Self::Move);

    /// Determine if the episode has not yet reached a terminal outcome
    fn is_active(&self) -> bool;

    /// Determine if the episode ended in a win
    fn has_won(&self) -> bool;

    /// Determine if the episode ended in a loss
    fn has_lost(&self) -> bool;

    /// The terminal outcome of the episode, if any
    fn outcome(&self) -> Option<Outcome> {
        if self.has_won() {
            Some(Outcome::Win)
        } else if self.has_lost() {
            Some(Outcome::Loss)
        } else {
            None
        }
    }
}
