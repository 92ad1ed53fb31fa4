use rand::Rng;

use crate::{check_interval, error::Result};

use super::Choice;

/// Epsilon greedy exploration policy with a fixed epsilon threshold
///
/// The threshold does not decay on its own. It can be replaced between training phases, e.g. set
/// to `0` to evaluate a trained agent with pure exploitation.
#[derive(Debug, Clone, PartialEq)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Initialize epsilon greedy policy with exploration rate `epsilon`
    ///
    /// **Errors** if `epsilon` is not in the interval `[0,1]`
    pub fn new(epsilon: f64) -> Result<Self> {
        check_interval!(epsilon, 0.0, 1.0);
        Ok(Self { epsilon })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// **Errors** if `epsilon` is not in the interval `[0,1]`
    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<()> {
        check_interval!(epsilon, 0.0, 1.0);
        self.epsilon = epsilon;
        Ok(())
    }

    /// Invoke epsilon greedy policy with the current threshold
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        Self::choose_with(self.epsilon, rng)
    }

    /// Invoke epsilon greedy policy with an explicit threshold
    ///
    /// Draws one uniform sample `u` in `[0,1)` and explores when `u <= epsilon`.
    pub fn choose_with<R: Rng + ?Sized>(epsilon: f64, rng: &mut R) -> Choice {
        if rng.gen::<f64>() > epsilon {
            Choice::Exploit
        } else {
            Choice::Explore
        }
    }
}
