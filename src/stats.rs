use std::fmt;

use crate::env::Outcome;

/// Running win/loss counters of a training or evaluation run
///
/// Updated once per completed episode. Percentages are relative to the number of episodes played
/// so far, so `nb_wins + nb_losses <= epoch` and `p_wins + p_loss <= 100` always hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainStats {
    pub epoch: u32,
    pub nb_wins: u32,
    pub nb_losses: u32,
    pub p_wins: f64,
    pub p_loss: f64,
}

impl TrainStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the end of episode `epoch`, with its outcome if it reached one
    pub fn record(&mut self, epoch: u32, outcome: Option<Outcome>) {
        self.epoch = epoch;
        match outcome {
            Some(Outcome::Win) => self.nb_wins += 1,
            Some(Outcome::Loss) => self.nb_losses += 1,
            None => {}
        }
        if epoch > 0 {
            self.p_wins = 100.0 * self.nb_wins as f64 / epoch as f64;
            self.p_loss = 100.0 * self.nb_losses as f64 / epoch as f64;
        }
    }
}

impl fmt::Display for TrainStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Epoch: {} Wins: {} ({:.2}%) Losses: {} ({:.2}%)",
            self.epoch, self.nb_wins, self.p_wins, self.nb_losses, self.p_loss
        )
    }
}
