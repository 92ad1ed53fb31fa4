use crate::{
    check_interval,
    error::{Error, Result},
    gym::catch5,
};

/// Configuration for the [`QTableAgent`](crate::algo::tabular::QTableAgent)
///
/// ### Generics
/// - `M` - The domain-level move type of the environment
/// - `A` - The number of actions, i.e. the length of the action map
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig<M, const A: usize> {
    /// Discount factor γ, must be in `[0,1]`
    ///
    /// **Default**: `0.9`
    pub gamma: f64,
    /// Initial exploration rate ε, must be in `[0,1]`
    ///
    /// **Default**: `0.5`
    pub epsilon: f64,
    /// Number of episodes per training run, must be positive
    ///
    /// **Default**: `100`
    pub epochs: u32,
    /// Emit a progress report every `report_every` episodes, must be positive
    ///
    /// **Default**: `10`
    pub report_every: u32,
    /// Lookup from action index to the move handed to the environment
    ///
    /// **Default**: `[3, 2, 1, -1, -2, -3]`
    pub action_map: [M; A],
    /// Seed for the agent's random source, or `None` to seed from the OS
    ///
    /// **Default**: `None`
    pub seed: Option<u64>,
}

impl Default for AgentConfig<i32, { catch5::NUM_ACTIONS }> {
    fn default() -> Self {
        Self {
            gamma: 0.9,
            epsilon: 0.5,
            epochs: 100,
            report_every: 10,
            action_map: catch5::ACTION_MAP,
            seed: None,
        }
    }
}

impl<M, const A: usize> AgentConfig<M, A> {
    /// Build a config with the default hyperparameters around a custom action map
    pub fn with_action_map(action_map: [M; A]) -> Self {
        Self {
            gamma: 0.9,
            epsilon: 0.5,
            epochs: 100,
            report_every: 10,
            action_map,
            seed: None,
        }
    }

    /// **Errors** with [`Error::Configuration`] if any hyperparameter is out of range
    pub fn validate(&self) -> Result<()> {
        check_interval!(self.gamma, 0.0, 1.0);
        check_interval!(self.epsilon, 0.0, 1.0);
        check_epochs(self.epochs)?;
        if self.report_every == 0 {
            return Err(Error::Configuration {
                message: String::from("`report_every` must be positive"),
            });
        }
        if A == 0 {
            return Err(Error::Configuration {
                message: String::from("the action map must not be empty"),
            });
        }
        Ok(())
    }
}

pub(crate) fn check_epochs(epochs: u32) -> Result<()> {
    if epochs == 0 {
        return Err(Error::Configuration {
            message: String::from("`epochs` must be positive"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = catch5::Catch5Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.action_map, [3, 2, 1, -1, -2, -3]);
    }

    #[test]
    fn rejects_bad_hyperparameters() {
        let bad: [catch5::Catch5Config; 4] = [
            AgentConfig {
                gamma: 1.1,
                ..Default::default()
            },
            AgentConfig {
                epsilon: -0.01,
                ..Default::default()
            },
            AgentConfig {
                epochs: 0,
                ..Default::default()
            },
            AgentConfig {
                report_every: 0,
                ..Default::default()
            },
        ];
        for config in bad {
            assert!(matches!(
                config.validate(),
                Err(Error::Configuration { .. })
            ));
        }
    }

    #[test]
    fn empty_action_map_is_rejected() {
        let config = AgentConfig::<i32, 0>::with_action_map([]);
        assert!(config.validate().is_err());
    }
}
