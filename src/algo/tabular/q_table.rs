use log::{debug, info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::{self, AgentConfig},
    env::{Environment, Outcome},
    error::{Error, Result},
    exploration::{Choice, EpsilonGreedy},
    stats::TrainStats,
};

use super::ValueTable;

/// Reward for a step that wins the episode
pub const WIN_REWARD: f64 = 1.0;
/// Reward for a step that loses the episode
pub const LOSS_REWARD: f64 = -1.0;
/// Reward for any non-terminal step, pushing the policy toward shorter wins
pub const STEP_REWARD: f64 = -0.1;

fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// A simple Q-learning agent that utilizes a Q-table to learn its environment
///
/// The update stores the one-step Bellman target outright, i.e. Q-learning with a learning rate
/// fixed at `1`:
///
/// - terminal step: Q(s,a) ← r
/// - otherwise: Q(s,a) ← r + γ max<sub>a'</sub> Q(s',a')
///
/// ### Generics
/// - `E` - The [`Environment`] in which the agent will learn
/// - `A` - The number of actions, each translated to a move of `E` through the action map
pub struct QTableAgent<E, const A: usize>
where
    E: Environment,
{
    env: E,
    table: ValueTable<E::State, A>,
    exploration: EpsilonGreedy,
    action_map: [E::Move; A],
    gamma: f64,        // discount factor
    epochs: u32,       // episodes per run
    report_every: u32, // episodes between progress reports
    rng: StdRng,
}

impl<E, const A: usize> QTableAgent<E, A>
where
    E: Environment,
{
    /// Initialize a new `QTableAgent` that owns the given environment
    ///
    /// **Errors** with [`Error::Configuration`] if the config does not validate
    pub fn new(env: E, config: AgentConfig<E::Move, A>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            env,
            table: ValueTable::new(),
            exploration: EpsilonGreedy::new(config.epsilon)?,
            action_map: config.action_map,
            gamma: config.gamma,
            epochs: config.epochs,
            report_every: config.report_every,
            rng: build_rng(config.seed),
        })
    }

    /// Reseed the agent's random source
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn table(&self) -> &ValueTable<E::State, A> {
        &self.table
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn exploration_rate(&self) -> f64 {
        self.exploration.epsilon()
    }

    /// Replace the exploration rate, e.g. with `0` before an evaluation run
    pub fn set_exploration_rate(&mut self, epsilon: f64) -> Result<()> {
        self.exploration.set_epsilon(epsilon)
    }

    pub fn epochs(&self) -> u32 {
        self.epochs
    }

    pub fn set_epochs(&mut self, epochs: u32) -> Result<()> {
        config::check_epochs(epochs)?;
        self.epochs = epochs;
        Ok(())
    }

    /// Choose an action in `state`, exploring with probability `explore_prob`
    ///
    /// A state the table has never seen is always explored, since its all-zero row carries no
    /// information.
    pub fn select_action(&mut self, state: &E::State, explore_prob: f64) -> usize {
        let choice = EpsilonGreedy::choose_with(explore_prob, &mut self.rng);
        match (choice, self.table.best_action(state)) {
            (Choice::Exploit, Ok(action)) => action,
            _ => self.rng.gen_range(0..A),
        }
    }

    /// Choose an action in `state` with the agent's own exploration rate
    pub fn act(&mut self, state: &E::State) -> usize {
        let epsilon = self.exploration.epsilon();
        self.select_action(state, epsilon)
    }

    /// Translate an action index into the move handed to the environment
    pub fn action_to_move(&self, action: usize) -> Result<E::Move> {
        self.action_map
            .get(action)
            .copied()
            .ok_or(Error::InvalidAction {
                action,
                num_actions: A,
            })
    }

    /// Reward for the step that led to the environment's current status
    pub fn reward(&self) -> f64 {
        match self.env.outcome() {
            Some(Outcome::Win) => WIN_REWARD,
            Some(Outcome::Loss) => LOSS_REWARD,
            None => STEP_REWARD,
        }
    }

    /// Learn from a single transition and update the table
    ///
    /// **Errors** with [`Error::InvalidAction`] if `action` is not in `[0, A)`
    pub fn update(
        &mut self,
        state: E::State,
        action: usize,
        reward: f64,
        next_state: E::State,
        is_terminal: bool,
    ) -> Result<()> {
        if action >= A {
            return Err(Error::InvalidAction {
                action,
                num_actions: A,
            });
        }

        self.table.ensure(state);
        self.table.ensure(next_state);

        let target = if is_terminal {
            reward
        } else {
            reward + self.gamma * self.table.max_value(&next_state)?
        };

        self.table.set(&state, action, target)
    }

    /// Run a single learning episode in the environment
    ///
    /// **Returns** the outcome the episode ended with
    pub fn go(&mut self) -> Result<Option<Outcome>> {
        self.env.reset();
        while self.env.is_active() {
            let state = self.env.current_state();
            let action = self.act(&state);
            let mv = self.action_to_move(action)?;
            self.env.apply(mv);

            let reward = self.reward();
            let next_state = self.env.current_state();
            let is_terminal = !self.env.is_active();
            trace!("{state:?} --{action}--> {next_state:?} (reward {reward})");

            self.update(state, action, reward, next_state, is_terminal)?;
        }

        Ok(self.env.outcome())
    }

    /// Run the configured number of learning episodes, reporting progress every `report_every`
    pub fn train(&mut self) -> Result<TrainStats> {
        let mut stats = TrainStats::new();

        for epoch in 1..=self.epochs {
            let outcome = self.go()?;
            stats.record(epoch, outcome);
            debug!("Episode {epoch} ended with {outcome:?}");

            if epoch % self.report_every == 0 {
                info!("{stats}");
            }
        }

        Ok(stats)
    }

    /// Play the configured number of episodes without learning, narrating every move
    pub fn play(&mut self) -> Result<TrainStats> {
        let mut stats = TrainStats::new();

        for epoch in 1..=self.epochs {
            self.env.reset();
            info!("Starting game #{epoch}");

            while self.env.is_active() {
                let state = self.env.current_state();
                info!("Current state is {state:?}");
                let action = self.act(&state);
                let mv = self.action_to_move(action)?;
                info!("Playing {mv:?}");
                self.env.apply(mv);
            }

            let outcome = self.env.outcome();
            match outcome {
                Some(Outcome::Win) => info!("You won!"),
                Some(Outcome::Loss) => info!("You lost"),
                None => {}
            }
            stats.record(epoch, outcome);
        }

        Ok(stats)
    }
}
