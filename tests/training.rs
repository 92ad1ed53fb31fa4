use catch5::{
    algo::tabular::QTableAgent,
    env::Environment,
    gym::{catch5::Catch5Config, Catch5},
    AgentConfig,
};

/// Wins after three consecutive plays of move `3`, loses on any other move
#[derive(Debug, Default)]
struct ThreeStep {
    steps: usize,
    won: bool,
    lost: bool,
}

impl Environment for ThreeStep {
    type State = usize;
    type Move = usize;

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn current_state(&self) -> usize {
        self.steps
    }

    fn apply(&mut self, mv: usize) {
        if mv == 3 {
            self.steps += 1;
            self.won = self.steps == 3;
        } else {
            self.lost = true;
        }
    }

    fn is_active(&self) -> bool {
        !self.won && !self.lost
    }

    fn has_won(&self) -> bool {
        self.won
    }

    fn has_lost(&self) -> bool {
        self.lost
    }
}

/// Records every move handed to the wrapped environment
#[derive(Debug, Default)]
struct Recorder<E> {
    inner: E,
    transcript: Vec<i32>,
}

impl<E: Environment<Move = i32>> Environment for Recorder<E> {
    type State = E::State;
    type Move = i32;

    fn reset(&mut self) {
        self.inner.reset()
    }

    fn current_state(&self) -> E::State {
        self.inner.current_state()
    }

    fn apply(&mut self, mv: i32) {
        self.transcript.push(mv);
        self.inner.apply(mv)
    }

    fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    fn has_won(&self) -> bool {
        self.inner.has_won()
    }

    fn has_lost(&self) -> bool {
        self.inner.has_lost()
    }
}

fn catch5_config(seed: u64, epochs: u32) -> Catch5Config {
    Catch5Config {
        epochs,
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn three_step_stub_is_solved() {
    let config = AgentConfig {
        epochs: 100,
        seed: Some(42),
        ..AgentConfig::with_action_map([0, 1, 2, 3, 4, 5])
    };
    let mut agent = QTableAgent::new(ThreeStep::default(), config).unwrap();

    let stats = agent.train().unwrap();
    assert_eq!(stats.epoch, 100);

    agent.set_exploration_rate(0.0).unwrap();
    let stats = agent.train().unwrap();
    assert_eq!(stats.nb_wins, 100);
    assert_eq!(stats.nb_losses, 0);
    assert_eq!(stats.p_wins, 100.0);

    for state in 0..3 {
        assert_eq!(agent.table().best_action(&state), Ok(3));
    }
    assert_eq!(agent.table().get(&2, 3), Ok(1.0));
}

#[test]
fn every_episode_ends_in_win_or_loss() {
    let mut agent = QTableAgent::new(Catch5::new(), catch5_config(3, 300)).unwrap();
    let stats = agent.train().unwrap();

    assert_eq!(stats.epoch, 300);
    assert_eq!(stats.nb_wins + stats.nb_losses, stats.epoch);
    assert!(stats.p_wins + stats.p_loss <= 100.0 + 1e-9);
}

#[test]
fn greedy_replay_is_deterministic() {
    let mut agent =
        QTableAgent::new(Recorder::<Catch5>::default(), catch5_config(7, 300)).unwrap();
    agent.train().unwrap();

    agent.set_exploration_rate(0.0).unwrap();
    agent.set_epochs(20).unwrap();

    let start = agent.env().transcript.len();
    agent.play().unwrap();
    let middle = agent.env().transcript.len();
    agent.play().unwrap();
    let transcript = &agent.env().transcript;

    assert!(middle > start);
    assert_eq!(transcript[start..middle], transcript[middle..]);
}

#[test]
fn same_seed_same_learning() {
    let mut a = QTableAgent::new(Recorder::<Catch5>::default(), catch5_config(11, 200)).unwrap();
    let mut b = QTableAgent::new(Recorder::<Catch5>::default(), catch5_config(11, 200)).unwrap();

    assert_eq!(a.train().unwrap(), b.train().unwrap());
    assert_eq!(a.env().transcript, b.env().transcript);
    assert_eq!(a.table().len(), b.table().len());
    for (state, row) in a.table().iter() {
        assert_eq!(b.table().row(state), Ok(row));
    }
}

#[test]
fn invalid_configuration_is_fatal() {
    for config in [
        Catch5Config {
            gamma: -0.5,
            ..Default::default()
        },
        Catch5Config {
            epsilon: 1.01,
            ..Default::default()
        },
        Catch5Config {
            epochs: 0,
            ..Default::default()
        },
    ] {
        assert!(matches!(
            QTableAgent::new(Catch5::new(), config),
            Err(catch5::Error::Configuration { .. })
        ));
    }
}
