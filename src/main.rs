use anyhow::Context;
use catch5::{
    algo::tabular::QTableAgent,
    gym::{catch5::Catch5Config, Catch5},
};
use clap::Parser;
use log::info;

/// Teach a tabular Q-learning agent to play Catch5, then evaluate it greedily
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of training episodes
    #[arg(long, default_value_t = 100)]
    epochs: u32,

    /// Number of evaluation episodes played with exploration disabled
    #[arg(long, default_value_t = 1000)]
    eval_epochs: u32,

    /// Report progress every N episodes
    #[arg(long, default_value_t = 10)]
    report_every: u32,

    /// Discount factor
    #[arg(long, default_value_t = 0.9)]
    gamma: f64,

    /// Initial exploration rate
    #[arg(long, default_value_t = 0.5)]
    epsilon: f64,

    /// Seed for the agent's random source
    #[arg(long)]
    seed: Option<u64>,

    /// Print the learned value table after evaluation
    #[arg(long)]
    dump_table: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Catch5Config {
        gamma: args.gamma,
        epsilon: args.epsilon,
        epochs: args.epochs,
        report_every: args.report_every,
        seed: args.seed,
        ..Default::default()
    };

    let mut agent = QTableAgent::new(Catch5::new(), config).context("failed to build agent")?;

    info!("Training for {} episodes", agent.epochs());
    let stats = agent.train()?;
    info!("Training finished: {stats}");

    agent.set_exploration_rate(0.0)?;
    agent
        .set_epochs(args.eval_epochs)
        .context("invalid number of evaluation episodes")?;

    info!("Evaluating for {} episodes", agent.epochs());
    let stats = agent.train()?;
    info!("Evaluation finished: {stats}");

    if args.dump_table {
        print!("{}", agent.table());
    }

    Ok(())
}
