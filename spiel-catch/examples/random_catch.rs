use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use spiel_catch::{BallTrackingPolicy, CatchConfig, CatchGame};
use spiel_core::{
    util::play_episode, DefaultEvaluator, Evaluator, Game, Policy, RandomPolicy, State,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    Random,
    Tracking,
}

/// Plays Catch with a scripted policy and reports the mean return.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a YAML configuration of the board
    #[arg(long)]
    config: Option<String>,

    /// Rows of the board, ignored with --config
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Columns of the board, ignored with --config
    #[arg(long, default_value_t = 5)]
    columns: usize,

    /// Policy controlling the paddle
    #[arg(long, value_enum, default_value_t = PolicyKind::Random)]
    policy: PolicyKind,

    /// Number of evaluation episodes
    #[arg(long, default_value_t = 100)]
    n_episodes: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the boards of one episode
    #[arg(long, default_value_t = false)]
    show: bool,
}

fn run<P: Policy<CatchGame>>(game: CatchGame, mut policy: P, args: &Args) -> Result<()> {
    if args.show {
        let mut rng = fastrand::Rng::with_seed(args.seed);
        let state = play_episode(&game, &mut policy, &mut rng)?;
        println!("{}", state);
        println!("history = [{}]", state.information_state_string());
    }

    let mut evaluator = DefaultEvaluator::new(game, args.seed, args.n_episodes);
    let record = evaluator.evaluate(&mut policy)?;
    info!(
        "{:?}: mean return = {}, mean length = {}",
        args.policy,
        record.get_scalar("Episode return")?,
        record.get_scalar("Episode length")?
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CatchConfig::load(path)?,
        None => CatchConfig::default().rows(args.rows).columns(args.columns),
    };
    let game = CatchGame::build(&config)?;
    info!(
        "Catch {}x{}, {} episodes",
        game.num_rows(),
        game.num_columns(),
        args.n_episodes
    );

    match args.policy {
        PolicyKind::Random => run(game, RandomPolicy::new(args.seed), &args),
        PolicyKind::Tracking => run(game, BallTrackingPolicy, &args),
    }
}
