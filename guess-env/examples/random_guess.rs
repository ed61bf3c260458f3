use anyhow::Result;
use clap::{Parser, ValueEnum};
use guess_core::{
    record::{BufferedRecorder, LogRecorder, Record, Recorder},
    Configurable, Env as _, EpisodeReport, EpisodeResult, EpisodeRunner,
};
use guess_env::{
    BisectionPolicy, FastrandSource, GuessAct, GuessEnv, GuessEnvConfig, RandomGuessPolicy,
    RandomGuessPolicyConfig,
};
use serde::Serialize;
use std::{convert::TryFrom, fs::File, path::PathBuf};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    /// Random guesses narrowed by the last hint
    Random,
    /// Midpoint of the remaining range
    Bisection,
}

#[derive(Parser, Debug)]
#[command(version, about = "Play guess-the-number episodes with a hand-coded policy")]
struct Args {
    /// Number of episodes
    #[arg(short, long, default_value_t = 10)]
    episodes: usize,

    /// Random seed of the environment, the random policy uses `seed + 1`
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Guessing strategy
    #[arg(short, long, value_enum, default_value_t = PolicyKind::Random)]
    policy: PolicyKind,

    /// YAML file of the environment configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Writes every step to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct GuessRecord {
    episode: usize,
    step: usize,
    guess: i64,
    hint: i8,
    reward: f32,
    info: String,
}

impl TryFrom<&Record> for GuessRecord {
    type Error = anyhow::Error;

    fn try_from(record: &Record) -> Result<Self> {
        Ok(Self {
            episode: record.get_scalar("episode")? as _,
            step: record.get_scalar("step")? as _,
            guess: record.get_scalar("guess")? as _,
            hint: record.get_scalar("hint")? as _,
            reward: record.get_scalar("reward")?,
            info: record.get_string("info")?,
        })
    }
}

fn run(
    args: &Args,
    env: &mut GuessEnv,
    recorder: &mut BufferedRecorder,
) -> Result<Vec<EpisodeResult<GuessAct>>> {
    let runner = EpisodeRunner::new(args.episodes);
    match args.policy {
        PolicyKind::Random => {
            // The policy must not share the random stream of the environment.
            let mut policy = RandomGuessPolicy::<FastrandSource>::build(RandomGuessPolicyConfig {
                seed: args.seed.wrapping_add(1),
                n_values: env.config().n_values,
            });
            runner.run_with_recorder(env, &mut policy, recorder)
        }
        PolicyKind::Bisection => {
            let mut policy = BisectionPolicy::new(env.config().n_values);
            runner.run_with_recorder(env, &mut policy, recorder)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let env_config = match &args.config {
        Some(path) => GuessEnvConfig::load(path)?,
        None => GuessEnvConfig::default(),
    };
    let mut env: GuessEnv = GuessEnv::build(&env_config, args.seed as i64)?;
    let mut recorder = BufferedRecorder::new();
    let results = run(&args, &mut env, &mut recorder)?;

    let report = EpisodeReport::from_results(&results);
    print!("{}", report);

    LogRecorder::new("summary").write(report.summary());

    if let Some(path) = &args.csv {
        let mut wtr = csv::WriterBuilder::new().from_writer(File::create(path)?);
        for record in recorder.iter() {
            wtr.serialize(GuessRecord::try_from(record)?)?;
        }
        wtr.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_random_guess_csv() -> Result<()> {
        let args = Args::parse_from(["random_guess", "-e", "3", "--policy", "bisection"]);
        let mut env: GuessEnv = GuessEnv::build(&GuessEnvConfig::default(), 0)?;
        let mut recorder = BufferedRecorder::new();
        let results = run(&args, &mut env, &mut recorder)?;
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.n_steps <= 7));

        let dir = TempDir::new("random_guess")?;
        let path = dir.path().join("steps.csv");
        let mut wtr = csv::WriterBuilder::new().from_writer(File::create(&path)?);
        for record in recorder.iter() {
            wtr.serialize(GuessRecord::try_from(record)?)?;
        }
        wtr.flush()?;

        let mut rdr = csv::Reader::from_path(&path)?;
        let n_rows = rdr.records().count();
        assert_eq!(n_rows, results.iter().map(|r| r.n_steps).sum::<usize>());
        Ok(())
    }

    #[test]
    fn test_random_policy_does_not_share_the_env_stream() -> Result<()> {
        let args = Args::parse_from(["random_guess", "-e", "20", "-s", "42"]);
        let env_config = GuessEnvConfig::default();
        let mut env: GuessEnv = GuessEnv::build(&env_config, args.seed as i64)?;
        let mut recorder = BufferedRecorder::new();
        let results = run(&args, &mut env, &mut recorder)?;

        let n_steps: usize = results.iter().map(|r| r.n_steps).sum();
        assert!(n_steps > results.len(), "every episode won on the first guess");
        Ok(())
    }
}
