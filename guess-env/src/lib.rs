#![warn(missing_docs)]
//! A guess-the-number environment.
//!
//! The environment hides a secret integer in `[0, 100)` and answers every guess
//! with a [`Hint`]: too low, too high or correct.
//!
//! ```rust
//! use guess_core::{Env as _, EpisodeRunner};
//! use guess_env::{BisectionPolicy, GuessEnv, GuessEnvConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut env: GuessEnv = GuessEnv::build(&GuessEnvConfig::default(), 42)?;
//! let mut policy = BisectionPolicy::default();
//! let results = EpisodeRunner::new(10).run(&mut env, &mut policy)?;
//! assert!(results.iter().all(|r| r.n_steps <= 7));
//! # Ok(())
//! # }
//! ```
mod act;
mod config;
mod env;
mod error;
mod obs;
mod policy;
pub mod rng;

pub use act::GuessAct;
pub use config::GuessEnvConfig;
pub use env::{GuessEnv, GuessInfo};
pub use error::GuessEnvError;
pub use obs::{GuessObs, Hint};
pub use policy::{BisectionPolicy, RandomGuessPolicy, RandomGuessPolicyConfig};
pub use rng::{FastrandSource, RandomSource, ScriptedSource};
