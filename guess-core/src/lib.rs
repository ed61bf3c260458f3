#![warn(missing_docs)]
//! Environment-agnostic core: environments, policies, episode loops and records.
pub mod error;
pub mod evaluator;
pub mod record;
pub mod report;
pub mod runner;

mod base;
pub use base::{Act, Configurable, Env, Info, Obs, Policy, Step};
pub use evaluator::{DefaultEvaluator, Evaluator};
pub use report::EpisodeReport;
pub use runner::{EpisodeResult, EpisodeRunner};
