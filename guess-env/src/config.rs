//! Configuration of [`GuessEnv`](crate::GuessEnv).
use crate::GuessEnvError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`GuessEnv`](crate::GuessEnv).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct GuessEnvConfig {
    /// Secrets and valid guesses are in `[0, n_values)`.
    pub n_values: i64,

    /// If `true`, guesses outside `[0, n_values)` are rejected with
    /// [`GuessEnvError::InvalidAction`]. Otherwise they are simply compared
    /// with the secret and reported as too low or too high.
    pub strict_actions: bool,

    /// Truncates an episode after this number of steps without a correct guess.
    ///
    /// `None` never truncates.
    pub max_steps: Option<usize>,
}

impl Default for GuessEnvConfig {
    fn default() -> Self {
        Self {
            n_values: 100,
            strict_actions: true,
            max_steps: None,
        }
    }
}

impl GuessEnvConfig {
    /// Sets the number of values a secret can take.
    pub fn n_values(mut self, v: i64) -> Self {
        self.n_values = v;
        self
    }

    /// Sets if out-of-range guesses are rejected.
    pub fn strict_actions(mut self, v: bool) -> Self {
        self.strict_actions = v;
        self
    }

    /// Sets the maximum number of steps in an episode.
    pub fn max_steps(mut self, v: Option<usize>) -> Self {
        self.max_steps = v;
        self
    }

    /// Checks values that would make the environment unusable.
    pub fn validate(&self) -> Result<(), GuessEnvError> {
        if self.n_values <= 0 {
            return Err(GuessEnvError::InvalidConfig(format!(
                "n_values must be positive, got {}",
                self.n_values
            )));
        }
        if self.max_steps == Some(0) {
            return Err(GuessEnvError::InvalidConfig(
                "max_steps must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Constructs [`GuessEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves [`GuessEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_config() -> Result<()> {
        let config = GuessEnvConfig::default()
            .n_values(10)
            .strict_actions(false)
            .max_steps(Some(20));

        let dir = TempDir::new("guess_env_config")?;
        let path = dir.path().join("guess_env_config.yaml");
        config.save(&path)?;
        let config_ = GuessEnvConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_missing_fields_take_defaults() -> Result<()> {
        let config: GuessEnvConfig = serde_yaml::from_str("max_steps: 5\n")?;
        assert_eq!(config, GuessEnvConfig::default().max_steps(Some(5)));
        Ok(())
    }

    #[test]
    fn test_validate() {
        assert!(GuessEnvConfig::default().validate().is_ok());
        assert!(GuessEnvConfig::default().n_values(0).validate().is_err());
        assert!(GuessEnvConfig::default()
            .max_steps(Some(0))
            .validate()
            .is_err());
    }
}
