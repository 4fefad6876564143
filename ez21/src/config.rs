//! Experiment configuration.
use thiserror::Error;

pub const DEFAULT_N0: f64 = 100.0;
pub const DEFAULT_FA_ALPHA: f64 = 0.01;
pub const DEFAULT_FA_EPSILON: f64 = 0.05;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be a positive number of episodes")]
    NoEpisodes(&'static str),

    #[error("at least one lambda is required")]
    NoLambdas,

    #[error("lambda must lie in [0, 1], got {0}")]
    LambdaOutOfRange(f64),

    #[error("n0 must be positive, got {0}")]
    InvalidN0(f64),

    #[error("the linear step size must be positive, got {0}")]
    InvalidAlpha(f64),

    #[error("the linear exploration rate must lie in [0, 1], got {0}")]
    InvalidEpsilon(f64),
}

/// Parameters of a full comparison run: a Monte Carlo reference followed by a
/// sweep of tabular and linear TD(λ) learners over `lambdas`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub seed: u64,

    pub mc_episodes: usize,
    pub td_episodes: usize,

    pub lambdas: Vec<f64>,

    /// Exploration constant of the GLIE schedule, `ε = n0 / (n0 + N(s))`.
    pub n0: f64,

    pub fa_alpha: f64,
    pub fa_epsilon: f64,
}

impl ExperimentConfig {
    pub fn with_seed(self, seed: u64) -> Self { ExperimentConfig { seed, ..self } }

    pub fn with_episodes(self, mc_episodes: usize, td_episodes: usize) -> Self {
        ExperimentConfig {
            mc_episodes,
            td_episodes,
            ..self
        }
    }

    pub fn with_lambdas(self, lambdas: Vec<f64>) -> Self { ExperimentConfig { lambdas, ..self } }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mc_episodes == 0 {
            return Err(ConfigError::NoEpisodes("mc_episodes"));
        }

        if self.td_episodes == 0 {
            return Err(ConfigError::NoEpisodes("td_episodes"));
        }

        if self.lambdas.is_empty() {
            return Err(ConfigError::NoLambdas);
        }

        if let Some(&l) = self.lambdas.iter().find(|&&l| !(l >= 0.0 && l <= 1.0)) {
            return Err(ConfigError::LambdaOutOfRange(l));
        }

        if !(self.n0 > 0.0) {
            return Err(ConfigError::InvalidN0(self.n0));
        }

        if !(self.fa_alpha > 0.0) {
            return Err(ConfigError::InvalidAlpha(self.fa_alpha));
        }

        if !(self.fa_epsilon >= 0.0 && self.fa_epsilon <= 1.0) {
            return Err(ConfigError::InvalidEpsilon(self.fa_epsilon));
        }

        Ok(())
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            seed: 0,

            mc_episodes: 1_000_000,
            td_episodes: 1_000,

            lambdas: vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0],

            n0: DEFAULT_N0,

            fa_alpha: DEFAULT_FA_ALPHA,
            fa_epsilon: DEFAULT_FA_EPSILON,
        }
    }
}
