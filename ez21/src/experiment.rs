//! Episode runners and the Monte Carlo versus TD(λ) comparison experiment.
use crate::{
    BatchLearner,
    OnlineLearner,
    config::{ConfigError, ExperimentConfig},
    control::{
        Controller,
        mc::GlieMC,
        td::{LinearSARSALambda, SARSALambda},
    },
    domains::{draw_initial_state, step, Observation, State},
    evaluation::mse,
    fa::{Parameterised, QTable},
    prediction::{ActionValuePredictor, ValuePredictor},
};
use ndarray::Array1;
use rand::{rngs::StdRng, Rng, SeedableRng};
use slog::Logger;

/// Play one episode with `agent` and hand the whole trajectory to it at the
/// end. Returns the terminal reward.
pub fn run_batch_episode<R, L>(rng: &mut R, agent: &mut L) -> f64
where
    R: Rng,
    L: Controller + BatchLearner,
{
    let mut state = draw_initial_state(rng);
    let mut batch = vec![];

    loop {
        let action = agent.sample_behaviour(rng, &state);
        let t = step(rng, state, action);

        batch.push(t);

        match t.to {
            Observation::InPlay(ns) => state = ns,
            Observation::Terminal => break,
        }
    }

    agent.handle_batch(&batch);

    batch.last().map_or(0.0, |t| t.reward)
}

/// Play one episode with `agent`, updating it after every step. Returns the
/// terminal reward.
///
/// The successor action is sampled before the agent sees the transition so
/// that it bootstraps on the action it will actually take. No action is
/// sampled after a terminal transition, so the bootstrap there is zero and the
/// RNG is left untouched.
pub fn run_online_episode<R, L>(rng: &mut R, agent: &mut L) -> f64
where
    R: Rng,
    L: Controller + OnlineLearner,
{
    let mut state = draw_initial_state(rng);
    let mut action = agent.sample_initial(rng, &state);

    loop {
        let t = step(rng, state, action);

        match t.to {
            Observation::InPlay(ns) => {
                let na = agent.sample_behaviour(rng, &ns);

                agent.handle_transition(&t, Some(na));

                state = ns;
                action = na;
            },
            Observation::Terminal => {
                agent.handle_transition(&t, None);
                agent.handle_terminal();

                return t.reward;
            },
        }
    }
}

pub fn train_batch<R, L>(rng: &mut R, agent: &mut L, n_episodes: usize)
where
    R: Rng,
    L: Controller + BatchLearner,
{
    for _ in 0..n_episodes {
        run_batch_episode(rng, agent);
    }
}

/// Train `agent` online for `n_episodes`, recording its mean squared error
/// against `reference` after every episode.
pub fn learning_curve<R, L, Q>(
    rng: &mut R,
    agent: &mut L,
    n_episodes: usize,
    reference: &Q,
    logger: &Logger,
) -> Vec<f64>
where
    R: Rng,
    L: Controller + OnlineLearner + ActionValuePredictor,
    Q: ActionValuePredictor + ?Sized,
{
    (0..n_episodes)
        .map(|i| {
            run_online_episode(rng, agent);

            let error = mse(reference, &*agent);
            trace!(logger, "episode complete"; "episode" => i, "mse" => error);

            error
        })
        .collect()
}

/// One learner trained at a particular λ, together with its error curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LambdaRun<T> {
    pub lambda: f64,
    pub learned: T,
    pub errors: Vec<f64>,
}

impl<T> LambdaRun<T> {
    pub fn final_error(&self) -> Option<f64> { self.errors.last().copied() }
}

/// The value of the greedy action at one in-play state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub player: i32,
    pub dealer: i32,
    pub value: f64,
}

/// `v(s) = max_a q(s, a)` at every in-play state, player-major.
pub fn value_surface<V: ValuePredictor + ?Sized>(v: &V) -> Vec<SurfacePoint> {
    State::all()
        .map(|s| SurfacePoint {
            player: s.player,
            dealer: s.dealer,
            value: v.predict_v(&s),
        })
        .collect()
}

/// Learn the Monte Carlo reference action values.
pub fn learn_reference<R: Rng>(rng: &mut R, n_episodes: usize, n0: f64, logger: &Logger) -> QTable {
    let mut agent = GlieMC::new(n0);

    train_batch(rng, &mut agent, n_episodes);
    debug!(logger, "learned Monte Carlo reference"; "episodes" => n_episodes);

    agent.into_q_func()
}

pub fn learn_td<R, Q>(
    rng: &mut R,
    n_episodes: usize,
    n0: f64,
    lambda: f64,
    reference: &Q,
    logger: &Logger,
) -> LambdaRun<QTable>
where
    R: Rng,
    Q: ActionValuePredictor + ?Sized,
{
    let mut agent = SARSALambda::new(n0, lambda);
    let errors = learning_curve(rng, &mut agent, n_episodes, reference, logger);

    LambdaRun {
        lambda,
        learned: agent.into_q_func(),
        errors,
    }
}

pub fn learn_linear_td<R, Q>(
    rng: &mut R,
    n_episodes: usize,
    alpha: f64,
    epsilon: f64,
    lambda: f64,
    reference: &Q,
    logger: &Logger,
) -> LambdaRun<Array1<f64>>
where
    R: Rng,
    Q: ActionValuePredictor + ?Sized,
{
    let mut agent = LinearSARSALambda::new(alpha, epsilon, lambda);
    let errors = learning_curve(rng, &mut agent, n_episodes, reference, logger);

    LambdaRun {
        lambda,
        learned: agent.weights(),
        errors,
    }
}

/// Everything a consumer needs to visualise a comparison run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub config: ExperimentConfig,

    pub reference: QTable,

    pub td: Vec<LambdaRun<QTable>>,
    pub linear_td: Vec<LambdaRun<Array1<f64>>>,
}

impl Report {
    /// Greedy state values of the Monte Carlo reference.
    pub fn value_surface(&self) -> Vec<SurfacePoint> { value_surface(&self.reference) }

    /// `(λ, final MSE)` for each tabular TD run.
    pub fn td_final_errors(&self) -> Vec<(f64, f64)> { final_errors(&self.td) }

    /// `(λ, final MSE)` for each linear TD run.
    pub fn linear_td_final_errors(&self) -> Vec<(f64, f64)> { final_errors(&self.linear_td) }
}

fn final_errors<T>(runs: &[LambdaRun<T>]) -> Vec<(f64, f64)> {
    runs.iter()
        .filter_map(|r| r.final_error().map(|e| (r.lambda, e)))
        .collect()
}

/// Run the full comparison: a Monte Carlo reference, then tabular and linear
/// TD(λ) for every configured λ, all driven by a single RNG seeded from the
/// configuration.
pub fn run(config: &ExperimentConfig, logger: &Logger) -> Result<Report, ConfigError> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);

    info!(logger, "learning Monte Carlo reference"; "episodes" => config.mc_episodes, "seed" => config.seed);
    let reference = learn_reference(&mut rng, config.mc_episodes, config.n0, logger);

    info!(logger, "learning TD(λ) agents"; "episodes" => config.td_episodes);
    let td: Vec<_> = config
        .lambdas
        .iter()
        .map(|&lambda| {
            let run = learn_td(&mut rng, config.td_episodes, config.n0, lambda, &reference, logger);
            info!(logger, "learned TD(λ) agent"; "lambda" => lambda, "mse" => run.final_error());

            run
        })
        .collect();

    info!(logger, "learning linear TD(λ) agents"; "episodes" => config.td_episodes);
    let linear_td: Vec<_> = config
        .lambdas
        .iter()
        .map(|&lambda| {
            let run = learn_linear_td(
                &mut rng,
                config.td_episodes,
                config.fa_alpha,
                config.fa_epsilon,
                lambda,
                &reference,
                logger,
            );
            info!(logger, "learned linear TD(λ) agent"; "lambda" => lambda, "mse" => run.final_error());

            run
        })
        .collect();

    Ok(Report {
        config: config.clone(),

        reference,

        td,
        linear_td,
    })
}
