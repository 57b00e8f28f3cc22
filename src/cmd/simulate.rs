use crate::reports;
use clap::Args;
use std::sync::Arc;
use tapwise::config::EngineConfig;
use tapwise::error::TwResult;
use tapwise::model::LanguageModel;
use tapwise::predictor::{ManualClock, PredictionResult, PredictorBuildParams};

const KEYSTROKE_MS: u64 = 300;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: EngineConfig,

    /// Text to type. A space commits the word, '<' is a backspace.
    #[arg(short, long)]
    pub phrase: String,

    /// Gaussian tap jitter in key widths (0 = dead center)
    #[arg(long, default_value_t = 0.0)]
    pub jitter: f64,

    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

pub struct SimulationStep {
    pub input: String,
    pub tap: Option<(f64, f64)>,
    pub result: PredictionResult,
}

pub fn run(args: SimulateArgs, config: &EngineConfig, model: Arc<LanguageModel>) -> TwResult<()> {
    let clock = ManualClock::new(0);
    let mut predictor = PredictorBuildParams::builder()
        .layout(config.layout.clone())
        .predictor(config.predictor.clone())
        .model(model)
        .clock(Arc::new(clock.clone()))
        .build()
        .build_predictor()?;

    let mut rng = fastrand::Rng::with_seed(args.seed);
    let key_width = predictor.layout().width() / 10.0;
    let spread = args.jitter.max(0.0) * key_width;

    println!("\n⌨️  === SIMULATING: {:?} ===", args.phrase);

    let mut steps = Vec::new();
    for c in args.phrase.chars() {
        clock.advance(KEYSTROKE_MS);
        let step = match c {
            ' ' => SimulationStep {
                input: "␣".to_string(),
                tap: None,
                result: predictor.space(),
            },
            '<' => SimulationStep {
                input: "⌫".to_string(),
                tap: None,
                result: predictor.backspace()?,
            },
            _ => {
                let center = predictor.layout().key_center(c)?;
                let x = center.x + spread * gaussian(&mut rng);
                let y = center.y + spread * gaussian(&mut rng);
                SimulationStep {
                    input: c.to_string(),
                    tap: Some((x, y)),
                    result: predictor.tap(x, y),
                }
            }
        };
        steps.push(step);
    }

    reports::print_simulation(&steps);
    reports::print_sentence_stats(&predictor.finish_sentence());
    Ok(())
}

/// Standard normal sample (Box-Muller).
fn gaussian(rng: &mut fastrand::Rng) -> f64 {
    let u1 = rng.f64().max(f64::MIN_POSITIVE);
    let u2 = rng.f64();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}
