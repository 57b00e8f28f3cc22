use crate::reports;
use clap::Args;
use std::fs::File;
use std::sync::Arc;
use tapwise::config::EngineConfig;
use tapwise::corpus::{load_phrases, test_phrases};
use tapwise::error::TwResult;
use tapwise::model::LanguageModel;
use tapwise::verifier::PhraseVerifier;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub config: EngineConfig,

    /// One phrase per line; defaults to the built-in test phrases
    #[arg(long)]
    pub phrases: Option<String>,

    /// Mismatches to list
    #[arg(long, default_value_t = 10)]
    pub show_failures: usize,
}

pub fn run(args: VerifyArgs, config: &EngineConfig, model: Arc<LanguageModel>) -> TwResult<()> {
    let phrases = match &args.phrases {
        Some(path) => {
            info!("📂 Loading phrases from: {}", path);
            load_phrases(File::open(path)?)?
        }
        None => test_phrases()?,
    };

    let verifier = PhraseVerifier::new(config.layout.clone(), config.predictor.clone(), model);
    let report = verifier.verify_all(&phrases);

    println!("\n🔎 === PHRASE VERIFICATION ===");
    reports::print_verification(&report, args.show_failures);
    Ok(())
}
