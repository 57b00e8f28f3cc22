use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use std::sync::Arc;
use tapwise::config::EngineConfig;
use tapwise::corpus::{learn_corpus, load_corpus_file, seed_corpus};
use tapwise::error::TwResult;
use tapwise::model::LanguageModel;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Extra training corpus (phrase[\tcount] per line)
    #[arg(global = true, long)]
    corpus: Option<String>,

    /// JSON engine config; flags given on the command line win
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Type a phrase tap by tap and show every prediction
    Simulate(cmd::simulate::SimulateArgs),
    /// Type test phrases at key centers and report accuracy
    Verify(cmd::verify::VerifyArgs),
    /// Show the tap likelihoods at one point
    Probe(cmd::probe::ProbeArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (cli_config, sub_name) = match &cli.command {
        Commands::Simulate(args) => (&args.config, "simulate"),
        Commands::Verify(args) => (&args.config, "verify"),
        Commands::Probe(args) => (&args.config, "probe"),
    };

    let config = match resolve_config(&cli, cli_config, &matches, sub_name) {
        Ok(c) => c,
        Err(e) => {
            error!("❌ Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let corpus = cli.corpus.clone();
    let result = match cli.command {
        Commands::Probe(args) => cmd::probe::run(args, &config),
        Commands::Simulate(args) => load_model(corpus.as_deref())
            .and_then(|model| cmd::simulate::run(args, &config, model)),
        Commands::Verify(args) => load_model(corpus.as_deref())
            .and_then(|model| cmd::verify::run(args, &config, model)),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn resolve_config(
    cli: &Cli,
    cli_config: &EngineConfig,
    matches: &clap::ArgMatches,
    sub_name: &str,
) -> TwResult<EngineConfig> {
    let Some(path) = &cli.config_file else {
        return Ok(cli_config.clone());
    };
    info!("⚙️  Loading config from: {}", path);
    let mut config = EngineConfig::load_from_file(path)?;
    match matches.subcommand_matches(sub_name) {
        Some(sub_matches) => config.merge_from_cli(cli_config, sub_matches),
        None => warn!("⚠️  No flags found for '{}', using file config as is", sub_name),
    }
    Ok(config)
}

fn load_model(corpus: Option<&str>) -> TwResult<Arc<LanguageModel>> {
    let mut lm = LanguageModel::new();
    let seeded = learn_corpus(&mut lm, &seed_corpus()?);
    info!("🌱 Learned {} built-in sentences", seeded);

    if let Some(path) = corpus {
        let entries = load_corpus_file(path)?;
        let learned = learn_corpus(&mut lm, &entries);
        info!("📖 Learned {} sentences from {}", learned, path);
    }
    Ok(Arc::new(lm))
}
