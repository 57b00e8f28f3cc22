use crate::reports;
use clap::Args;
use tapwise::alphabet::{index_to_char, ALPHABET_SIZE};
use tapwise::config::EngineConfig;
use tapwise::error::TwResult;
use tapwise::geometry::KeyLayout;

#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub config: EngineConfig,

    #[arg(long, allow_hyphen_values = true)]
    pub x: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub y: f64,

    /// Keys to list
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

pub fn run(args: ProbeArgs, config: &EngineConfig) -> TwResult<()> {
    let layout = KeyLayout::from_params(&config.layout)?;
    let likelihoods = layout.likelihoods_for_tap(args.x, args.y);

    let mut ranked = (0..ALPHABET_SIZE)
        .map(|i| {
            let c = index_to_char(i)?;
            Ok((c, likelihoods[c as usize], layout.distance(c, args.x, args.y)))
        })
        .collect::<TwResult<Vec<(char, f64, f64)>>>()?;
    ranked.retain(|(_, p, _)| *p > 0.0);
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(args.top);

    println!("\n🎯 === PROBE ({:.1}, {:.1}) ===", args.x, args.y);
    println!("Region:      {}", layout.region_for(args.y));
    println!("Nearest key: {}", layout.nearest_key(args.x, args.y));
    println!("Tap sd:      {:.1}px", layout.tap_sd());
    reports::print_probe(&ranked);
    Ok(())
}
