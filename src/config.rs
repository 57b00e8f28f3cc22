use crate::error::{TapwiseError, TwResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    #[command(flatten)]
    pub layout: LayoutParams,
    #[command(flatten)]
    pub predictor: PredictorParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutParams {
    // Surface in pixels
    #[arg(long, default_value_t = 320.0)]
    pub width: f64,
    #[arg(long, default_value_t = 320.0)]
    pub height: f64,

    // Extra room above the keys for the suggestion bar
    #[arg(long, default_value_t = 40.0)]
    pub top_margin: f64,

    // Tap standard deviation, in key widths of the widest row
    #[arg(long, default_value_t = 0.8)]
    pub tap_flexibility: f64,

    // Per-row key width multipliers, top to bottom
    #[arg(long, default_value = "1.0,1.1,0.9")]
    pub row_stretch: String,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 320.0,
            top_margin: 40.0,
            tap_flexibility: 0.8,
            row_stretch: "1.0,1.1,0.9".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PredictorParams {
    // Hypotheses kept alive between taps
    #[arg(long, default_value_t = 5)]
    pub beam_width: usize,

    // Alternatives offered on the suggestion bar
    #[arg(long, default_value_t = 3)]
    pub suggestion_count: usize,

    // Tap likelihoods at or below this are ignored
    #[arg(long, default_value_t = 0.001)]
    pub tap_noise_floor: f64,

    // Combined tap x model probabilities at or below this are not proposed
    #[arg(long, default_value_t = 0.00001)]
    pub candidate_floor: f64,
}

impl Default for PredictorParams {
    fn default() -> Self {
        Self {
            beam_width: 5,
            suggestion_count: 3,
            tap_noise_floor: 0.001,
            candidate_floor: 0.00001,
        }
    }
}

impl LayoutParams {
    pub fn get_row_stretch(&self) -> TwResult<[f64; 3]> {
        parse_f64_array::<3>(&self.row_stretch, "row_stretch")
    }
}

impl PredictorParams {
    pub fn validate(&self) -> TwResult<()> {
        if self.beam_width == 0 {
            return Err(TapwiseError::Config("beam_width must be at least 1".into()));
        }
        if self.suggestion_count == 0 || self.suggestion_count > self.beam_width {
            return Err(TapwiseError::Config(format!(
                "suggestion_count must be in 1..={}",
                self.beam_width
            )));
        }
        Ok(())
    }
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TwResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn merge_from_cli(&mut self, cli: &EngineConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(layout, width);
        update_if_present!(layout, height);
        update_if_present!(layout, top_margin);
        update_if_present!(layout, tap_flexibility);
        update_if_present!(layout, row_stretch);

        update_if_present!(predictor, beam_width);
        update_if_present!(predictor, suggestion_count);
        update_if_present!(predictor, tap_noise_floor);
        update_if_present!(predictor, candidate_floor);
    }
}

fn parse_f64_array<const N: usize>(s: &str, name: &str) -> TwResult<[f64; N]> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != N {
        return Err(TapwiseError::Config(format!(
            "--{} requires {} values",
            name.replace('_', "-"),
            N
        )));
    }
    let mut arr = [0.0; N];
    for (i, p) in parts.iter().enumerate() {
        arr[i] = p
            .trim()
            .parse()
            .map_err(|_| TapwiseError::Config(format!("Invalid number in {}: '{}'", name, p)))?;
    }
    Ok(arr)
}
