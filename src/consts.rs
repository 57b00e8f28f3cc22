/// Size of every character-indexed probability/frequency vector.
/// Only the alphabet symbols and space are ever non-zero.
pub const ASCII_RANGE: usize = 128;

/// Longest context the language model conditions on.
pub const MAX_CONTEXT: usize = 7;

/// Key rows of the layout, top to bottom.
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "-zxcvbnm'"];

/// Length of the widest row; tap spread is expressed in these key widths.
pub const REFERENCE_ROW_LENGTH: usize = 10;

/// Fraction of the height reserved above the keys (before the caller's extra margin).
pub const SPACE_AT_TOP: f64 = 0.05;

/// Fraction of the height reserved below the keys.
pub const SPACE_AT_BOTTOM: f64 = 0.12;

/// Fraction of the width reserved on each side.
pub const SPACE_LEFT_RIGHT: f64 = 0.05;

/// Taps further than this many standard deviations from a key (on either axis) score zero.
pub const TAP_CUTOFF_SD: f64 = 3.0;

/// Returned by `KeyLayout::distance` when the expected character has no key.
pub const DISTANCE_SENTINEL: f64 = 9999.0;

/// Bounds of `LanguageModel::probability_before_space`.
pub const SPACE_PROB_LOW: f64 = 0.1;
pub const SPACE_PROB_HIGH: f64 = 1.0;

/// Fraction of the width left empty on each side of the suggestion bar.
pub const SUGGESTION_BAR_INSET: f64 = 0.2;
