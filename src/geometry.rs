use crate::alphabet::{char_to_index, ALPHABET, ALPHABET_SIZE};
use crate::config::LayoutParams;
use crate::consts::{
    ASCII_RANGE, DISTANCE_SENTINEL, KEY_ROWS, REFERENCE_ROW_LENGTH, SPACE_AT_BOTTOM, SPACE_AT_TOP,
    SPACE_LEFT_RIGHT, SUGGESTION_BAR_INSET, TAP_CUTOFF_SD,
};
use crate::error::{TapwiseError, TwResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Stand-in center for the space character. It lies off every key, so a
/// tap there carries no letter evidence.
pub const SPACE_POINT: Point = Point::new(-1.0, -1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum TapRegion {
    SuggestionBar,
    Keys,
    OffKeyboard,
}

/// Key centers for one screen geometry plus the tap spread used to score taps.
///
/// Rebuild it (via [`KeyLayout::configure`]) whenever the available surface
/// changes; an existing layout never moves its keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyLayout {
    centers: [Point; ALPHABET_SIZE],
    tap_sd: f64,
    width: f64,
    suggestion_bar_center_y: f64,
    suggestion_bar_bottom: f64,
    keyboard_bottom: f64,
}

impl KeyLayout {
    pub fn from_params(params: &LayoutParams) -> TwResult<Self> {
        Self::configure(
            params.width,
            params.height,
            params.top_margin,
            params.tap_flexibility,
            params.get_row_stretch()?,
        )
    }

    /// Lays the three rows out inside `width` x `height`, leaving a margin at
    /// the top (plus `top_margin` for the suggestion bar) and a comfort margin
    /// at the bottom. `tap_flexibility` is the tap standard deviation in key
    /// widths of the widest row.
    pub fn configure(
        width: f64,
        height: f64,
        top_margin: f64,
        tap_flexibility: f64,
        row_stretch: [f64; 3],
    ) -> TwResult<Self> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(TapwiseError::Config(format!(
                "Surface must be positive, got {}x{}",
                width, height
            )));
        }
        if !tap_flexibility.is_finite() || tap_flexibility <= 0.0 {
            return Err(TapwiseError::Config(format!(
                "tap_flexibility must be positive, got {}",
                tap_flexibility
            )));
        }
        let margin_ok = top_margin.is_finite() && top_margin >= 0.0;
        let stretch_ok = row_stretch.iter().all(|s| s.is_finite() && *s > 0.0);
        if !margin_ok || !stretch_ok {
            return Err(TapwiseError::Config(format!(
                "top_margin must be finite and >= 0, row stretches finite and > 0, got {} and {:?}",
                top_margin, row_stretch
            )));
        }

        let space_top = (height * SPACE_AT_TOP).round() + top_margin;
        let space_bottom = (height * SPACE_AT_BOTTOM).round();

        let x_off = SPACE_LEFT_RIGHT * width;
        let y_off = space_top;
        let inner_w = width - 2.0 * x_off;
        let inner_h = height - (space_top + space_bottom);
        if !inner_h.is_finite() || inner_h <= 0.0 {
            return Err(TapwiseError::Config(format!(
                "No room for keys: height {} with top margin {}",
                height, top_margin
            )));
        }

        let ref_len = REFERENCE_ROW_LENGTH as f64;
        let key_w = inner_w / ref_len;
        let key_h = inner_h / (KEY_ROWS.len() as f64 + 1.0);

        let suggestion_bar_center_y = (y_off + (0.5 * key_h).round()).round();
        let suggestion_bar_bottom = (suggestion_bar_center_y + 0.33 * key_h).round();
        let keyboard_bottom = y_off + inner_h + key_h / 2.0;

        let mut centers = [Point::default(); ALPHABET_SIZE];
        for (row, keys) in KEY_ROWS.iter().enumerate() {
            let len = keys.len() as f64;
            let row_key_w = key_w * row_stretch[row];
            let offset = (ref_len * key_w - len * key_w) / 2.0 - (row_key_w - key_w) * len / 2.0;
            let y = (y_off + ((1.5 + row as f64) * key_h).round()).round();

            for (c, ch) in keys.chars().enumerate() {
                let x = (x_off + (offset + (0.5 + c as f64) * row_key_w).round()).round();
                centers[char_to_index(ch)?] = Point::new(x, y);
            }
        }

        let tap_sd = tap_flexibility * width / ref_len;
        debug!(
            "Layout {}x{} configured: key {:.1}x{:.1}px, tap sd {:.1}px",
            width, height, key_w, key_h, tap_sd
        );

        Ok(Self {
            centers,
            tap_sd,
            width,
            suggestion_bar_center_y,
            suggestion_bar_bottom,
            keyboard_bottom,
        })
    }

    pub fn tap_sd(&self) -> f64 {
        self.tap_sd
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn suggestion_bar_center_y(&self) -> f64 {
        self.suggestion_bar_center_y
    }

    pub fn suggestion_bar_bottom(&self) -> f64 {
        self.suggestion_bar_bottom
    }

    pub fn keyboard_bottom(&self) -> f64 {
        self.keyboard_bottom
    }

    /// `(symbol, center)` pairs in alphabet order.
    pub fn keys(&self) -> impl Iterator<Item = (char, Point)> + '_ {
        ALPHABET.iter().copied().zip(self.centers.iter().copied())
    }

    pub fn key_center(&self, c: char) -> TwResult<Point> {
        if c == ' ' {
            return Ok(SPACE_POINT);
        }
        Ok(self.centers[char_to_index(c)?])
    }

    /// Per-character tap likelihoods indexed by character code, normalised
    /// over the alphabet. All zeros when the tap is too far from every key.
    pub fn likelihoods_for_tap(&self, x: f64, y: f64) -> [f64; ASCII_RANGE] {
        let mut ascii = [0.0; ASCII_RANGE];
        if !x.is_finite() || !y.is_finite() {
            return ascii;
        }
        let tap = Point::new(x, y);
        let mut densities = [0.0; ALPHABET_SIZE];
        let mut sum = 0.0;
        for (i, center) in self.centers.iter().enumerate() {
            densities[i] = gaussian_density(center, &tap, self.tap_sd, self.tap_sd, TAP_CUTOFF_SD);
            sum += densities[i];
        }

        if sum <= 0.0 {
            debug!("Tap ({:.1}, {:.1}) is off every key", x, y);
            return ascii;
        }
        for (i, &c) in ALPHABET.iter().enumerate() {
            ascii[c as usize] = densities[i] / sum;
        }
        ascii
    }

    /// Distance from `(x, y)` to the key of `expected`, or the sentinel when
    /// `expected` has no key.
    pub fn distance(&self, expected: char, x: f64, y: f64) -> f64 {
        match self.key_center(expected) {
            Ok(p) => p.distance_to(&Point::new(x, y)),
            Err(_) => DISTANCE_SENTINEL,
        }
    }

    pub fn nearest_key(&self, x: f64, y: f64) -> char {
        let tap = Point::new(x, y);
        let mut best = (ALPHABET[0], f64::MAX);
        for (c, center) in self.keys() {
            let d = center.distance_to(&tap);
            if d < best.1 {
                best = (c, d);
            }
        }
        best.0
    }

    pub fn region_for(&self, y: f64) -> TapRegion {
        if y < self.suggestion_bar_bottom {
            TapRegion::SuggestionBar
        } else if y <= self.keyboard_bottom {
            TapRegion::Keys
        } else {
            TapRegion::OffKeyboard
        }
    }

    /// Horizontal centers of `count` suggestion slots spread over the middle of the bar.
    pub fn suggestion_slot_centers(&self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        let inset = self.width * SUGGESTION_BAR_INSET;
        let slot_w = (self.width - 2.0 * inset) / count as f64;
        (0..count)
            .map(|s| (inset + (s as f64 + 0.5) * slot_w).round())
            .collect()
    }

    /// Index of the slot nearest to `x`, if there are any slots.
    pub fn suggestion_slot(&self, x: f64, count: usize) -> Option<usize> {
        self.suggestion_slot_centers(count)
            .iter()
            .enumerate()
            .min_by(|a, b| (a.1 - x).abs().total_cmp(&(b.1 - x).abs()))
            .map(|(i, _)| i)
    }

    /// Mean key-center distance between two strings of equal length.
    pub fn string_distance(&self, s1: &str, s2: &str) -> TwResult<f64> {
        let a: Vec<char> = s1.chars().collect();
        let b: Vec<char> = s2.chars().collect();
        if a.len() != b.len() {
            return Ok(f64::MAX);
        }
        if a.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for (c1, c2) in a.iter().zip(&b) {
            let p1 = self.centers[char_to_index(*c1)?];
            let p2 = self.centers[char_to_index(*c2)?];
            total += p1.distance_to(&p2);
        }
        Ok(total / a.len() as f64)
    }
}

/// Uncorrelated 2D Gaussian falloff (unnormalised). Zero when the tap is more
/// than `cutoff_sd` deviations away on either axis.
pub fn gaussian_density(target: &Point, tap: &Point, sx: f64, sy: f64, cutoff_sd: f64) -> f64 {
    let dx = tap.x - target.x;
    let dy = tap.y - target.y;
    if dx.abs() > cutoff_sd * sx || dy.abs() > cutoff_sd * sy {
        return 0.0;
    }
    let zx = dx / sx;
    let zy = dy / sy;
    (-(zx * zx + zy * zy) / 2.0).exp()
}
