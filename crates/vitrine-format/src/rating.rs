use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of glyph positions in a rendered rating
pub const MAX_STARS: u8 = 5;

/// Characters used for each star state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarGlyphs {
    pub filled: char,
    pub half: char,
    pub empty: char,
}

impl Default for StarGlyphs {
    fn default() -> Self {
        Self {
            filled: '★',
            half: '⯪',
            empty: '☆',
        }
    }
}

/// A rating broken into star counts; `filled + half + empty == 5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRating {
    pub filled: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub fn render(&self, glyphs: &StarGlyphs) -> String {
        let mut out = String::with_capacity(MAX_STARS as usize * 3);
        out.extend(std::iter::repeat_n(glyphs.filled, self.filled as usize));
        if self.half {
            out.push(glyphs.half);
        }
        out.extend(std::iter::repeat_n(glyphs.empty, self.empty as usize));
        out
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&StarGlyphs::default()))
    }
}

/// Split a rating into stars. Input is clamped to [0, 5]; NaN counts as 0.
pub fn star_rating(rating: f64) -> StarRating {
    let clamped = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, f64::from(MAX_STARS))
    };
    if clamped != rating {
        tracing::debug!(rating, clamped, "rating outside 0..=5 clamped");
    }

    let filled = clamped.floor() as u8;
    let half = clamped.fract() != 0.0;
    StarRating {
        filled,
        half,
        empty: MAX_STARS - filled - u8::from(half),
    }
}

/// Star string with the default glyphs, e.g. `"★★★⯪☆"` for 3.5
pub fn generate_star_rating(rating: f64) -> String {
    star_rating(rating).to_string()
}
