//! Mood classification of a dominant color in HSL space.

use serde::{Deserialize, Serialize};

/// A color in hue-saturation-lightness form.
///
/// Hue is in degrees in `[0, 360)`; saturation and lightness are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees
    pub hue: f32,
    /// Saturation
    pub saturation: f32,
    /// Lightness
    pub lightness: f32,
}

impl Hsl {
    /// Convert an 8-bit RGB triplet to HSL.
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        let r = f32::from(rgb[0]) / 255.0;
        let g = f32::from(rgb[1]) / 255.0;
        let b = f32::from(rgb[2]) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            // Achromatic
            return Self {
                hue: 0.0,
                saturation: 0.0,
                lightness,
            };
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        // The g < b offset keeps the red sector non-negative after * 60
        let sector = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self {
            hue: sector * 60.0,
            saturation,
            lightness,
        }
    }
}

/// Weighted rule table deciding whether a color reads as happy.
///
/// Each rule contributes its weight when satisfied and the sum is compared
/// against the threshold. With the default table the hue rule alone clears
/// the threshold while saturation and lightness together cannot: hue match
/// is the deciding signal and the other two rules are bonuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRules {
    /// Inclusive hue interval in degrees that reads as happy
    pub hue_range: (f32, f32),
    /// Minimum saturation satisfying the saturation rule
    pub min_saturation: f32,
    /// Minimum lightness satisfying the lightness rule
    pub min_lightness: f32,
    /// Weight contributed by the hue rule
    pub hue_weight: f32,
    /// Weight contributed by the saturation rule
    pub saturation_weight: f32,
    /// Weight contributed by the lightness rule
    pub lightness_weight: f32,
    /// Minimum total score classifying a color as happy
    pub threshold: f32,
}

impl Default for MoodRules {
    fn default() -> Self {
        Self {
            hue_range: (50.0, 220.0),
            min_saturation: 0.5,
            min_lightness: 0.6,
            hue_weight: 0.7,
            saturation_weight: 0.2,
            lightness_weight: 0.1,
            threshold: 0.6,
        }
    }
}

impl MoodRules {
    /// Sum the weights of the rules the color satisfies.
    pub fn score(&self, color: &Hsl) -> f32 {
        let mut score = 0.0;

        if color.hue >= self.hue_range.0 && color.hue <= self.hue_range.1 {
            score += self.hue_weight;
        }
        if color.saturation >= self.min_saturation {
            score += self.saturation_weight;
        }
        if color.lightness >= self.min_lightness {
            score += self.lightness_weight;
        }

        score
    }

    /// Classify the color as happy when its score reaches the threshold.
    pub fn is_happy(&self, color: &Hsl) -> bool {
        self.score(color) >= self.threshold
    }
}
