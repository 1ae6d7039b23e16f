//! Distance → similarity score transforms.

use skillmatch_core::config::ScoreTransformKind;

/// Maps a raw index distance to a similarity score rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreTransform {
    /// `1 - d`. Only meaningful when distances stay within `[0, 1]`,
    /// which holds for normalized vectors under cosine distance.
    #[default]
    OneMinusDistance,
    /// `1 / (1 + d)`. In `(0, 1]` for every non-negative distance.
    Inverse,
}

impl ScoreTransform {
    pub fn apply(self, distance: f32) -> f64 {
        let d = distance as f64;
        let raw = match self {
            Self::OneMinusDistance => 1.0 - d,
            Self::Inverse => 1.0 / (1.0 + d.max(0.0)),
        };
        round2(raw)
    }
}

impl From<ScoreTransformKind> for ScoreTransform {
    fn from(kind: ScoreTransformKind) -> Self {
        match kind {
            ScoreTransformKind::OneMinusDistance => Self::OneMinusDistance,
            ScoreTransformKind::Inverse => Self::Inverse,
        }
    }
}

/// Round half away from zero to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
