//! Per-segment trajectory coloring.
//!
//! Three modes:
//! - **Single**: constant cyan.
//! - **Rainbow**: position along the trajectory mapped to hue, full
//!   saturation and value.
//! - **Fade**: linear blend from blue (start) to red (end) with a fixed
//!   green channel.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color used by [`ColorMode::Single`].
pub const SINGLE_COLOR: [f32; 3] = [0.0, 1.0, 1.0];
/// Green channel held constant by [`ColorMode::Fade`].
pub const FADE_GREEN: f32 = 0.2;

/// How trajectory segments are colored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Uniform cyan.
    Single,
    /// Hue sweep along the trajectory.
    Rainbow,
    /// Blue-to-red blend along the trajectory.
    #[default]
    Fade,
}

impl ColorMode {
    /// All modes in cycling order.
    pub const ALL: [Self; 3] = [Self::Single, Self::Rainbow, Self::Fade];

    /// Next mode, wrapping Fade → Single.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Single => Self::Rainbow,
            Self::Rainbow => Self::Fade,
            Self::Fade => Self::Single,
        }
    }

    /// Previous mode, wrapping Single → Fade.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Single => Self::Fade,
            Self::Rainbow => Self::Single,
            Self::Fade => Self::Rainbow,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Rainbow => "Rainbow",
            Self::Fade => "Fade",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// RGB color of the segment starting at `index` in a trajectory of `total`
/// points.
///
/// `index` is expected in `0..total`; a `total` of zero is treated as
/// ratio 0.
#[must_use]
pub fn color_for(index: usize, total: usize, mode: ColorMode) -> [f32; 3] {
    match mode {
        ColorMode::Single => SINGLE_COLOR,
        ColorMode::Rainbow => hsv_to_rgb(ratio(index, total) * 360.0, 1.0, 1.0),
        ColorMode::Fade => {
            let t = ratio(index, total);
            [t, FADE_GREEN, 1.0 - t]
        }
    }
}

fn ratio(index: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        index as f32 / total as f32
    }
}

/// HSV → RGB using the six 60° sector decomposition.
///
/// `hue` is in degrees and is not wrapped; values at or past 300° fall in
/// the last sector.
#[must_use]
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    let c = value * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = if hue < 60.0 {
        (c, x, 0.0)
    } else if hue < 120.0 {
        (x, c, 0.0)
    } else if hue < 180.0 {
        (0.0, c, x)
    } else if hue < 240.0 {
        (0.0, x, c)
    } else if hue < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn single_ignores_position() {
        assert_eq!(color_for(0, 10, ColorMode::Single), [0.0, 1.0, 1.0]);
        assert_eq!(color_for(9, 10, ColorMode::Single), [0.0, 1.0, 1.0]);
        assert_eq!(color_for(3, 0, ColorMode::Single), [0.0, 1.0, 1.0]);
    }

    #[test]
    fn rainbow_boundaries() {
        let n = 50_000;
        assert_eq!(color_for(0, n, ColorMode::Rainbow), [1.0, 0.0, 0.0]);
        assert!(close(color_for(n / 2, n, ColorMode::Rainbow), [0.0, 1.0, 1.0]));
        // Last point sits just under 360°, in the red/magenta sector.
        let last = color_for(n - 1, n, ColorMode::Rainbow);
        assert_eq!(last[0], 1.0);
        assert_eq!(last[1], 0.0);
        assert!(last[2] < 0.01);
    }

    #[test]
    fn rainbow_sector_midpoints() {
        assert!(close(hsv_to_rgb(60.0, 1.0, 1.0), [1.0, 1.0, 0.0]));
        assert!(close(hsv_to_rgb(120.0, 1.0, 1.0), [0.0, 1.0, 0.0]));
        assert!(close(hsv_to_rgb(240.0, 1.0, 1.0), [0.0, 0.0, 1.0]));
        assert!(close(hsv_to_rgb(300.0, 1.0, 1.0), [1.0, 0.0, 1.0]));
        assert!(close(hsv_to_rgb(30.0, 1.0, 1.0), [1.0, 0.5, 0.0]));
    }

    #[test]
    fn fade_runs_blue_to_red() {
        let n = 1000;
        assert_eq!(color_for(0, n, ColorMode::Fade), [0.0, 0.2, 1.0]);
        let end = color_for(n - 1, n, ColorMode::Fade);
        assert!((end[0] - 0.999).abs() < 1e-6);
        assert_eq!(end[1], 0.2);
        assert!(end[2] < 0.002);
    }

    #[test]
    fn channels_stay_in_unit_range() {
        let n = 997;
        for mode in ColorMode::ALL {
            for i in 0..n {
                let c = color_for(i, n, mode);
                assert!(c.iter().all(|v| (0.0..=1.0).contains(v)), "{mode} {i}");
            }
        }
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let mut mode = ColorMode::Single;
        for _ in 0..3 {
            mode = mode.next();
        }
        assert_eq!(mode, ColorMode::Single);
        assert_eq!(ColorMode::Single.previous(), ColorMode::Fade);
        for mode in ColorMode::ALL {
            assert_eq!(mode.next().previous(), mode);
        }
    }
}
