//! RGB colors and gradient generation.

use serde::{Deserialize, Serialize};

/// An RGB color with components in `[0.0, 1.0]`.
///
/// Colors in the puzzle are only ever moved between tiles and hands, never
/// recomputed, so exact equality is meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 0.501_960_8, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
    }

    /// Componentwise linear interpolation toward `other`.
    #[must_use]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

/// `steps` colors from `from` toward `to`, the i-th at `t = i / steps`.
///
/// The endpoint is approached but never reached: the last color sits one
/// step short of `to`.
#[must_use]
pub fn gradient(from: Rgb, to: Rgb, steps: usize) -> Vec<Rgb> {
    (0..steps)
        .map(|i| from.lerp(to, i as f32 / steps as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(Rgb::RED.lerp(Rgb::GREEN, 0.0), Rgb::RED);
        assert_eq!(Rgb::RED.lerp(Rgb::GREEN, 1.0), Rgb::GREEN);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Rgb::BLACK.lerp(Rgb::WHITE, 0.5);
        assert_eq!(mid, Rgb::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_gradient_starts_at_from() {
        let colors = gradient(Rgb::RED, Rgb::GREEN, 8);
        assert_eq!(colors.len(), 8);
        assert_eq!(colors[0], Rgb::RED);
    }

    #[test]
    fn test_gradient_never_reaches_to() {
        let colors = gradient(Rgb::RED, Rgb::GREEN, 8);
        assert_ne!(colors[7], Rgb::GREEN);
        assert_eq!(colors[7], Rgb::RED.lerp(Rgb::GREEN, 7.0 / 8.0));
    }

    #[test]
    fn test_gradient_colors_are_distinct() {
        let colors = gradient(Rgb::RED, Rgb::GREEN, 8);
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j], "colors {} and {} collide", i, j);
            }
        }
    }
}
