use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::curve::{MotionError, OutputCurve};

pub const ICON_COUNT: usize = 25;

/// Shared vertical drift of the icon layer over its scroll range, in px.
pub fn parallax() -> Result<OutputCurve, MotionError> {
    OutputCurve::new([0.0, 1.0], [0.0, -200.0])
}

const EMOJIS: [&str; 2] = ["🤖", "📺"];

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingIcon {
    pub id: usize,
    pub emoji: &'static str,
    /// Horizontal position, percent of the container width.
    pub left: f64,
    /// Vertical position, percent of the container height.
    pub top: f64,
    pub scale: f64,
    /// Degrees turned per 3s spin cycle, either direction.
    pub spin: f64,
    /// Multiplier on the shared parallax drift.
    pub speed: f64,
    /// Fade-in delay in seconds.
    pub delay: f64,
}

/// Lays out `count` icons down both gutters, alternating sides. The same seed
/// always yields the same layout.
pub fn scatter(count: usize, seed: u64) -> Vec<FloatingIcon> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..count)
        .map(|id| {
            let on_left = id % 2 == 0;
            let emoji = EMOJIS[usize::from(rng.gen_bool(0.5))];
            let left = if on_left {
                rng.gen_range(0.0..10.0)
            } else {
                85.0 + rng.gen_range(0.0..10.0)
            };

            FloatingIcon {
                id,
                emoji,
                left,
                top: id as f64 * 100.0 / count as f64,
                scale: rng.gen_range(0.8..2.3),
                spin: rng.gen_range(-180.0..180.0),
                speed: rng.gen_range(0.5..2.0),
                delay: rng.gen_range(0.0..0.5),
            }
        })
        .collect()
}

impl FloatingIcon {
    /// This icon's own drift for a given shared drift.
    pub fn offset(&self, parent_y: f64) -> f64 {
        parent_y * self.speed
    }

    /// Position, drift and size. Applied to the outer element so it never
    /// competes with the spin on the inner one.
    pub fn wrapper_style(&self, parent_y: f64) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; transform: translateY({:.2}px) scale({:.3});",
            self.left,
            self.top,
            self.offset(parent_y),
            self.scale
        )
    }

    pub fn spin_style(&self) -> String {
        format!(
            "--spin: {:.1}deg; animation-delay: 0s, {:.2}s;",
            self.spin, self.delay
        )
    }
}
