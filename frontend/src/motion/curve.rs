//! Scroll-linked progress and the output curves driven by it.
//!
//! Progress is always a plain `f64` in `[0, 1]`. Everything that animates is a
//! pure function of that one number, so several outputs can share a single
//! measurement per scroll event.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("input range must be non-decreasing, got [{0}, {1}]")]
    DescendingInput(f64, f64),
    #[error("curve bounds must be finite numbers")]
    NonFinite,
}

/// Edge of the tracked element an offset is anchored to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Start,
    End,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::End => 1.0,
        }
    }
}

/// Viewport-relative box of the tracked element, as returned by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub height: f64,
}

/// An anchor trigger: `ScrollOffset::new(Edge::Start, 0.9)` is met when the
/// element's top edge sits 90% of the way down the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffset {
    pub edge: Edge,
    pub viewport: f64,
}

impl ScrollOffset {
    pub const fn new(edge: Edge, viewport: f64) -> Self {
        Self { edge, viewport }
    }

    // How far the page still has to scroll before this anchor is met.
    // Negative once it has been passed.
    fn remaining(&self, bounds: ElementBounds, viewport_height: f64) -> f64 {
        bounds.top + self.edge.fraction() * bounds.height - self.viewport * viewport_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl ScrollRange {
    /// Text blocks: from "top at 90% of the viewport" to "top at 50%".
    pub const PARAGRAPH: ScrollRange = ScrollRange::new(
        ScrollOffset::new(Edge::Start, 0.9),
        ScrollOffset::new(Edge::Start, 0.5),
    );

    /// Whole passage of an element through the viewport: from its top entering
    /// at the bottom to its bottom leaving at the top.
    pub const THROUGH_VIEWPORT: ScrollRange = ScrollRange::new(
        ScrollOffset::new(Edge::Start, 1.0),
        ScrollOffset::new(Edge::End, 0.0),
    );

    pub const fn new(start: ScrollOffset, end: ScrollOffset) -> Self {
        Self { start, end }
    }

    pub fn progress(&self, bounds: ElementBounds, viewport_height: f64) -> f64 {
        let start = self.start.remaining(bounds, viewport_height);
        let end = self.end.remaining(bounds, viewport_height);
        let span = end - start;

        if !span.is_finite() || span.abs() < f64::EPSILON {
            // Both anchors coincide: a step at the shared trigger point.
            return if start <= 0.0 { 1.0 } else { 0.0 };
        }

        let progress = -start / span;
        if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        }
    }
}

/// Linear mapping from an input domain to an output range, clamped at both
/// ends. The output range may run backwards (`[20, 0]`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutputCurve {
    input: (f64, f64),
    output: (f64, f64),
}

impl OutputCurve {
    pub fn new(input: [f64; 2], output: [f64; 2]) -> Result<Self, MotionError> {
        let [a, b] = input;
        let [x, y] = output;
        if ![a, b, x, y].iter().all(|v| v.is_finite()) {
            return Err(MotionError::NonFinite);
        }
        if b < a {
            return Err(MotionError::DescendingInput(a, b));
        }
        Ok(Self {
            input: (a, b),
            output: (x, y),
        })
    }

    /// Curve over the unit progress domain `[0, 1]`.
    pub const fn from_unit(output: [f64; 2]) -> Self {
        Self {
            input: (0.0, 1.0),
            output: (output[0], output[1]),
        }
    }

    pub fn sample(&self, value: f64) -> f64 {
        let (a, b) = self.input;
        let (x, y) = self.output;

        if value.is_nan() || value <= a {
            return x;
        }
        if value >= b {
            return y;
        }

        let t = (value - a) / (b - a);
        x + (y - x) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleProperty {
    Opacity,
    /// Vertical offset in px.
    TranslateY,
    Scale,
    /// Rotation in degrees.
    Rotate,
}

/// Presentational values for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Default for RevealFrame {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
            scale: 1.0,
            rotate: 0.0,
        }
    }
}

impl RevealFrame {
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px) scale({:.3}) rotate({:.2}deg);",
            self.opacity, self.translate_y, self.scale, self.rotate
        )
    }
}

/// A set of output curves sharing one progress input. Properties without a
/// curve keep their resting value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reveal {
    curves: Vec<(StyleProperty, OutputCurve)>,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fade from 10% and rise 20px into place.
    pub fn paragraph() -> Result<Self, MotionError> {
        Ok(Self::new()
            .with(StyleProperty::Opacity, OutputCurve::new([0.0, 1.0], [0.1, 1.0])?)
            .with(StyleProperty::TranslateY, OutputCurve::new([0.0, 1.0], [20.0, 0.0])?))
    }

    /// The paragraph reveal, also settling from a slight shrink and tilt.
    /// Used for the closing call to action.
    pub fn closing() -> Result<Self, MotionError> {
        Ok(Self::paragraph()?
            .with(StyleProperty::Scale, OutputCurve::new([0.0, 1.0], [0.96, 1.0])?)
            .with(StyleProperty::Rotate, OutputCurve::new([0.0, 1.0], [-1.5, 0.0])?))
    }

    /// Later curves for the same property replace earlier ones.
    pub fn with(mut self, property: StyleProperty, curve: OutputCurve) -> Self {
        self.curves.retain(|(p, _)| *p != property);
        self.curves.push((property, curve));
        self
    }

    pub fn sample(&self, progress: f64) -> RevealFrame {
        let mut frame = RevealFrame::default();
        for (property, curve) in &self.curves {
            let value = curve.sample(progress);
            match property {
                StyleProperty::Opacity => frame.opacity = value,
                StyleProperty::TranslateY => frame.translate_y = value,
                StyleProperty::Scale => frame.scale = value,
                StyleProperty::Rotate => frame.rotate = value,
            }
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn bounds(top: f64) -> ElementBounds {
        ElementBounds { top, height: 300.0 }
    }

    #[test]
    fn curve_hits_both_endpoints() {
        let curve = OutputCurve::new([0.2, 0.6], [10.0, 50.0]).unwrap();
        assert_eq!(curve.sample(0.2), 10.0);
        assert_eq!(curve.sample(0.6), 50.0);
    }

    #[test]
    fn curve_is_linear_between_endpoints() {
        let curve = OutputCurve::new([0.0, 2.0], [0.0, 100.0]).unwrap();
        assert!((curve.sample(0.5) - 25.0).abs() < 1e-9);
        assert!((curve.sample(1.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn curve_clamps_instead_of_extrapolating() {
        let curve = OutputCurve::from_unit([0.1, 1.0]);
        assert_eq!(curve.sample(-3.0), 0.1);
        assert_eq!(curve.sample(7.0), 1.0);
        assert_eq!(curve.sample(f64::NAN), 0.1);
    }

    #[test]
    fn descending_output_is_monotonic() {
        let curve = OutputCurve::from_unit([20.0, 0.0]);
        let mut last = f64::INFINITY;
        for step in 0..=100 {
            let value = curve.sample(step as f64 / 100.0);
            assert!(value <= last);
            assert!((0.0..=20.0).contains(&value));
            last = value;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn descending_input_is_rejected() {
        assert_eq!(
            OutputCurve::new([1.0, 0.0], [0.0, 1.0]),
            Err(MotionError::DescendingInput(1.0, 0.0))
        );
        assert_eq!(
            OutputCurve::new([0.0, f64::INFINITY], [0.0, 1.0]),
            Err(MotionError::NonFinite)
        );
    }

    #[test]
    fn zero_width_input_is_a_step() {
        let curve = OutputCurve::new([0.5, 0.5], [0.0, 1.0]).unwrap();
        assert_eq!(curve.sample(0.49), 0.0);
        assert_eq!(curve.sample(0.5), 0.0);
        assert_eq!(curve.sample(0.51), 1.0);
    }

    #[test]
    fn paragraph_range_starts_and_ends_at_its_triggers() {
        let range = ScrollRange::PARAGRAPH;
        assert_eq!(range.progress(bounds(900.0), VH), 0.0);
        assert_eq!(range.progress(bounds(500.0), VH), 1.0);
        assert!((range.progress(bounds(700.0), VH) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn paragraph_range_clamps_outside_triggers() {
        let range = ScrollRange::PARAGRAPH;
        assert_eq!(range.progress(bounds(1800.0), VH), 0.0);
        assert_eq!(range.progress(bounds(-400.0), VH), 1.0);
    }

    #[test]
    fn through_viewport_range_uses_both_edges() {
        let range = ScrollRange::THROUGH_VIEWPORT;
        // top entering at the bottom of the viewport
        assert_eq!(range.progress(bounds(1000.0), VH), 0.0);
        // bottom leaving at the top
        assert_eq!(range.progress(bounds(-300.0), VH), 1.0);
        assert!((range.progress(bounds(350.0), VH) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn scrolling_down_never_reverses_progress() {
        let range = ScrollRange::PARAGRAPH;
        let mut last = 0.0;
        let mut top = 1200.0;
        while top > 200.0 {
            let progress = range.progress(bounds(top), VH);
            assert!(progress >= last);
            last = progress;
            top -= 7.0;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn coincident_anchors_step_at_the_trigger() {
        let anchor = ScrollOffset::new(Edge::Start, 0.5);
        let range = ScrollRange::new(anchor, anchor);
        assert_eq!(range.progress(bounds(501.0), VH), 0.0);
        assert_eq!(range.progress(bounds(500.0), VH), 1.0);
    }

    #[test]
    fn reveal_shares_one_progress_across_outputs() {
        let frame = Reveal::paragraph().unwrap().sample(0.5);
        assert!((frame.opacity - 0.55).abs() < 1e-9);
        assert!((frame.translate_y - 10.0).abs() < 1e-9);
        assert_eq!(frame.scale, 1.0);
        assert_eq!(frame.rotate, 0.0);
    }

    #[test]
    fn later_curve_replaces_earlier_for_same_property() {
        let reveal = Reveal::new()
            .with(StyleProperty::Scale, OutputCurve::from_unit([0.5, 1.0]))
            .with(StyleProperty::Scale, OutputCurve::from_unit([2.0, 3.0]));
        assert_eq!(reveal.sample(0.0).scale, 2.0);
    }

    #[test]
    fn frame_renders_css() {
        let css = Reveal::paragraph().unwrap().sample(0.0).to_css();
        assert_eq!(
            css,
            "opacity: 0.100; transform: translateY(20.00px) scale(1.000) rotate(0.00deg);"
        );
    }

    #[test]
    fn closing_reveal_settles_scale_and_tilt() {
        let reveal = Reveal::closing().unwrap();
        let start = reveal.sample(0.0);
        assert_eq!(start.opacity, 0.1);
        assert_eq!(start.scale, 0.96);
        assert_eq!(start.rotate, -1.5);
        assert_eq!(reveal.sample(1.0), RevealFrame::default());
    }
}
