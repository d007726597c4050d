//! Pens: sinks for outline drawing commands.
//!
//! A glyph outline is replayed into a [`Pen`]. Pens compose: a
//! [`TransformPen`] maps every point through an affine transform before
//! forwarding it, and an [`SvgPathPen`] accumulates SVG path data. Rendering
//! a string draws every glyph through its own `TransformPen` into one shared
//! `SvgPathPen`.

use glam::{DAffine2, DVec2};

use crate::svg::format::fmt_num;

/// Receiver of outline drawing commands.
pub trait Pen {
    /// Start a new contour at `to`.
    fn move_to(&mut self, to: DVec2);

    fn line_to(&mut self, to: DVec2);

    /// Quadratic Bézier through control point `ctrl`.
    fn quad_to(&mut self, ctrl: DVec2, to: DVec2);

    /// Cubic Bézier through control points `ctrl1` and `ctrl2`.
    fn curve_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2);

    /// Close the current contour.
    fn close(&mut self);
}

impl<P: Pen + ?Sized> Pen for &mut P {
    fn move_to(&mut self, to: DVec2) {
        (**self).move_to(to)
    }

    fn line_to(&mut self, to: DVec2) {
        (**self).line_to(to)
    }

    fn quad_to(&mut self, ctrl: DVec2, to: DVec2) {
        (**self).quad_to(ctrl, to)
    }

    fn curve_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2) {
        (**self).curve_to(ctrl1, ctrl2, to)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

// ============================================================================
// TransformPen
// ============================================================================

/// Forwards every command to `inner` after applying `transform`.
#[derive(Debug)]
pub struct TransformPen<'a, P: Pen + ?Sized> {
    inner: &'a mut P,
    transform: DAffine2,
}

impl<'a, P: Pen + ?Sized> TransformPen<'a, P> {
    pub fn new(inner: &'a mut P, transform: DAffine2) -> Self {
        Self { inner, transform }
    }

    /// Translate to `origin` and scale by `scale`, with no rotation or skew.
    ///
    /// The translation is applied after scaling, so a font-space point `p`
    /// lands at `origin + scale * p`.
    pub fn scaled(inner: &'a mut P, origin: DVec2, scale: DVec2) -> Self {
        Self::new(inner, DAffine2::from_scale_angle_translation(scale, 0.0, origin))
    }

    fn map(&self, p: DVec2) -> DVec2 {
        self.transform.transform_point2(p)
    }
}

impl<P: Pen + ?Sized> Pen for TransformPen<'_, P> {
    fn move_to(&mut self, to: DVec2) {
        let to = self.map(to);
        self.inner.move_to(to);
    }

    fn line_to(&mut self, to: DVec2) {
        let to = self.map(to);
        self.inner.line_to(to);
    }

    fn quad_to(&mut self, ctrl: DVec2, to: DVec2) {
        let (ctrl, to) = (self.map(ctrl), self.map(to));
        self.inner.quad_to(ctrl, to);
    }

    fn curve_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2) {
        let (ctrl1, ctrl2, to) = (self.map(ctrl1), self.map(ctrl2), self.map(to));
        self.inner.curve_to(ctrl1, ctrl2, to);
    }

    fn close(&mut self) {
        self.inner.close();
    }
}

// ============================================================================
// SvgPathPen
// ============================================================================

/// Accumulates SVG path data.
///
/// Every command carries its letter and numbers are separated by single
/// spaces, e.g. `M1 2L3 4H5Z`. A line that only changes one coordinate is
/// written as `H` or `V`, and a line to the current point is dropped.
///
/// The output is compact but not minimal. Consecutive lines each repeat `L`,
/// a move followed by another move is kept, and a line back to the contour's
/// start before `Z` is written whenever the outline source sends one (as
/// `ttf-parser` does). Other path writers may therefore produce different
/// bytes for the same glyph; the drawn shape is identical.
#[derive(Debug, Clone, Default)]
pub struct SvgPathPen {
    data: String,
    current: Option<DVec2>,
}

impl SvgPathPen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_string(self) -> String {
        self.data
    }

    fn push_command(&mut self, letter: char, coords: &[f64]) {
        self.data.push(letter);
        for (i, value) in coords.iter().enumerate() {
            if i > 0 {
                self.data.push(' ');
            }
            self.data.push_str(&fmt_num(*value));
        }
    }
}

impl Pen for SvgPathPen {
    fn move_to(&mut self, to: DVec2) {
        self.push_command('M', &[to.x, to.y]);
        self.current = Some(to);
    }

    fn line_to(&mut self, to: DVec2) {
        match self.current {
            Some(cur) if cur == to => return,
            Some(cur) if cur.x == to.x => self.push_command('V', &[to.y]),
            Some(cur) if cur.y == to.y => self.push_command('H', &[to.x]),
            _ => self.push_command('L', &[to.x, to.y]),
        }
        self.current = Some(to);
    }

    fn quad_to(&mut self, ctrl: DVec2, to: DVec2) {
        self.push_command('Q', &[ctrl.x, ctrl.y, to.x, to.y]);
        self.current = Some(to);
    }

    fn curve_to(&mut self, ctrl1: DVec2, ctrl2: DVec2, to: DVec2) {
        self.push_command('C', &[ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y]);
        self.current = Some(to);
    }

    fn close(&mut self) {
        self.data.push('Z');
        self.current = None;
    }
}
