// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::borrow::Borrow;
use core::fmt;
use core::ops::{AddAssign, Div, DivAssign, Index, Mul, MulAssign};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::BoundsError;
use crate::point::Point2d;

/// Outward slack applied on every side by [`BoundingBox::rough_contains`].
///
/// Absorbs rounding left behind by upstream reprojection (e.g. lat/lon to
/// metres). Expressed in the unit of each axis.
pub const ROUGH_TOLERANCE: f64 = 0.01;

/// Reference-counted box for hosts where many holders share one extent.
pub type SharedBoundingBox = Arc<BoundingBox>;

/// Axis-aligned rectangle `[min_x, max_x] × [min_y, max_y]`.
///
/// Invariants:
/// - A box is *valid* iff `min_x <= max_x && min_y <= max_y`. No operation
///   enforces this; inverted boxes are representable and queryable through
///   [`BoundingBox::valid`].
/// - The default box is `(+inf, -inf, +inf, -inf)`, the identity element for
///   [`BoundingBox::add_point`] and [`BoundingBox::add`].
/// - Equality is exact on all four bounds.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "crate::load::BoundsRecord", into = "crate::load::BoundsRecord")]
pub struct BoundingBox {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    /// The inverted extremal box; growing it by any point yields that point.
    pub const fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Constructs a box from its bounds, stored verbatim (no reordering).
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Constructs a box from its left-bottom and right-top corners.
    ///
    /// Corners are taken as given; swapped corners produce an invalid box.
    pub const fn from_corners(left_bottom: Point2d, right_top: Point2d) -> Self {
        Self {
            min_x: left_bottom.x(),
            max_x: right_top.x(),
            min_y: left_bottom.y(),
            max_y: right_top.y(),
        }
    }

    /// Builds the minimal box containing all `points`.
    ///
    /// An empty iterator yields [`BoundingBox::empty`].
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Point2d>,
    {
        let mut bb = Self::empty();
        bb.add_points(points);
        bb
    }

    /// Minimum X bound.
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Maximum X bound.
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Minimum Y bound.
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Maximum Y bound.
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Overwrites the minimum X bound.
    pub fn set_min_x(&mut self, min_x: f64) {
        self.min_x = min_x;
    }

    /// Overwrites the maximum X bound.
    pub fn set_max_x(&mut self, max_x: f64) {
        self.max_x = max_x;
    }

    /// Overwrites the minimum Y bound.
    pub fn set_min_y(&mut self, min_y: f64) {
        self.min_y = min_y;
    }

    /// Overwrites the maximum Y bound.
    pub fn set_max_y(&mut self, max_y: f64) {
        self.max_y = max_y;
    }

    /// Assigns `(min_x, min_y)` from `p` without checking the opposite corner.
    pub fn set_left_bottom(&mut self, p: Point2d) {
        self.min_x = p.x();
        self.min_y = p.y();
    }

    /// Assigns `(max_x, max_y)` from `p` without checking the opposite corner.
    pub fn set_right_top(&mut self, p: Point2d) {
        self.max_x = p.x();
        self.max_y = p.y();
    }

    fn mid_x(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }

    fn mid_y(&self) -> f64 {
        (self.min_y + self.max_y) / 2.0
    }

    /// `(min_x, min_y)`.
    pub fn left_bottom(&self) -> Point2d {
        Point2d::new(self.min_x, self.min_y)
    }

    /// `(min_x, mid_y)`.
    pub fn left_mid(&self) -> Point2d {
        Point2d::new(self.min_x, self.mid_y())
    }

    /// `(min_x, max_y)`.
    pub fn left_top(&self) -> Point2d {
        Point2d::new(self.min_x, self.max_y)
    }

    /// `(mid_x, max_y)`.
    pub fn mid_top(&self) -> Point2d {
        Point2d::new(self.mid_x(), self.max_y)
    }

    /// `(max_x, max_y)`.
    pub fn right_top(&self) -> Point2d {
        Point2d::new(self.max_x, self.max_y)
    }

    /// `(max_x, mid_y)`.
    pub fn right_mid(&self) -> Point2d {
        Point2d::new(self.max_x, self.mid_y())
    }

    /// `(max_x, min_y)`.
    pub fn right_bottom(&self) -> Point2d {
        Point2d::new(self.max_x, self.min_y)
    }

    /// `(mid_x, min_y)`.
    pub fn mid_bottom(&self) -> Point2d {
        Point2d::new(self.mid_x(), self.min_y)
    }

    /// The four corners: left-bottom, left-top, right-top, right-bottom.
    pub fn corners(&self) -> [Point2d; 4] {
        [
            self.left_bottom(),
            self.left_top(),
            self.right_top(),
            self.right_bottom(),
        ]
    }

    /// The eight control points, clockwise from the left-bottom corner:
    /// left-bottom, left-mid, left-top, mid-top, right-top, right-mid,
    /// right-bottom, mid-bottom.
    pub fn controls(&self) -> [Point2d; 8] {
        [
            self.left_bottom(),
            self.left_mid(),
            self.left_top(),
            self.mid_top(),
            self.right_top(),
            self.right_mid(),
            self.right_bottom(),
            self.mid_bottom(),
        ]
    }

    /// Returns `true` when `min <= max` on both axes.
    pub fn valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Grows the box to cover `point`.
    ///
    /// Each bound is widened independently. Returns `true` if any bound moved.
    pub fn add_point(&mut self, point: &Point2d) -> bool {
        let mut changed = false;
        if point.x() < self.min_x {
            self.min_x = point.x();
            changed = true;
        }
        if point.x() > self.max_x {
            self.max_x = point.x();
            changed = true;
        }
        if point.y() < self.min_y {
            self.min_y = point.y();
            changed = true;
        }
        if point.y() > self.max_y {
            self.max_y = point.y();
            changed = true;
        }
        changed
    }

    /// Grows the box to cover every point; the result is independent of order.
    ///
    /// Returns `true` if any single point moved a bound.
    pub fn add_points<I>(&mut self, points: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<Point2d>,
    {
        points
            .into_iter()
            .fold(false, |changed, p| self.add_point(p.borrow()) | changed)
    }

    /// Grows the box to cover `other`.
    ///
    /// Leaves the receiver untouched and returns `false` when it already holds
    /// both the left-bottom and right-top corners of `other`. Otherwise both
    /// corners are added and `true` is returned. `other` is expected to be
    /// valid: the corners of an inverted box push the receiver outward.
    pub fn add(&mut self, other: &Self) -> bool {
        let lb = other.left_bottom();
        let rt = other.right_top();
        if self.contains(&lb) && self.contains(&rt) {
            return false;
        }
        self.add_point(&lb);
        self.add_point(&rt);
        true
    }

    /// Returns a copy of this box grown to cover `other`.
    #[must_use]
    pub fn union_with(&self, other: &Self) -> Self {
        let mut out = *self;
        out.add(other);
        out
    }

    /// Returns `true` if `point` lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, point: &Point2d) -> bool {
        !(point.x() > self.max_x
            || point.x() < self.min_x
            || point.y() > self.max_y
            || point.y() < self.min_y)
    }

    /// Like [`BoundingBox::contains`] with every edge pushed outward by
    /// [`ROUGH_TOLERANCE`].
    #[must_use]
    pub fn rough_contains(&self, point: &Point2d) -> bool {
        !(point.x() > self.max_x + ROUGH_TOLERANCE
            || point.x() < self.min_x - ROUGH_TOLERANCE
            || point.y() > self.max_y + ROUGH_TOLERANCE
            || point.y() < self.min_y - ROUGH_TOLERANCE)
    }

    /// Returns `true` if `other` lies entirely within this box, edges included.
    #[must_use]
    pub fn contains_box(&self, other: &Self) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Returns `true` if the boxes overlap on both axes (touching edges count).
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }

    /// `max_x - min_x`; negative for an inverted box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// `max_y - min_y`; negative for an inverted box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Point2d {
        Point2d::new(0.5 * (self.min_x + self.max_x), 0.5 * (self.min_y + self.max_y))
    }

    fn set_half_extents(&mut self, sx: f64, sy: f64) {
        let c = self.center();
        self.min_x = c.x() - sx;
        self.max_x = c.x() + sx;
        self.min_y = c.y() - sy;
        self.max_y = c.y() + sy;
    }

    /// Multiplies both extents by `ratio`, keeping the center fixed.
    ///
    /// A negative ratio mirrors the box through its center, leaving it
    /// inverted. Not guarded.
    pub fn scale_by(&mut self, ratio: f64) {
        let sx = 0.5 * self.width() * ratio;
        let sy = 0.5 * self.height() * ratio;
        self.set_half_extents(sx, sy);
    }

    /// Divides both extents by `ratio`, keeping the center fixed.
    ///
    /// `ratio == 0.0` follows IEEE-754 and yields infinite bounds; keeping the
    /// ratio non-zero is the caller's job.
    pub fn divide_by(&mut self, ratio: f64) {
        let sx = 0.5 * self.width() / ratio;
        let sy = 0.5 * self.height() / ratio;
        self.set_half_extents(sx, sy);
    }

    /// Returns a copy scaled by `ratio` about the center.
    #[must_use]
    pub fn scaled_by(&self, ratio: f64) -> Self {
        let mut out = *self;
        out.scale_by(ratio);
        out
    }

    /// Returns the bound at `index`: `0 → min_x`, `1 → min_y`, `2 → max_x`,
    /// `3 → max_y`.
    pub fn get(&self, index: usize) -> Result<f64, BoundsError> {
        match index {
            0 => Ok(self.min_x),
            1 => Ok(self.min_y),
            2 => Ok(self.max_x),
            3 => Ok(self.max_y),
            _ => Err(BoundsError::IndexOutOfRange { index }),
        }
    }

    /// Bounds in index order `[min_x, min_y, max_x, max_y]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

impl Index<usize> for BoundingBox {
    type Output = f64;

    /// # Panics
    /// Panics with the [`BoundsError::IndexOutOfRange`] message when
    /// `index > 3`. Use [`BoundingBox::get`] for a fallible lookup.
    #[allow(clippy::panic)]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.min_x,
            1 => &self.min_y,
            2 => &self.max_x,
            3 => &self.max_y,
            _ => panic!("{}", BoundsError::IndexOutOfRange { index }),
        }
    }
}

impl AddAssign<&BoundingBox> for BoundingBox {
    fn add_assign(&mut self, rhs: &BoundingBox) {
        self.add(rhs);
    }
}

impl AddAssign for BoundingBox {
    fn add_assign(&mut self, rhs: BoundingBox) {
        self.add(&rhs);
    }
}

// Named by path: with `Add` in scope, `box.add(&other)` on an owned box would
// resolve to the operator instead of the growth method.
impl core::ops::Add for BoundingBox {
    type Output = BoundingBox;

    fn add(self, rhs: BoundingBox) -> BoundingBox {
        self.union_with(&rhs)
    }
}

impl MulAssign<f64> for BoundingBox {
    fn mul_assign(&mut self, ratio: f64) {
        self.scale_by(ratio);
    }
}

impl Mul<f64> for BoundingBox {
    type Output = BoundingBox;

    fn mul(self, ratio: f64) -> BoundingBox {
        self.scaled_by(ratio)
    }
}

impl DivAssign<f64> for BoundingBox {
    fn div_assign(&mut self, ratio: f64) {
        self.divide_by(ratio);
    }
}

impl Div<f64> for BoundingBox {
    type Output = BoundingBox;

    fn div(mut self, ratio: f64) -> BoundingBox {
        self.divide_by(ratio);
        self
    }
}

impl<P: Borrow<Point2d>> FromIterator<P> for BoundingBox {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

impl<P: Borrow<Point2d>> Extend<P> for BoundingBox {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.add_points(iter);
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min_x = {}; max_x = {}; min_y = {}; max_y = {}",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
