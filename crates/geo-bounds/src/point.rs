// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use serde::{Deserialize, Serialize};

/// Planar coordinate used for box corners, control points and growth.
///
/// Components are `f64` in whatever unit the caller's coordinate system uses
/// (degrees, metres, pixels). Finiteness is not checked.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2d {
    x: f64,
    y: f64,
}

impl Point2d {
    /// Creates a point from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Overwrites the X component.
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Overwrites the Y component.
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Returns the components as `[x, y]`.
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Point2d {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point2d> for [f64; 2] {
    fn from(p: Point2d) -> Self {
        p.to_array()
    }
}

impl fmt::Display for Point2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
