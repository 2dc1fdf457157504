// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Axis-aligned 2D bounding boxes.

This crate provides:
- A planar coordinate value type (`Point2d`).
- Axis-aligned bounding boxes (`BoundingBox`) with growth, containment,
  intersection, center/dimension queries, and scaling about the center.
- Hydration of boxes from hierarchical configuration trees (`serde_json`).

Design notes:
- Value semantics: both types are `Copy`; no operation allocates.
- Validity (`min <= max` on both axes) is a queryable condition, never
  enforced. The default box is the inverted extremal box, which is the
  identity for growth.
- Float64 throughout; equality is exact, with no epsilon.
- Callers keep both operands of a test in the same coordinate system; no
  projection happens here.
"]

/// Box type and its operators.
pub mod bounding_box;
/// Error type shared by fallible operations.
pub mod error;
/// Hydration from configuration trees.
pub mod load;
/// Planar point value type.
pub mod point;

pub use bounding_box::{BoundingBox, SharedBoundingBox, ROUGH_TOLERANCE};
pub use error::BoundsError;
pub use point::Point2d;
