// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Populating boxes from hierarchical configuration trees.
//!
//! Two node shapes are accepted, tried in order:
//!
//! ```json
//! { "min_x": 0.0, "max_x": 10.0, "min_y": 0.0, "max_y": 5.0 }
//! { "left_bottom": { "x": 0.0, "y": 0.0 }, "right_top": { "x": 10.0, "y": 5.0 } }
//! ```
//!
//! Keys also match their run-together (`minx`, `leftbottom`) and camelCase
//! (`minX`, `leftBottom`) spellings. Leaves may be numbers or numeric strings,
//! since property-tree formats keep every scalar as text.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::bounding_box::BoundingBox;
use crate::error::BoundsError;
use crate::point::Point2d;

/// Wire shape of a box inside a configuration tree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum BoundsRecord {
    Extents {
        #[serde(alias = "minx", alias = "minX", deserialize_with = "lenient_f64")]
        min_x: f64,
        #[serde(alias = "maxx", alias = "maxX", deserialize_with = "lenient_f64")]
        max_x: f64,
        #[serde(alias = "miny", alias = "minY", deserialize_with = "lenient_f64")]
        min_y: f64,
        #[serde(alias = "maxy", alias = "maxY", deserialize_with = "lenient_f64")]
        max_y: f64,
    },
    Corners {
        #[serde(alias = "leftbottom", alias = "leftBottom")]
        left_bottom: PointRecord,
        #[serde(alias = "righttop", alias = "rightTop")]
        right_top: PointRecord,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct PointRecord {
    #[serde(deserialize_with = "lenient_f64")]
    x: f64,
    #[serde(deserialize_with = "lenient_f64")]
    y: f64,
}

impl From<PointRecord> for Point2d {
    fn from(p: PointRecord) -> Self {
        Point2d::new(p.x, p.y)
    }
}

impl From<BoundsRecord> for BoundingBox {
    fn from(record: BoundsRecord) -> Self {
        match record {
            BoundsRecord::Extents {
                min_x,
                max_x,
                min_y,
                max_y,
            } => BoundingBox::new(min_x, max_x, min_y, max_y),
            BoundsRecord::Corners {
                left_bottom,
                right_top,
            } => BoundingBox::from_corners(left_bottom.into(), right_top.into()),
        }
    }
}

impl From<BoundingBox> for BoundsRecord {
    fn from(bb: BoundingBox) -> Self {
        BoundsRecord::Extents {
            min_x: bb.min_x(),
            max_x: bb.max_x(),
            min_y: bb.min_y(),
            max_y: bb.max_y(),
        }
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Leaf {
        Number(f64),
        Text(String),
    }

    match Leaf::deserialize(deserializer)? {
        Leaf::Number(v) => Ok(v),
        Leaf::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected a number, found {s:?}"))),
    }
}

impl BoundingBox {
    /// Overwrites all four bounds from a configuration tree node.
    ///
    /// On error the receiver is left untouched. An inverted box is accepted
    /// (validity is the caller's concern) but logged.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn load(&mut self, tree: &Value) -> Result<(), BoundsError> {
        let record = BoundsRecord::deserialize(tree)?;
        *self = record.into();
        if self.valid() {
            debug!(bounds = %self, "loaded bounding box");
        } else {
            warn!(bounds = %self, "loaded bounding box is inverted");
        }
        Ok(())
    }

    /// Builds a box from a configuration tree node.
    pub fn from_tree(tree: &Value) -> Result<Self, BoundsError> {
        let mut bb = Self::empty();
        bb.load(tree)?;
        Ok(bb)
    }
}
