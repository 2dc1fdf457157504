// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Error type for bounding box operations.
#[derive(Debug, Error)]
pub enum BoundsError {
    /// Indexed access outside `0..=3`.
    #[error(
        "index {index} out of range, index 0: min_x, index 1: min_y, index 2: max_x, index 3: max_y"
    )]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// The configuration tree did not describe a box.
    #[error("cannot load bounds: {0}")]
    Load(#[from] serde_json::Error),
}
