// Copyright 2026 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time tree settings.

use crate::error::ConfigError;
use crate::types::{Scalar, gt};

/// Settings for a [`QuadTree`](crate::QuadTree), fixed at construction and
/// applied uniformly to every node in the tree.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config<T> {
    /// World width; the root covers `(0, 0)..(width, height)`.
    pub width: T,
    /// World height.
    pub height: T,
    /// Maximum node depth (the root is depth 0). A leaf at this depth
    /// accepts unlimited items and never subdivides; `0` keeps every item
    /// in the root.
    pub max_depth: u16,
    /// Items a leaf holds before subdividing (when below `max_depth`).
    pub max_objects: usize,
}

impl<T: Scalar> Config<T> {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !gt(self.width, T::zero()) {
            return Err(ConfigError::NonPositiveWidth);
        }
        if !gt(self.height, T::zero()) {
            return Err(ConfigError::NonPositiveHeight);
        }
        if self.max_objects == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}
