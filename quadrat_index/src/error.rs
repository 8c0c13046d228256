// Copyright 2026 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced at construction and insertion.
//!
//! There are no recoverable run-time errors inside retrieval: given a valid
//! tree and well-formed rects, queries always run to completion.

use thiserror::Error;

/// Rejected [`Config`](crate::Config) values.
///
/// Surfaced by [`QuadTree::new`](crate::QuadTree::new) instead of building a
/// tree that silently misbehaves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `width` was zero, negative, or NaN.
    #[error("world width must be positive")]
    NonPositiveWidth,
    /// `height` was zero, negative, or NaN.
    #[error("world height must be positive")]
    NonPositiveHeight,
    /// `max_objects` was zero; a node must be able to hold at least one item.
    #[error("node capacity (max_objects) must be at least 1")]
    ZeroCapacity,
}

/// A rect with inverted extents (max < min) or NaN coordinates.
///
/// Returned by [`QuadTree::insert`](crate::QuadTree::insert); such a rect
/// would corrupt the containment tests, so it is rejected up front.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("rect has inverted or NaN extents")]
pub struct MalformedRect;
