use crate::Point;
use thiserror::Error;

/// Errors reported when registering or looking up Walkboxes.
///
/// None of these leave the [`PathfindingContext`](crate::PathfindingContext) in a changed state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalkboxError {
    /// The corners of a Walkbox are not in top-left / bottom-right order.
    #[error("malformed walkbox: {p1:?} is not above and left of {p2:?}")]
    MalformedRect {
        /// the top-left corner
        p1: Point,
        /// the bottom-right corner
        p2: Point,
    },

    /// A scale or speed multiplier is negative, infinite or NaN.
    #[error("walkbox {field} multiplier must be finite and non-negative, got {value}")]
    InvalidMultiplier {
        /// `"scale"` or `"speed"`
        field: &'static str,
        /// the rejected value
        value: f32,
    },

    /// Another Walkbox of the Room already uses this name (compared case-insensitively).
    #[error("a walkbox named '{0}' already exists")]
    DuplicateName(String),

    /// No Walkbox of the Room has this name.
    #[error("no walkbox named '{0}'")]
    UnknownWalkbox(String),
}
