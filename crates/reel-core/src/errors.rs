//! Error types for the Reel engine.

use thiserror::Error;

/// Top-level error type for the Reel engine.
#[derive(Debug, Error)]
pub enum ReelError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// Errors during wrap layout.
///
/// Layout itself has no recoverable failure states; these are boundary
/// rejections of malformed input, raised before any placement is computed.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("item {index} has a non-finite dimension ({width} x {height})")]
    NonFiniteItem {
        index: usize,
        width: f64,
        height: f64,
    },

    #[error("item {index} has a negative dimension ({width} x {height})")]
    NegativeItem {
        index: usize,
        width: f64,
        height: f64,
    },

    #[error("invalid maximum width: {value}")]
    InvalidMaxWidth { value: f64 },
}

/// Errors during flow traversal and link-table auditing.
///
/// Node keys are reported through their `Debug` rendering so the table can
/// stay generic over the key type.
#[derive(Debug, Error, PartialEq)]
pub enum FlowError {
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    #[error("link cycle detected while walking from {node}")]
    CycleDetected { node: String },

    #[error("link on {from} references a node not in the table: {to}")]
    DanglingLink { from: String, to: String },

    #[error("links between {from} and {to} are not symmetric")]
    AsymmetricLink { from: String, to: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::NegativeItem {
            index: 3,
            width: -2.0,
            height: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "item 3 has a negative dimension (-2 x 10)"
        );

        let err = FlowError::UnknownNode {
            node: "UnitCircle".to_string(),
        };
        assert_eq!(err.to_string(), "unknown node: UnitCircle");
    }

    #[test]
    fn test_top_level_wrapping() {
        let err: ReelError = LayoutError::InvalidMaxWidth { value: f64::NAN }.into();
        assert!(matches!(err, ReelError::Layout(_)));
    }
}
