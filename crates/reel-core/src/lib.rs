//! Core types for the Reel engine.
//!
//! This crate holds the geometry primitives shared by the layout and session
//! crates, and the centralized error enums for every fallible operation in
//! the workspace.

pub mod errors;
pub mod geometry;

pub use errors::{FlowError, LayoutError, ReelError};
pub use geometry::{Point, Rect, Size};
