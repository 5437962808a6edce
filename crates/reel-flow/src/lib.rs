//! Content-flow navigation for the Reel engine.
//!
//! A flow is the ordered sequence of content nodes linked by fixed
//! next/previous relations, representing a guided learning path. The link
//! structure is authored once, kept in an explicit insertion-ordered table,
//! and only read at runtime.
//!
//! Traversal is defensive: the authored data is trusted to form disjoint
//! acyclic chains, but every walk is bounded by the table size so malformed
//! input surfaces as [`reel_core::FlowError::CycleDetected`] instead of a
//! hang. [`FlowTable::validate`] audits the invariant directly.

mod resolve;
mod table;

pub use resolve::resolve_start;
pub use table::{Flow, FlowTable, Links};
