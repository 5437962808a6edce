//! Screen-local session state for the Reel engine.
//!
//! Each screen owns its state as a plain value: category selection on the
//! browse screen, subtopic narrowing, and the reel deck of a viewing
//! session. There are no global singletons and no synchronization; a host
//! UI embeds these types wherever its screens live.

mod browse;
mod deck;
mod narrow;

pub use browse::BrowseSession;
pub use deck::{resolve_swipe, Reel, ReelDeck, SwipeOutcome};
pub use narrow::NarrowSelection;
