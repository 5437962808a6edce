//! The reel deck of a viewing session.

use glam::DVec2;
use reel_catalog::{ClipCatalog, ClipId};
use reel_core::FlowError;
use reel_flow::Flow;

/// Fraction of the viewport height a vertical drag must cover to change
/// reels.
const SWIPE_THRESHOLD_RATIO: f64 = 0.25;

/// One playable reel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reel {
    /// Display title shown over the video.
    pub title: String,
    /// File stem of the video asset to load.
    pub file_stem: String,
}

/// What a swipe gesture resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Move to the next reel.
    Advance,
    /// Move to the previous reel.
    Retreat,
    /// Below the threshold, or at a deck boundary.
    Stay,
}

/// Resolve a drag translation against the viewport height.
///
/// A downward drag (positive y) past the threshold retreats to the previous
/// reel; an upward drag advances. The threshold is a quarter of the
/// viewport height.
pub fn resolve_swipe(translation: DVec2, viewport_height: f64) -> SwipeOutcome {
    let threshold = viewport_height * SWIPE_THRESHOLD_RATIO;
    if translation.y > threshold {
        SwipeOutcome::Retreat
    } else if translation.y < -threshold {
        SwipeOutcome::Advance
    } else {
        SwipeOutcome::Stay
    }
}

/// An ordered deck of reels with a current position.
#[derive(Debug, Clone, Default)]
pub struct ReelDeck {
    reels: Vec<Reel>,
    current: usize,
}

impl ReelDeck {
    /// Build a deck from a materialized learning path. The deck starts at
    /// the flow's start node.
    pub fn from_flow(catalog: &ClipCatalog, flow: &Flow<ClipId>) -> Result<Self, FlowError> {
        let mut reels = Vec::with_capacity(flow.len());
        for &id in flow.nodes() {
            let entry = catalog.entry(id).ok_or_else(|| FlowError::UnknownNode {
                node: format!("{id:?}"),
            })?;
            reels.push(Reel {
                title: entry.title.to_string(),
                file_stem: entry.file_stem.to_string(),
            });
        }

        Ok(Self {
            reels,
            current: flow.start_index(),
        })
    }

    /// Build a deck from free-text titles (e.g. a curated browse section).
    ///
    /// Each title keeps its own display text; the video asset comes from
    /// title resolution, falling back to the catalog's default clip for
    /// titles nothing matches.
    pub fn from_titles<'a, I>(catalog: &ClipCatalog, titles: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let default_stem = catalog
            .entry(catalog.default_clip())
            .map(|entry| entry.file_stem)
            .unwrap_or("complexNumbers");

        let reels = titles
            .into_iter()
            .map(|title| {
                let stem = catalog
                    .resolve_title(title)
                    .and_then(|id| catalog.entry(id))
                    .map(|entry| entry.file_stem)
                    .unwrap_or(default_stem);
                Reel {
                    title: title.to_string(),
                    file_stem: stem.to_string(),
                }
            })
            .collect();

        Self { reels, current: 0 }
    }

    /// All reels in order.
    pub fn reels(&self) -> &[Reel] {
        &self.reels
    }

    /// Number of reels.
    pub fn len(&self) -> usize {
        self.reels.len()
    }

    /// Check if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.reels.is_empty()
    }

    /// Index of the current reel.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The current reel, if the deck is non-empty.
    pub fn current(&self) -> Option<&Reel> {
        self.reels.get(self.current)
    }

    /// Move to the next reel. Returns false at the end of the deck.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.reels.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous reel. Returns false at the start of the deck.
    pub fn retreat(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Resolve a swipe and apply it, respecting deck boundaries.
    ///
    /// Returns what actually happened: a swipe past the threshold at a
    /// boundary reports `Stay`.
    pub fn apply_swipe(&mut self, translation: DVec2, viewport_height: f64) -> SwipeOutcome {
        match resolve_swipe(translation, viewport_height) {
            SwipeOutcome::Advance if self.advance() => SwipeOutcome::Advance,
            SwipeOutcome::Retreat if self.retreat() => SwipeOutcome::Retreat,
            _ => SwipeOutcome::Stay,
        }
    }
}
