//! Greedy row-wrapping layout.

use reel_core::{LayoutError, Point, Rect, Size};

/// Wrapping flow layout.
///
/// `measure` and `place` both drive the same [`RowCursor`], so the bounding
/// size and the placements are always computed from identical wrap
/// decisions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WrapLayout {
    vertical_spacing: f64,
}

impl WrapLayout {
    /// Create a layout with no spacing between rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gap inserted between consecutive rows.
    pub fn with_vertical_spacing(mut self, spacing: f64) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// The configured row gap.
    pub fn vertical_spacing(&self) -> f64 {
        self.vertical_spacing
    }

    /// Compute the bounding size needed to lay out `items` against
    /// `max_width`.
    ///
    /// `max_width` may be `f64::INFINITY` for an unbounded single row. The
    /// result is never negative; zero items yield `Size::ZERO`. There is no
    /// trailing spacing below the final row.
    pub fn measure(&self, items: &[Size], max_width: f64) -> Result<Size, LayoutError> {
        validate(items, max_width)?;

        let mut cursor = RowCursor::new(max_width, self.vertical_spacing);
        for &item in items {
            cursor.push(item);
        }
        Ok(cursor.bounding_size())
    }

    /// Compute the top-left placement of every item, wrapping against
    /// `max_width`, with the container's top-left corner at `origin`.
    ///
    /// Placements echo each item's size, so the returned rectangles are the
    /// final frames. Item order is preserved: within a row items run left to
    /// right, and rows stack top to bottom in input order.
    pub fn place(
        &self,
        items: &[Size],
        origin: Point,
        max_width: f64,
    ) -> Result<Vec<Rect>, LayoutError> {
        validate(items, max_width)?;

        let mut cursor = RowCursor::new(max_width, self.vertical_spacing);
        let mut placements = Vec::with_capacity(items.len());
        for &item in items {
            let local = cursor.push(item);
            placements.push(Rect::new(
                origin.x + local.x,
                origin.y + local.y,
                item.width,
                item.height,
            ));
        }
        Ok(placements)
    }
}

/// Shared wrap-decision state.
///
/// The wrap predicate fires only for a non-empty row whose prospective width
/// would exceed the bound. An item wider than the bound that opens a row is
/// still placed on it, so every row holds at least one item and the walk
/// always makes progress.
#[derive(Debug)]
struct RowCursor {
    max_width: f64,
    vertical_spacing: f64,
    y: f64,
    row_width: f64,
    row_height: f64,
    total_width: f64,
}

impl RowCursor {
    fn new(max_width: f64, vertical_spacing: f64) -> Self {
        Self {
            max_width,
            vertical_spacing,
            y: 0.0,
            row_width: 0.0,
            row_height: 0.0,
            total_width: 0.0,
        }
    }

    /// Advance past `item`, returning its top-left position relative to the
    /// container origin.
    fn push(&mut self, item: Size) -> Point {
        if self.row_width > 0.0 && self.row_width + item.width > self.max_width {
            self.y += self.row_height + self.vertical_spacing;
            self.row_width = 0.0;
            self.row_height = 0.0;
        }

        let position = Point::new(self.row_width, self.y);
        self.row_width += item.width;
        self.row_height = self.row_height.max(item.height);
        self.total_width = self.total_width.max(self.row_width);
        position
    }

    /// Bounding size of everything pushed so far.
    fn bounding_size(&self) -> Size {
        Size::new(self.total_width, self.y + self.row_height)
    }
}

/// Reject malformed input before any placement is computed.
fn validate(items: &[Size], max_width: f64) -> Result<(), LayoutError> {
    if max_width.is_nan() || max_width < 0.0 {
        return Err(LayoutError::InvalidMaxWidth { value: max_width });
    }

    for (index, item) in items.iter().enumerate() {
        if !item.width.is_finite() || !item.height.is_finite() {
            return Err(LayoutError::NonFiniteItem {
                index,
                width: item.width,
                height: item.height,
            });
        }
        if item.width < 0.0 || item.height < 0.0 {
            return Err(LayoutError::NegativeItem {
                index,
                width: item.width,
                height: item.height,
            });
        }
    }

    Ok(())
}
