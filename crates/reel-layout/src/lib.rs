//! Wrap-flow layout for the Reel engine.
//!
//! Arranges a sequence of measured items into left-to-right rows that wrap
//! at a width bound, top to bottom. The layout is greedy: items are taken
//! strictly in input order, a row closes as soon as the next item would not
//! fit, and no reordering or bin packing is attempted.
//!
//! # Example
//!
//! ```
//! use reel_core::{Point, Size};
//! use reel_layout::WrapLayout;
//!
//! let layout = WrapLayout::new().with_vertical_spacing(8.0);
//! let chips = vec![Size::new(90.0, 32.0), Size::new(120.0, 32.0), Size::new(70.0, 32.0)];
//!
//! let bounding = layout.measure(&chips, 200.0).unwrap();
//! let placements = layout.place(&chips, Point::ZERO, 200.0).unwrap();
//! assert_eq!(placements.len(), chips.len());
//! assert!(bounding.height > 32.0); // wrapped onto a second row
//! ```

mod wrap;

pub use wrap::WrapLayout;
