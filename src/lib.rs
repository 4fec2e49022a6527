//! Row measurement for rendered blocks in a visual block editor.
//!
//! A rendered block is a stack of horizontal rows, each holding an ordered
//! sequence of visual elements: icons, fields, connection sockets, corners
//! and spacers. This crate computes the geometry of one such row — width,
//! height, baseline and descender extent — from its element sequence, and
//! answers the shape queries (square vs. rounded corners, edge spacer
//! padding) that path generation depends on.
//!
//! What it does not do: enumerate elements, paint anything, or touch the
//! editor's document model. Those belong to the surrounding render
//! pipeline, which populates a row, calls `measure()`, and reads the
//! aggregates back.
//!
//! ```
//! use blockrow::{ConstantProvider, Element, Row, RowMeasure, px};
//!
//! let constants = ConstantProvider::new();
//! let mut row = Row::bottom(&constants);
//! row.push(Element::in_row_spacer(px(5.0)));
//! row.push(Element::field(px(20.0), px(15.0)));
//! row.push(Element::next_connection(px(10.0), px(8.0)));
//! row.measure();
//!
//! assert_eq!(row.core().width, px(35.0));
//! ```

pub mod block;
pub mod constants;
pub mod elements;
pub mod log;
pub mod measure;
pub mod registry;
pub mod types;

pub use block::BlockContext;
pub use constants::ConstantProvider;
pub use elements::{CornerSide, Element};
pub use measure::{BottomRow, ContentRow, Row, RowCore, RowMeasure};
pub use registry::{RegistryError, TypeMask, TypeRegistry};
pub use types::{NumericError, Px, Size, px};
