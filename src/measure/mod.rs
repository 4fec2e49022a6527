//! Row measurement: aggregate geometry for one horizontal strip of a
//! rendered block.
//!
//! A row owns an ordered sequence of [`Element`]s plus the aggregate
//! geometry computed from them. The rendering pipeline constructs a row
//! variant, pushes elements into it, calls [`RowMeasure::measure`], then
//! reads the aggregates to position the row and choose corner paths.
//!
//! Measurement is a pure recomputation over the current element sequence:
//! no I/O, no shared state, bounded time. A row belongs to exactly one
//! render pass and must not be measured concurrently.

pub mod bottom_row;
pub mod content_row;
pub mod position;

use enum_dispatch::enum_dispatch;

use crate::constants::ConstantProvider;
use crate::elements::Element;
use crate::registry::TypeMask;
use crate::types::Px;

pub use bottom_row::BottomRow;
pub use content_row::ContentRow;

/// Element sequence and aggregate geometry shared by every row kind.
#[derive(Debug, Clone, PartialEq)]
pub struct RowCore {
    /// Elements in left-to-right layout order. Order is load-bearing for
    /// width summation and element placement.
    pub elements: Vec<Element>,
    /// Measured width; `>= min_width` after `measure()`.
    pub width: Px,
    /// Measured height; `>= min_height` after `measure()`.
    pub height: Px,
    pub min_width: Px,
    pub min_height: Px,
    /// Width including space reserved for chained blocks. Row kinds that
    /// reserve nothing keep this equal to `width`.
    pub width_with_connected_blocks: Px,
    /// Classification tag for this row.
    pub tag: TypeMask,
}

impl RowCore {
    pub(crate) fn new(tag: TypeMask, min_width: Px, min_height: Px) -> Self {
        Self {
            elements: Vec::new(),
            width: Px::ZERO,
            height: Px::ZERO,
            min_width,
            min_height,
            width_with_connected_blocks: Px::ZERO,
            tag: TypeMask::ROW | tag,
        }
    }

    pub fn first(&self) -> Option<&Element> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Measurement contract shared by all row kinds.
///
/// `measure` is idempotent: with an unchanged element sequence, calling it
/// twice yields identical aggregates. It never fails under the documented
/// precondition (non-negative element sizes).
#[enum_dispatch]
pub trait RowMeasure {
    fn core(&self) -> &RowCore;

    fn core_mut(&mut self) -> &mut RowCore;

    /// Append an element at the right edge of the row.
    fn push(&mut self, elem: Element) {
        self.core_mut().elements.push(elem);
    }

    /// Recompute aggregate geometry from the element sequence.
    fn measure(&mut self);

    /// Whether the layout pipeline should insert a synthetic spacer before
    /// this row's first element.
    fn starts_with_elem_spacer(&self) -> bool {
        true
    }

    /// Whether the layout pipeline should insert a synthetic spacer after
    /// this row's last element.
    fn ends_with_elem_spacer(&self) -> bool {
        true
    }
}

/// A row of a rendered block, dispatching measurement by kind.
#[enum_dispatch(RowMeasure)]
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Bottom(BottomRow),
    Content(ContentRow),
}

impl Row {
    /// The bottom row of a block: corners, spacers and the next-statement
    /// connection.
    pub fn bottom(constants: &ConstantProvider) -> Row {
        Row::Bottom(BottomRow::new(constants))
    }

    /// An ordinary content row: icons, fields and inputs.
    pub fn content(constants: &ConstantProvider) -> Row {
        Row::Content(ContentRow::new(constants))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::px;

    #[test]
    fn rows_carry_their_kind_tag() {
        let constants = ConstantProvider::new();
        let bottom = Row::bottom(&constants);
        let content = Row::content(&constants);
        assert!(bottom.core().tag.is_bottom_row());
        assert!(!bottom.core().tag.is_input_row());
        assert!(content.core().tag.is_row());
        assert!(!content.core().tag.is_bottom_row());
    }

    #[test]
    fn push_appends_in_order() {
        let constants = ConstantProvider::new();
        let mut row = Row::content(&constants);
        row.push(Element::field(px(20.0), px(15.0)));
        row.push(Element::in_row_spacer(px(8.0)));
        assert_eq!(row.core().elements.len(), 2);
        assert!(row.core().first().unwrap().tag.is_field());
        assert!(row.core().last().unwrap().tag.is_spacer());
    }

    #[test]
    fn dispatch_reaches_variant_measure() {
        let constants = ConstantProvider::new();
        let mut row = Row::bottom(&constants);
        row.core_mut().min_width = Px::ZERO;
        row.core_mut().min_height = Px::ZERO;
        row.push(Element::next_connection(px(10.0), px(8.0)));
        row.measure();
        // Bottom-row rule: the connector's height lands below the baseline
        assert_eq!(row.core().height, px(8.0));
        match row {
            Row::Bottom(ref b) => assert_eq!(b.descender_height, px(8.0)),
            _ => unreachable!(),
        }
    }
}
