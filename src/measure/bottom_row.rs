//! The bottom row of a rendered block.
//!
//! Bottom rows hold corners, spacers and the next-statement connection.
//! Their distinguishing rule: a next connection's visual footprint lies
//! entirely below the baseline, so it contributes descender height instead
//! of above-baseline height.

use crate::block::BlockContext;
use crate::constants::ConstantProvider;
use crate::elements::Element;
use crate::log::debug;
use crate::registry::TypeMask;
use crate::types::Px;

use super::{RowCore, RowMeasure};

#[derive(Debug, Clone, PartialEq)]
pub struct BottomRow {
    pub core: RowCore,
    /// Whether this row has a next connection.
    pub has_next_connection: bool,
    /// Index of the next-connection element, if any. `Some` exactly when
    /// `has_next_connection` is true; maintained by `push`.
    connection: Option<usize>,
    /// How far the bottom of the block extends below the horizontal edge,
    /// e.g. because of a next connection. Always non-negative.
    pub descender_height: Px,
    /// Y position of the bottom edge of the block, relative to the origin
    /// of the block rendering. Written by downstream positioning.
    pub baseline: Px,
}

impl BottomRow {
    pub fn new(constants: &ConstantProvider) -> Self {
        Self {
            core: RowCore::new(
                TypeMask::BOTTOM_ROW,
                constants.min_row_width,
                constants.min_bottom_row_height,
            ),
            has_next_connection: false,
            connection: None,
            descender_height: Px::ZERO,
            baseline: Px::ZERO,
        }
    }

    /// The next-connection element tracked by this row, if any.
    pub fn connection(&self) -> Option<&Element> {
        self.connection.map(|i| &self.core.elements[i])
    }

    pub(crate) fn connection_index(&self) -> Option<usize> {
        self.connection
    }

    /// Whether the bottom row has a left square corner.
    ///
    /// The corner is square when the edge abuts another structure: the
    /// block plugs into a value socket, or a following block is attached.
    pub fn has_left_square_corner(&self, block: &BlockContext) -> bool {
        block.has_output_connection || block.has_next_block
    }

    /// Whether the bottom row has a right square corner. The bottom-right
    /// corner is never rounded.
    pub fn has_right_square_corner(&self, _block: &BlockContext) -> bool {
        true
    }
}

impl RowMeasure for BottomRow {
    fn core(&self) -> &RowCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut RowCore {
        &mut self.core
    }

    fn push(&mut self, elem: Element) {
        if elem.tag.is_next_connection() {
            self.has_next_connection = true;
            self.connection = Some(self.core.elements.len());
        }
        self.core.elements.push(elem);
    }

    fn measure(&mut self) {
        let mut height = Px::ZERO;
        let mut width = Px::ZERO;
        let mut descender_height = Px::ZERO;
        for elem in &self.core.elements {
            width += elem.width;
            if !elem.tag.is_spacer() {
                // Next connections have *only* descender height, with no
                // height above the baseline.
                if elem.tag.is_next_connection() {
                    descender_height = descender_height.max(elem.height);
                } else {
                    height = height.max(elem.height);
                }
            }
        }
        self.core.width = self.core.min_width.max(width);
        // The descender is additive: extra vertical extent beyond the
        // baseline-aligned core, never folded into the max.
        self.core.height = self.core.min_height.max(height) + descender_height;
        self.descender_height = descender_height;
        self.core.width_with_connected_blocks = self.core.width;
        debug!(
            width = self.core.width.raw(),
            height = self.core.height.raw(),
            descender = self.descender_height.raw(),
            "measured bottom row"
        );
    }

    // Bottom-row edges are never padded with synthetic spacers; the
    // corners supply the visual margin instead.
    fn starts_with_elem_spacer(&self) -> bool {
        false
    }

    fn ends_with_elem_spacer(&self) -> bool {
        false
    }
}
