//! An ordinary content row: icons, fields and inputs.
//!
//! Content rows use the base measurement rule: width is the sum of element
//! widths, height the tallest element, both floored at the row minimums.
//! Specialized kinds with their own rules (the bottom row here, top and
//! input rows elsewhere) get their own variant.

use crate::constants::ConstantProvider;
use crate::log::debug;
use crate::registry::TypeMask;
use crate::types::Px;

use super::{RowCore, RowMeasure};

#[derive(Debug, Clone, PartialEq)]
pub struct ContentRow {
    pub core: RowCore,
}

impl ContentRow {
    pub fn new(constants: &ConstantProvider) -> Self {
        Self {
            core: RowCore::new(
                TypeMask::NONE,
                constants.min_row_width,
                constants.min_row_height,
            ),
        }
    }
}

impl RowMeasure for ContentRow {
    fn core(&self) -> &RowCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut RowCore {
        &mut self.core
    }

    fn measure(&mut self) {
        let mut height = Px::ZERO;
        let mut width = Px::ZERO;
        for elem in &self.core.elements {
            width += elem.width;
            height = height.max(elem.height);
        }
        self.core.width = self.core.min_width.max(width);
        self.core.height = self.core.min_height.max(height);
        self.core.width_with_connected_blocks = self.core.width;
        debug!(
            width = self.core.width.raw(),
            height = self.core.height.raw(),
            "measured content row"
        );
    }
}
