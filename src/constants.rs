//! Default sizes for row measurement (all in device-independent pixels).

use crate::types::Px;

pub const MIN_ROW_WIDTH: Px = Px(0.0);
pub const MIN_ROW_HEIGHT: Px = Px(24.0);
pub const MIN_BOTTOM_ROW_HEIGHT: Px = Px(4.0);
pub const MIN_BOTTOM_ROW_HEIGHT_WITH_NEXT: Px = Px(8.0);
pub const CORNER_RADIUS: Px = Px(8.0);
pub const NOTCH_WIDTH: Px = Px(24.0);
pub const NOTCH_HEIGHT: Px = Px(4.0);
pub const SMALL_PADDING: Px = Px(4.0);
pub const MEDIUM_PADDING: Px = Px(8.0);

/// Rendering constants handed to each row at construction.
///
/// The measurement core only consumes the minimum-size floors; the rest
/// exists for the upstream layout pipeline that builds element sequences.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantProvider {
    pub min_row_width: Px,
    pub min_row_height: Px,
    /// Floor for a bottom row without a next connection.
    pub min_bottom_row_height: Px,
    /// Floor for a bottom row that carries a next connection.
    pub min_bottom_row_height_with_next: Px,
    pub corner_radius: Px,
    pub notch_width: Px,
    pub notch_height: Px,
    pub small_padding: Px,
    pub medium_padding: Px,
}

impl Default for ConstantProvider {
    fn default() -> Self {
        Self {
            min_row_width: MIN_ROW_WIDTH,
            min_row_height: MIN_ROW_HEIGHT,
            min_bottom_row_height: MIN_BOTTOM_ROW_HEIGHT,
            min_bottom_row_height_with_next: MIN_BOTTOM_ROW_HEIGHT_WITH_NEXT,
            corner_radius: CORNER_RADIUS,
            notch_width: NOTCH_WIDTH,
            notch_height: NOTCH_HEIGHT,
            small_padding: SMALL_PADDING,
            medium_padding: MEDIUM_PADDING,
        }
    }
}

impl ConstantProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_non_negative() {
        let c = ConstantProvider::new();
        for v in [
            c.min_row_width,
            c.min_row_height,
            c.min_bottom_row_height,
            c.min_bottom_row_height_with_next,
            c.corner_radius,
            c.notch_width,
            c.notch_height,
            c.small_padding,
            c.medium_padding,
        ] {
            assert!(v.raw() >= 0.0);
        }
    }
}
