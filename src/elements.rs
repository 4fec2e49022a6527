//! Measurable elements that make up a row.
//!
//! An element is one visual sub-unit of a row: an icon, a field, a
//! connection socket, a corner, or a spacer. Upstream layout builds the
//! elements; measurement only reads their geometry.
//!
//! Precondition: element widths and heights are non-negative. A negative
//! size is a defect in the upstream layout code, not a condition this
//! crate checks for or recovers from.

use crate::registry::TypeMask;
use crate::types::{Px, Size};

/// Which side of the row a corner element sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CornerSide {
    Left,
    Right,
}

/// One visual sub-unit within a row.
///
/// Geometry is immutable during measurement; a row owns its elements for
/// the duration of one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Element {
    pub tag: TypeMask,
    pub width: Px,
    pub height: Px,
}

impl Element {
    /// An editable or static field (text, dropdown, image, ...).
    pub fn field(width: Px, height: Px) -> Self {
        Element {
            tag: TypeMask::FIELD,
            width,
            height,
        }
    }

    /// A block icon (mutator, comment, warning, ...).
    pub fn icon(width: Px, height: Px) -> Self {
        Element {
            tag: TypeMask::ICON,
            width,
            height,
        }
    }

    /// The hat drawn on top of event-style blocks.
    pub fn hat(width: Px, height: Px) -> Self {
        Element {
            tag: TypeMask::HAT,
            width,
            height,
        }
    }

    /// Horizontal padding inside a row. Contributes width only.
    pub fn in_row_spacer(width: Px) -> Self {
        Element {
            tag: TypeMask::SPACER | TypeMask::IN_ROW_SPACER,
            width,
            height: Px::ZERO,
        }
    }

    /// The socket where a following statement block attaches. Its whole
    /// visual footprint lies below the baseline.
    pub fn next_connection(width: Px, height: Px) -> Self {
        Element {
            tag: TypeMask::CONNECTION | TypeMask::NEXT_CONNECTION,
            width,
            height,
        }
    }

    /// The socket where this block attaches under a preceding statement.
    pub fn previous_connection(width: Px, height: Px) -> Self {
        Element {
            tag: TypeMask::CONNECTION | TypeMask::PREVIOUS_CONNECTION,
            width,
            height,
        }
    }

    /// A rounded row corner.
    pub fn round_corner(side: CornerSide, width: Px, height: Px) -> Self {
        let side_bit = match side {
            CornerSide::Left => TypeMask::LEFT_ROUND_CORNER,
            CornerSide::Right => TypeMask::RIGHT_ROUND_CORNER,
        };
        Element {
            tag: TypeMask::CORNER | side_bit,
            width,
            height,
        }
    }

    /// A square row corner.
    pub fn square_corner(side: CornerSide, width: Px, height: Px) -> Self {
        let side_bit = match side {
            CornerSide::Left => TypeMask::LEFT_SQUARE_CORNER,
            CornerSide::Right => TypeMask::RIGHT_SQUARE_CORNER,
        };
        Element {
            tag: TypeMask::CORNER | side_bit,
            width,
            height,
        }
    }

    /// An element with a caller-defined tag (see `TypeRegistry`).
    pub fn with_tag(tag: TypeMask, width: Px, height: Px) -> Self {
        Element { tag, width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::px;

    #[test]
    fn spacer_has_zero_height() {
        let spacer = Element::in_row_spacer(px(8.0));
        assert!(spacer.tag.is_spacer());
        assert!(spacer.tag.is_in_row_spacer());
        assert_eq!(spacer.height, Px::ZERO);
        assert_eq!(spacer.width, px(8.0));
    }

    #[test]
    fn next_connection_classifies_as_connection() {
        let conn = Element::next_connection(px(10.0), px(8.0));
        assert!(conn.tag.is_connection());
        assert!(conn.tag.is_next_connection());
        assert!(!conn.tag.is_previous_connection());
    }

    #[test]
    fn corners_carry_side_bits() {
        let left = Element::round_corner(CornerSide::Left, px(4.0), px(4.0));
        let right = Element::square_corner(CornerSide::Right, px(0.0), px(0.0));
        assert!(left.tag.is_left_round_corner());
        assert!(!left.tag.is_left_square_corner());
        assert!(right.tag.is_corner());
        assert!(right.tag.contains(TypeMask::RIGHT_SQUARE_CORNER));
    }

    #[test]
    fn field_is_not_a_spacer_or_connection() {
        let field = Element::field(px(20.0), px(15.0));
        assert!(field.tag.is_field());
        assert!(!field.tag.is_spacer());
        assert!(!field.tag.is_connection());
    }
}
