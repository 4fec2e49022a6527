//! Bitmask tags classifying rows and the elements inside them.
//!
//! Every measurable carries a [`TypeMask`]; predicates over the mask are
//! pure functions of its bits, so adding a new tag never changes how
//! existing tags classify. A next-statement connector carries both the
//! `CONNECTION` and `NEXT_CONNECTION` bits and therefore satisfies both
//! `is_connection` and `is_next_connection`.

use std::collections::HashMap;
use std::ops::{BitOr, BitOrAssign};

use thiserror::Error;

/// A combinable classification tag for rows and elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct TypeMask(pub u32);

impl TypeMask {
    pub const NONE: TypeMask = TypeMask(0);
    pub const FIELD: TypeMask = TypeMask(1 << 0);
    pub const HAT: TypeMask = TypeMask(1 << 1);
    pub const ICON: TypeMask = TypeMask(1 << 2);
    pub const SPACER: TypeMask = TypeMask(1 << 3);
    pub const IN_ROW_SPACER: TypeMask = TypeMask(1 << 4);
    pub const EXTERNAL_VALUE_INPUT: TypeMask = TypeMask(1 << 5);
    pub const INPUT: TypeMask = TypeMask(1 << 6);
    pub const INLINE_INPUT: TypeMask = TypeMask(1 << 7);
    pub const STATEMENT_INPUT: TypeMask = TypeMask(1 << 8);
    pub const CONNECTION: TypeMask = TypeMask(1 << 9);
    pub const PREVIOUS_CONNECTION: TypeMask = TypeMask(1 << 10);
    pub const NEXT_CONNECTION: TypeMask = TypeMask(1 << 11);
    pub const OUTPUT_CONNECTION: TypeMask = TypeMask(1 << 12);
    pub const CORNER: TypeMask = TypeMask(1 << 13);
    pub const LEFT_SQUARE_CORNER: TypeMask = TypeMask(1 << 14);
    pub const LEFT_ROUND_CORNER: TypeMask = TypeMask(1 << 15);
    pub const RIGHT_SQUARE_CORNER: TypeMask = TypeMask(1 << 16);
    pub const RIGHT_ROUND_CORNER: TypeMask = TypeMask(1 << 17);
    pub const ROW: TypeMask = TypeMask(1 << 18);
    pub const TOP_ROW: TypeMask = TypeMask(1 << 19);
    pub const BOTTOM_ROW: TypeMask = TypeMask(1 << 20);
    pub const INPUT_ROW: TypeMask = TypeMask(1 << 21);

    /// First bit available for caller-defined tags.
    const FIRST_CUSTOM_BIT: u32 = 22;

    /// Whether every bit of `other` is set in `self`.
    #[inline]
    pub fn contains(self, other: TypeMask) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn is_field(self) -> bool {
        self.contains(Self::FIELD)
    }

    #[inline]
    pub fn is_hat(self) -> bool {
        self.contains(Self::HAT)
    }

    #[inline]
    pub fn is_icon(self) -> bool {
        self.contains(Self::ICON)
    }

    /// Whether this is any kind of spacer (between rows or inside one).
    #[inline]
    pub fn is_spacer(self) -> bool {
        self.contains(Self::SPACER)
    }

    #[inline]
    pub fn is_in_row_spacer(self) -> bool {
        self.contains(Self::SPACER | Self::IN_ROW_SPACER)
    }

    #[inline]
    pub fn is_input(self) -> bool {
        self.contains(Self::INPUT)
    }

    /// Whether this is any kind of connection point.
    #[inline]
    pub fn is_connection(self) -> bool {
        self.contains(Self::CONNECTION)
    }

    /// Whether this is the socket where a following statement attaches.
    #[inline]
    pub fn is_next_connection(self) -> bool {
        self.contains(Self::NEXT_CONNECTION)
    }

    #[inline]
    pub fn is_previous_connection(self) -> bool {
        self.contains(Self::PREVIOUS_CONNECTION)
    }

    #[inline]
    pub fn is_corner(self) -> bool {
        self.contains(Self::CORNER)
    }

    #[inline]
    pub fn is_left_square_corner(self) -> bool {
        self.contains(Self::CORNER | Self::LEFT_SQUARE_CORNER)
    }

    #[inline]
    pub fn is_left_round_corner(self) -> bool {
        self.contains(Self::CORNER | Self::LEFT_ROUND_CORNER)
    }

    #[inline]
    pub fn is_row(self) -> bool {
        self.contains(Self::ROW)
    }

    #[inline]
    pub fn is_top_row(self) -> bool {
        self.contains(Self::ROW | Self::TOP_ROW)
    }

    #[inline]
    pub fn is_bottom_row(self) -> bool {
        self.contains(Self::ROW | Self::BOTTOM_ROW)
    }

    #[inline]
    pub fn is_input_row(self) -> bool {
        self.contains(Self::ROW | Self::INPUT_ROW)
    }
}

impl BitOr for TypeMask {
    type Output = TypeMask;
    fn bitor(self, rhs: TypeMask) -> TypeMask {
        TypeMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for TypeMask {
    fn bitor_assign(&mut self, rhs: TypeMask) {
        self.0 |= rhs.0;
    }
}

/// Errors from caller-defined tag allocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// All custom bits of the 32-bit mask are in use
    #[error("type registry exhausted: no bits left for {name}")]
    Exhausted { name: String },
}

/// Hands out fresh mask bits for renderer-specific element kinds.
///
/// Custom tags live above the built-in bit range, so registering one can
/// never change what the built-in predicates return. Registration is
/// idempotent per name.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    allocated: HashMap<String, TypeMask>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or allocate the tag bit for a caller-defined kind name.
    pub fn custom(&mut self, name: &str) -> Result<TypeMask, RegistryError> {
        if let Some(&mask) = self.allocated.get(name) {
            return Ok(mask);
        }
        let bit = TypeMask::FIRST_CUSTOM_BIT + self.allocated.len() as u32;
        if bit >= u32::BITS {
            return Err(RegistryError::Exhausted {
                name: name.to_string(),
            });
        }
        let mask = TypeMask(1 << bit);
        self.allocated.insert(name.to_string(), mask);
        Ok(mask)
    }

    /// Look up a previously registered tag without allocating.
    pub fn get(&self, name: &str) -> Option<TypeMask> {
        self.allocated.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_connection_is_also_connection() {
        let tag = TypeMask::CONNECTION | TypeMask::NEXT_CONNECTION;
        assert!(tag.is_connection());
        assert!(tag.is_next_connection());
        assert!(!tag.is_previous_connection());
        assert!(!tag.is_spacer());
    }

    #[test]
    fn spacer_predicates() {
        let between = TypeMask::SPACER;
        let in_row = TypeMask::SPACER | TypeMask::IN_ROW_SPACER;
        assert!(between.is_spacer());
        assert!(!between.is_in_row_spacer());
        assert!(in_row.is_spacer());
        assert!(in_row.is_in_row_spacer());
    }

    #[test]
    fn corner_predicates_require_corner_bit() {
        // LEFT_SQUARE_CORNER alone is not a corner classification
        let bare = TypeMask::LEFT_SQUARE_CORNER;
        assert!(!bare.is_left_square_corner());

        let corner = TypeMask::CORNER | TypeMask::LEFT_SQUARE_CORNER;
        assert!(corner.is_corner());
        assert!(corner.is_left_square_corner());
        assert!(!corner.is_left_round_corner());
    }

    #[test]
    fn row_predicates() {
        let bottom = TypeMask::ROW | TypeMask::BOTTOM_ROW;
        assert!(bottom.is_row());
        assert!(bottom.is_bottom_row());
        assert!(!bottom.is_top_row());
        assert!(!bottom.is_input_row());
    }

    #[test]
    fn predicates_are_order_independent() {
        let tag = TypeMask::FIELD | TypeMask::ICON;
        // Same answers regardless of query order
        let a = (tag.is_field(), tag.is_icon());
        let b = (tag.is_icon(), tag.is_field());
        assert_eq!(a.0, b.1);
        assert_eq!(a.1, b.0);
    }

    #[test]
    fn custom_tags_do_not_collide_with_builtins() {
        let mut reg = TypeRegistry::new();
        let jagged = reg.custom("jagged_edge").unwrap();
        let builtin_range = (1u32 << TypeMask::FIRST_CUSTOM_BIT) - 1;
        assert_eq!(jagged.0 & builtin_range, 0);
        assert!(!jagged.is_spacer());
        assert!(!jagged.is_connection());
    }

    #[test]
    fn custom_tags_are_idempotent_and_distinct() {
        let mut reg = TypeRegistry::new();
        let a = reg.custom("a").unwrap();
        let b = reg.custom("b").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, reg.custom("a").unwrap());
        assert_eq!(reg.get("b"), Some(b));
        assert_eq!(reg.get("c"), None);
    }

    #[test]
    fn registry_exhaustion_reports_error() {
        let mut reg = TypeRegistry::new();
        let available = u32::BITS - TypeMask::FIRST_CUSTOM_BIT;
        for i in 0..available {
            assert!(reg.custom(&format!("kind{i}")).is_ok());
        }
        assert!(matches!(
            reg.custom("one_too_many"),
            Err(RegistryError::Exhausted { .. })
        ));
    }
}
