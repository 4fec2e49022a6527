//! Element placement inside a measured row.
//!
//! Downstream positioning consumes these points to place elements and
//! connections in pixel space (Y grows downward, matching SVG).

use glam::{DVec2, dvec2};

use super::{BottomRow, RowCore};

/// Top-left origin of each element, walking the row left to right from
/// `row_origin`.
pub fn element_origins(core: &RowCore, row_origin: DVec2) -> Vec<DVec2> {
    let mut origins = Vec::with_capacity(core.elements.len());
    let mut cursor = row_origin.x;
    for elem in &core.elements {
        origins.push(dvec2(cursor, row_origin.y));
        cursor += elem.width.raw();
    }
    origins
}

impl BottomRow {
    /// Where the next-statement connection attaches, in pixel space:
    /// the connector's horizontal centre on the row's baseline.
    ///
    /// `None` when the row has no next connection.
    pub fn connection_point(&self, row_origin: DVec2) -> Option<DVec2> {
        let idx = self.connection_index()?;
        let conn = &self.core.elements[idx];
        let before: f64 = self.core.elements[..idx]
            .iter()
            .map(|e| e.width.raw())
            .sum();
        Some(dvec2(
            row_origin.x + before + conn.width.raw() / 2.0,
            row_origin.y + self.baseline.raw(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ConstantProvider;
    use crate::elements::Element;
    use crate::measure::RowMeasure;
    use crate::types::px;
    use float_cmp::assert_approx_eq;

    #[test]
    fn origins_advance_by_element_width() {
        let mut row = BottomRow::new(&ConstantProvider::new());
        row.push(Element::in_row_spacer(px(5.0)));
        row.push(Element::field(px(20.0), px(15.0)));
        row.push(Element::next_connection(px(10.0), px(8.0)));
        row.measure();

        let origins = element_origins(&row.core, dvec2(100.0, 50.0));
        assert_eq!(origins.len(), 3);
        assert_approx_eq!(f64, origins[0].x, 100.0);
        assert_approx_eq!(f64, origins[1].x, 105.0);
        assert_approx_eq!(f64, origins[2].x, 125.0);
        for o in origins {
            assert_approx_eq!(f64, o.y, 50.0);
        }
    }

    #[test]
    fn connection_point_centres_on_the_connector() {
        let mut row = BottomRow::new(&ConstantProvider::new());
        row.push(Element::in_row_spacer(px(5.0)));
        row.push(Element::next_connection(px(10.0), px(8.0)));
        row.measure();
        row.baseline = px(30.0);

        let point = row.connection_point(dvec2(0.0, 0.0)).unwrap();
        assert_approx_eq!(f64, point.x, 10.0);
        assert_approx_eq!(f64, point.y, 30.0);
    }

    #[test]
    fn connection_point_absent_without_connector() {
        let mut row = BottomRow::new(&ConstantProvider::new());
        row.push(Element::field(px(20.0), px(15.0)));
        row.measure();
        assert!(row.connection_point(DVec2::ZERO).is_none());
    }
}
