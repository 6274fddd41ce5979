//! Pairwise relationship report.

use polyrel::prelude::Polygon;

/// Relationship lines for every ordered pair of shapes, in file order.
///
/// A non-convex shape gets a single "not a convex polygon" line and is
/// skipped as the left operand. The surrounds / inside / intersects
/// flags are not mutually exclusive, so a pair may emit several lines;
/// "separate from" appears only when none of the three held.
pub fn relation_lines(shapes: &[Polygon]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, s) in shapes.iter().enumerate() {
        if !s.is_convex() {
            lines.push(format!("{} is not a convex polygon.", s.name()));
            continue;
        }
        for t in shapes
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, t)| t)
        {
            let surrounds = s.contains_polygon(t);
            let inside = s.is_inside(t);
            let crosses = s.intersects(t);
            if surrounds {
                lines.push(format!("{} surrounds {}.", s.name(), t.name()));
            }
            if inside {
                lines.push(format!("{} is inside {}.", s.name(), t.name()));
            }
            if crosses {
                lines.push(format!("{} intersects {}.", s.name(), t.name()));
            }
            if !surrounds && !inside && !crosses {
                lines.push(format!("{} is separate from {}.", s.name(), t.name()));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyrel::prelude::Point;

    fn named(pts: &[(f64, f64)], name: &str) -> Polygon {
        Polygon::new(pts.iter().map(|&(x, y)| Point::new(x, y)).collect(), name)
    }

    #[test]
    fn nested_squares_report() {
        let shapes = vec![
            named(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], "Square"),
            named(&[(3.0, 3.0), (6.0, 3.0), (6.0, 6.0), (3.0, 6.0)], "Lil Sq"),
        ];
        let lines = relation_lines(&shapes);
        assert_eq!(
            lines,
            vec![
                "Square surrounds Lil Sq.".to_string(),
                "Lil Sq is inside Square.".to_string(),
            ]
        );
    }

    #[test]
    fn separate_squares_report() {
        let shapes = vec![
            named(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)], "A"),
            named(&[(20.0, 20.0), (30.0, 20.0), (30.0, 30.0), (20.0, 30.0)], "B"),
        ];
        let lines = relation_lines(&shapes);
        assert_eq!(
            lines,
            vec![
                "A is separate from B.".to_string(),
                "B is separate from A.".to_string(),
            ]
        );
    }

    #[test]
    fn non_convex_shape_is_flagged_and_skipped() {
        let shapes = vec![
            named(&[(0.0, 0.0), (5.0, 0.0), (1.0, 1.0), (0.0, 5.0)], "Dart"),
            named(&[(20.0, 20.0), (30.0, 20.0), (30.0, 30.0), (20.0, 30.0)], "B"),
        ];
        let lines = relation_lines(&shapes);
        assert_eq!(lines[0], "Dart is not a convex polygon.");
        // Dart still participates as the right operand.
        assert_eq!(lines[1], "B is separate from Dart.");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn overlapping_squares_report_intersection_both_ways() {
        let shapes = vec![
            named(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)], "A"),
            named(&[(1.0, 1.0), (6.0, 1.0), (6.0, 6.0), (1.0, 6.0)], "B"),
        ];
        let lines = relation_lines(&shapes);
        assert_eq!(
            lines,
            vec![
                "A intersects B.".to_string(),
                "B intersects A.".to_string(),
            ]
        );
    }
}
