//! Python module target

use crate::core::{Hyperplane, Point};
use crate::render::{format_coefficient, format_coordinate, LiteralTarget};

/// Python lists of tuples: `POINTS = [(x, y, label), ...]`
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonTarget;

impl LiteralTarget for PythonTarget {
    fn name(&self) -> &'static str {
        "python"
    }

    fn points_preamble(&self, count: usize) -> String {
        format!("# Generated dataset points as (x, y, label)\n# Total points: {count}\nPOINTS = [\n")
    }

    fn point_entry(&self, point: &Point) -> String {
        format!(
            "    ({}, {}, {})",
            format_coordinate(point.x),
            format_coordinate(point.y),
            point.label.as_i32()
        )
    }

    fn points_closing(&self) -> String {
        "]\n".to_string()
    }

    fn planes_preamble(&self, count: usize) -> String {
        format!(
            "\n# Hyperplanes as (w1, w2, b) for w1*x + w2*y + b = 0\n# Total epochs (equations): {count}\nPLANES = [\n"
        )
    }

    fn plane_entry(&self, plane: &Hyperplane) -> String {
        format!(
            "    ({}, {}, {})",
            format_coefficient(plane.w1),
            format_coefficient(plane.w2),
            format_coefficient(plane.b)
        )
    }

    fn planes_closing(&self) -> String {
        "]\n".to_string()
    }
}
