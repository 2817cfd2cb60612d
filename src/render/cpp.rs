//! C++ header target
//!
//! Emits `std::vector<Point> Points` and `std::vector<Equation> Planes`
//! initializers that a viewer can `#include` directly.

use crate::core::{Hyperplane, Point};
use crate::render::{format_coefficient, format_coordinate, LiteralTarget};

/// C++ `std::vector` initializer lists with `f`-suffixed float literals
#[derive(Debug, Clone, Copy, Default)]
pub struct CppTarget;

impl LiteralTarget for CppTarget {
    fn name(&self) -> &'static str {
        "cpp"
    }

    fn points_preamble(&self, count: usize) -> String {
        format!(
            "// --- Generated Dataset Points (C++ Header Format) ---\n\
             \n\
             #include <vector>\n\
             \n\
             typedef struct {{\n    float x, y;\n    int Catag;\n}} Point;\n\
             \n\
             // Total points: {count}\n\
             std::vector<Point> Points = {{\n"
        )
    }

    fn point_entry(&self, point: &Point) -> String {
        format!(
            "  {{{}f, {}f, {}}}",
            format_coordinate(point.x),
            format_coordinate(point.y),
            point.label.as_i32()
        )
    }

    fn points_closing(&self) -> String {
        "};\n// --- End of Dataset ---\n".to_string()
    }

    fn planes_preamble(&self, count: usize) -> String {
        format!(
            "\n// Hyperplane Equation Format: w1*x + w2*y + b = 0\n\
             // Note: This block assumes the 'Point' struct and 'std::vector' are already defined.\n\
             \n\
             typedef struct {{\n    float w1, w2, b;\n}} Equation;\n\
             \n\
             // Total epochs (equations): {count}\n\
             std::vector<Equation> Planes = {{\n"
        )
    }

    fn plane_entry(&self, plane: &Hyperplane) -> String {
        format!(
            "  {{{}f, {}f, {}f}}",
            format_coefficient(plane.w1),
            format_coefficient(plane.w2),
            format_coefficient(plane.b)
        )
    }

    fn planes_closing(&self) -> String {
        "};\n".to_string()
    }
}
