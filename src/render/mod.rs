//! Literal-block rendering of datasets and training traces
//!
//! A [`LiteralTarget`] describes how one target language spells an
//! initializer list. The functions here render every entry through the
//! target and join them so that no separator follows the final entry.

pub mod cpp;
pub mod python;

pub use self::cpp::*;
pub use self::python::*;

use crate::core::{Dataset, Hyperplane, Point, Result, TrainingTrace};
use std::io::Write;

/// Separator placed between entries, never after the last one
pub const ENTRY_SEPARATOR: &str = ",\n";

/// Syntax of one target language's literal blocks
pub trait LiteralTarget {
    /// Short name of the target
    fn name(&self) -> &'static str;

    /// Lines printed before the point entries
    fn points_preamble(&self, count: usize) -> String;

    /// A single point entry, without separator
    fn point_entry(&self, point: &Point) -> String;

    /// Lines closing the point block
    fn points_closing(&self) -> String;

    /// Lines printed before the plane entries
    fn planes_preamble(&self, count: usize) -> String;

    /// A single hyperplane entry, without separator
    fn plane_entry(&self, plane: &Hyperplane) -> String;

    /// Lines closing the plane block
    fn planes_closing(&self) -> String;
}

/// Text for a coefficient: 8 decimals, explicit sign
pub fn format_coefficient(value: f64) -> String {
    format!("{value:+.8}")
}

/// Text for a coordinate at single precision: 8 decimals, explicit sign
pub fn format_coordinate(value: f64) -> String {
    format!("{:+.8}", value as f32)
}

/// Join entries with [`ENTRY_SEPARATOR`]
pub fn join_entries<I>(entries: I) -> String
where
    I: IntoIterator<Item = String>,
{
    entries
        .into_iter()
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

/// Only the entry lines of a dataset block
pub fn render_point_entries<T: LiteralTarget + ?Sized>(target: &T, dataset: &Dataset) -> String {
    join_entries(dataset.iter().map(|p| target.point_entry(p)))
}

/// Only the entry lines of a trace block
pub fn render_plane_entries<T: LiteralTarget + ?Sized>(
    target: &T,
    trace: &TrainingTrace,
) -> String {
    join_entries(trace.iter().map(|p| target.plane_entry(p)))
}

/// Full dataset block: preamble, entries, closing
pub fn render_dataset<T: LiteralTarget + ?Sized>(target: &T, dataset: &Dataset) -> String {
    block(
        target.points_preamble(dataset.len()),
        render_point_entries(target, dataset),
        target.points_closing(),
    )
}

/// Full trace block: preamble, entries, closing
pub fn render_trace<T: LiteralTarget + ?Sized>(target: &T, trace: &TrainingTrace) -> String {
    block(
        target.planes_preamble(trace.len()),
        render_plane_entries(target, trace),
        target.planes_closing(),
    )
}

fn block(preamble: String, entries: String, closing: String) -> String {
    let mut out = preamble;
    if !entries.is_empty() {
        out.push_str(&entries);
        out.push('\n');
    }
    out.push_str(&closing);
    out
}

/// Writes rendered blocks to a stream
pub struct LiteralWriter<W: Write> {
    writer: W,
    target: Box<dyn LiteralTarget>,
}

impl<W: Write> LiteralWriter<W> {
    /// Create a writer for the given target
    pub fn new(writer: W, target: Box<dyn LiteralTarget>) -> Self {
        Self { writer, target }
    }

    /// Write the dataset block
    pub fn write_dataset(&mut self, dataset: &Dataset) -> Result<()> {
        let text = render_dataset(self.target.as_ref(), dataset);
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write the trace block
    pub fn write_trace(&mut self, trace: &TrainingTrace) -> Result<()> {
        let text = render_trace(self.target.as_ref(), trace);
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Flush and hand back the underlying stream
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Target lookup by name (`cpp` or `python`)
pub fn target_by_name(name: &str) -> Option<Box<dyn LiteralTarget>> {
    match name {
        "cpp" | "c++" => Some(Box::new(CppTarget)),
        "python" | "py" => Some(Box::new(PythonTarget)),
        _ => None,
    }
}
