//! Presentation boundary for truth tables

use std::fmt;
use std::io;

/// One column of a table, ready to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedColumn {
    /// Column header: a variable name or a rendered statement
    pub header: String,
    /// One cell per data row
    pub cells: Vec<String>,
}

/// Row predicate for the optional mark column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Checked when every statement column has the same value on the row
    Equivalent,
    /// Crossed when every premise is 1 and the conclusion is 0 on the row
    Counterexample,
}

/// Consumer of rendered tables
///
/// The query engine produces columns of text; a sink decides how they look.
/// `marks` holds one flag per row when a mark column was requested: `true`
/// means the row passes (a check mark), `false` that it fails (a cross).
pub trait TableSink {
    /// Present one table
    fn render(&mut self, columns: &[RenderedColumn], marks: Option<&[bool]>) -> io::Result<()>;
}

/// Sink writing aligned plain-text columns separated by `|`
///
/// ```
/// use prop_logic::table::{PlainText, RenderedColumn, TableSink};
///
/// let mut out = Vec::new();
/// let columns = vec![RenderedColumn {
///     header: "p".to_string(),
///     cells: vec!["0".to_string(), "1".to_string()],
/// }];
/// PlainText::new(&mut out).render(&columns, None).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "p\n-\n0\n1\n");
/// ```
pub struct PlainText<W: io::Write> {
    out: W,
}

impl<W: io::Write> PlainText<W> {
    /// Wrap a writer
    pub fn new(out: W) -> Self {
        PlainText { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> fmt::Debug for PlainText<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlainText").finish_non_exhaustive()
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, to: usize) -> String {
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(' ').take(to.saturating_sub(width(text))));
    padded
}

impl<W: io::Write> TableSink for PlainText<W> {
    fn render(&mut self, columns: &[RenderedColumn], marks: Option<&[bool]>) -> io::Result<()> {
        let widths: Vec<usize> = columns
            .iter()
            .map(|column| {
                column
                    .cells
                    .iter()
                    .map(|cell| width(cell))
                    .chain([width(&column.header)])
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let rows = columns.iter().map(|c| c.cells.len()).max().unwrap_or(0);

        let line = |cells: Vec<String>| cells.join(" | ").trim_end().to_string();

        let header: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(column, w)| pad(&column.header, *w))
            .collect();
        writeln!(self.out, "{}", line(header))?;

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(self.out, "{}", rule.join("-+-"))?;

        for row in 0..rows {
            let mut cells: Vec<String> = columns
                .iter()
                .zip(&widths)
                .map(|(column, w)| pad(column.cells.get(row).map_or("", |c| c.as_str()), *w))
                .collect();
            if let Some(marks) = marks {
                let mark = match marks.get(row) {
                    Some(true) => "✓",
                    Some(false) => "✗",
                    None => "",
                };
                cells.push(mark.to_string());
            }
            writeln!(self.out, "{}", line(cells))?;
        }
        Ok(())
    }
}
