use crate::ui::width_util::WidthUtil;
use std::io::Write;

const COLUMN_GAP: &str = " | ";
const MIN_COLUMN_WIDTH: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    max_width: Option<usize>,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shrink the widest columns until a row fits in `width` characters.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_terminal_width(self) -> Self {
        let width = self.util.terminal_width();
        self.with_max_width(width)
    }

    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        out: &mut W,
    ) -> std::io::Result<()> {
        let widths = self.column_widths(headers, rows);
        let total = self.row_width(&widths).max(self.util.visible_width(title));
        let rule = "-".repeat(total);

        writeln!(out, "{rule}")?;
        writeln!(out, "{}", title.to_uppercase())?;
        writeln!(out, "{rule}")?;

        if rows.is_empty() {
            if let Some(msg) = empty_message {
                writeln!(out, "{msg}")?;
                return writeln!(out, "{rule}");
            }
        }

        let header_cells: Vec<&str> = headers.to_vec();
        writeln!(out, "{}", self.build_line(&header_cells, &widths))?;
        writeln!(out, "{rule}")?;
        for row in rows {
            writeln!(out, "{}", self.build_line(row, &widths))?;
        }
        writeln!(out, "{rule}")
    }

    fn column_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers
            .iter()
            .map(|h| self.util.visible_width(h))
            .collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(self.util.visible_width(cell.as_ref()));
            }
        }

        if let Some(max) = self.max_width {
            while self.row_width(&widths) > max {
                let Some((widest, &w)) = widths.iter().enumerate().max_by_key(|(_, w)| **w) else {
                    break;
                };
                if w <= MIN_COLUMN_WIDTH {
                    break;
                }
                widths[widest] = w - 1;
            }
        }
        widths
    }

    fn row_width(&self, widths: &[usize]) -> usize {
        if widths.is_empty() {
            0
        } else {
            widths.iter().sum::<usize>() + (widths.len() - 1) * COLUMN_GAP.len()
        }
    }

    fn build_line<T: AsRef<str>>(&self, cells: &[T], widths: &[usize]) -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, &w)| self.util.pad_visible(&self.util.truncate(cell.as_ref(), w), w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    }
}
