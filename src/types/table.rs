use crate::types::job::JobRecord;
use std::fmt;

/// Aligned plain-text rendering of a record set, one indexed row per job.
pub struct JobTable<'a>(pub &'a [JobRecord]);

impl fmt::Display for JobTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No job listings found.");
        }

        let index_width = (self.0.len() - 1).to_string().len();
        let mut widths = JobRecord::COLUMNS.map(|c| c.chars().count());
        for record in self.0 {
            for (w, cell) in widths.iter_mut().zip(record.cells()) {
                *w = (*w).max(cell.chars().count());
            }
        }

        write!(f, "{:index_width$}", "")?;
        for (col, w) in JobRecord::COLUMNS.iter().zip(widths) {
            write!(f, "  {col:<w$}")?;
        }
        writeln!(f)?;

        for (i, record) in self.0.iter().enumerate() {
            write!(f, "{i:<index_width$}")?;
            for (cell, w) in record.cells().iter().zip(widths) {
                write!(f, "  {cell:<w$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
