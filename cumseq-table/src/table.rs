use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Write};

use cumseq::{CumulativeSequence, Element, Summable};

use crate::TableOptions;

struct Column {
    index: String,
    value: String,
    sum: String,
}

impl Column {
    fn new<T: fmt::Display>(index: usize, e: &Element<T>) -> Self {
        Self {
            index: index.to_string(),
            value: e.value.to_string(),
            sum: e.cumulative_sum.to_string(),
        }
    }

    fn index(&self) -> &str {
        &self.index
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn sum(&self) -> &str {
        &self.sum
    }

    fn width(&self) -> usize {
        text_width(self.index())
            .max(text_width(self.value()))
            .max(text_width(self.sum()))
    }
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// A borrowed, displayable view of a [`CumulativeSequence`].
///
/// Every column shares one width: the widest cell or row label plus
/// [`TableOptions::padding`]. Lines are joined with `\n` and there is no trailing newline.
pub struct Table<'a, T> {
    seq: &'a CumulativeSequence<T>,
    options: TableOptions,
}

impl<'a, T> Table<'a, T> {
    /// Creates a view with [`TableOptions::default`].
    pub fn new(seq: &'a CumulativeSequence<T>) -> Self {
        Self::with_options(seq, TableOptions::default())
    }

    /// Creates a view with the given options.
    pub fn with_options(seq: &'a CumulativeSequence<T>, options: TableOptions) -> Self {
        Self { seq, options }
    }

    /// The options this view renders with.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// The sequence being rendered.
    pub fn sequence(&self) -> &'a CumulativeSequence<T> {
        self.seq
    }
}

impl<T: Summable + fmt::Display> Table<'_, T> {
    fn columns(&self) -> Vec<Column> {
        let offset = usize::from(self.options.show_sentinel);
        let mut columns = Vec::with_capacity(self.seq.len() + offset);
        if self.options.show_sentinel {
            columns.push(Column::new(0, &Element::<T>::default()));
        }
        columns.extend(
            self.seq
                .iter()
                .enumerate()
                .map(|(i, e)| Column::new(i + offset, e)),
        );
        columns
    }
}

impl<T: Summable + fmt::Display> fmt::Display for Table<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = &self.options;
        let columns = self.columns();

        let rows: [(&str, fn(&Column) -> &str); 3] = [
            (opts.index_label.as_str(), Column::index),
            (opts.value_label.as_str(), Column::value),
            (opts.sum_label.as_str(), Column::sum),
        ];
        let width = columns
            .iter()
            .map(Column::width)
            .chain(rows.iter().map(|(label, _)| text_width(label)))
            .max()
            .unwrap_or(0)
            + opts.padding;
        let rule = "-".repeat((columns.len() + 1) * (width + 3) + 1);

        f.write_str(&rule)?;
        for (label, cell) in rows {
            f.write_char('\n')?;
            write!(f, "| {label:^width$} ")?;
            for c in &columns {
                write!(f, "| {:^width$} ", cell(c))?;
            }
            f.write_str("|\n")?;
            f.write_str(&rule)?;
        }
        Ok(())
    }
}
