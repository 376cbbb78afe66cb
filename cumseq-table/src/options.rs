use alloc::string::String;

/// Configuration for [`crate::Table`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableOptions {
    /// Label of the first row (logical positions).
    pub index_label: String,
    /// Label of the second row (raw values).
    pub value_label: String,
    /// Label of the third row (running totals).
    pub sum_label: String,
    /// Extra width added to every column on top of the widest cell or label.
    pub padding: usize,
    /// Renders the zero sentinel as a leading column and numbers elements from 1.
    pub show_sentinel: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            index_label: String::from("Index"),
            value_label: String::from("Value"),
            sum_label: String::from("Cumulative Sum"),
            padding: 2,
            show_sentinel: false,
        }
    }
}

impl TableOptions {
    /// Same as [`TableOptions::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all three row labels.
    pub fn with_labels(
        mut self,
        index_label: impl Into<String>,
        value_label: impl Into<String>,
        sum_label: impl Into<String>,
    ) -> Self {
        self.index_label = index_label.into();
        self.value_label = value_label.into();
        self.sum_label = sum_label.into();
        self
    }

    /// Sets the extra width added to every column.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Toggles the leading zero column; see [`TableOptions::show_sentinel`].
    pub fn with_show_sentinel(mut self, show_sentinel: bool) -> Self {
        self.show_sentinel = show_sentinel;
        self
    }
}
