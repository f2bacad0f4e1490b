//! Column layout of the plain-text release table

use crate::models::ReleaseOutput;

/// Separator placed between rendered columns
pub const SEPARATOR: &str = " ";

/// Marker appended to values cut short to fit their column
pub const ELLIPSIS: char = '…';

/// Raw value a column reads from a release before width fitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

impl FieldValue<'_> {
    /// Flags show as "True" or a single blank, never "False"
    fn as_str(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Flag(true) => "True",
            FieldValue::Flag(false) => " ",
        }
    }
}

/// A table column: header label, fixed width and value accessor
#[derive(Clone, Copy)]
pub struct Field {
    pub label: &'static str,
    pub width: usize,
    pub value: for<'a> fn(&'a ReleaseOutput) -> FieldValue<'a>,
}

impl Field {
    /// Renders this column for `release`, exactly `width` characters long
    pub fn render(&self, release: &ReleaseOutput) -> String {
        fit_to_width((self.value)(release).as_str(), self.width)
    }

    /// Header label padded to the column width. Labels are never truncated.
    pub fn header(&self) -> String {
        format!("{:<width$}", self.label, width = self.width)
    }
}

/// Column order shared by the header and every row
pub static FIELD_ORDER: &[Field] = &[
    Field { label: "ReleaseName", width: 25, value: release_name },
    Field { label: "ChartName", width: 25, value: chart_name },
    Field { label: "Namespace", width: 20, value: namespace },
    Field { label: "Latest Version", width: 15, value: latest_version },
    Field { label: "Installed Version", width: 18, value: installed_version },
    Field { label: "IsOld", width: 8, value: is_old },
    Field { label: "Deprecated", width: 10, value: deprecated },
];

fn release_name(r: &ReleaseOutput) -> FieldValue<'_> {
    FieldValue::Text(&r.release_name)
}

fn chart_name(r: &ReleaseOutput) -> FieldValue<'_> {
    FieldValue::Text(&r.chart_name)
}

fn namespace(r: &ReleaseOutput) -> FieldValue<'_> {
    FieldValue::Text(&r.namespace)
}

fn latest_version(r: &ReleaseOutput) -> FieldValue<'_> {
    FieldValue::Text(&r.latest.version)
}

fn installed_version(r: &ReleaseOutput) -> FieldValue<'_> {
    FieldValue::Text(&r.installed.version)
}

fn is_old(r: &ReleaseOutput) -> FieldValue<'_> {
    FieldValue::Flag(r.is_old)
}

fn deprecated(r: &ReleaseOutput) -> FieldValue<'_> {
    FieldValue::Flag(r.deprecated)
}

/// Pads `raw` with trailing spaces or cuts it to `width - 1` chars plus an ellipsis.
///
/// Lengths are counted in chars so multi-byte text is never split.
pub fn fit_to_width(raw: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if raw.chars().count() > width {
        let mut cut: String = raw.chars().take(width - 1).collect();
        cut.push(ELLIPSIS);
        cut
    } else {
        format!("{:<width$}", raw)
    }
}
