//! Plain-text reports for instruments and curves.
//!
//! Each reportable type lists its fields explicitly through [`Report::fields`];
//! the default [`Report::render`] lays them out as a titled block with an
//! input section followed by an output section.

use std::fmt;
use std::fmt::Write as _;

use crate::types::Date;

/// Width of the label column, including the `"  | "` prefix and trailing colon.
pub const LABEL_WIDTH: usize = 30;

/// Whether a field is a term of the instrument or a computed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Instrument term supplied by the caller.
    Input,
    /// Value computed by the instrument.
    Output,
}

/// Value of a report field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Floating point value, printed with full precision.
    Number(f64),
    /// Integral value such as a principal or a count.
    Integer(i64),
    /// Calendar date.
    Date(Date),
    /// Free text such as a convention name.
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(value) => write!(f, "{value}"),
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Date(date) => write!(f, "{date}"),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<Date> for FieldValue {
    fn from(date: Date) -> Self {
        FieldValue::Date(date)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

/// A labelled value in a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportField {
    /// Human readable label.
    pub label: String,
    /// The value.
    pub value: FieldValue,
    /// Input or output.
    pub kind: FieldKind,
}

impl ReportField {
    /// Creates an input field.
    #[must_use]
    pub fn input(label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind: FieldKind::Input,
        }
    }

    /// Creates an output field.
    #[must_use]
    pub fn output(label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind: FieldKind::Output,
        }
    }

    /// Formats the field as a single padded report line, without newline.
    #[must_use]
    pub fn line(&self) -> String {
        format_line(&self.label, &self.value)
    }
}

/// Formats `"  | label:"` padded to [`LABEL_WIDTH`] followed by the value.
#[must_use]
pub fn format_line(label: &str, value: &dyn fmt::Display) -> String {
    let prefix = format!("  | {label}:");
    format!("{prefix:<width$}{value}", width = LABEL_WIDTH)
}

/// Types that can describe themselves as an ordered list of fields.
pub trait Report {
    /// Title printed in the report header.
    fn title(&self) -> String;

    /// Ordered report fields.
    fn fields(&self) -> Vec<ReportField>;

    /// Renders the titled input/output block.
    fn render(&self) -> String {
        let fields = self.fields();
        let mut out = String::new();

        let _ = writeln!(out, "\n##### {} #####", self.title());
        for (heading, kind) in [("Input", FieldKind::Input), ("Output", FieldKind::Output)] {
            let _ = writeln!(out, "\n  --- {heading} ---");
            for field in fields.iter().filter(|field| field.kind == kind) {
                let _ = writeln!(out, "{}", field.line());
            }
        }
        out.push_str("  --------------\n");

        out
    }
}
