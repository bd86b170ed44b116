use std::fmt;

use serde::{Deserialize, Serialize};

/// How a mapping-version addresses columns. A version is wholly one or the
/// other; the header row only becomes column names under `Named`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Addressing {
    /// Row 0 is a header row; fields are looked up by header text.
    Named,
    /// Row 0 is a title row; fields are looked up by zero-based index.
    Positional,
}

/// Location of one raw column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnAddress {
    Name(String),
    Index(usize),
}

impl ColumnAddress {
    pub fn addressing(&self) -> Addressing {
        match self {
            ColumnAddress::Name(_) => Addressing::Named,
            ColumnAddress::Index(_) => Addressing::Positional,
        }
    }
}

impl fmt::Display for ColumnAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnAddress::Name(name) => write!(f, "'{name}'"),
            ColumnAddress::Index(index) => write!(f, "#{index}"),
        }
    }
}

/// A single raw field: where it lives, and what to use when it doesn't.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub address: ColumnAddress,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<String>,
}

impl FieldDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            address: ColumnAddress::Name(name.into()),
            default: None,
        }
    }

    pub fn indexed(index: usize) -> Self {
        Self {
            address: ColumnAddress::Index(index),
            default: None,
        }
    }

    /// Declare the fallback used when the column is absent.
    pub fn or_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

/// How one canonical metric is built from the raw row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSpec {
    Single {
        #[serde(flatten)]
        field: FieldDescriptor,
    },
    /// Two raw fields joined through a template holding `{a}` and `{b}`,
    /// e.g. systolic and diastolic pressure as `"{a} / {b}"`.
    Composite {
        first: FieldDescriptor,
        second: FieldDescriptor,
        template: String,
    },
}

impl FieldSpec {
    pub fn composite(first: FieldDescriptor, second: FieldDescriptor, template: &str) -> Self {
        FieldSpec::Composite {
            first,
            second,
            template: template.to_string(),
        }
    }

    /// Every raw descriptor this spec reads.
    pub fn descriptors(&self) -> Vec<&FieldDescriptor> {
        match self {
            FieldSpec::Single { field } => vec![field],
            FieldSpec::Composite { first, second, .. } => vec![first, second],
        }
    }
}

impl From<FieldDescriptor> for FieldSpec {
    fn from(field: FieldDescriptor) -> Self {
        FieldSpec::Single { field }
    }
}

/// Substitute `{a}` and `{b}` in one left-to-right pass. Substituted text is
/// never rescanned, so a cell value containing `{b}` stays literal.
pub fn join_template(template: &str, a: &str, b: &str) -> String {
    let mut out = String::with_capacity(template.len() + a.len() + b.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{a}") {
            out.push_str(a);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{b}") {
            out.push_str(b);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
