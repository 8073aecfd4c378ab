//! # `$filter` Builder
//!
//! Renders OData equality filters of the form
//! `<Field> eq '<value>' and <Field> eq '<value>'`.

use std::fmt;

/// Name of the OData filter query parameter.
pub const FILTER_PARAM: &str = "$filter";

/// A conjunction of `Field eq 'value'` clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    clauses: Vec<(String, String)>,
}

impl Filter {
    /// Starts a filter with a single equality clause.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().and_eq(field, value)
    }

    /// Appends another equality clause joined with `and`.
    pub fn and_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, value)) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            // OData string literals escape a quote by doubling it.
            write!(f, "{} eq '{}'", field, value.replace('\'', "''"))?;
        }
        Ok(())
    }
}
