//! Equality-filtered SOQL statements.

use std::fmt;

/// Single `field = 'value'` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    field: String,
    value: String,
}

impl FieldFilter {
    /// Returns the filtered field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the unescaped comparison value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// `SELECT ... FROM ... WHERE a = 'x' AND ... LIMIT n` statement.
///
/// Filter values are kept unescaped so in-process gateways can match them
/// directly; [`fmt::Display`] renders the escaped SOQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoqlQuery {
    object: String,
    fields: Vec<String>,
    filters: Vec<FieldFilter>,
    limit: Option<u32>,
}

impl SoqlQuery {
    /// Starts a statement selecting `fields` from `object`.
    #[must_use]
    pub fn select<I, S>(object: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            object: object.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            filters: Vec::new(),
            limit: None,
        }
    }

    /// Adds an equality condition joined with `AND`.
    #[must_use]
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(FieldFilter {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Caps the number of returned rows.
    #[must_use]
    pub const fn limit(mut self, rows: u32) -> Self {
        self.limit = Some(rows);
        self
    }

    /// Returns the queried object type.
    #[must_use]
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Returns the selected fields.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the equality conditions.
    #[must_use]
    pub fn filters(&self) -> &[FieldFilter] {
        &self.filters
    }

    /// Returns the row cap, if any.
    #[must_use]
    pub const fn row_limit(&self) -> Option<u32> {
        self.limit
    }
}

impl fmt::Display for SoqlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {} FROM {}", self.fields.join(", "), self.object)?;
        for (index, filter) in self.filters.iter().enumerate() {
            let keyword = if index == 0 { "WHERE" } else { "AND" };
            write!(
                f,
                " {keyword} {} = {}",
                filter.field,
                quote_literal(&filter.value)
            )?;
        }
        if let Some(rows) = self.limit {
            write!(f, " LIMIT {rows}")?;
        }
        Ok(())
    }
}

/// Quotes a value as a SOQL string literal.
///
/// Wraps the value in single quotes and backslash-escapes quotes,
/// backslashes, and control whitespace.
#[must_use]
pub fn quote_literal(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        match ch {
            '\'' | '"' | '\\' => {
                quoted.push('\\');
                quoted.push(ch);
            }
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('\'');
    quoted
}
