use super::driver::Driver;
use super::value::Value;

/// One piece of a SQL fragment: literal text or a deferred bind.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Raw(String),
    Bind(Value),
}

/// An inspectable sequence of SQL text and bound values.
///
/// Mirrors the push/push_bind model of sqlx's `QueryBuilder`, except
/// the sequence stays a value until rendering, so the same fragment can
/// be rendered for inspection and replayed against a live connection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    parts: Vec<Part>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fragment holding a single piece of literal SQL.
    pub fn raw(sql: impl Into<String>) -> Self {
        let mut fragment = Self::new();
        fragment.push(sql.into());
        fragment
    }

    /// Append literal SQL text.
    pub fn push(&mut self, sql: impl AsRef<str>) -> &mut Self {
        self.parts.push(Part::Raw(sql.as_ref().to_string()));
        self
    }

    /// Append a deferred bind.
    pub fn push_bind(&mut self, value: impl Into<Value>) -> &mut Self {
        self.parts.push(Part::Bind(value.into()));
        self
    }

    /// Append every part of another fragment.
    pub fn append(&mut self, other: Fragment) -> &mut Self {
        self.parts.extend(other.parts);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Render into `out`, numbering placeholders after those already in
    /// `binds` and pushing the bound values in encounter order.
    pub(crate) fn render_into(&self, out: &mut String, binds: &mut Vec<Value>, driver: Driver) {
        for part in &self.parts {
            match part {
                Part::Raw(sql) => out.push_str(sql),
                Part::Bind(value) => {
                    binds.push(value.clone());
                    out.push_str(&driver.placeholder(binds.len()));
                }
            }
        }
    }
}
