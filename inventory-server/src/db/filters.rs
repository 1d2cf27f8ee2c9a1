//! Dynamic WHERE-clause construction from optional filters
//!
//! Every predicate carries its value as a bind parameter; only column names
//! and operators, which are `&'static str`, ever reach the query text.

use sqlx::{Postgres, QueryBuilder};

/// A value bound to a positional parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Int(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Contains,
    Equals,
    AtLeast,
    AtMost,
}

impl Op {
    fn sql(self) -> &'static str {
        match self {
            Self::Contains => " ILIKE ",
            Self::Equals => " = ",
            Self::AtLeast => " >= ",
            Self::AtMost => " <= ",
        }
    }
}

#[derive(Debug, Clone)]
struct Predicate {
    column: &'static str,
    op: Op,
    value: BindValue,
}

/// Ordered set of `AND`-joined predicates
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    predicates: Vec<Predicate>,
}

/// Returns the trimmed value if it has any content.
fn present(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive partial match on `column`.
    pub fn contains(mut self, column: &'static str, value: &str) -> Self {
        if let Some(v) = present(value) {
            self.push(column, Op::Contains, BindValue::Text(format!("%{v}%")));
        }
        self
    }

    /// Exact match on `column`.
    pub fn equals(mut self, column: &'static str, value: &str) -> Self {
        if let Some(v) = present(value) {
            self.push(column, Op::Equals, BindValue::Text(v.to_owned()));
        }
        self
    }

    /// Lower bound (inclusive) on an integer `column`.
    pub fn at_least(mut self, column: &'static str, value: Option<i32>) -> Self {
        if let Some(v) = value {
            self.push(column, Op::AtLeast, BindValue::Int(v));
        }
        self
    }

    /// Upper bound (inclusive) on an integer `column`.
    pub fn at_most(mut self, column: &'static str, value: Option<i32>) -> Self {
        if let Some(v) = value {
            self.push(column, Op::AtMost, BindValue::Int(v));
        }
        self
    }

    fn push(&mut self, column: &'static str, op: Op, value: BindValue) {
        self.predicates.push(Predicate { column, op, value });
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Bound values in parameter order (`$1`, `$2`, ...).
    pub fn bind_values(&self) -> impl Iterator<Item = &BindValue> {
        self.predicates.iter().map(|p| &p.value)
    }

    /// Build `<base> [WHERE ...] ORDER BY <order_by>`.
    pub fn build(&self, base: &str, order_by: &str) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(base);

        for (i, predicate) in self.predicates.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            qb.push(predicate.column).push(predicate.op.sql());
            match &predicate.value {
                BindValue::Text(s) => qb.push_bind(s.clone()),
                BindValue::Int(n) => qb.push_bind(*n),
            };
        }

        qb.push(" ORDER BY ").push(order_by);
        tracing::debug!(sql = qb.sql(), params = self.len(), "Built filtered query");
        qb
    }
}
