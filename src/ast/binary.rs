//! Binary operators and vector matching.
//!
//! See <https://prometheus.io/docs/prometheus/latest/querying/operators/#binary-operators>
//! and <https://prometheus.io/docs/prometheus/latest/querying/operators/#vector-matching>.

use crate::ast::Expr;
use crate::error::{PromqlError, PromqlResult};
use crate::transpiler::ToPromql;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// `on` / `ignoring`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKeyword {
    On,
    Ignoring,
}

impl MatchKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKeyword::On => "on",
            MatchKeyword::Ignoring => "ignoring",
        }
    }
}

impl std::fmt::Display for MatchKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchKeyword {
    type Err = PromqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(MatchKeyword::On),
            "ignoring" => Ok(MatchKeyword::Ignoring),
            other => Err(PromqlError::keyword("vector matcher", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupSide {
    Left,
    Right,
}

/// Many-to-one / one-to-many grouping: `group_left(labels)` or `group_right(labels)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupModifier {
    pub side: GroupSide,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl GroupModifier {
    pub fn left<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            side: GroupSide::Left,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn right<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            side: GroupSide::Right,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for GroupModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let group = match self.side {
            GroupSide::Left => "group_left",
            GroupSide::Right => "group_right",
        };
        if self.labels.is_empty() {
            return f.write_str(group);
        }
        write!(f, "{}({})", group, self.labels.join(", "))
    }
}

/// Label matching for a binary operation: `on(job) group_left(instance)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorMatcher {
    pub keyword: MatchKeyword,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupModifier>,
}

impl VectorMatcher {
    pub fn new<I, S>(keyword: MatchKeyword, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keyword,
            labels: labels.into_iter().map(Into::into).collect(),
            group: None,
        }
    }

    pub fn on<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MatchKeyword::On, labels)
    }

    pub fn ignoring<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MatchKeyword::Ignoring, labels)
    }

    /// Append matching labels.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Replaces any previous group modifier.
    pub fn with_group_left<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group = Some(GroupModifier::left(labels));
        self
    }

    /// Replaces any previous group modifier.
    pub fn with_group_right<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group = Some(GroupModifier::right(labels));
        self
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for VectorMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.keyword, self.labels.join(", "))?;
        if let Some(group) = &self.group {
            write!(f, " {}", group)?;
        }
        Ok(())
    }
}

/// Infix operator over two operands, e.g. `a / on(job) b`.
///
/// Operands are slots filled by [`BinaryOp::with_operands`]; rendering a
/// node with an empty slot fails with [`PromqlError::MissingOperand`].
/// No precedence handling is done: wrap operands in
/// [`Parenthesis`](crate::ast::Parenthesis) where needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOp {
    /// `+ - * / % ^ == != > < >= <= and or unless`
    pub operator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<Expr>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<Expr>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<VectorMatcher>,
}

impl BinaryOp {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            left: None,
            right: None,
            matcher: None,
        }
    }

    pub fn with_operands(mut self, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        self.left = Some(Box::new(left.into()));
        self.right = Some(Box::new(right.into()));
        self
    }

    pub fn with_matcher(mut self, matcher: VectorMatcher) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Operator token, including the vector matcher when present.
    pub fn head(&self) -> String {
        match &self.matcher {
            Some(matcher) => format!("{} {}", self.operator, matcher),
            None => self.operator.clone(),
        }
    }

    /// Set operands, left first.
    pub fn children(&self) -> std::vec::IntoIter<&Expr> {
        [self.left.as_deref(), self.right.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .into_iter()
    }

    pub fn render(&self) -> PromqlResult<String> {
        self.to_promql()
    }
}
