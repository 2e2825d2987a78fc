//! Time series selectors and label matchers.
//!
//! See <https://prometheus.io/docs/prometheus/latest/querying/basics/#time-series-selectors>.

use crate::ast::Expr;
use crate::error::{PromqlError, PromqlResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Label comparison operator inside a selector's braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    /// Regex match (=~)
    #[serde(rename = "=~")]
    Re,
    /// Regex non-match (!~)
    #[serde(rename = "!~")]
    Nre,
}

impl MatchOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOp::Eq => "=",
            MatchOp::Ne => "!=",
            MatchOp::Re => "=~",
            MatchOp::Nre => "!~",
        }
    }
}

impl std::fmt::Display for MatchOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchOp {
    type Err = PromqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(MatchOp::Eq),
            "!=" => Ok(MatchOp::Ne),
            "=~" => Ok(MatchOp::Re),
            "!~" => Ok(MatchOp::Nre),
            other => Err(PromqlError::InvalidMatcher(other.to_string())),
        }
    }
}

/// A single `key<op>"value"` matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    pub matcher: MatchOp,
    pub value: String,
}

impl Label {
    pub fn new(key: impl Into<String>, matcher: MatchOp, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            matcher,
            value: value.into(),
        }
    }

    /// Build a label from a textual matcher such as `"=~"`.
    ///
    /// # Example
    /// ```
    /// use promql_builder::ast::Label;
    ///
    /// let label = Label::parse("job", "=~", "api.*").unwrap();
    /// assert_eq!(label.render(), r#"job=~"api.*""#);
    /// ```
    pub fn parse(
        key: impl Into<String>,
        matcher: &str,
        value: impl Into<String>,
    ) -> PromqlResult<Self> {
        Ok(Self::new(key, matcher.parse()?, value))
    }

    /// Render as `key<op>"value"`. The value is emitted verbatim.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\"{}\"", self.key, self.matcher, self.value)
    }
}

/// Metric name plus label matchers, with optional range and offset.
///
/// A selector is a leaf: it owns structured data but has no child nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selector {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    /// Range duration, e.g. `5m`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Offset modifier, e.g. `1h`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
}

impl Selector {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append label matchers, keeping insertion order.
    pub fn with_labels<I>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = Label>,
    {
        self.labels.extend(labels);
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.labels.is_empty()
    }

    /// Selector text. Fails when both name and labels are empty.
    pub fn head(&self) -> PromqlResult<String> {
        if self.is_empty() {
            tracing::debug!("refusing to render selector without name or labels");
            return Err(PromqlError::EmptySelector);
        }
        let mut s = self.name.clone();
        if !self.labels.is_empty() {
            let labels: Vec<String> = self.labels.iter().map(Label::render).collect();
            s.push('{');
            s.push_str(&labels.join(", "));
            s.push('}');
        }
        if let Some(duration) = self.duration.as_deref().filter(|d| !d.is_empty()) {
            s.push('[');
            s.push_str(duration);
            s.push(']');
        }
        if let Some(offset) = self.offset.as_deref().filter(|o| !o.is_empty()) {
            s.push_str(" offset ");
            s.push_str(offset);
        }
        Ok(s)
    }

    pub fn children(&self) -> std::vec::IntoIter<&Expr> {
        Vec::new().into_iter()
    }

    pub fn render(&self) -> PromqlResult<String> {
        self.head()
    }
}
