//! Aggregation operators.
//!
//! See <https://prometheus.io/docs/prometheus/latest/querying/operators/#aggregation-operators>.

use crate::ast::{Expr, Scalar};
use crate::error::{PromqlError, PromqlResult};
use crate::transpiler::ToPromql;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Aggregations that take a leading parameter.
pub const PARAMETERIZED_AGGREGATIONS: &[&str] = &["count_values", "quantile", "topk", "bottomk"];

/// `by` / `without`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    By,
    Without,
}

impl Grouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grouping::By => "by",
            Grouping::Without => "without",
        }
    }
}

impl std::fmt::Display for Grouping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grouping {
    type Err = PromqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "by" => Ok(Grouping::By),
            "without" => Ok(Grouping::Without),
            other => Err(PromqlError::keyword("aggregation clause", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationClause {
    pub keyword: Grouping,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl AggregationClause {
    pub fn new<I, S>(keyword: Grouping, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keyword,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for AggregationClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.keyword, self.labels.join(", "))
    }
}

/// Aggregation over a single operand: `sum by (job) (expr)`, `topk (5.0000, expr)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationOp {
    /// sum, min, max, avg, count, topk, quantile ...
    pub operator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand: Option<Box<Expr>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clause: Option<AggregationClause>,
    /// Only meaningful for count_values, quantile, topk and bottomk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<Scalar>,
}

impl AggregationOp {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            operand: None,
            clause: None,
            parameter: None,
        }
    }

    pub fn with_operand(mut self, operand: impl Into<Expr>) -> Self {
        self.operand = Some(Box::new(operand.into()));
        self
    }

    pub fn by<I, S>(self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_clause(Grouping::By, labels)
    }

    pub fn without<I, S>(self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_clause(Grouping::Without, labels)
    }

    pub fn with_clause<I, S>(mut self, keyword: Grouping, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clause = Some(AggregationClause::new(keyword, labels));
        self
    }

    pub fn with_parameter(mut self, parameter: impl Into<Scalar>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// Whether this operator expects a leading parameter.
    pub fn takes_parameter(&self) -> bool {
        PARAMETERIZED_AGGREGATIONS.contains(&self.operator.as_str())
    }

    pub fn head(&self) -> String {
        match &self.clause {
            Some(clause) => format!("{} {}", self.operator, clause),
            None => self.operator.clone(),
        }
    }

    pub fn children(&self) -> std::vec::IntoIter<&Expr> {
        self.operand.as_deref().into_iter().collect::<Vec<_>>().into_iter()
    }

    pub fn render(&self) -> PromqlResult<String> {
        self.to_promql()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Selector;

    #[test]
    fn test_clause_render() {
        let clause = AggregationClause::new(Grouping::Without, ["instance", "cpu"]);
        assert_eq!(clause.render(), "without (instance, cpu)");
    }

    #[test]
    fn test_plain_aggregation() {
        let agg = AggregationOp::new("avg").with_operand(Selector::new("up"));
        assert_eq!(agg.head(), "avg");
        assert_eq!(agg.render().unwrap(), "avg (up)");
    }

    #[test]
    fn test_by_clause() {
        let agg = AggregationOp::new("sum")
            .by(["job"])
            .with_operand(Selector::new("up"));
        assert_eq!(agg.head(), "sum by (job)");
        assert_eq!(agg.render().unwrap(), "sum by (job) (up)");
    }

    #[test]
    fn test_parameter_is_float_style() {
        let agg = AggregationOp::new("topk")
            .with_parameter(5_i64)
            .with_operand(Selector::new("http_requests_total"));
        assert_eq!(agg.render().unwrap(), "topk (5.0000, http_requests_total)");

        let agg = AggregationOp::new("quantile")
            .without(["instance"])
            .with_parameter(0.95)
            .with_operand(Selector::new("latency"));
        assert_eq!(
            agg.render().unwrap(),
            "quantile without (instance) (0.9500, latency)"
        );
    }

    #[test]
    fn test_takes_parameter() {
        assert!(AggregationOp::new("bottomk").takes_parameter());
        assert!(!AggregationOp::new("sum").takes_parameter());
    }

    #[test]
    fn test_missing_operand() {
        let agg = AggregationOp::new("sum").by(["job"]);
        assert_eq!(agg.children().count(), 0);
        assert!(matches!(
            agg.render(),
            Err(PromqlError::MissingOperand { slot: "operand", .. })
        ));
    }

    #[test]
    fn test_grouping_parse() {
        assert_eq!("without".parse::<Grouping>().unwrap(), Grouping::Without);
        assert!(matches!(
            "group".parse::<Grouping>(),
            Err(PromqlError::InvalidKeyword { kind: "aggregation clause", .. })
        ));
    }
}
