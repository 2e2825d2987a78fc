use crate::ast::{AggregationOp, BinaryOp, Func, Scalar, Selector};
use crate::error::PromqlResult;
use crate::transpiler::ToPromql;
use serde::{Deserialize, Serialize};

/// A node of the expression tree.
///
/// Every variant answers the same three questions: its own operator text
/// ([`Expr::head`]), its direct children ([`Expr::children`]) and the full
/// rendered query ([`Expr::render`]). Nodes are plain values; builders
/// consume and return them, so a tree never aliases or mutates a child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// `metric{label="v"}[5m] offset 1h`
    Selector(Selector),
    /// `name(arg, ...)`
    Func(Func),
    /// `left op right`
    Binary(BinaryOp),
    /// `op by (labels) (operand)`
    Aggregation(AggregationOp),
    /// `(inner)`
    Paren(Parenthesis),
    Scalar(Scalar),
    /// Pre-rendered text, emitted verbatim
    Constant(String),
}

impl Expr {
    /// Escape hatch for text the builder has no node for.
    pub fn constant(text: impl Into<String>) -> Self {
        Expr::Constant(text.into())
    }

    /// This node's own text, without its children.
    pub fn head(&self) -> PromqlResult<String> {
        match self {
            Expr::Selector(s) => s.head(),
            Expr::Func(f) => Ok(f.head()),
            Expr::Binary(b) => Ok(b.head()),
            Expr::Aggregation(a) => Ok(a.head()),
            Expr::Paren(p) => p.head(),
            Expr::Scalar(s) => Ok(s.head()),
            Expr::Constant(text) => Ok(text.clone()),
        }
    }

    /// Direct children, in rendering order.
    pub fn children(&self) -> std::vec::IntoIter<&Expr> {
        match self {
            Expr::Selector(s) => s.children(),
            Expr::Func(f) => f.children(),
            Expr::Binary(b) => b.children(),
            Expr::Aggregation(a) => a.children(),
            Expr::Paren(p) => p.children(),
            Expr::Scalar(s) => s.children(),
            Expr::Constant(_) => Vec::new().into_iter(),
        }
    }

    /// Render the whole subtree as query text.
    ///
    /// # Example
    /// ```
    /// use promql_builder::ast::{Expr, Func, Selector};
    ///
    /// let expr: Expr = Func::new("rate")
    ///     .with_parameter(Selector::new("http_requests_total").with_duration("5m"))
    ///     .into();
    /// assert_eq!(expr.render().unwrap(), "rate(http_requests_total[5m])");
    /// ```
    pub fn render(&self) -> PromqlResult<String> {
        let query = self.to_promql()?;
        tracing::trace!(%query, "rendered expression");
        Ok(query)
    }
}

/// Forces explicit grouping around its inner node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parenthesis {
    pub inner: Box<Expr>,
}

impl Parenthesis {
    pub fn new(inner: impl Into<Expr>) -> Self {
        Self {
            inner: Box::new(inner.into()),
        }
    }

    /// Passes through to the inner node.
    pub fn head(&self) -> PromqlResult<String> {
        self.inner.head()
    }

    pub fn children(&self) -> std::vec::IntoIter<&Expr> {
        vec![&*self.inner].into_iter()
    }

    pub fn render(&self) -> PromqlResult<String> {
        self.to_promql()
    }
}

impl From<Selector> for Expr {
    fn from(s: Selector) -> Self {
        Expr::Selector(s)
    }
}

impl From<Func> for Expr {
    fn from(f: Func) -> Self {
        Expr::Func(f)
    }
}

impl From<BinaryOp> for Expr {
    fn from(b: BinaryOp) -> Self {
        Expr::Binary(b)
    }
}

impl From<AggregationOp> for Expr {
    fn from(a: AggregationOp) -> Self {
        Expr::Aggregation(a)
    }
}

impl From<Parenthesis> for Expr {
    fn from(p: Parenthesis) -> Self {
        Expr::Paren(p)
    }
}

impl From<Scalar> for Expr {
    fn from(s: Scalar) -> Self {
        Expr::Scalar(s)
    }
}

impl From<f64> for Expr {
    fn from(v: f64) -> Self {
        Expr::Scalar(Scalar::Float(v))
    }
}

impl From<i64> for Expr {
    fn from(v: i64) -> Self {
        Expr::Scalar(Scalar::Int(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{MatchOp, Label};
    use crate::error::PromqlError;

    #[test]
    fn test_constant_verbatim() {
        let expr = Expr::constant(r#"vector(1) > bool 0"#);
        assert_eq!(expr.render().unwrap(), "vector(1) > bool 0");
        assert_eq!(expr.head().unwrap(), "vector(1) > bool 0");
        assert_eq!(expr.children().count(), 0);
    }

    #[test]
    fn test_paren_pass_through() {
        let inner = AggregationOp::new("sum")
            .by(["job"])
            .with_operand(Selector::new("up"));
        let paren = Parenthesis::new(inner.clone());
        assert_eq!(paren.head().unwrap(), "sum by (job)");
        assert_eq!(paren.render().unwrap(), "(sum by (job) (up))");

        let children: Vec<&Expr> = paren.children().collect();
        assert_eq!(children, vec![&Expr::Aggregation(inner)]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let expr: Expr = BinaryOp::new(">")
            .with_operands(
                Selector::new("errors").with_label(Label::new("code", MatchOp::Re, "5..")),
                0.5,
            )
            .into();
        let first = expr.render().unwrap();
        assert_eq!(first, r#"errors{code=~"5.."} > 0.5000"#);
        assert_eq!(expr.render().unwrap(), first);
    }

    #[test]
    fn test_empty_selector_deep_in_tree() {
        let expr: Expr = Func::new("abs")
            .with_parameter(Func::new("rate").with_parameter(Selector::default().with_duration("5m")))
            .into();
        assert!(matches!(expr.render(), Err(PromqlError::EmptySelector)));
    }

    #[test]
    fn test_json_shape() {
        let expr: Expr = Func::new("rate")
            .with_parameter(Selector::new("up").with_duration("1m"))
            .into();
        let json = serde_json::to_string(&expr).unwrap();
        assert_eq!(
            json,
            r#"{"func":{"name":"rate","params":[{"selector":{"name":"up","duration":"1m"}}]}}"#
        );
        let back: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr);
    }
}
