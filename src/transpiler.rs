//! PromQL text generation for the expression tree.
//!
//! Rendering is a depth-first walk: every composite writes its own
//! operator text and splices in the text of its children. All output goes
//! into one buffer; on error nothing partial is returned.

use crate::ast::*;
use crate::error::{PromqlError, PromqlResult};

/// Trait for converting AST nodes to PromQL.
pub trait ToPromql {
    /// Append this node's query text to `buf`.
    fn write_promql(&self, buf: &mut String) -> PromqlResult<()>;

    /// Convert this node to a PromQL string.
    fn to_promql(&self) -> PromqlResult<String> {
        let mut buf = String::new();
        self.write_promql(&mut buf)?;
        Ok(buf)
    }
}

impl ToPromql for Expr {
    fn write_promql(&self, buf: &mut String) -> PromqlResult<()> {
        match self {
            Expr::Selector(s) => s.write_promql(buf),
            Expr::Func(f) => f.write_promql(buf),
            Expr::Binary(b) => b.write_promql(buf),
            Expr::Aggregation(a) => a.write_promql(buf),
            Expr::Paren(p) => p.write_promql(buf),
            Expr::Scalar(s) => s.write_promql(buf),
            Expr::Constant(text) => {
                buf.push_str(text);
                Ok(())
            }
        }
    }
}

impl ToPromql for Selector {
    fn write_promql(&self, buf: &mut String) -> PromqlResult<()> {
        buf.push_str(&self.head()?);
        Ok(())
    }
}

impl ToPromql for Scalar {
    fn write_promql(&self, buf: &mut String) -> PromqlResult<()> {
        buf.push_str(&self.to_string());
        Ok(())
    }
}

impl ToPromql for Func {
    fn write_promql(&self, buf: &mut String) -> PromqlResult<()> {
        buf.push_str(&self.name);
        buf.push('(');
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            param.write_promql(buf)?;
        }
        buf.push(')');
        Ok(())
    }
}

impl ToPromql for BinaryOp {
    fn write_promql(&self, buf: &mut String) -> PromqlResult<()> {
        let left = operand(self.left.as_deref(), "binary operation", "left operand")?;
        let right = operand(self.right.as_deref(), "binary operation", "right operand")?;
        left.write_promql(buf)?;
        buf.push(' ');
        buf.push_str(&self.head());
        buf.push(' ');
        right.write_promql(buf)
    }
}

impl ToPromql for AggregationOp {
    fn write_promql(&self, buf: &mut String) -> PromqlResult<()> {
        let inner = operand(self.operand.as_deref(), "aggregation", "operand")?;
        buf.push_str(&self.head());
        buf.push_str(" (");
        if let Some(parameter) = &self.parameter {
            // Always float-style, even for integer parameters such as topk's k.
            buf.push_str(&parameter.to_fixed());
            buf.push_str(", ");
        }
        inner.write_promql(buf)?;
        buf.push(')');
        Ok(())
    }
}

impl ToPromql for Parenthesis {
    fn write_promql(&self, buf: &mut String) -> PromqlResult<()> {
        buf.push('(');
        self.inner.write_promql(buf)?;
        buf.push(')');
        Ok(())
    }
}

fn operand<'a>(
    slot: Option<&'a Expr>,
    node: &'static str,
    name: &'static str,
) -> PromqlResult<&'a Expr> {
    slot.ok_or_else(|| {
        tracing::debug!(node, slot = name, "operand slot is empty");
        PromqlError::missing(node, name)
    })
}
