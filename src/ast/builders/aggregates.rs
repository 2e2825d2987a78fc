//! Aggregation builders (sum, avg, topk, quantile, ...).
//!
//! `count_values` has no shorthand: its parameter is a label name string,
//! which the numeric parameter slot cannot express.

use crate::ast::{AggregationOp, Expr};

/// Aggregation of any name over an operand
pub fn aggregate(op: &str, operand: impl Into<Expr>) -> AggregationOp {
    AggregationOp::new(op).with_operand(operand)
}

/// sum (operand)
pub fn sum(operand: impl Into<Expr>) -> AggregationOp {
    aggregate("sum", operand)
}

/// avg (operand)
pub fn avg(operand: impl Into<Expr>) -> AggregationOp {
    aggregate("avg", operand)
}

/// min (operand)
pub fn min(operand: impl Into<Expr>) -> AggregationOp {
    aggregate("min", operand)
}

/// max (operand)
pub fn max(operand: impl Into<Expr>) -> AggregationOp {
    aggregate("max", operand)
}

/// count (operand)
pub fn count(operand: impl Into<Expr>) -> AggregationOp {
    aggregate("count", operand)
}

/// topk (k, operand)
pub fn topk(k: i64, operand: impl Into<Expr>) -> AggregationOp {
    aggregate("topk", operand).with_parameter(k)
}

/// bottomk (k, operand)
pub fn bottomk(k: i64, operand: impl Into<Expr>) -> AggregationOp {
    aggregate("bottomk", operand).with_parameter(k)
}

/// quantile (φ, operand)
pub fn quantile(phi: f64, operand: impl Into<Expr>) -> AggregationOp {
    aggregate("quantile", operand).with_parameter(phi)
}
