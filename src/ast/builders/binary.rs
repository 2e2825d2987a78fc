//! Binary expression builders.

use crate::ast::{BinaryOp, Expr, VectorMatcher};

/// Create a binary expression (left op right) with both operands set
pub fn binary(left: impl Into<Expr>, op: &str, right: impl Into<Expr>) -> BinaryOp {
    BinaryOp::new(op).with_operands(left, right)
}

/// left + right
pub fn add(left: impl Into<Expr>, right: impl Into<Expr>) -> BinaryOp {
    binary(left, "+", right)
}

/// left - right
pub fn sub(left: impl Into<Expr>, right: impl Into<Expr>) -> BinaryOp {
    binary(left, "-", right)
}

/// left * right
pub fn mul(left: impl Into<Expr>, right: impl Into<Expr>) -> BinaryOp {
    binary(left, "*", right)
}

/// left / right
pub fn div(left: impl Into<Expr>, right: impl Into<Expr>) -> BinaryOp {
    binary(left, "/", right)
}

/// on(labels)
pub fn on<I, S>(labels: I) -> VectorMatcher
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    VectorMatcher::on(labels)
}

/// ignoring(labels)
pub fn ignoring<I, S>(labels: I) -> VectorMatcher
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    VectorMatcher::ignoring(labels)
}
