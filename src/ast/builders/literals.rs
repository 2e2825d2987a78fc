//! Literal builders.

use crate::ast::{Expr, Scalar};

/// Float literal, rendered with four fractional digits
pub fn float(value: f64) -> Expr {
    Expr::Scalar(Scalar::Float(value))
}

/// Integer literal
pub fn int(value: i64) -> Expr {
    Expr::Scalar(Scalar::Int(value))
}

/// Pre-rendered text, emitted as-is
pub fn constant(text: &str) -> Expr {
    Expr::Constant(text.to_string())
}
