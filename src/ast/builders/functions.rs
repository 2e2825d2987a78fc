//! Function call builders.

use crate::ast::{Expr, Func, Parenthesis};

/// Function call with the given arguments
/// # Example
/// ```
/// use promql_builder::ast::builders::*;
///
/// let f = func("clamp_max", [metric("up").into(), int(1)]);
/// assert_eq!(f.render().unwrap(), "clamp_max(up, 1)");
/// ```
pub fn func<I>(name: &str, params: I) -> Func
where
    I: IntoIterator<Item = Expr>,
{
    Func::new(name).with_parameters(params)
}

/// rate(range)
pub fn rate(range: impl Into<Expr>) -> Func {
    Func::new("rate").with_parameter(range)
}

/// irate(range)
pub fn irate(range: impl Into<Expr>) -> Func {
    Func::new("irate").with_parameter(range)
}

/// increase(range)
pub fn increase(range: impl Into<Expr>) -> Func {
    Func::new("increase").with_parameter(range)
}

/// histogram_quantile(φ, buckets)
pub fn histogram_quantile(phi: f64, buckets: impl Into<Expr>) -> Func {
    Func::new("histogram_quantile")
        .with_parameter(phi)
        .with_parameter(buckets)
}

/// Wrap in explicit parentheses
pub fn paren(inner: impl Into<Expr>) -> Parenthesis {
    Parenthesis::new(inner)
}
