//! # promql-builder - typed PromQL expressions
//!
//! > **Stop concatenating strings. Build the tree.**
//!
//! Compose selectors, functions, binary and aggregation operators as a
//! typed expression tree, then render it to canonical PromQL text.
//!
//! ## Quick Example
//!
//! ```
//! use promql_builder::prelude::*;
//!
//! let query = histogram_quantile(
//!     0.9,
//!     sum(rate(metric("demo_api_request_duration_seconds_bucket").with_duration("5m")))
//!         .by(["le", "method", "path"]),
//! );
//! assert_eq!(
//!     query.render().unwrap(),
//!     "histogram_quantile(0.9000, sum by (le, method, path) (rate(demo_api_request_duration_seconds_bucket[5m])))"
//! );
//! ```
//!
//! ## Rendering rules
//!
//! | Node          | Text                                         |
//! |---------------|----------------------------------------------|
//! | selector      | `name{k="v", ...}[dur] offset off`           |
//! | function      | `name(arg, arg)`                             |
//! | binary        | `left op on(l) group_left(l) right`          |
//! | aggregation   | `op by (l) (param, operand)`                 |
//! | parenthesis   | `(inner)`                                    |
//!
//! Operator precedence is not inferred: wrap sub-expressions with
//! [`paren`](ast::builders::paren) where the query needs it.

pub mod ast;
pub mod config;
pub mod error;
pub mod fmt;
pub mod transpiler;
pub mod validator;

use std::path::Path;

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::{
        AggregationClause, AggregationOp, BinaryOp, Expr, Func, GroupModifier, GroupSide,
        Grouping, Label, MatchKeyword, MatchOp, PARAMETERIZED_AGGREGATIONS, Parenthesis, Scalar,
        Selector, VectorMatcher,
    };
    pub use crate::error::*;
    pub use crate::fmt::TreeFormatter;
    pub use crate::transpiler::ToPromql;
    pub use crate::validator::{ValidationIssue, Validator};
}

/// Render any node convertible to an [`ast::Expr`].
pub fn render(expr: impl Into<ast::Expr>) -> error::PromqlResult<String> {
    expr.into().render()
}

/// Read a stored expression tree from a `.json` or `.toml` file.
pub fn load_expr(path: &Path) -> error::PromqlResult<ast::Expr> {
    let content = std::fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Ok(toml::from_str(&content)?),
        Some("json") => Ok(serde_json::from_str(&content)?),
        other => Err(error::PromqlError::Config(format!(
            "unsupported expression file type: {}",
            other.unwrap_or("<none>")
        ))),
    }
}
