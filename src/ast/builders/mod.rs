//! Ergonomic builder functions for PromQL expressions.
//!
//! Shorthands over the node constructors, so trees read close to the
//! query they render to.
//!
//! # Modules
//!
//! - `selectors` - Metric selectors and label matchers
//! - `literals` - Numeric literals and constant text
//! - `functions` - Function calls (rate, increase, ...) and parentheses
//! - `binary` - Binary operations and vector matchers
//! - `aggregates` - Aggregations (sum, topk, quantile, ...)
//!
//! # Example
//! ```
//! use promql_builder::ast::builders::*;
//!
//! let query = sum(rate(metric("http_requests_total").with_duration("5m")))
//!     .by(["job"]);
//! assert_eq!(
//!     query.render().unwrap(),
//!     "sum by (job) (rate(http_requests_total[5m]))"
//! );
//! ```

pub mod aggregates;
pub mod binary;
pub mod functions;
pub mod literals;
pub mod selectors;

pub use aggregates::*;
pub use binary::*;
pub use functions::*;
pub use literals::*;
pub use selectors::*;
