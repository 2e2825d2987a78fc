//! Indented tree view of an expression, one node per line.
//!
//! ```text
//! histogram_quantile
//!   0.9000
//!   sum by (le)
//!     rate
//!       http_request_duration_seconds_bucket[5m]
//! ```

use crate::ast::Expr;
use crate::error::PromqlResult;


pub struct TreeFormatter {
    indent_level: usize,
    buffer: String,
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    pub fn format(mut self, expr: &Expr) -> PromqlResult<String> {
        self.visit(expr)?;
        Ok(self.buffer)
    }

    fn indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str("  ");
        }
    }

    fn visit(&mut self, expr: &Expr) -> PromqlResult<()> {
        self.indent();
        match expr {
            // head() passes through to the inner node; show the grouping itself
            Expr::Paren(_) => self.buffer.push_str("()"),
            _ => self.buffer.push_str(&expr.head()?),
        }
        self.buffer.push('\n');

        self.indent_level += 1;
        for child in expr.children() {
            self.visit(child)?;
        }
        self.indent_level -= 1;
        Ok(())
    }
}
