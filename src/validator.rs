//! Structural validation for expression trees.
//!
//! Rendering stops at the first problem. The validator walks the whole tree
//! and reports every issue with a path to the offending node, which is what
//! the CLI and tests want when a stored tree is broken in several places.

use crate::ast::{AggregationOp, BinaryOp, Expr};

/// Validation issue with the path of the node it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptySelector {
        path: String,
    },
    MissingOperand {
        path: String,
        slot: &'static str,
    },
    /// count_values, quantile, topk and bottomk need a parameter
    MissingParameter {
        path: String,
        operator: String,
    },
    UnexpectedParameter {
        path: String,
        operator: String,
    },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::EmptySelector { path } => {
                write!(f, "{}: selector has neither a metric name nor labels", path)
            }
            ValidationIssue::MissingOperand { path, slot } => {
                write!(f, "{}: {} is not set", path, slot)
            }
            ValidationIssue::MissingParameter { path, operator } => {
                write!(f, "{}: '{}' requires a parameter", path, operator)
            }
            ValidationIssue::UnexpectedParameter { path, operator } => {
                write!(f, "{}: '{}' does not take a parameter", path, operator)
            }
        }
    }
}

impl std::error::Error for ValidationIssue {}

/// Result of validation
pub type ValidationResult = Result<(), Vec<ValidationIssue>>;

/// Walks a tree and collects structural issues.
#[derive(Debug, Clone)]
pub struct Validator {
    check_parameters: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self {
            check_parameters: true,
        }
    }

    /// Skip the per-operator parameter checks, for engines with extra
    /// parameterized aggregations (e.g. `limitk`).
    pub fn without_parameter_checks(mut self) -> Self {
        self.check_parameters = false;
        self
    }

    pub fn validate(&self, expr: &Expr) -> ValidationResult {
        let mut issues = Vec::new();
        self.visit(expr, "root".to_string(), &mut issues);
        if issues.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = issues.len(), "expression failed validation");
            Err(issues)
        }
    }

    fn visit(&self, expr: &Expr, path: String, issues: &mut Vec<ValidationIssue>) {
        match expr {
            Expr::Selector(s) => {
                if s.is_empty() {
                    issues.push(ValidationIssue::EmptySelector { path });
                }
            }
            Expr::Func(f) => {
                for (i, param) in f.params.iter().enumerate() {
                    self.visit(param, format!("{}.params[{}]", path, i), issues);
                }
            }
            Expr::Binary(b) => self.visit_binary(b, path, issues),
            Expr::Aggregation(a) => self.visit_aggregation(a, path, issues),
            Expr::Paren(p) => self.visit(&p.inner, format!("{}.inner", path), issues),
            Expr::Scalar(_) | Expr::Constant(_) => {}
        }
    }

    fn visit_binary(&self, op: &BinaryOp, path: String, issues: &mut Vec<ValidationIssue>) {
        for (slot, name, operand) in [
            ("left operand", "left", &op.left),
            ("right operand", "right", &op.right),
        ] {
            match operand {
                Some(child) => self.visit(child, format!("{}.{}", path, name), issues),
                None => issues.push(ValidationIssue::MissingOperand {
                    path: path.clone(),
                    slot,
                }),
            }
        }
    }

    fn visit_aggregation(
        &self,
        op: &AggregationOp,
        path: String,
        issues: &mut Vec<ValidationIssue>,
    ) {
        if self.check_parameters {
            match (op.takes_parameter(), op.parameter.is_some()) {
                (true, false) => issues.push(ValidationIssue::MissingParameter {
                    path: path.clone(),
                    operator: op.operator.clone(),
                }),
                (false, true) => issues.push(ValidationIssue::UnexpectedParameter {
                    path: path.clone(),
                    operator: op.operator.clone(),
                }),
                _ => {}
            }
        }
        match &op.operand {
            Some(child) => self.visit(child, format!("{}.operand", path), issues),
            None => issues.push(ValidationIssue::MissingOperand {
                path,
                slot: "operand",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::*;
    use crate::ast::{AggregationOp, BinaryOp, Selector};

    #[test]
    fn test_valid_tree() {
        let expr: Expr = topk(5, sum(rate(metric("x").with_duration("5m"))).by(["job"])).into();
        assert_eq!(Validator::new().validate(&expr), Ok(()));
    }

    #[test]
    fn test_collects_all_issues() {
        let expr: Expr = func(
            "abs",
            [
                Expr::from(BinaryOp::new("+")),
                Expr::from(
                    AggregationOp::new("topk")
                        .with_operand(rate(Selector::default().with_duration("5m"))),
                ),
            ],
        )
        .into();

        let issues = Validator::new().validate(&expr).unwrap_err();
        assert_eq!(
            issues,
            vec![
                ValidationIssue::MissingOperand {
                    path: "root.params[0]".to_string(),
                    slot: "left operand",
                },
                ValidationIssue::MissingOperand {
                    path: "root.params[0]".to_string(),
                    slot: "right operand",
                },
                ValidationIssue::MissingParameter {
                    path: "root.params[1]".to_string(),
                    operator: "topk".to_string(),
                },
                ValidationIssue::EmptySelector {
                    path: "root.params[1].operand.params[0]".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_unexpected_parameter() {
        let expr: Expr = sum(metric("x")).with_parameter(1.0).into();
        let issues = Validator::new().validate(&expr).unwrap_err();
        assert_eq!(issues[0].to_string(), "root: 'sum' does not take a parameter");

        assert_eq!(Validator::new().without_parameter_checks().validate(&expr), Ok(()));
    }

    #[test]
    fn test_paren_path() {
        let expr: Expr = paren(AggregationOp::new("sum")).into();
        let issues = Validator::new().validate(&expr).unwrap_err();
        assert_eq!(
            issues,
            vec![ValidationIssue::MissingOperand {
                path: "root.inner".to_string(),
                slot: "operand",
            }]
        );
    }
}
