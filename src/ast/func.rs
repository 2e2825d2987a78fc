//! Function calls, see <https://prometheus.io/docs/prometheus/latest/querying/functions>.

use crate::ast::Expr;
use crate::error::PromqlResult;
use crate::transpiler::ToPromql;
use serde::{Deserialize, Serialize};

/// Named function over an ordered argument list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Func {
    pub name: String,
    /// Argument order is significant
    #[serde(default)]
    pub params: Vec<Expr>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn with_parameter(mut self, param: impl Into<Expr>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Append several arguments in order.
    pub fn with_parameters<I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = Expr>,
    {
        self.params.extend(params);
        self
    }

    pub fn head(&self) -> String {
        self.name.clone()
    }

    pub fn children(&self) -> std::vec::IntoIter<&Expr> {
        self.params.iter().collect::<Vec<_>>().into_iter()
    }

    pub fn render(&self) -> PromqlResult<String> {
        self.to_promql()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Scalar, Selector};

    #[test]
    fn test_no_params() {
        assert_eq!(Func::new("time").render().unwrap(), "time()");
    }

    #[test]
    fn test_params_in_order() {
        let f = Func::new("clamp")
            .with_parameter(Selector::new("up"))
            .with_parameter(Scalar::Int(0))
            .with_parameter(Scalar::Float(1.5));
        assert_eq!(f.render().unwrap(), "clamp(up, 0, 1.5000)");
        assert_eq!(f.children().count(), 3);
    }

    #[test]
    fn test_template_reuse() {
        let base = Func::new("label_replace").with_parameter(Selector::new("up"));
        let a = base.clone().with_parameter(Expr::Constant("\"a\"".into()));
        let b = base.clone().with_parameter(Expr::Constant("\"b\"".into()));
        assert_eq!(base.render().unwrap(), "label_replace(up)");
        assert_eq!(a.render().unwrap(), "label_replace(up, \"a\")");
        assert_eq!(b.render().unwrap(), "label_replace(up, \"b\")");
    }
}
