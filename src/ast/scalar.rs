//! Numeric literals.
//!
//! See <https://prometheus.io/docs/prometheus/latest/querying/basics/#float-literals>.

use crate::ast::Expr;
use serde::{Deserialize, Serialize};

/// Float or integer literal leaf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scalar {
    /// Rendered with exactly four fractional digits
    Float(#[serde(with = "float_literal")] f64),
    /// Rendered as a plain decimal integer
    Int(i64),
}

impl Scalar {
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Float(v) => *v,
            Scalar::Int(v) => *v as f64,
        }
    }

    /// Float-style text regardless of kind, e.g. `5.0000` for `Int(5)`.
    pub fn to_fixed(&self) -> String {
        match self {
            Scalar::Float(v) => format_fixed(*v),
            Scalar::Int(v) => format!("{}.0000", v),
        }
    }

    pub fn head(&self) -> String {
        self.to_string()
    }

    pub fn children(&self) -> std::vec::IntoIter<&Expr> {
        Vec::new().into_iter()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Fixed four-digit formatting. Non-finite values use the PromQL spellings.
pub(crate) fn format_fixed(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{:.4}", v)
    }
}

/// JSON has no NaN or infinities, so those are stored under their PromQL spellings.
mod float_literal {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Number(f64),
        Literal(String),
    }

    pub fn serialize<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if v.is_finite() {
            serializer.serialize_f64(*v)
        } else {
            serializer.serialize_str(&super::format_fixed(*v))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Stored::deserialize(deserializer)? {
            Stored::Number(v) => Ok(v),
            Stored::Literal(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "+Inf" | "Inf" => Ok(f64::INFINITY),
                "-Inf" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!(
                    "invalid float literal '{}', expected a number, NaN, +Inf or -Inf",
                    other
                ))),
            },
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Float(v) => f.write_str(&format_fixed(*v)),
            Scalar::Int(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}
