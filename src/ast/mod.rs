pub mod aggregation;
pub mod binary;
pub mod builders;
pub mod expr;
pub mod func;
pub mod scalar;
pub mod selector;

pub use self::aggregation::{
    AggregationClause, AggregationOp, Grouping, PARAMETERIZED_AGGREGATIONS,
};
pub use self::binary::{BinaryOp, GroupModifier, GroupSide, MatchKeyword, VectorMatcher};
pub use self::expr::{Expr, Parenthesis};
pub use self::func::Func;
pub use self::scalar::Scalar;
pub use self::selector::{Label, MatchOp, Selector};
