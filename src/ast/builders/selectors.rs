//! Selector and label matcher builders.

use crate::ast::{Label, MatchOp, Selector};

/// Selector for a metric name
pub fn metric(name: &str) -> Selector {
    Selector::new(name)
}

/// Label matcher with an explicit operator
pub fn label(key: &str, op: MatchOp, value: &str) -> Label {
    Label::new(key, op, value)
}

/// `key="value"`
pub fn eq(key: &str, value: &str) -> Label {
    Label::new(key, MatchOp::Eq, value)
}

/// `key!="value"`
pub fn ne(key: &str, value: &str) -> Label {
    Label::new(key, MatchOp::Ne, value)
}

/// `key=~"regex"`
pub fn re(key: &str, regex: &str) -> Label {
    Label::new(key, MatchOp::Re, regex)
}

/// `key!~"regex"`
pub fn nre(key: &str, regex: &str) -> Label {
    Label::new(key, MatchOp::Nre, regex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matchers() {
        let sel = metric("up").with_labels([eq("a", "1"), ne("b", "2"), re("c", "3"), nre("d", "4")]);
        assert_eq!(
            sel.render().unwrap(),
            r#"up{a="1", b!="2", c=~"3", d!~"4"}"#
        );
    }
}
