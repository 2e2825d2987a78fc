use pretty_assertions::assert_eq;
use promql_builder::ast::*;
use promql_builder::error::PromqlError;

fn rate_of(name: &str, duration: &str) -> Func {
    Func::new("rate").with_parameter(Selector::new(name).with_duration(duration))
}

#[test]
fn test_histogram_quantile_over_sum_by() {
    let query = Func::new("histogram_quantile")
        .with_parameter(Scalar::Float(0.9))
        .with_parameter(
            AggregationOp::new("sum")
                .by(["le", "method", "path"])
                .with_operand(rate_of("demo_api_request_duration_seconds_bucket", "5m")),
        );

    assert_eq!(
        query.render().unwrap(),
        "histogram_quantile(0.9000, sum by (le, method, path) (rate(demo_api_request_duration_seconds_bucket[5m])))"
    );
}

#[test]
fn test_division_with_group_left() {
    let query = BinaryOp::new("/")
        .with_matcher(VectorMatcher::on(["job"]).with_group_left(Vec::<String>::new()))
        .with_operands(
            AggregationOp::new("sum")
                .by(["job", "mode"])
                .with_operand(rate_of("node_cpu_seconds_total", "1m")),
            AggregationOp::new("sum")
                .by(["job"])
                .with_operand(rate_of("node_cpu_seconds_total", "1m")),
        );

    assert_eq!(
        query.render().unwrap(),
        "sum by (job, mode) (rate(node_cpu_seconds_total[1m])) / on(job) group_left sum by (job) (rate(node_cpu_seconds_total[1m]))"
    );
}

#[test]
fn test_parenthesis_inside_subtraction() {
    let increase = |labels: Vec<Label>| {
        Func::new("increase").with_parameter(
            Selector::new("node_cpu_seconds_total")
                .with_labels(labels)
                .with_duration("1m"),
        )
    };
    let by_instance = AggregationOp::new("sum").by(["instance"]);

    let ratio = BinaryOp::new("/").with_operands(
        by_instance.clone().with_operand(increase(vec![
            Label::new("mode", MatchOp::Eq, "idle"),
            Label::new("instance", MatchOp::Eq, "master"),
        ])),
        by_instance
            .clone()
            .with_operand(increase(vec![Label::new("instance", MatchOp::Eq, "master")])),
    );
    let query = BinaryOp::new("-").with_operands(Scalar::Int(1), Parenthesis::new(ratio));

    assert_eq!(
        query.render().unwrap(),
        r#"1 - (sum by (instance) (increase(node_cpu_seconds_total{mode="idle", instance="master"}[1m])) / sum by (instance) (increase(node_cpu_seconds_total{instance="master"}[1m])))"#
    );
}

#[test]
fn test_bare_selector_renders_its_name() {
    for name in ["up", "process_cpu_seconds_total", "a:b:c"] {
        assert_eq!(Selector::new(name).render().unwrap(), name);
    }
}

#[test]
fn test_label_forms() {
    let cases = [
        (MatchOp::Eq, r#"job="api""#),
        (MatchOp::Ne, r#"job!="api""#),
        (MatchOp::Re, r#"job=~"api""#),
        (MatchOp::Nre, r#"job!~"api""#),
    ];
    for (op, expected) in cases {
        assert_eq!(Label::new("job", op, "api").render(), expected);
    }
}

#[test]
fn test_function_argument_list() {
    let args: Vec<Expr> = vec![
        Selector::new("a").into(),
        Scalar::Int(2).into(),
        Expr::constant("\"x\""),
    ];
    let rendered: Vec<String> = args.iter().map(|a| a.render().unwrap()).collect();
    let f = Func::new("f").with_parameters(args);

    assert_eq!(f.render().unwrap(), format!("f({})", rendered.join(", ")));
    assert_eq!(f.children().count(), 3);
}

#[test]
fn test_empty_selector_is_an_error_not_partial_text() {
    let sel = Selector::default().with_duration("5m");
    assert!(matches!(sel.render(), Err(PromqlError::EmptySelector)));

    let expr: Expr = AggregationOp::new("sum").with_operand(sel).into();
    assert!(matches!(expr.render(), Err(PromqlError::EmptySelector)));
}

#[test]
fn test_templates_are_not_mutated() {
    let template = AggregationOp::new("sum").by(["job"]);
    let a = template.clone().with_operand(Selector::new("a"));
    let b = template.clone().with_operand(Selector::new("b"));

    assert_eq!(a.render().unwrap(), "sum by (job) (a)");
    assert_eq!(b.render().unwrap(), "sum by (job) (b)");
    assert!(template.operand.is_none());
}

#[test]
fn test_children_order() {
    let op = BinaryOp::new("+").with_operands(Selector::new("l"), Selector::new("r"));
    let heads: Vec<String> = op.children().map(|c| c.head().unwrap()).collect();
    assert_eq!(heads, vec!["l".to_string(), "r".to_string()]);
}
