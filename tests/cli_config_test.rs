use promql_builder::config::{OutputFormat, PromqlConfig};
use promql_builder::prelude::*;
use std::io::Write;

#[test]
fn test_config_file_round_trip_through_loader() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "output = \"json\"\ncolor = false\nvalidate = true").unwrap();

    let config = PromqlConfig::from_path(file.path()).unwrap();
    assert_eq!(config.output, OutputFormat::Json);
    assert!(!config.color);
    assert!(config.validate);
}

#[test]
fn test_stored_tree_renders_and_validates() {
    let expr: Expr = topk(3, sum(rate(metric("http_requests_total").with_duration("5m"))).by(["route"])).into();
    let json = serde_json::to_string_pretty(&expr).unwrap();

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let loaded = promql_builder::load_expr(file.path()).unwrap();
    assert_eq!(loaded, expr);
    assert_eq!(Validator::new().validate(&loaded), Ok(()));
    assert_eq!(
        loaded.render().unwrap(),
        "topk (3.0000, sum by (route) (rate(http_requests_total[5m])))"
    );
}
