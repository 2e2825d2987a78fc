//! promql - render stored PromQL expression trees
//!
//! # Usage
//!
//! ```bash
//! # Render a tree stored as JSON or TOML
//! promql render cpu_ratio.json
//!
//! # Show the tree, one node per line
//! promql explain cpu_ratio.toml
//!
//! # Report every structural issue
//! promql validate broken.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use promql_builder::config::{OutputFormat, PromqlConfig};
use promql_builder::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "promql")]
#[command(version)]
#[command(about = "Render typed PromQL expression trees", long_about = None)]
#[command(after_help = "EXAMPLES:
    promql render query.json
    promql render query.toml --format json
    promql explain query.json
    promql demo")]
struct Cli {
    /// Output format (defaults to the config file setting)
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Config file (defaults to ./promql.toml, then the user config dir)
    #[arg(short, long, env = "PROMQL_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an expression file to query text
    Render {
        /// Expression tree (.json or .toml)
        file: PathBuf,
    },
    /// Print the expression tree and its rendered query
    Explain {
        /// Expression tree (.json or .toml)
        file: PathBuf,
    },
    /// Check an expression file for structural issues
    Validate {
        /// Expression tree (.json or .toml)
        file: PathBuf,
    },
    /// Print a few example queries built with the library
    Demo,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    init_tracing(&config, cli.verbose);
    if !config.color {
        colored::control::set_override(false);
    }

    let result = match &cli.command {
        Commands::Render { file } => render_file(file, &config),
        Commands::Explain { file } => explain_file(file),
        Commands::Validate { file } => validate_file(file),
        Commands::Demo => show_demo(&config),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<PromqlConfig> {
    let mut config = match &cli.config {
        Some(path) => PromqlConfig::from_path(path)?,
        None => PromqlConfig::load()?,
    };
    if let Some(format) = cli.format {
        config.output = format;
    }
    Ok(config)
}

fn init_tracing(config: &PromqlConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(file: &Path) -> Result<Expr> {
    promql_builder::load_expr(file).with_context(|| format!("loading {}", file.display()))
}

fn render_file(file: &Path, config: &PromqlConfig) -> Result<()> {
    let expr = load(file)?;
    if config.validate {
        if let Err(issues) = Validator::new().validate(&expr) {
            print_issues(&issues);
            anyhow::bail!("{} validation issue(s)", issues.len());
        }
    }
    let query = expr.render()?;
    print_query(&query, config.output);
    Ok(())
}

fn print_query(query: &str, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", query),
        OutputFormat::Json => {
            let doc = serde_json::json!({ "query": query });
            println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
        }
    }
}

fn explain_file(file: &Path) -> Result<()> {
    let expr = load(file)?;
    println!("{} {}", "File:".dimmed(), file.display().to_string().yellow());
    println!();
    println!("{}", "Tree:".green().bold());
    let tree = TreeFormatter::new().format(&expr)?;
    for line in tree.lines() {
        println!("  {}", line.cyan());
    }
    println!();
    println!("{}", "Query:".green().bold());
    println!("  {}", expr.render()?.white());
    Ok(())
}

fn validate_file(file: &Path) -> Result<()> {
    let expr = load(file)?;
    match Validator::new().validate(&expr) {
        Ok(()) => {
            println!("{} {}", "✓".green(), "no issues found".white());
            Ok(())
        }
        Err(issues) => {
            print_issues(&issues);
            anyhow::bail!("{} validation issue(s)", issues.len())
        }
    }
}

fn print_issues(issues: &[ValidationIssue]) {
    for issue in issues {
        println!("{} {}", "✗".red(), issue);
    }
}

fn show_demo(config: &PromqlConfig) -> Result<()> {
    let p90 = histogram_quantile(
        0.9,
        sum(rate(metric("demo_api_request_duration_seconds_bucket").with_duration("5m")))
            .by(["le", "method", "path"]),
    );

    let cpu_share = div(
        sum(rate(metric("node_cpu_seconds_total").with_duration("1m"))).by(["job", "mode"]),
        sum(rate(metric("node_cpu_seconds_total").with_duration("1m"))).by(["job"]),
    )
    .with_matcher(on(["job"]).with_group_left(Vec::<String>::new()));

    let busy = |labels: Vec<Label>| {
        sum(increase(
            metric("node_cpu_seconds_total")
                .with_labels(labels)
                .with_duration("1m"),
        ))
        .by(["instance"])
    };
    let cpu_busy = sub(
        int(1),
        paren(div(
            busy(vec![eq("mode", "idle"), eq("instance", "master")]),
            busy(vec![eq("instance", "master")]),
        )),
    );

    let examples: [(&str, Expr); 3] = [
        ("p90 request latency", p90.into()),
        ("cpu share per mode", cpu_share.into()),
        ("cpu busy ratio", cpu_busy.into()),
    ];
    for (title, expr) in examples {
        println!("{}", title.dimmed());
        print_query(&expr.render()?, config.output);
        println!();
    }
    Ok(())
}
