use clap::Parser;
use jsonui::{html_document, Node, Renderer, UiConfig, UiError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Validate JSON UI node files
#[derive(Parser)]
#[command(name = "jsonui-validate")]
#[command(about = "Validate JSON UI node files", long_about = None)]
#[command(after_help = "Examples:\n  jsonui-validate login.json\n  jsonui-validate --html showcase.json > showcase.html")]
struct Cli {
    /// Print each valid file as a rendered HTML page instead of a status line
    #[arg(long)]
    html: bool,

    /// YAML settings file (like handler, limits, matching mode)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Node files to validate
    #[arg(required = true, value_name = "NODE_JSON")]
    files: Vec<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(UiConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("✗ config has errors:");
            print_error(&e);
            process::exit(1);
        }
    };
    let renderer = Renderer::new(config.clone());

    let mut exit_code = 0;
    for file_path in &cli.files {
        let name = file_path.display().to_string();
        match validate_file(file_path, &config) {
            Ok(node) => {
                if cli.html {
                    println!("{}", html_document(&name, &renderer.render(&node)));
                } else {
                    println!("✓ {} is valid", name);
                }
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", name);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn validate_file(path: &Path, config: &UiConfig) -> Result<Node, UiError> {
    let content = fs::read_to_string(path)
        .map_err(|e| UiError::ValidationError(format!("Failed to read file: {}", e)))?;
    Node::from_json_with_config(&content, config)
}

fn print_error(error: &UiError) {
    match error {
        UiError::ValidationError(msg) => {
            eprintln!("  Validation error:");
            eprintln!("    {}", msg);
        }
        UiError::MalformedNode { kind, reason } => {
            eprintln!("  Malformed '{}' node:", kind);
            eprintln!("    {}", reason);
        }
        UiError::InvalidProperty {
            node,
            property,
            reason,
        } => {
            eprintln!("  Invalid property '{}' for node '{}':", property, node);
            eprintln!("    {}", reason);
        }
        UiError::InvalidEnum {
            property,
            value,
            expected,
        } => {
            eprintln!("  Invalid enum value '{}' for property '{}':", value, property);
            eprintln!("    Expected one of: {}", expected);
        }
        UiError::MaxNestingDepthExceeded { max_depth } => {
            eprintln!("  Maximum nesting depth ({}) exceeded", max_depth);
            eprintln!("    Nodes are nested too deeply");
        }
        UiError::JsonError(msg) => {
            eprintln!("  JSON error:");
            eprintln!("    {}", msg);
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
