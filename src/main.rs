//! @ai:module:intent CLI for comparing metric results across models
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use metric_compare::{
    AnyMetricResult, BitmapRenderer, ChartComparer, CompareConfig, ResultAggregator, SvgRenderer,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "metric-compare")]
#[command(about = "Merge and chart evaluation metric results across models")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge per-model results into one table
    Table {
        /// Model result as NAME=PATH to a JSON file (repeat, in display order)
        #[arg(short, long = "result", value_name = "NAME=PATH", value_parser = parse_result_arg, required = true)]
        results: Vec<(String, PathBuf)>,

        /// Keep small/medium/large object columns
        #[arg(long)]
        include_object_sizes: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: TableFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a grouped bar chart comparing the models
    Plot {
        /// Model result as NAME=PATH to a JSON file (repeat, in display order)
        #[arg(short, long = "result", value_name = "NAME=PATH", value_parser = parse_result_arg, required = true)]
        results: Vec<(String, PathBuf)>,

        /// Plot small/medium/large object scores too
        #[arg(long)]
        include_object_sizes: bool,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Chart file; .svg writes SVG, anything else a bitmap
        #[arg(short, long, default_value = "comparison.png")]
        output: PathBuf,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "compare.toml")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TableFormat {
    Markdown,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("metric_compare=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Table {
            results,
            include_object_sizes,
            format,
            output,
        } => write_table(&results, include_object_sizes, format, output.as_deref()),
        Commands::Plot {
            results,
            include_object_sizes,
            config,
            output,
        } => plot(&results, include_object_sizes, config, &output),
        Commands::Init { output } => init_config(&output),
    }
}

/// @ai:intent Parse a NAME=PATH argument
/// @ai:effects pure
fn parse_result_arg(value: &str) -> std::result::Result<(String, PathBuf), String> {
    match value.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=PATH, got '{}'", value)),
    }
}

/// @ai:intent Load every result file, keeping argument order
/// @ai:effects fs:read
fn load_results(args: &[(String, PathBuf)]) -> Result<(Vec<AnyMetricResult>, Vec<String>)> {
    let mut results = Vec::with_capacity(args.len());
    let mut names = Vec::with_capacity(args.len());

    for (name, path) in args {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read result file: {}", path.display()))?;
        let result: AnyMetricResult = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse result file: {}", path.display()))?;

        tracing::info!("Loaded {} result for {}", path.display(), name);
        results.push(result);
        names.push(name.clone());
    }

    Ok((results, names))
}

/// @ai:intent Aggregate results and print or save the merged table
/// @ai:effects fs:read, fs:write
fn write_table(
    args: &[(String, PathBuf)],
    include_object_sizes: bool,
    format: TableFormat,
    output: Option<&Path>,
) -> Result<()> {
    let (results, names) = load_results(args)?;
    let aggregated = ResultAggregator::new().aggregate(&results, &names, include_object_sizes)?;

    let rendered = match format {
        TableFormat::Markdown => aggregated.table().to_markdown(),
        TableFormat::Json => serde_json::to_string_pretty(aggregated.table())?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!("Table written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// @ai:intent Render the comparison chart to an SVG or bitmap file
/// @ai:effects fs:read, fs:write
fn plot(
    args: &[(String, PathBuf)],
    include_object_sizes: bool,
    config_path: Option<PathBuf>,
    output: &Path,
) -> Result<()> {
    let config = match config_path {
        Some(path) => CompareConfig::load(&path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => CompareConfig::default(),
    };
    let include_object_sizes = include_object_sizes || config.include_object_sizes;

    let (results, names) = load_results(args)?;
    let comparer = ChartComparer::with_config(config.chart);

    let is_svg = output
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if is_svg {
        let mut renderer = SvgRenderer::new();
        comparer.compare(&results, &names, include_object_sizes, &mut renderer)?;
        std::fs::write(output, renderer.svg())?;
        tracing::info!("Chart written to {}", output.display());
    } else {
        let mut renderer = BitmapRenderer::new(output);
        comparer.compare(&results, &names, include_object_sizes, &mut renderer)?;
    }

    Ok(())
}

/// @ai:intent Write the default configuration file
/// @ai:effects fs:write
fn init_config(output: &Path) -> Result<()> {
    CompareConfig::default().save(output)?;
    println!("Configuration written to {}", output.display());
    Ok(())
}
