use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use readtime_core::{
    FetchConfig, Fetcher, HttpFetcher, ReadingConfig, ReadingTime, RoundingPolicy, fetch_file, fetch_stdin,
};
use tracing_subscriber::EnvFilter;
use url::Url;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Estimate how long a web page takes to read
#[derive(Parser, Debug)]
#[command(name = "readtime")]
#[command(version)]
#[command(about = "Estimate how long a web page takes to read", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Reading rate in words per minute
    #[arg(long, value_name = "WPM")]
    wpm: Option<f64>,

    /// Rounding policy (legacy, seconds, ceil)
    #[arg(long, value_name = "POLICY")]
    rounding: Option<RoundingPolicy>,

    /// JSON reading configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Report 0 minutes instead of failing when the URL cannot be fetched
    #[arg(long)]
    fallback_zero: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,readtime_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_config(args: &Args) -> anyhow::Result<ReadingConfig> {
    let mut config = ReadingConfig::load(args.config.as_deref()).context("Failed to load reading configuration")?;

    if let Some(wpm) = args.wpm {
        config.words_per_minute = wpm;
    }
    if let Some(rounding) = args.rounding {
        config.rounding = rounding;
    }

    config.validate().context("Invalid reading configuration")?;
    Ok(config)
}

fn is_url(input: &str) -> bool {
    Url::parse(input).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let config = resolve_config(&args)?;

    let html = if args.input == "-" {
        if args.verbose {
            echo::print_step(1, 3, "Reading from stdin");
        }
        Some(fetch_stdin().context("Failed to read from stdin")?)
    } else if is_url(&args.input) {
        if args.verbose {
            echo::print_step(
                1,
                3,
                &format!("Fetching from {}", args.input.bright_white().underline()),
            );
        }

        let fetch_config = FetchConfig {
            timeout: args.timeout,
            user_agent: args.user_agent.clone().unwrap_or_else(|| FetchConfig::default().user_agent),
        };
        let fetcher = HttpFetcher::new(fetch_config).context("Failed to build HTTP client")?;

        match fetcher.fetch(&args.input).await {
            Ok(content) => Some(content),
            Err(e) if args.fallback_zero => {
                tracing::warn!(url = %args.input, error = %e, "fetch failed, reporting 0 minutes");
                echo::print_warning(&format!("Could not fetch {}: {}", args.input, e));
                None
            }
            Err(e) => return Err(e).context("Failed to fetch URL"),
        }
    } else {
        if args.verbose {
            echo::print_step(1, 3, &format!("Reading from file {}", args.input.bright_white()));
        }
        Some(fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?)
    };

    let source_url = is_url(&args.input).then(|| args.input.clone());

    let report = match html {
        Some(html) => {
            if args.verbose {
                eprintln!("  {} {}", "Size:".dimmed(), echo::format_size(html.len()).bright_white());
                eprintln!();
                echo::print_step(2, 3, "Extracting text and estimating");
            }

            let started = Instant::now();
            let report = ReadingTime::from_html(&html, &config, source_url);

            if args.verbose {
                echo::print_timing("Estimate", started.elapsed());
                echo::print_report_details(&report);
            }
            report
        }
        None => ReadingTime::unavailable(source_url),
    };

    let output = match args.format {
        OutputFormat::Text => format!("{}\n", report.minutes),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            format!("{}\n", json)
        }
    };

    if args.verbose {
        echo::print_step(3, 3, "Writing output");
        eprintln!(
            "  {} {}",
            "Format:".dimmed(),
            format!("{:?}", args.format).bright_white()
        );
        eprintln!();
    }

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}
