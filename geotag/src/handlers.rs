use anyhow::{Context, Result};
use colored::Colorize;
use geotag_core::{GeoTable, GeotagOptions, TableSummary, WikiClient, WikiConfig, geotag};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `warn`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Options used by the command line: logging and CSV output are always on
pub fn cli_options() -> GeotagOptions {
    GeotagOptions {
        verbose: true,
        write_csv: true,
        show_progress: true,
    }
}

/// Geotag `input` against the endpoints in `config`
pub async fn run_geotag(input: &Path, config: WikiConfig, options: &GeotagOptions) -> Result<GeoTable> {
    let client = WikiClient::new(config).context("Failed to create Wikipedia client")?;
    let config = client.config();
    info!(
        "Using {} and {} ({}s timeout)",
        config.wikipedia_api, config.wikidata_api, config.timeout_secs
    );

    geotag(&client, input, options)
        .await
        .with_context(|| format!("Failed to geotag {}", input.display()))
}

pub fn format_summary(summary: &TableSummary, output: Option<&Path>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{} {}\n",
        "✓".green().bold(),
        format!("{} locations processed", summary.total()).bright_white().bold()
    ));
    out.push_str(&format!(
        "  {} {}\n",
        "•".green(),
        format!("{} with coordinates", summary.found).green()
    ));
    out.push_str(&format!(
        "  {} {}\n",
        "•".yellow(),
        format!("{} without geographic data", summary.no_coordinates).yellow()
    ));
    out.push_str(&format!(
        "  {} {}\n",
        "•".red(),
        format!("{} without a Wikipedia page", summary.no_page).red()
    ));
    if let Some(path) = output {
        out.push_str(&format!(
            "{} Results written to {}\n",
            "→".blue(),
            path.display().to_string().bright_white()
        ));
    }
    out
}
