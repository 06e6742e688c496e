//! PokeExplorer report - runs the type statistics pipeline once.
//!
//! Prints the statistics table (or JSON) to stdout and writes the grouped bar
//! chart as an SVG file. Logs go to stderr.

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_engine::infrastructure::settings::CatalogSettings;
use pokedex_engine::report::{render_svg, ChartLayout, ChartModel, StatsTable};
use pokedex_engine::App;

const DEFAULT_CHART_PATH: &str = "type-statistics.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Table,
    Json,
}

impl ReportFormat {
    fn from_env() -> anyhow::Result<Self> {
        match std::env::var("POKEDEX_REPORT_FORMAT") {
            Err(_) => Ok(Self::Table),
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "" | "table" => Ok(Self::Table),
                "json" => Ok(Self::Json),
                other => bail!("Unknown POKEDEX_REPORT_FORMAT '{other}' (expected table or json)"),
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = CatalogSettings::from_env();
    let format = ReportFormat::from_env()?;
    let chart_path =
        std::env::var("POKEDEX_CHART_PATH").unwrap_or_else(|_| DEFAULT_CHART_PATH.into());

    tracing::info!("Starting PokeExplorer report");

    let app = App::from_settings(&settings);
    let report = app
        .use_cases
        .stats
        .execute()
        .await
        .context("Type statistics could not be computed")?;

    for category in report.dropped_categories() {
        tracing::warn!(category = %category, "Category omitted from report");
    }
    if report.excluded_entries() > 0 {
        tracing::warn!(
            excluded = report.excluded_entries(),
            "Some entries were excluded from their category sample"
        );
    }

    match format {
        ReportFormat::Table => print!("{}", StatsTable::from_statistics(&report.statistics).render_text()),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report.statistics)?),
    }

    let chart = ChartModel::project(&report.statistics, &ChartLayout::default());
    std::fs::write(&chart_path, render_svg(&chart))
        .with_context(|| format!("Failed to write chart to {chart_path}"))?;
    tracing::info!(path = %chart_path, categories = report.statistics.len(), "Chart written");

    Ok(())
}

/// Load `.env.local` then `.env` from the workspace root, if present.
fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
