use anyhow::Context;
use clap::{CommandFactory, FromArgMatches, Parser};
use launchdash_core::config::DashboardConfig;
use launchdash_core::Dashboard;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

mod error;
mod routes;
mod state;

use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Serves dashboard figures over HTTP")]
struct Args {
    #[arg(long, short, default_value = "data/spacex_launch_dash.csv")]
    data: PathBuf,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 8050)]
    port: u16,

    #[command(flatten)]
    dashboard: DashboardConfig,
}

fn resolve_data_path(requested: PathBuf) -> PathBuf {
    if requested.exists() {
        return requested;
    }
    ["..", "../.."]
        .iter()
        .map(|up| Path::new(up).join(&requested))
        .find(|p| p.exists())
        .unwrap_or(requested)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    info!("🛰️  Launch dashboard hub is initializing...");

    let config = match &args.config {
        Some(path) => {
            let mut file_config = DashboardConfig::load_from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            file_config.merge_from_cli(&args.dashboard, &matches);
            file_config
        }
        None => args.dashboard.clone(),
    };

    let data_path = resolve_data_path(args.data);
    info!("📂 Dataset: {:?}", data_path);

    // Nothing is served until the dataset loads.
    let dashboard = match Dashboard::load(&data_path, config) {
        Ok(d) => d,
        Err(e) => {
            if e.is_load_failure() {
                error!("❌ Failed to load dataset: {}", e);
            } else {
                error!("❌ Invalid dashboard config: {}", e);
            }
            process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(dashboard));

    let app = routes::system_routes()
        .merge(routes::chart_routes())
        .fallback(routes::system::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("🚀 Hub listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await.context("serving dashboard")?;
    Ok(())
}
