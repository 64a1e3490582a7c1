use crate::reports;
use clap::Args;
use launchdash_core::config::DashboardConfig;
use launchdash_core::error::DashResult;
use launchdash_core::query::SiteSelector;
use launchdash_core::Dashboard;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct ScatterArgs {
    #[command(flatten)]
    pub config: DashboardConfig,

    /// Launch site, or ALL
    #[arg(short, long, default_value = "ALL")]
    pub site: String,

    /// Lower payload bound in kg (defaults to the lightest payload)
    #[arg(long, allow_negative_numbers = true)]
    pub low: Option<f64>,

    /// Upper payload bound in kg (defaults to the heaviest payload)
    #[arg(long, allow_negative_numbers = true)]
    pub high: Option<f64>,

    /// Also list every plotted point
    #[arg(long, default_value_t = false)]
    pub points: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScatterArgs, dashboard: &Dashboard) -> DashResult<()> {
    let dataset = dashboard.dataset();
    let low = args.low.unwrap_or_else(|| dataset.min_payload());
    let high = args.high.unwrap_or_else(|| dataset.max_payload());
    debug!("Scatter query: site={} low={} high={}", args.site, low, high);

    let chart = dashboard.scatter_chart(&SiteSelector::parse(&args.site), (low, high))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else if let Some(scatter) = chart.as_scatter() {
        reports::print_scatter(scatter, args.points);
    }
    Ok(())
}
