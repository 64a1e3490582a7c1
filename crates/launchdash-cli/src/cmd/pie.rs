use crate::reports;
use clap::Args;
use launchdash_core::config::DashboardConfig;
use launchdash_core::error::DashResult;
use launchdash_core::query::SiteSelector;
use launchdash_core::Dashboard;

#[derive(Args, Debug, Clone)]
pub struct PieArgs {
    #[command(flatten)]
    pub config: DashboardConfig,

    /// Launch site, or ALL
    #[arg(short, long, default_value = "ALL")]
    pub site: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: PieArgs, dashboard: &Dashboard) -> DashResult<()> {
    let chart = dashboard.pie_chart(&SiteSelector::parse(&args.site));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else if let Some(pie) = chart.as_pie() {
        reports::print_pie(pie);
    }
    Ok(())
}
