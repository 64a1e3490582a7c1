use crate::reports;
use clap::Args;
use launchdash_core::config::DashboardConfig;
use launchdash_core::error::DashResult;
use launchdash_core::Dashboard;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub config: DashboardConfig,

    /// Print the dashboard controls as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: InspectArgs, dashboard: &Dashboard) -> DashResult<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard.controls())?);
        return Ok(());
    }

    reports::print_dataset_overview(dashboard);
    Ok(())
}
