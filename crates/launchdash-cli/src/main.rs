use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use launchdash_core::config::DashboardConfig;
use launchdash_core::Dashboard;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(
        global = true,
        short,
        long,
        default_value = "data/spacex_launch_dash.csv"
    )]
    data: String,

    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize the loaded launch records
    Inspect(cmd::inspect::InspectArgs),
    /// Success breakdown by site, or by outcome for one site
    Pie(cmd::pie::PieArgs),
    /// Payload vs outcome for a site and payload range
    Scatter(cmd::scatter::ScatterArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (cli_config, sub_matches) = match &cli.command {
        Commands::Inspect(args) => (&args.config, matches.subcommand_matches("inspect")),
        Commands::Pie(args) => (&args.config, matches.subcommand_matches("pie")),
        Commands::Scatter(args) => (&args.config, matches.subcommand_matches("scatter")),
    };

    let config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading dashboard config from: {}", path);
            let mut file_config = DashboardConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            });
            if let Some(sub) = sub_matches {
                file_config.merge_from_cli(cli_config, sub);
            }
            file_config
        }
        None => {
            if cli.debug {
                warn!("No config file given. Using defaults and command line flags.");
            }
            cli_config.clone()
        }
    };

    let dashboard = match Dashboard::load(&cli.data, config) {
        Ok(d) => d,
        Err(e) => {
            if e.is_load_failure() {
                error!("❌ FATAL ERROR LOADING DATASET:");
            } else {
                error!("❌ INVALID DASHBOARD CONFIG:");
            }
            error!("   {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Inspect(args) => cmd::inspect::run(args, &dashboard),
        Commands::Pie(args) => cmd::pie::run(args, &dashboard),
        Commands::Scatter(args) => cmd::scatter::run(args, &dashboard),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
