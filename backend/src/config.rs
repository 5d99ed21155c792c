#[derive(Debug, Clone, clap::Parser)]
#[command(about = "Serves the balloon pop analytics dashboard")]
pub struct Args {
    /// Directory containing the `game_events.*.csv` snapshots
    #[arg(long, env = "DASHBOARD_DATA_DIR", default_value = "data/")]
    pub data_dir: std::path::PathBuf,

    #[arg(long, default_value = "0.0.0.0:3000")]
    pub bind: String,

    /// Built frontend, served for every non-API path
    #[arg(long, default_value = "frontend/dist/")]
    pub frontend_dir: std::path::PathBuf,

    /// Reload the shared color trend dataset on every render
    #[arg(long)]
    pub no_cache: bool,
}
