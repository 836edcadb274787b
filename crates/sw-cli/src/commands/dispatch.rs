use sw_config::SitewiseConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &SitewiseConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Audit(args) => commands::audit::handle(&args, config, flags).await,
        Commands::Decay(args) => commands::decay::handle(&args, config, flags),
        Commands::Links(args) => commands::links::handle(&args, config, flags),
        Commands::Freshness(args) => commands::freshness::handle(&args, config, flags),
        Commands::PageTwo(args) => commands::page_two::handle(&args, config, flags),
        Commands::Windows => commands::windows::handle(config, flags),
        Commands::Config => commands::config::handle(config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
