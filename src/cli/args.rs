use clap::Parser;

/// Generates icon16.png, icon32.png, icon48.png and icon128.png from logo.png in the
/// current directory.
#[derive(Parser)]
#[command(name = "iconpack", version, about = "Browser extension icon generator")]
pub struct CliArgs {
    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
