use anyhow::Result;
use spendlog::cli::Cli;
use spendlog::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    // Diagnostics are optional; a logger that fails to start must not block the command.
    let _logger = init_logging(cli.verbose).ok();
    cli.run()
}
