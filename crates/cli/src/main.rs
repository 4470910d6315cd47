use std::io;

use inquisitor_cli::Config;

fn main() -> anyhow::Result<()> {
    inquisitor_observability::init(&Config::log_filter_from_env());

    let config = Config::from_env();
    tracing::info!(?config, "starting inventory session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    inquisitor_cli::run(&config, stdin.lock(), stdout.lock())?;

    tracing::info!("session ended");
    Ok(())
}
