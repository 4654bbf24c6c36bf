use anyhow::Context;
use clap::Parser;
use userdesk::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("loading configuration")?;

    match userdesk::logging::init(cli.log_level.as_deref(), &config.logging) {
        Ok(path) => tracing::info!(path = %path.display(), "logging initialized"),
        Err(err) => eprintln!("warning: logging disabled: {err}"),
    }
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        url = %config.api.users_url,
        "starting"
    );

    let result = userdesk::ui::runtime::run(&config);
    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
    }
    result
}
