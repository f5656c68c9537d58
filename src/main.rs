use anyhow::Result;
use clap::Parser;
use outfit_advisor::cli::Cli;
use outfit_advisor::utils::logging;
use outfit_advisor::{App, Config};
use std::process::ExitCode;

/// 0 si se recibió un análisis; 1 ante cualquier error
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // Configuración: valores por defecto, TOML y entorno
    let mut config = Config::load()?;
    config.verbose_logging |= cli.verbose;

    logging::init(config.verbose_logging);

    let app = App::initialize(config)?;

    if cli.check_health {
        app.check_health().await?;
    }

    app.run(cli).await
}
