use std::process::ExitCode;
use weather_time_agent::cli::{self, Commands};
use weather_time_agent::config::AgentConfig;
use weather_time_agent::{BootstrapError, agent, launcher, telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.shows_usage() {
                eprintln!("{}\n\n{}", e, cli::usage());
            } else {
                eprintln!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BootstrapError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(cli) = cli::parse(args.as_slice())? else {
        return Ok(());
    };

    // The ADK server installs its own telemetry subscriber.
    if !matches!(cli.mode(), Commands::Serve { .. }) {
        telemetry::init();
    }

    let config = AgentConfig::from_env();
    tracing::debug!(?config, "loaded configuration");

    let model = agent::create_model(&config)?;
    let root = agent::build_agent(model)?;

    match cli.mode() {
        Commands::Chat => tracing::info!("starting console"),
        Commands::Serve { port } => tracing::info!(port, "starting web server"),
    }
    launcher::launch(root).await
}
