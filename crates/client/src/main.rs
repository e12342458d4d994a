//! catchpoint-client CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use catchpoint_client::cli::{Cli, Commands};
use catchpoint_client::client::favorites::FavoriteDataQuery;
use catchpoint_client::output::format_output;
use catchpoint_client::{CatchpointClient, Config};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable JSON.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catchpoint_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> catchpoint_client::Result<String> {
    let mut config = Config::new(cli.client_id, cli.client_secret)
        .with_base_url(cli.base_url)
        .with_version(cli.api_version);
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let client = CatchpointClient::new(config)?;

    let value = match cli.command {
        Commands::Performance(cmd) => {
            use catchpoint_client::cli::performance::PerformanceAction;
            match cmd.action {
                PerformanceAction::Raw {
                    testid,
                    start,
                    end,
                    tz,
                } => client.raw(&testid, start, end, tz.as_deref()).await?,
            }
        }
        Commands::Favorites(cmd) => {
            use catchpoint_client::cli::favorites::FavoritesAction;
            match cmd.action {
                FavoritesAction::List => client.favorite_charts().await?,
                FavoritesAction::Details { favid } => client.favorite_details(&favid).await?,
                FavoritesAction::Data {
                    favid,
                    start,
                    end,
                    tz,
                    tests,
                } => {
                    client
                        .favorite_data(
                            &favid,
                            FavoriteDataQuery {
                                start,
                                end,
                                tz,
                                tests,
                            },
                        )
                        .await?
                }
            }
        }
        Commands::Nodes(cmd) => {
            use catchpoint_client::cli::nodes::NodesAction;
            match cmd.action {
                NodesAction::List => client.nodes().await?,
                NodesAction::Get { node_id } => client.node(&node_id).await?,
            }
        }
    };

    Ok(format_output(&value, cli.format))
}
