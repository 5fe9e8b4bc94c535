mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use modelpull::ModelFetcher;
use serde::Serialize;

#[derive(Serialize)]
struct FetchReport {
    league_code: String,
    bytes: usize,
    cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            league,
            output,
            base_url,
        } => {
            let fetcher = ModelFetcher::with_base_url(base_url);
            let mut reports = Vec::with_capacity(league.len());

            for league_code in league {
                let cached = fetcher.is_cached(&league_code).await;
                let model = fetcher
                    .get(&league_code)
                    .await
                    .with_context(|| format!("could not fetch model '{}'", league_code))?;

                let path = match &output {
                    Some(dir) => {
                        std::fs::create_dir_all(dir)
                            .with_context(|| format!("could not create {:?}", dir))?;
                        let file = dir.join(format!("model_{}.bin", league_code));
                        std::fs::write(&file, &model[..])
                            .with_context(|| format!("could not write {:?}", file))?;
                        Some(file.display().to_string())
                    }
                    None => None,
                };

                reports.push(FetchReport {
                    league_code,
                    bytes: model.len(),
                    cached,
                    path,
                });
            }

            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}
