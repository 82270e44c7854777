use anyhow::Context;
use clap::Parser;
use covid_fetch::core::ConfigProvider;
use covid_fetch::utils::logger;
use covid_fetch::{CliConfig, FetchEngine, HttpFetcher, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting covid-fetch");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = cli.settings().context("invalid configuration")?;

    if cli.list {
        for endpoint in settings.endpoints() {
            println!(
                "{}\t{}\t{}\t{}",
                endpoint.name,
                endpoint.url,
                settings.data_dir().join(&endpoint.destination).display(),
                endpoint.description.as_deref().unwrap_or("-")
            );
        }
        return Ok(());
    }

    let fetcher = HttpFetcher::new(&settings.http).context("cannot build HTTP client")?;
    let storage = LocalStorage::new(settings.data_dir());
    let engine = FetchEngine::new(fetcher, storage);

    let outcomes = engine.run(&settings).await.context("fetch run aborted")?;
    for outcome in &outcomes {
        println!(
            "{}\t{}\t{} bytes\t{}",
            outcome.endpoint,
            outcome.path.display(),
            outcome.bytes_written,
            outcome.fetched_at.to_rfc3339()
        );
    }

    Ok(())
}
