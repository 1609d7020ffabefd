use anyhow::Context;
use clap::Parser;
use summarize_form::api::SummarizeClient;
use summarize_form::cli::Cli;
use summarize_form::logging::init_tracing;
use summarize_form::ui::{self, app::App};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load configuration");
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let client = SummarizeClient::new(&config.server).context("Failed to build HTTP client")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let app = App::new(&config.form, client.endpoint());
    ui::run(app, client, runtime.handle().clone())?;

    Ok(())
}
