use anyhow::Result;
use clap::Parser;
use daily_quote::api::QuoteClient;
use daily_quote::app::App;
use daily_quote::cli::{Cli, CliHandler};
use daily_quote::config::Config;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing::Level;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = cli.command.is_none();

    // Initialize tracing for logging
    init_tracing(cli.debug, interactive);

    let config = Config::load(cli.config.as_deref())?
        .with_overrides(cli.api_base.clone(), cli.origin.clone());

    match &cli.command {
        Some(command) => {
            let client = QuoteClient::new(config.base_url()?, config.request_timeout())?;
            let handler = CliHandler::new(&client);
            let mut stdout = std::io::stdout();
            handler.handle_command(command, &config, &mut stdout).await?;
        }
        None => {
            let mut app = App::new(&config)?;
            app.run().await?;
        }
    }

    Ok(())
}

/// Log to stderr for one-shot commands; to a file while the terminal UI owns the screen
fn init_tracing(debug: bool, interactive: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt().with_max_level(level);

    if !interactive {
        builder.with_writer(std::io::stderr).init();
        return;
    }

    let log_file = Config::log_file_path().ok().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    match log_file {
        Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
        None => builder.with_writer(std::io::sink).init(),
    }
}
