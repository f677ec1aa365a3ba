use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::api::{Quote, QuoteClient, MAX_RECENT_LIMIT};
use crate::config::Config;
use crate::format::format_date;
use crate::ui::history::EMPTY_HISTORY_PLACEHOLDER;

/// daily-quote - terminal client for the daily quote service
#[derive(Parser, Debug)]
#[command(name = "daily-quote")]
#[command(about = "A terminal client for the daily quote service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, bypassing origin-based resolution
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Origin the client runs at, used to pick the API base URL
    #[arg(long, global = true)]
    pub origin: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print today's quote
    Today,

    /// Print the most recent quotes
    Recent {
        /// Number of quotes (1-50)
        #[arg(long, short, default_value_t = crate::api::DEFAULT_HISTORY_LIMIT,
              value_parser = clap::value_parser!(u32).range(1..=MAX_RECENT_LIMIT as i64))]
        limit: u32,
    },

    /// Print the quote for a specific date (YYYY-MM-DD)
    Date {
        date: NaiveDate,
    },

    /// Check the quote service health
    Health,

    /// Show the effective configuration
    Config,
}

/// Runs one-shot commands against the quote service
pub struct CliHandler<'a> {
    client: &'a QuoteClient,
}

impl<'a> CliHandler<'a> {
    pub fn new(client: &'a QuoteClient) -> Self {
        Self { client }
    }

    /// Execute a command, writing its output to `out`
    pub async fn handle_command<W: Write>(&self, command: &Commands, config: &Config, out: &mut W) -> Result<()> {
        match command {
            Commands::Today => {
                let quote = self.client.fetch_today_quote().await?;
                write_quote(out, &quote)?;
            }
            Commands::Recent { limit } => {
                let quotes = self.client.fetch_recent_quotes(*limit).await?;
                if quotes.is_empty() {
                    writeln!(out, "{}", EMPTY_HISTORY_PLACEHOLDER)?;
                }
                for (index, quote) in quotes.iter().enumerate() {
                    if index > 0 {
                        writeln!(out)?;
                    }
                    write_quote(out, quote)?;
                }
            }
            Commands::Date { date } => {
                let quote = self.client.fetch_quote_by_date(*date).await?;
                write_quote(out, &quote)?;
            }
            Commands::Health => {
                let health = self.client.health().await?;
                let marker = if health.is_healthy() { "✓" } else { "✗" };
                writeln!(out, "{} {} ({}) {}", marker, health.service, health.version, health.status)?;
                if !health.is_healthy() {
                    return Err(anyhow::anyhow!("Service reported status '{}'", health.status));
                }
            }
            Commands::Config => {
                writeln!(out, "# API base URL: {}", self.client.base_url())?;
                match Config::default_path() {
                    Ok(path) => writeln!(out, "# Config file: {}", path.display())?,
                    Err(e) => writeln!(out, "# Config file: {}", e)?,
                }
                write!(out, "{}", config.to_toml()?)?;
            }
        }
        Ok(())
    }
}

fn write_quote<W: Write>(out: &mut W, quote: &Quote) -> std::io::Result<()> {
    writeln!(out, "{}", format_date(&quote.date))?;
    writeln!(out, "{}", quote.content)?;
    writeln!(out, "{}", quote.attribution())?;
    if quote.is_fallback == Some(true) {
        writeln!(out, "(历史语录)")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recent_limit() {
        let cli = Cli::try_parse_from(["daily-quote", "recent", "--limit", "5"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Recent { limit: 5 }));

        let cli = Cli::try_parse_from(["daily-quote", "recent"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Recent { limit: 20 }));

        assert!(Cli::try_parse_from(["daily-quote", "recent", "--limit", "51"]).is_err());
    }

    #[test]
    fn test_parse_date() {
        let cli = Cli::try_parse_from(["daily-quote", "date", "2024-03-15"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Date {
                date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
            })
        );
        assert!(Cli::try_parse_from(["daily-quote", "date", "15/03/2024"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "daily-quote",
            "--api-base",
            "http://localhost:9000",
            "today",
            "--debug",
        ])
        .unwrap();
        assert!(cli.debug);
        assert_eq!(cli.api_base.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cli.command, Some(Commands::Today));
    }

    #[test]
    fn test_write_quote() {
        let mut out = Vec::new();
        write_quote(&mut out, &Quote::new("认识你自己。", "苏格拉底", "2024-03-15")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2024年3月15日 星期五\n认识你自己。\n—— 苏格拉底\n"
        );
    }
}
