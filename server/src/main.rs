//! Folio preview server binary.

use clap::Parser;
use color_eyre::eyre::Result;
use folio_core::Config;

/// Command-line interface for the preview server.
#[derive(Parser)]
#[command(
    name = "server",
    version,
    about = "Preview the exported portfolio site"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "folio.toml")]
    config: std::path::PathBuf,

    /// Override the address to listen on
    #[arg(short, long)]
    addr: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    server::init_tracing(cli.verbose);

    let mut config = Config::load_with_env(&cli.config)?;
    if let Some(addr) = cli.addr {
        config.server.addr = addr;
    }

    server::serve(&config).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["server"]);
        assert_eq!(cli.config, std::path::PathBuf::from("folio.toml"));
        assert!(cli.addr.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "server",
            "-c",
            "site.toml",
            "--addr",
            "0.0.0.0:8080",
            "-vv",
        ]);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
        assert_eq!(cli.addr.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(cli.verbose, 2);
    }
}
