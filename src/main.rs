use std::path::PathBuf;

use clap::{
    CommandFactory, Parser,
    builder::{
        NonEmptyStringValueParser, Styles,
        styling::{AnsiColor, Effects},
    },
    error::ErrorKind,
};
use clap_complete::{Shell, generate};

use prodcredits::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Producer name to search for
    #[clap(
        required_unless_present = "completions",
        value_parser = NonEmptyStringValueParser::new()
    )]
    producer: Option<String>,

    /// Genius API token (defaults to GENIUS_ACCESS_TOKEN)
    #[clap(long)]
    token: Option<String>,

    /// Output CSV filename
    #[clap(long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Also print the matched songs as a table
    #[clap(long)]
    table: bool,

    /// Print shell completions and exit
    #[clap(long, value_name = "SHELL", exclusive = true)]
    completions: Option<Shell>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let token = match config::resolve_token(cli.token) {
        Ok(t) => t,
        Err(e) => Cli::command()
            .error(ErrorKind::MissingRequiredArgument, e)
            .exit(),
    };

    let producer = cli.producer.unwrap_or_default();

    if let Err(e) = cli::search(&producer, &token, &cli.output, cli.table).await {
        error!("{}", e);
    }
}
