use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use myspot::{cli, config, error, logging, session, warning};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify and cache the user token
    Auth,

    /// Print an app-only access token
    Token,

    /// Show a playlist and its tracks
    Playlist(PlaylistOptions),

    /// Show recently played tracks
    History,

    /// Show the best match for a search query
    Search(SearchOptions),

    /// Search for tracks and add the matches to a playlist
    Add(AddOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Playlist name or id
    pub identifier: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    pub query: String,

    /// Catalog item type to search
    #[clap(long = "type", default_value = session::DEFAULT_SEARCH_TYPE)]
    pub kind: String,

    /// Number of results requested from the service
    #[clap(long, default_value_t = session::DEFAULT_SEARCH_LIMIT)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct AddOptions {
    /// Playlist name or id
    pub playlist: String,

    /// One search query per track to add
    #[clap(required = true)]
    pub queries: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let _log_guard = match logging::init_logging(&config::log_file()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            warning!("Logging disabled: {}", e);
            None
        }
    };

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Token => cli::token().await,
        Command::Playlist(opt) => cli::playlist(opt.identifier).await,
        Command::History => cli::history().await,
        Command::Search(opt) => cli::search(opt.query, opt.kind, opt.limit).await,
        Command::Add(opt) => cli::add(opt.playlist, opt.queries).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
