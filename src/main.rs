use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moodtune::{
    cli, config, moods::MoodParameterMap, provider::CredentialManager,
    recommend::RecommendationClient, utils,
};

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
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Recommend tracks or playlists for a mood
    Recommend(RecommendOptions),

    /// Search the provider for tracks, artists, or albums
    Search(SearchOptions),

    /// Show featured playlists
    Playlists(PlaylistsOptions),

    /// Run the JSON API server
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Mood key (happy, sad, chill, energetic, focus, party, sleep)
    #[clap(long)]
    pub mood: String,

    /// Maximum number of results
    #[clap(long, default_value_t = 20)]
    pub limit: u32,

    /// Recommend playlists instead of tracks
    #[clap(long)]
    pub playlists: bool,

    /// Open the top result in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    pub query: String,

    /// Entity kind(s) to search: track, artist, album, or all
    #[clap(
        long = "type",
        default_value = "track",
        value_parser = utils::parse_search_kinds
    )]
    pub kinds: utils::SearchKinds,

    /// Maximum number of results per kind
    #[clap(long, default_value_t = 20)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Maximum number of playlists
    #[clap(long, default_value_t = 20)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    config::load_env().await;

    let cli_args = Cli::parse();

    if let Command::Completions(opt) = &cli_args.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let credentials = Arc::new(CredentialManager::new(config::provider_config()));
    credentials.initialize().await;

    let moods = MoodParameterMap::load(&config::mood_table_path()).await;
    let client = Arc::new(RecommendationClient::with_moods(
        config::provider_config(),
        credentials,
        moods,
    ));

    match cli_args.command {
        Command::Recommend(opt) => {
            cli::recommend(&client, opt.mood, opt.limit, opt.playlists, opt.open).await
        }
        Command::Search(opt) => cli::search(&client, opt.query, opt.kinds, opt.limit).await,
        Command::Playlists(opt) => cli::playlists(&client, opt.limit).await,
        Command::Serve => cli::serve(Arc::clone(&client)).await,
        Command::Completions(_) => {} // handled above, before credential setup
    }
}
