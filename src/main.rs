//! Wordle Assist - CLI
//!
//! Play the game, get help with a game played elsewhere, or run automated
//! games against the suggestion chain.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use wordle_assist::{
    commands::{Assistant, run_assist, run_play, run_simulation, solve_word},
    config::GameConfig,
    game::{GameSession, SessionRegistry},
    output::{print_simulation_result, print_solve_result},
    solver::SuggestionStrategy,
    wordlists::{self, DictionaryProvider, Language, StaticDictionaries, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle game and assistant with constraint filtering and suggestion fallbacks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary language: 'en' (default), 'fr', or the tag for --wordlist
    #[arg(short, long, global = true, default_value = "en")]
    language: String,

    /// Load the dictionary for --language from a file, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = wordle_assist::config::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Letters per word
    #[arg(long, global = true, default_value_t = wordle_assist::config::DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Deadline for one suggester call, in milliseconds
    #[arg(long, global = true, default_value = "5000")]
    timeout_ms: u64,

    /// Strategy: frequency (default) or csp (first matching word)
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a random secret (default)
    Play,

    /// Get suggestions for a game played elsewhere
    Assist,

    /// Let the suggestion chain solve a specific word
    Solve {
        /// The target word to solve
        word: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play many automated games in parallel and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible secrets
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_word_length(self.word_length)
            .with_max_attempts(self.max_attempts)
            .with_suggester_timeout(Duration::from_millis(self.timeout_ms))
    }

    fn strategy(&self) -> SuggestionStrategy {
        SuggestionStrategy::from_name(&self.strategy, Duration::from_millis(self.timeout_ms))
    }
}

/// Build the dictionary provider from the --wordlist and --language flags
///
/// Without --wordlist the bundled English and French lists are used.
fn load_provider(cli: &Cli, language: &Language) -> Result<Arc<dyn DictionaryProvider>> {
    match &cli.wordlist {
        Some(path) => {
            let dictionary = load_from_file(language.clone(), path, cli.word_length)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            if dictionary.is_empty() {
                bail!(
                    "{} has no {}-letter words",
                    path.display(),
                    cli.word_length
                );
            }
            Ok(Arc::new(StaticDictionaries::new().with(dictionary)))
        }
        None => Ok(Arc::new(wordlists::bundled(cli.word_length))),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let language = Language::from(cli.language.as_str());
    let provider = load_provider(&cli, &language)?;

    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&cli, provider, &language),
        Some(Commands::Assist) => run_assist_command(&cli, provider.as_ref(), &language),
        Some(Commands::Solve { word, json }) => {
            run_solve_command(&cli, provider, &language, word, *json)
        }
        Some(Commands::Simulate { count, seed }) => {
            run_simulate_command(&cli, provider, &language, *count, *seed)
        }
    }
}

fn run_play_command(
    cli: &Cli,
    provider: Arc<dyn DictionaryProvider>,
    language: &Language,
) -> Result<()> {
    let mut session = GameSession::builder(provider)
        .config(cli.config())
        .strategy(cli.strategy())
        .build();
    run_play(&mut session, language, &mut io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))
}

fn run_assist_command(
    cli: &Cli,
    provider: &dyn DictionaryProvider,
    language: &Language,
) -> Result<()> {
    let dictionary = provider
        .load(language)
        .with_context(|| format!("no dictionary for language '{language}'"))?;
    let mut assistant = Assistant::new(dictionary, cli.strategy(), &cli.config());
    run_assist(&mut assistant, &mut io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))
}

fn run_solve_command(
    cli: &Cli,
    provider: Arc<dyn DictionaryProvider>,
    language: &Language,
    word: &str,
    json: bool,
) -> Result<()> {
    let mut session = GameSession::builder(provider)
        .config(cli.config())
        .strategy(cli.strategy())
        .build();
    let result = solve_word(&mut session, language, word)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_solve_result(&result, cli.verbose);
    }
    Ok(())
}

fn run_simulate_command(
    cli: &Cli,
    provider: Arc<dyn DictionaryProvider>,
    language: &Language,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    println!("Running {count} games in '{language}'...");

    let config = cli.config();
    let mut registry = SessionRegistry::new(provider, config, cli.strategy());
    if let Some(seed) = seed {
        registry = registry.with_seed(seed);
    }

    let result = run_simulation(&registry, language, count)?;
    print_simulation_result(&result, config.max_attempts);
    Ok(())
}
