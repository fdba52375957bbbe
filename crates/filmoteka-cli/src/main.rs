use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{clear, lang, library, list};
use filmoteka_models::SortMode;

mod commands;
mod i18n;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "filmoteka")]
#[command(about = "Filmoteka - Keep track of the movies you plan to watch and the ones you've seen")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a movie to the list
    #[command(long_about = "Add a movie to the top of the list. New entries start as planned with no rating. The title may be given as several words without quotes.")]
    Add {
        /// Movie title
        #[arg(required = true)]
        title: Vec<String>,
    },
    /// Show the list, split into planned and watched
    #[command(long_about = "Display the movie list in two panels, planned and watched, with totals for each. The view can be narrowed with a search query and reordered without touching the stored list.")]
    List {
        /// Only show titles containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order for both panels
        #[arg(long, default_value = "newest", value_enum)]
        sort: SortArg,
    },
    /// Toggle a movie between planned and watched
    Toggle {
        /// Movie id (a unique prefix is enough)
        id: String,
    },
    /// Rate a movie from 0 to 10
    #[command(long_about = "Set a movie's rating. Values are clamped to the 0-10 range and anything unreadable counts as 0. Movies do not have to be watched to be rated.")]
    Rate {
        /// Movie id (a unique prefix is enough)
        id: String,

        /// Rating value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Rename a movie
    #[command(long_about = "Change a movie's title. Without a new title on the command line, prompts with the current title prefilled. An empty title leaves the movie unchanged.")]
    Rename {
        /// Movie id (a unique prefix is enough)
        id: String,

        /// New title (if not provided, will prompt)
        title: Vec<String>,
    },
    /// Remove a movie from the list
    #[command(visible_alias = "rm")]
    Remove {
        /// Movie id (a unique prefix is enough)
        id: String,
    },
    /// Remove every movie from the list
    #[command(long_about = "Clear the whole list. Asks for confirmation unless --yes is given.")]
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Show or change the display language
    #[command(long_about = "Show the current display language, or switch to another one. Supported codes: uk, en, fr, ru.")]
    Lang {
        /// Language code to switch to
        code: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    /// Most recently added first
    Newest,
    /// Title, A to Z
    Title,
    /// Highest rating first
    Rating,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => SortMode::Newest,
            SortArg::Title => SortMode::TitleAsc,
            SortArg::Rating => SortMode::RatingDesc,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Initialize logging with verbose level
    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    // Create output handler
    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Add { title } => library::run_add(&title.join(" "), &output),
        Commands::List { search, sort } => {
            list::run_list(search.as_deref().unwrap_or(""), sort.into(), &output)
        }
        Commands::Toggle { id } => library::run_toggle(&id, &output),
        Commands::Rate { id, value } => library::run_rate(&id, &value, &output),
        Commands::Rename { id, title } => library::run_rename(&id, &title.join(" "), &output),
        Commands::Remove { id } => library::run_remove(&id, &output),
        Commands::Clear { yes } => clear::run_clear(yes, &output),
        Commands::Lang { code } => lang::run_lang(code.as_deref(), &output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rate_accepts_negative_values() {
        // A negative rating has to reach the clamping logic instead of
        // being read as an unknown flag.
        let cli = Cli::try_parse_from(["filmoteka", "rate", "7f3a", "-3"]).unwrap();
        match cli.command {
            Commands::Rate { id, value } => {
                assert_eq!(id, "7f3a");
                assert_eq!(value, "-3");
            }
            _ => panic!("expected the rate subcommand"),
        }
    }
}
