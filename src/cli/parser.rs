use crate::export::ExportFormat;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for BoardChamp
#[derive(Parser)]
#[command(
    name = "boardchamp",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track board-game sessions: players, scores, finishing positions and play time",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum GameAction {
    /// Add a game to the catalogue
    Add {
        /// Game name
        name: String,
    },

    /// List the catalogue in display order
    List,

    /// Remove a game from the catalogue (history is kept)
    Remove {
        name: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Move a game one place up or down
    #[command(group(ArgGroup::new("direction").required(true).args(["up", "down"])))]
    Move {
        name: String,

        #[arg(long)]
        up: bool,

        #[arg(long)]
        down: bool,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor", requires = "edit_config")]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the game catalogue
    Game {
        #[command(subcommand)]
        action: GameAction,
    },

    /// Record a finished session
    Add {
        /// Game name
        game: String,

        /// Date the session was played (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long = "start")]
        start: Option<String>,

        /// End time (HH:MM); at or before the start means the next day
        #[arg(long = "end")]
        end: Option<String>,

        /// Player as NAME[:SCORE[:POSITION]], repeat for each player
        #[arg(long = "player", short = 'p', value_name = "NAME[:SCORE[:POS]]")]
        players: Vec<String>,

        /// Free text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show the session history grouped by date
    List {
        /// Filter by period: YYYY, YYYY-MM, YYYY-MM-DD or ranges like YYYY-MM:YYYY-MM
        #[arg(long, short)]
        period: Option<String>,

        /// Only sessions of this game
        #[arg(long, short)]
        game: Option<String>,
    },

    /// Show one session in detail
    Show {
        /// Session id (see `list`)
        id: i64,
    },

    /// Change a stored session
    Edit {
        /// Session id
        id: i64,

        #[arg(long)]
        game: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New start time (HH:MM)
        #[arg(long = "start")]
        start: Option<String>,

        /// New end time (HH:MM)
        #[arg(long = "end")]
        end: Option<String>,

        /// Replace the players; repeat for each player
        #[arg(long = "player", short = 'p', value_name = "NAME[:SCORE[:POS]]")]
        players: Vec<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a session by id
    Del {
        id: i64,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Share one session as JSON, or dump the whole history
    Export {
        /// Session to share
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<i64>,

        /// Export the whole history instead of one session
        #[arg(long, requires = "file")]
        all: bool,

        /// Format of a full history export
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Restrict a full export to a period (same syntax as `list --period`)
        #[arg(long, requires = "all")]
        period: Option<String>,

        /// Output file; a single session goes to stdout when omitted
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import a shared session (reads stdin when no file is given)
    Import {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Add duplicates without asking
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Preview the duration of a session without saving it
    Duration {
        /// Start time (HH:MM)
        #[arg(long = "start")]
        start: String,

        /// End time (HH:MM)
        #[arg(long = "end")]
        end: String,

        /// Date (YYYY-MM-DD), today when omitted
        #[arg(long)]
        date: Option<String>,
    },
}
