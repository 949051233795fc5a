use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for examboard
/// CLI application to build and export exam board roster configurations
#[derive(Parser)]
#[command(
    name = "examboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple exam board CLI: build an ordered exam roster and export it as a JSON board configuration",
    long_about = None
)]
pub struct Cli {
    /// Override roster file path (useful for tests or custom rosters)
    #[arg(global = true, long = "roster")]
    pub roster: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty roster file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add an exam record to the roster
    Add {
        /// Exam subject name
        name: String,

        /// Exam date (YYYY-MM-DD or YYYY/MM/DD)
        date: String,

        /// Start time (HH:MM:SS)
        start: String,

        /// End time (HH:MM:SS)
        end: String,
    },

    /// Replace an exam record (positions as shown by `list`, starting at 1)
    Edit {
        /// Position of the record to replace
        position: usize,

        /// Exam subject name
        name: String,

        /// Exam date (YYYY-MM-DD or YYYY/MM/DD)
        date: String,

        /// Start time (HH:MM:SS)
        start: String,

        /// End time (HH:MM:SS)
        end: String,
    },

    /// Delete an exam record by position
    Del {
        /// Position of the record to delete
        position: usize,
    },

    /// Move an exam record up or down by one position
    Move {
        /// Position of the record to move
        position: usize,

        #[arg(long, value_enum, help = "Direction to move the record")]
        dir: MoveDirection,
    },

    /// List the current roster
    List {
        #[arg(long = "table", help = "Render the roster as an aligned table")]
        table: bool,
    },

    /// Replace the roster with the records of an existing board configuration
    Open {
        /// Path of the JSON configuration to load
        file: String,
    },

    /// Export the roster as a board configuration JSON
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Board title (examName)")]
        title: Option<String>,

        #[arg(long, help = "Board subtitle message")]
        message: Option<String>,

        #[arg(long, help = "Room label (falls back to default_room from config)")]
        room: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Create a backup copy of the roster file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
