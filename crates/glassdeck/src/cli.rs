use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glassdeck")]
#[command(author, version, about)]
#[command(long_about = "A glassmorphic slide deck viewer.\n\n\
    Describe your slides in YAML and present them beautifully.\n\n\
    Examples:\n  \
    glassdeck                       Present the built-in sample deck\n  \
    glassdeck talk.yaml             Present a deck (fullscreen)\n  \
    glassdeck talk.yaml --windowed  Present in a window\n  \
    glassdeck sample                Print the sample deck YAML")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Deck file to present (YAML)
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Theme to use, overriding the deck and config
    #[arg(long, global = false)]
    pub theme: Option<String>,

    /// Increase output verbosity
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the built-in sample deck YAML to stdout
    Sample,

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.start_slide)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Sample) => {
                crate::commands::sample::run();
                Ok(())
            }
            Some(Commands::Version) => {
                println!("glassdeck {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => {
                if let Some(file) = &self.file {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                    if self.verbose > 0 && !self.quiet {
                        eprintln!("Presenting {}", file.display());
                    }
                } else if self.verbose > 0 && !self.quiet {
                    eprintln!("No deck given, presenting the built-in sample");
                }
                crate::app::run(self.file, self.windowed, self.slide, self.theme)
            }
        }
    }
}
