use anyhow::{Context, Result};
use chrono::Utc;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::application::{parse_id, AppError, Command, ExpenseService, Report};
use crate::domain::Expense;
use crate::storage::DEFAULT_FILE;

/// Spendlog - Expense Tracker
#[derive(Parser)]
#[command(name = "spendlog")]
#[command(about = "Record, list, edit and summarize expenses kept in a local JSON file")]
#[command(version)]
pub struct Cli {
    /// Expenses file path
    #[arg(short, long, global = true, env = "SPENDLOG_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Flags taking a value accept a bare flag too (`--amount` with nothing after
// it) and hand it on as an empty string, which validation then drops or rejects.
#[derive(Subcommand)]
pub enum Commands {
    /// Record a new expense dated today
    Add {
        /// What the money was spent on
        #[arg(short, long, num_args = 0..=1, default_missing_value = "", allow_hyphen_values = true)]
        description: Option<String>,

        /// Amount spent, greater than zero (e.g., "3.5" or "100")
        #[arg(short, long, num_args = 0..=1, default_missing_value = "", allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// List all expenses
    List,

    /// Delete an expense
    Delete {
        /// Expense ID
        #[arg(long, num_args = 0..=1, default_missing_value = "", allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// Change the description and/or amount of an expense
    Update {
        /// Expense ID
        #[arg(long, num_args = 0..=1, default_missing_value = "", allow_hyphen_values = true)]
        id: Option<String>,

        /// New description
        #[arg(short, long, num_args = 0..=1, default_missing_value = "", allow_hyphen_values = true)]
        description: Option<String>,

        /// New amount (ignored unless greater than zero)
        #[arg(short, long, num_args = 0..=1, default_missing_value = "", allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Show the total spent, optionally for a single month
    Summary {
        /// Month number (1-12); anything else that is not a number shows the overall total
        #[arg(short, long, num_args = 0..=1, default_missing_value = "", allow_hyphen_values = true)]
        month: Option<String>,
    },

    /// Export expenses to CSV
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Commands {
    /// Validate the raw arguments into a typed command.
    pub fn into_command(self) -> Result<Command, AppError> {
        match self {
            Commands::Add {
                description,
                amount,
            } => Command::add(description, amount.as_deref()),
            Commands::List => Ok(Command::List),
            Commands::Delete { id } => Ok(Command::Delete {
                id: parse_id(id.as_deref())?,
            }),
            Commands::Update {
                id,
                description,
                amount,
            } => Ok(Command::update(
                parse_id(id.as_deref())?,
                description,
                amount.as_deref(),
            )),
            Commands::Summary { month } => Ok(Command::summary(month.as_deref())),
            Commands::Export { output } => Ok(Command::Export { output }),
            Commands::Unknown(args) => {
                debug!("Unknown command {:?}, showing help", args.first());
                Ok(Command::Help)
            }
        }
    }
}

impl Cli {
    /// Parse a full argument vector, program name first.
    ///
    /// An unrecognized flag where the command should be falls back to the
    /// usage text, the same as an unknown command name.
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Self::try_parse_from(&args) {
            Err(e) if e.kind() == ErrorKind::UnknownArgument && !names_subcommand(&args) => {
                Ok(Self::usage_only())
            }
            parsed => parsed,
        }
    }

    fn usage_only() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            verbose: false,
            command: None,
        }
    }

    /// The command to run; a missing command means help.
    pub fn into_command(self) -> Result<Command, AppError> {
        match self.command {
            Some(cmd) => cmd.into_command(),
            None => Ok(Command::Help),
        }
    }

    pub fn run(self) -> Result<()> {
        let service = ExpenseService::open(&self.file);
        let file = self.file.clone();
        let command = self.into_command()?;

        debug!(
            "Running {:?} against {} (mutation: {})",
            command,
            file.display(),
            command.is_mutation()
        );

        let today = Utc::now().date_naive();
        let report = service.execute(command, today)?;
        match &report {
            Report::Export { expenses, output } => {
                run_export_command(expenses, output.as_deref())?;
                if output.is_some() {
                    eprintln!("{}", report);
                }
            }
            _ => println!("{}", report),
        }

        Ok(())
    }
}

/// Whether any argument after the program name is a known subcommand.
fn names_subcommand(args: &[OsString]) -> bool {
    let cli = Cli::command();
    args.iter().skip(1).any(|arg| {
        cli.get_subcommands()
            .any(|sub| arg.to_str() == Some(sub.get_name()))
    })
}

fn run_export_command(expenses: &[Expense], output: Option<&Path>) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::{stdout, Write};

    let exporter = Exporter::new(expenses);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    let count = exporter.export_csv(writer)?;
    debug!("Wrote {} CSV row(s)", count);
    Ok(())
}
