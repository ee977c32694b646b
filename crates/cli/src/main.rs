use clap::Parser;
use roster_core::config::DEFAULT_CONFIG_FILE;
use roster_core::models::student::{StudentUpdate, DEFAULT_AGE};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "roster", about = "Student roster manager with CSV storage", version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Roster CSV file, overriding the configured data_file
    #[arg(long, global = true)]
    file: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Add a student
    Add {
        id: String,
        name: String,
        #[arg(long, default_value_t = DEFAULT_AGE, allow_negative_numbers = true)]
        age: i32,
        /// Comma-separated grades, e.g. 88,92,75
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        grades: Vec<i64>,
    },
    /// Update fields of an existing student
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        age: Option<i32>,
        /// Replacement grade list; pass the flag with no value to clear all grades
        #[arg(long, value_delimiter = ',', num_args = 0.., allow_negative_numbers = true)]
        grades: Option<Vec<i64>>,
    },
    /// Delete a student
    Delete { id: String },
    /// List all students in the data file
    List,
    /// Show a single student
    Show { id: String },
    /// Start the interactive menu (default)
    Menu,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = cli.file.as_deref();
    let data_file = || -> anyhow::Result<_> {
        Ok(commands::resolve_config(&cli.config, file)?.data_file())
    };

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Init { force } => {
            commands::init::run(&cli.config, file, force)?;
        }
        Commands::Add {
            id,
            name,
            age,
            grades,
        } => {
            commands::add::run(&data_file()?, &id, &name, age, grades)?;
        }
        Commands::Update {
            id,
            name,
            age,
            grades,
        } => {
            let update = StudentUpdate { name, age, grades };
            commands::update::run(&data_file()?, &id, update)?;
        }
        Commands::Delete { id } => {
            commands::delete::run(&data_file()?, &id)?;
        }
        Commands::List => {
            commands::list::run(&data_file()?)?;
        }
        Commands::Show { id } => {
            commands::list::show(&data_file()?, &id)?;
        }
        Commands::Menu => {
            let config = commands::resolve_config(&cli.config, file)?;
            commands::menu::run(&config)?;
        }
    }

    Ok(())
}
