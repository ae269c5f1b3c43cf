use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sqlgen_config::FileFormat;

mod commands;
mod logging;
mod utils;
use commands::{cmd_export, cmd_init, cmd_list, cmd_new, cmd_package, cmd_sql};

/// sqlgen command-line interface.
#[derive(Parser, Debug)]
#[command(name = "sqlgen", author, version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize sqlgen.json with defaults.
    Init,
    /// Create a new entity model template.
    New {
        /// Class name (PascalCase).
        name: String,
        /// Dotted package; the file is placed in the matching sub-directory.
        #[arg(short = 'p', long = "package")]
        package: Option<String>,
        /// Model file format (defaults to the configured format).
        #[arg(short = 'f', long = "format", value_enum)]
        format: Option<FileFormat>,
    },
    /// Print the CREATE TABLE statement for one entity class.
    Sql {
        /// Qualified or simple class name.
        class: String,
    },
    /// Print CREATE TABLE statements for every entity in a package.
    Package {
        /// Dotted package name; all packages when omitted.
        package: Option<String>,
    },
    /// List model classes and whether they map to a table.
    List,
    /// Write one <table>.sql file per entity into the output directory.
    Export {
        /// Output directory (defaults to outputDir from sqlgen.json).
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
        /// Dotted package name; all packages when omitted.
        package: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Init => cmd_init(),
        Commands::New {
            name,
            package,
            format,
        } => cmd_new(name, package, format),
        Commands::Sql { class } => cmd_sql(&class),
        Commands::Package { package } => cmd_package(package.as_deref()),
        Commands::List => cmd_list(),
        Commands::Export { out, package } => cmd_export(out, package.as_deref()).await,
    }
}
