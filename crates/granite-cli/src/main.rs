mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::RoleArg;

#[derive(Parser)]
#[command(name = "granite", about = "Stone catalog manager and photo viewer")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (TOML); defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Configured identity to act as
    #[arg(long = "as", global = true, value_enum, default_value = "admin")]
    as_role: RoleArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries, newest first
    List(commands::list::ListArgs),
    /// Show inventory analytics
    Stats,
    /// Add a listing with photos
    Add(commands::add::AddArgs),
    /// Edit a listing, optionally appending photos
    Edit(commands::edit::EditArgs),
    /// Mark a listing available or sold
    SetStatus(commands::status::SetStatusArgs),
    /// Delete a listing and its photos
    Delete(commands::status::DeleteArgs),
    /// Send a buy request and print the chat link
    Buy(commands::buy::BuyArgs),
    /// Replay an input script against the photo viewer
    View(commands::view::ViewArgs),
    /// Print a default settings file
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // These two never touch the catalog or the identity table.
    match &cli.command {
        Commands::Config(args) => return commands::config::run(args),
        Commands::View(args) => return commands::view::run(args),
        _ => {}
    }

    let ctx = commands::Context::load(cli.config.as_deref(), cli.as_role.into())?;
    match &cli.command {
        Commands::List(args) => commands::list::run(&ctx, args),
        Commands::Stats => commands::list::stats(&ctx),
        Commands::Add(args) => commands::add::run(&ctx, args),
        Commands::Edit(args) => commands::edit::run(&ctx, args),
        Commands::SetStatus(args) => commands::status::set_status(&ctx, args),
        Commands::Delete(args) => commands::status::delete(&ctx, args),
        Commands::Buy(args) => commands::buy::run(&ctx, args),
        Commands::Config(_) | Commands::View(_) => Ok(()),
    }
}
