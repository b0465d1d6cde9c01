//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod doctor;
pub mod init;
pub mod list;
pub mod reorder;
pub mod reset;
pub mod sync;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Init(args) => init::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
        Commands::Sync(args) => sync::run(ctx, args),
        Commands::Move(args) => reorder::run(ctx, args),
        Commands::Reset(args) => reset::run(ctx, args),
        Commands::Doctor(args) => doctor::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the board root and seed the skill order
    Init(init::InitArgs),

    /// Show the current skill order
    List(list::ListArgs),

    /// Fetch the canonical skill list and reconcile the board
    Sync(sync::SyncArgs),

    /// Move a skill to the slot another skill occupies
    Move(reorder::MoveArgs),

    /// Reset the skill order to the fallback list
    Reset(reset::ResetArgs),

    /// Health checks for storage and resolver
    Doctor(doctor::DoctorArgs),
}
