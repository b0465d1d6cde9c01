//! sb init - Initialize the board root and seed the skill order

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Reseed from the fallback list even if already initialized
    #[arg(long, short)]
    pub force: bool,
}

pub fn run(ctx: &AppContext, args: &InitArgs) -> Result<()> {
    let board = ctx.board();

    if board.is_seeded()? && !args.force {
        if ctx.robot_mode {
            println!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "message": "Already initialized",
                    "path": board.store().path_for(board.key()).display().to_string()
                })
            );
        } else {
            println!(
                "{} Already initialized at {}",
                "!".yellow(),
                ctx.sb_root.display()
            );
            println!("  Use --force to reseed from the fallback list");
        }
        return Ok(());
    }

    let order = if args.force {
        board.reset()?
    } else {
        board.seed()?;
        board.load()?
    };

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "path": ctx.sb_root.display().to_string(),
                "key": board.key(),
                "count": order.len(),
            })
        );
        return Ok(());
    }

    println!("{}", "Initializing sb...".bold());
    println!();
    println!(
        "{} Seeded {} skills at {}",
        "✓".green().bold(),
        order.len(),
        board.store().path_for(board.key()).display()
    );
    println!();
    println!("Show the board with:");
    println!("  sb list");

    Ok(())
}
