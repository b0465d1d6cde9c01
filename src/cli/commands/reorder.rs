//! sb move - Move a skill to the slot another skill occupies
//!
//! Single-element move semantics, matching a drag onto a target chip: the
//! moved skill takes the target's slot and everything in between shifts by
//! one. Unknown ids are a no-op rather than an error, so stale references
//! from scripts cannot corrupt the board.

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct MoveArgs {
    /// Skill to move
    pub from: String,

    /// Skill whose slot the moved skill should take
    pub to: String,
}

pub fn run(ctx: &AppContext, args: &MoveArgs) -> Result<()> {
    let board = ctx.board();
    let outcome = board.apply_move(&args.from, &args.to)?;

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "changed": outcome.changed,
                "from": args.from,
                "to": args.to,
                "order": outcome.order,
            })
        );
        return Ok(());
    }

    if !outcome.changed {
        println!(
            "{} No change ('{}' or '{}' not on the board, or same skill)",
            "!".yellow(),
            args.from.cyan(),
            args.to.cyan()
        );
        return Ok(());
    }

    println!(
        "{} Moved '{}' to the slot of '{}'",
        "✓".green().bold(),
        args.from.cyan(),
        args.to.cyan()
    );
    println!();
    println!("{}", outcome.order.join(" · ").dimmed());

    Ok(())
}
