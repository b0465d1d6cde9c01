//! sb reset - Reset the skill order to the fallback list

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Confirm discarding the customized order
    #[arg(long, short)]
    pub force: bool,
}

pub fn run(ctx: &AppContext, args: &ResetArgs) -> Result<()> {
    if !args.force {
        if ctx.robot_mode {
            println!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "code": "approval_required",
                    "message": "reset discards the customized order; re-run with --force"
                })
            );
        } else {
            println!(
                "{} Reset discards your customized order",
                "!".yellow()
            );
            println!("  Re-run with --force to confirm");
        }
        return Ok(());
    }

    let board = ctx.board();
    let order = board.reset()?;

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "count": order.len(),
                "order": order,
            })
        );
        return Ok(());
    }

    println!(
        "{} Reset board to {} fallback skills",
        "✓".green().bold(),
        order.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Parser, Subcommand};

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        cmd: TestCommand,
    }

    #[derive(Subcommand)]
    enum TestCommand {
        Reset(ResetArgs),
    }

    #[test]
    fn parse_reset_defaults() {
        let parsed = TestCli::parse_from(["test", "reset"]);
        let TestCommand::Reset(args) = parsed.cmd;
        assert!(!args.force);
    }

    #[test]
    fn parse_reset_force_short() {
        let parsed = TestCli::parse_from(["test", "reset", "-f"]);
        let TestCommand::Reset(args) = parsed.cmd;
        assert!(args.force);
    }
}
