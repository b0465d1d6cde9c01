//! sb list - Show the current skill order

use std::collections::HashSet;

use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Maximum number of skills to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Serializable board entry for JSON output
#[derive(Debug, Clone, Serialize)]
struct SkillEntry {
    position: usize,
    id: String,
    developing: bool,
}

pub fn run(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let board = ctx.board();
    let order = board.load()?;
    let seeded = board.is_seeded()?;
    let developing: HashSet<&str> = ctx
        .config
        .board
        .developing
        .iter()
        .map(String::as_str)
        .collect();

    let shown = args.limit.unwrap_or(order.len()).min(order.len());
    debug!(target: "list", count = order.len(), shown, "listing board");

    let entries: Vec<SkillEntry> = order
        .iter()
        .take(shown)
        .enumerate()
        .map(|(i, id)| SkillEntry {
            position: i + 1,
            id: id.clone(),
            developing: developing.contains(id.as_str()),
        })
        .collect();

    if ctx.robot_mode {
        let output = serde_json::json!({
            "status": "ok",
            "key": board.key(),
            "seeded": seeded,
            "count": order.len(),
            "skills": entries,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    if order.is_empty() {
        println!("No skills on the board");
        println!();
        println!("Seed the board with: sb init");
        return Ok(());
    }

    println!("{:4} {}", "POS".bold(), "SKILL".bold());
    println!("{}", "─".repeat(40).dimmed());

    for entry in &entries {
        let marker = if entry.developing {
            " [developing]".to_string()
        } else {
            String::new()
        };
        println!("{:4} {}{}", entry.position, entry.id.cyan(), marker);
    }

    println!();
    if shown < order.len() {
        println!("Total: {} skills ({} shown)", order.len(), shown);
    } else {
        println!("Total: {} skills", order.len());
    }
    if !seeded {
        println!("{}", "Showing fallback order; run sb init to seed".dimmed());
    }

    Ok(())
}
