//! sb sync - Fetch the canonical skill list and reconcile the board
//!
//! The remote result never replaces the user's customization wholesale:
//! surviving skills keep their relative order, new skills are appended, and
//! a transient empty canonical list leaves the board untouched.

use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::app::AppContext;
use crate::error::Result;
use crate::resolver::SkillsResolver;

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Override the configured resource URL for this sync
    #[arg(long)]
    pub resource: Option<String>,

    /// Reconcile against the placeholder list without touching the network
    #[arg(long)]
    pub offline: bool,
}

pub fn run(ctx: &AppContext, args: &SyncArgs) -> Result<()> {
    let resolver = if let Some(resource) = &args.resource {
        SkillsResolver::new(
            Some(resource.clone()),
            ctx.config.board.fallback.clone(),
            ctx.config.board.placeholder.clone(),
        )
        .with_timeout(ctx.config.resolver.timeout())
    } else {
        ctx.resolver()
    };

    let resolution = if args.offline {
        resolver.placeholder()
    } else {
        resolver.resolve()
    };
    info!(
        target: "sync",
        provenance = %resolution.provenance,
        count = resolution.skills.len(),
        "canonical list resolved"
    );

    let board = ctx.board();
    let outcome = board.reconcile_with(&resolution.skills)?;

    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "provenance": resolution.provenance,
                "changed": outcome.changed,
                "added": outcome.added,
                "removed": outcome.removed,
                "count": outcome.order.len(),
                "order": outcome.order,
            })
        );
        return Ok(());
    }

    println!(
        "Canonical list: {} skills ({})",
        resolution.skills.len(),
        resolution.provenance
    );

    if !outcome.changed {
        println!("{} Board already up to date", "✓".green().bold());
        return Ok(());
    }

    for id in &outcome.added {
        println!("  {} {}", "+".green(), id.cyan());
    }
    for id in &outcome.removed {
        println!("  {} {}", "-".red(), id.cyan());
    }
    println!(
        "{} Board reconciled: {} skills",
        "✓".green().bold(),
        outcome.order.len()
    );

    Ok(())
}
