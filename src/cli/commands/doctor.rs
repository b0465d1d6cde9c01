//! sb doctor - Health checks for storage and resolver

use std::collections::HashSet;

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Skip the resolver reachability probe
    #[arg(long)]
    pub no_network: bool,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    root_exists: bool,
    config_present: bool,
    order_state: &'static str,
    duplicate_ids: Vec<String>,
    resource_configured: bool,
    resolver_reachable: Option<bool>,
    healthy: bool,
}

pub fn run(ctx: &AppContext, args: &DoctorArgs) -> Result<()> {
    let board = ctx.board();
    let store = board.store();

    let root_exists = store.root().is_dir();
    let config_present = ctx.config_path.is_file();

    let stored = store.load(board.key())?;
    let order_state = match (&stored, store.exists(board.key())) {
        (Some(_), _) => "ok",
        (None, true) => "malformed",
        (None, false) => "absent",
    };

    let duplicate_ids = stored.as_deref().map_or_else(Vec::new, find_duplicates);

    let resolver = ctx.resolver();
    let resource_configured = resolver.resource().is_some();
    let resolver_reachable = if args.no_network {
        None
    } else {
        resolver.probe()
    };

    let healthy = order_state != "malformed"
        && duplicate_ids.is_empty()
        && resolver_reachable != Some(false);

    let report = DoctorReport {
        root_exists,
        config_present,
        order_state,
        duplicate_ids,
        resource_configured,
        resolver_reachable,
        healthy,
    };

    if ctx.robot_mode {
        let output = serde_json::json!({
            "status": if report.healthy { "ok" } else { "unhealthy" },
            "root": ctx.sb_root.display().to_string(),
            "key": board.key(),
            "report": report,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{}", "sb doctor".bold());
    println!();

    print_check(
        "storage root",
        report.root_exists,
        &ctx.sb_root.display().to_string(),
        "missing (created on first write)",
    );
    print_check(
        "config file",
        report.config_present,
        &ctx.config_path.display().to_string(),
        "none (using built-in defaults)",
    );

    match report.order_state {
        "ok" => println!("  {} persisted order parses", "✓".green()),
        "absent" => println!("  {} no persisted order yet (sb init)", "!".yellow()),
        _ => println!(
            "  {} persisted order is malformed; next write reseeds it",
            "✗".red()
        ),
    }

    if report.duplicate_ids.is_empty() {
        println!("  {} no duplicate skills", "✓".green());
    } else {
        println!(
            "  {} duplicate skills: {}",
            "✗".red(),
            report.duplicate_ids.join(", ")
        );
    }

    if report.resource_configured {
        match report.resolver_reachable {
            Some(true) => println!("  {} resolver reachable", "✓".green()),
            Some(false) => println!(
                "  {} resolver unreachable (sync will use the fallback list)",
                "!".yellow()
            ),
            None => println!("  {} resolver probe skipped", "!".yellow()),
        }
    } else {
        println!(
            "  {} no resource configured (sync uses the fallback list)",
            "!".yellow()
        );
    }

    println!();
    if report.healthy {
        println!("{} Board is healthy", "✓".green().bold());
    } else {
        println!("{} Problems found", "✗".red().bold());
    }

    Ok(())
}

fn print_check(label: &str, ok: bool, ok_detail: &str, bad_detail: &str) {
    if ok {
        println!("  {} {label}: {ok_detail}", "✓".green());
    } else {
        println!("  {} {label}: {bad_detail}", "!".yellow());
    }
}

fn find_duplicates(order: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for id in order {
        if !seen.insert(id.as_str()) && !duplicates.contains(id) {
            duplicates.push(id.clone());
        }
    }
    duplicates
}
