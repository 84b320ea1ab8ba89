use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use rp_scoring::{ScoreBreakdown, ScoreCalculator};
use rp_server::{validate_receipt, ReceiptRequest, ReceiptServer, ServerConfig};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Score(args) => cmd_score(args, &cli.format),
    }
}

fn server_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        let addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address {bind}"))?;
        config = config.with_bind_addr(addr);
    }
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = server_config(&args)?;
    println!("Receipt processor on {}", config.bind_addr.to_string().bold());
    ReceiptServer::new(config).serve().await?;
    Ok(())
}

/// Read, validate and score a receipt file.
fn score_file(path: &Path) -> anyhow::Result<ScoreBreakdown> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading receipt {}", path.display()))?;
    let request: ReceiptRequest = serde_json::from_str(&raw)
        .with_context(|| format!("parsing receipt {}", path.display()))?;
    let receipt = validate_receipt(request)?;
    let breakdown = ScoreCalculator::with_default_rules().breakdown(&receipt);
    tracing::debug!(path = %path.display(), points = breakdown.total, "scored receipt file");
    Ok(breakdown)
}

fn cmd_score(args: ScoreArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let breakdown = score_file(&args.path)?;
    match format {
        OutputFormat::Json if args.explain => {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "points": breakdown.total }));
        }
        OutputFormat::Text => {
            if args.explain {
                for rule in &breakdown.rules {
                    let points = rule.points.to_string();
                    let points = if rule.points > 0 { points.green() } else { points.dimmed() };
                    println!("  {:<20} {:>5}", rule.rule, points);
                }
            }
            println!("{} {} points", "✓".green().bold(), breakdown.total.to_string().bold());
        }
    }
    Ok(())
}
