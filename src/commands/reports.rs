// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::app::App;
use crate::commands::transactions::{query_rows, TransactionRow};
use crate::report::{BudgetHealth, Summary};
use crate::store::KeyValueStore;
use crate::utils::{format_usd, maybe_print_json, pretty_table};

const RECENT_LIMIT: usize = 10;

pub fn handle<S: KeyValueStore>(app: &App<S>, m: &clap::ArgMatches) -> Result<()> {
    app.require_profile()?;
    match m.subcommand() {
        Some(("summary", sub)) => summary(app, sub)?,
        Some(("budget", sub)) => budget(app, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn handle_dashboard<S: KeyValueStore>(app: &App<S>, sub: &clap::ArgMatches) -> Result<()> {
    print_dashboard(app, sub.get_flag("json"), sub.get_flag("jsonl"))
}

fn summary<S: KeyValueStore>(app: &App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let s = app.summary();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        println!("{}", summary_table(&s));
    }
    Ok(())
}

fn budget<S: KeyValueStore>(app: &App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let health = app.budget_health();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &health)? {
        print_budget(&health);
    }
    Ok(())
}

pub fn summary_table(s: &Summary) -> comfy_table::Table {
    pretty_table(
        &["Balance", "Income", "Expenses"],
        vec![vec![
            format_usd(s.balance),
            format_usd(s.income),
            format_usd(s.expenses),
        ]],
    )
}

/// One table row per category; `None` when there is no expense data.
pub fn budget_rows(health: &BudgetHealth) -> Option<Vec<Vec<String>>> {
    let BudgetHealth::Breakdown { lines, .. } = health else {
        return None;
    };
    Some(
        lines
            .iter()
            .map(|l| {
                vec![
                    l.category.clone(),
                    format!("{}% of expenses", l.percentage),
                    l.target
                        .map(|t| format!("{}%", t))
                        .unwrap_or_else(|| "—".to_string()),
                    l.status.to_string(),
                    bar(l.bar_width),
                ]
            })
            .collect(),
    )
}

fn bar(width: u32) -> String {
    let filled = (width as usize).div_ceil(5).min(20);
    format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled))
}

fn print_budget(health: &BudgetHealth) {
    match budget_rows(health) {
        Some(rows) => println!(
            "{}",
            pretty_table(&["Category", "Share", "Target", "Status", ""], rows)
        ),
        None => println!("{}", health.empty_message().unwrap_or_default()),
    }
}

pub fn print_dashboard<S: KeyValueStore>(app: &App<S>, json: bool, jsonl: bool) -> Result<()> {
    let dash = app.dashboard()?;
    if maybe_print_json(json, jsonl, &dash)? {
        return Ok(());
    }
    println!("Signed in as {} <{}>", dash.profile.name, dash.profile.email);
    println!("{}", summary_table(&dash.summary));
    print_budget(&dash.budget);
    let recent: Vec<TransactionRow> = query_rows(app, Some(RECENT_LIMIT));
    if recent.is_empty() {
        println!("No transactions yet.");
    } else {
        let rows = recent
            .into_iter()
            .map(|r| vec![r.date, r.category, r.notes, r.amount])
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Category", "Notes", "Amount"], rows)
        );
    }
    Ok(())
}
