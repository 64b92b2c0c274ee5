// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::app::App;
use crate::models::{NewTransaction, Transaction, TransactionKind};
use crate::store::KeyValueStore;
use crate::utils::{format_usd, maybe_print_json, parse_decimal, pretty_table};

pub fn handle<S: KeyValueStore>(app: &mut App<S>, m: &clap::ArgMatches) -> Result<()> {
    app.require_profile()?;
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("list", sub)) => list(app, sub)?,
        _ => {}
    }
    Ok(())
}

/// Reads the form fields. An amount that does not parse is treated as missing.
pub fn form_input(sub: &clap::ArgMatches) -> NewTransaction {
    let kind = sub
        .get_one::<TransactionKind>("type")
        .copied()
        .unwrap_or(TransactionKind::Expense);
    let amount = sub
        .get_one::<String>("amount")
        .and_then(|s| parse_decimal(s).ok());
    NewTransaction {
        kind,
        category: sub.get_one::<String>("category").cloned().unwrap_or_default(),
        amount,
        notes: sub.get_one::<String>("notes").cloned().unwrap_or_default(),
    }
}

fn add<S: KeyValueStore>(app: &mut App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let tx = app.add_transaction(form_input(sub))?;
    println!(
        "Recorded {} {}{} in {}",
        tx.kind,
        tx.kind.sign(),
        format_usd(tx.amount),
        tx.category
    );
    Ok(())
}

fn list<S: KeyValueStore>(app: &App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let limit = sub.get_one::<usize>("limit").copied();
    let data = query_rows(app, limit);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No transactions yet.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                r.category.clone(),
                r.notes.clone(),
                r.amount.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Category", "Notes", "Amount"], rows)
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub category: String,
    pub notes: String,
    pub amount: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id.to_string(),
            date: t.created_at.format("%Y-%m-%d %H:%M").to_string(),
            r#type: t.kind.to_string(),
            category: t.category.clone(),
            notes: t.notes.clone().unwrap_or_else(|| "No notes".to_string()),
            amount: format!("{}{}", t.kind.sign(), format_usd(t.amount)),
        }
    }
}

/// Most recent first, up to `limit` rows.
pub fn query_rows<S: KeyValueStore>(app: &App<S>, limit: Option<usize>) -> Vec<TransactionRow> {
    app.ledger()
        .recent_first()
        .take(limit.unwrap_or(usize::MAX))
        .map(TransactionRow::from)
        .collect()
}
