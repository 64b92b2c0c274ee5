// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Totals and budget health derived from a transaction sequence.
//!
//! Everything here is a pure function of its inputs.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

use crate::models::{Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

pub fn summary(transactions: &[Transaction]) -> Summary {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for t in transactions {
        match t.kind {
            TransactionKind::Income => income += t.amount,
            TransactionKind::Expense => expenses += t.amount,
        }
    }
    Summary {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Target share of total expenses, in percent, per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetTargets {
    targets: Vec<(String, u32)>,
}

impl Default for BudgetTargets {
    fn default() -> Self {
        Self::new([
            ("Housing", 30),
            ("Transportation", 15),
            ("Groceries", 12),
            ("Entertainment", 10),
            ("Savings", 20),
            ("Miscellaneous", 13),
        ])
    }
}

impl BudgetTargets {
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(|(c, p)| (c.into(), p)).collect(),
        }
    }

    /// A zero target counts as no target.
    pub fn get(&self, category: &str) -> Option<u32> {
        self.targets
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, p)| *p)
            .filter(|p| *p > 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.targets.iter().map(|(c, p)| (c.as_str(), *p))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    #[serde(rename = "Over budget")]
    OverBudget,
    #[serde(rename = "On track")]
    OnTrack,
    #[serde(rename = "No target set")]
    NoTarget,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OverBudget => "Over budget",
            Self::OnTrack => "On track",
            Self::NoTarget => "No target set",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetLine {
    pub category: String,
    pub amount: Decimal,
    /// Share of total expenses, rounded to a whole percent.
    pub percentage: u32,
    pub target: Option<u32>,
    pub status: BudgetStatus,
    /// Display-only bar fill in percent, clamped to 100.
    pub bar_width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BudgetHealth {
    NoTransactions,
    NoExpenses,
    Breakdown {
        total_expenses: Decimal,
        lines: Vec<BudgetLine>,
    },
}

impl BudgetHealth {
    /// True when there is no expense data to break down.
    pub fn is_empty(&self) -> bool {
        !matches!(self, Self::Breakdown { .. })
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            Self::NoTransactions => {
                Some("Log a few transactions to see how your spending aligns with your goals.")
            }
            Self::NoExpenses => Some("Add expenses to see how they stack up against your budget."),
            Self::Breakdown { .. } => None,
        }
    }
}

pub fn budget_health(transactions: &[Transaction], targets: &BudgetTargets) -> BudgetHealth {
    if transactions.is_empty() {
        return BudgetHealth::NoTransactions;
    }

    // first-appearance order
    let mut by_category: Vec<(String, Decimal)> = Vec::new();
    for t in transactions.iter().filter(|t| t.kind == TransactionKind::Expense) {
        match by_category.iter_mut().find(|(c, _)| *c == t.category) {
            Some((_, sum)) => *sum += t.amount,
            None => by_category.push((t.category.clone(), t.amount)),
        }
    }

    let total_expenses: Decimal = by_category.iter().map(|(_, a)| *a).sum();
    if total_expenses.is_zero() {
        return BudgetHealth::NoExpenses;
    }

    let lines = by_category
        .into_iter()
        .map(|(category, amount)| {
            let percentage = round_percent(amount * Decimal::ONE_HUNDRED / total_expenses);
            let target = targets.get(&category);
            let status = match target {
                Some(t) if percentage > t => BudgetStatus::OverBudget,
                Some(_) => BudgetStatus::OnTrack,
                None => BudgetStatus::NoTarget,
            };
            BudgetLine {
                category,
                amount,
                percentage,
                target,
                status,
                bar_width: bar_width(percentage, target),
            }
        })
        .collect();

    BudgetHealth::Breakdown {
        total_expenses,
        lines,
    }
}

pub fn bar_width(percentage: u32, target: Option<u32>) -> u32 {
    let scale = Decimal::from(target.unwrap_or(100));
    let width = round_percent(Decimal::from(percentage) * Decimal::ONE_HUNDRED / scale);
    width.min(100)
}

fn round_percent(d: Decimal) -> u32 {
    d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}
