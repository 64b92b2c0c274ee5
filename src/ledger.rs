// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The append-only transaction sequence of the active partition.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction};
use crate::store::KeyValueStore;

/// Storage key prefix shared by every ledger partition.
pub const LEDGER_KEY_PREFIX: &str = "wealthwise-transactions";

/// Key of the partition owned by `email`, or the default partition.
pub fn partition_key(email: Option<&str>) -> String {
    match email {
        Some(e) => format!("{}-{}", LEDGER_KEY_PREFIX, e),
        None => LEDGER_KEY_PREFIX.to_string(),
    }
}

/// Reads the sequence stored under `key`. Absent means empty.
pub fn read_partition<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<Vec<Transaction>> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| Error::CorruptData {
            key: key.to_string(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

#[derive(Debug, Clone)]
pub struct Ledger {
    key: String,
    transactions: Vec<Transaction>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            key: partition_key(None),
            transactions: Vec::new(),
        }
    }
}

impl Ledger {
    /// Replaces the in-memory sequence with the one persisted under `key`.
    ///
    /// On corrupted data the ledger is left untouched and the error returned.
    pub fn load<S: KeyValueStore + ?Sized>(&mut self, store: &S, key: &str) -> Result<()> {
        let transactions = read_partition(store, key)?;
        tracing::debug!(key, count = transactions.len(), "loaded ledger partition");
        self.key = key.to_string();
        self.transactions = transactions;
        Ok(())
    }

    /// Validates, stamps and appends a transaction, then persists the ledger.
    pub fn append<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        input: NewTransaction,
    ) -> Result<&Transaction> {
        let amount = match input.amount {
            Some(a) if a > Decimal::ZERO => a,
            other => {
                tracing::warn!(amount = ?other, "rejected transaction amount");
                return Err(Error::InvalidAmount);
            }
        };
        let tx = Transaction {
            id: Uuid::new_v4(),
            kind: input.kind,
            category: input.normalized_category(),
            amount,
            notes: input.normalized_notes(),
            created_at: Utc::now(),
        };
        self.transactions.push(tx);
        if let Err(e) = self.persist(store) {
            self.transactions.pop();
            return Err(e);
        }
        let tx = &self.transactions[self.transactions.len() - 1];
        tracing::info!(id = %tx.id, kind = %tx.kind, category = %tx.category, "appended transaction");
        Ok(tx)
    }

    /// Writes the whole sequence under the active key, overwriting it.
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        let raw = serde_json::to_string(&self.transactions).map_err(|source| Error::CorruptData {
            key: self.key.clone(),
            source,
        })?;
        store.set(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = self.transactions.len(), "persisted ledger");
        Ok(())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored (append) order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Display order: most recent first.
    pub fn recent_first(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
