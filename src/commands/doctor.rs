// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::{self, LEDGER_KEY_PREFIX};
use crate::session;
use crate::store::KeyValueStore;
use crate::utils::pretty_table;

/// Parses every persisted record and reports the ones that do not load.
pub fn check<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    if let Err(e) = session::read_profile(store) {
        rows.push(vec!["corrupt_profile".into(), e.to_string()]);
    }

    for key in store.keys_with_prefix(LEDGER_KEY_PREFIX)? {
        match ledger::read_partition(store, &key) {
            Ok(txs) => {
                if let Some(t) = txs.iter().find(|t| t.amount.is_sign_negative() || t.amount.is_zero()) {
                    rows.push(vec![
                        "non_positive_amount".into(),
                        format!("{} {}", key, t.id),
                    ]);
                }
            }
            Err(e) => rows.push(vec!["corrupt_ledger".into(), e.to_string()]),
        }
    }
    Ok(rows)
}

pub fn handle<S: KeyValueStore + ?Sized>(store: &S) -> Result<()> {
    let rows = check(store)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
