// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::collections::HashSet;
use wealthwise::error::{Error, INVALID_AMOUNT_MESSAGE};
use wealthwise::ledger::{partition_key, read_partition, Ledger};
use wealthwise::models::{NewTransaction, TransactionKind};
use wealthwise::store::{KeyValueStore, MemoryStore, SqliteStore};

fn expense(amount: &str) -> NewTransaction {
    NewTransaction::new(TransactionKind::Expense, amount.parse().unwrap())
}

#[test]
fn partition_keys() {
    assert_eq!(partition_key(None), "wealthwise-transactions");
    assert_eq!(
        partition_key(Some("a@example.com")),
        "wealthwise-transactions-a@example.com"
    );
}

#[test]
fn rejects_non_positive_amounts_without_mutation() {
    let mut store = MemoryStore::new();
    let mut ledger = Ledger::default();
    ledger.append(&mut store, expense("5")).unwrap();

    for bad in ["0", "-12.50"] {
        let err = ledger.append(&mut store, expense(bad)).unwrap_err();
        assert_eq!(err, Error::InvalidAmount);
        assert_eq!(err.to_string(), INVALID_AMOUNT_MESSAGE);
        assert_eq!(ledger.len(), 1);
    }

    let missing = NewTransaction {
        amount: None,
        ..expense("1")
    };
    assert_eq!(ledger.append(&mut store, missing).unwrap_err(), Error::InvalidAmount);
    assert_eq!(ledger.len(), 1);
    assert_eq!(read_partition(&store, ledger.key()).unwrap().len(), 1);
}

#[test]
fn blank_category_defaults_to_general_and_blank_notes_to_none() {
    let mut store = MemoryStore::new();
    let mut ledger = Ledger::default();
    let tx = ledger
        .append(&mut store, expense("9.99").category("   ").notes("  "))
        .unwrap()
        .clone();
    assert_eq!(tx.category, "General");
    assert_eq!(tx.notes, None);

    let tx = ledger
        .append(&mut store, expense("1").category(" Groceries ").notes(" milk "))
        .unwrap()
        .clone();
    assert_eq!(tx.category, "Groceries");
    assert_eq!(tx.notes.as_deref(), Some("milk"));
}

#[test]
fn ids_are_unique_and_display_is_most_recent_first() {
    let mut store = MemoryStore::new();
    let mut ledger = Ledger::default();
    for a in ["1", "2", "3"] {
        ledger.append(&mut store, expense(a)).unwrap();
    }
    let ids: HashSet<_> = ledger.transactions().iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), 3);

    let shown: Vec<Decimal> = ledger.recent_first().map(|t| t.amount).collect();
    assert_eq!(shown, [Decimal::from(3), Decimal::from(2), Decimal::from(1)]);
    let stored: Vec<Decimal> = ledger.transactions().iter().map(|t| t.amount).collect();
    assert_eq!(stored, [Decimal::from(1), Decimal::from(2), Decimal::from(3)]);
}

#[test]
fn persist_then_load_round_trips() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let key = partition_key(Some("a@example.com"));
    let mut ledger = Ledger::default();
    ledger.load(&store, &key).unwrap();
    assert!(ledger.is_empty());

    ledger
        .append(&mut store, expense("12.345").category("Groceries").notes("weekly"))
        .unwrap();
    ledger
        .append(
            &mut store,
            NewTransaction::new(TransactionKind::Income, "1000".parse().unwrap()),
        )
        .unwrap();

    let mut reloaded = Ledger::default();
    reloaded.load(&store, &key).unwrap();
    assert_eq!(reloaded.transactions(), ledger.transactions());
    assert_eq!(reloaded.key(), key);
}

#[test]
fn stored_json_uses_the_record_field_names() {
    let mut store = MemoryStore::new();
    let mut ledger = Ledger::default();
    ledger.append(&mut store, expense("4.20").category("Transportation")).unwrap();
    let raw = store.get(ledger.key()).unwrap().unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let rec = &v[0];
    assert_eq!(rec["type"], "expense");
    assert_eq!(rec["category"], "Transportation");
    assert_eq!(rec["amount"], "4.20");
    assert!(rec["createdAt"].is_string());
    assert!(rec["id"].is_string());
}

#[test]
fn corrupted_partition_fails_and_leaves_ledger_alone() {
    let mut store = MemoryStore::new();
    let mut ledger = Ledger::default();
    ledger.append(&mut store, expense("1")).unwrap();

    store.set("wealthwise-transactions-x@example.com", "{not json").unwrap();
    let err = ledger
        .load(&store, "wealthwise-transactions-x@example.com")
        .unwrap_err();
    assert!(matches!(err, Error::CorruptData { ref key, .. } if key == "wealthwise-transactions-x@example.com"));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.key(), "wealthwise-transactions");
}

#[test]
fn on_disk_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("ww.sqlite");
    {
        let mut store = SqliteStore::new(wealthwise::db::open_or_init(&path).unwrap()).unwrap();
        let mut ledger = Ledger::default();
        ledger.append(&mut store, expense("7")).unwrap();
    }
    let store = SqliteStore::new(wealthwise::db::open_or_init(&path).unwrap()).unwrap();
    let txs = read_partition(&store, &partition_key(None)).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].amount, Decimal::from(7));
}

#[test]
fn sqlite_store_get_set_remove_and_prefix() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "1").unwrap();
    store.set("k", "2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
    store.set("wealthwise-transactions-b", "[]").unwrap();
    store.set("wealthwise-transactions", "[]").unwrap();
    assert_eq!(
        store.keys_with_prefix("wealthwise-transactions").unwrap(),
        ["wealthwise-transactions", "wealthwise-transactions-b"]
    );
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}
