// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use rust_decimal::Decimal;
use wealthwise::app::App;
use wealthwise::error::Error;
use wealthwise::models::{NewTransaction, Profile, TransactionKind};
use wealthwise::session::{SessionManager, PROFILE_KEY};
use wealthwise::store::{KeyValueStore, MemoryStore, SqliteStore};
use wealthwise::token::decode_profile;

fn token_for(payload: &str) -> String {
    format!("eyJhbGciOiJSUzI1NiJ9.{}.c2ln", URL_SAFE_NO_PAD.encode(payload))
}

fn token(name: &str, email: &str) -> String {
    token_for(&format!(
        r#"{{"name":"{}","email":"{}","picture":"https://img.example/{}.png","iss":"accounts"}}"#,
        name, email, name
    ))
}

fn income(amount: i64) -> NewTransaction {
    NewTransaction::new(TransactionKind::Income, Decimal::from(amount))
}

#[test]
fn decodes_profile_from_payload_segment() {
    let p = decode_profile(&token("Ada", "ada@example.com")).unwrap();
    assert_eq!(p.name, "Ada");
    assert_eq!(p.email, "ada@example.com");
    assert_eq!(p.picture.as_deref(), Some("https://img.example/Ada.png"));
}

#[test]
fn decodes_padded_payload_and_non_ascii_names() {
    let payload = r#"{"name":"Zoë","email":"z@example.com"}"#;
    let t = format!("h.{}.s", URL_SAFE.encode(payload));
    let p = decode_profile(&t).unwrap();
    assert_eq!(p.name, "Zoë");
    assert_eq!(p.picture, None);
}

#[test]
fn malformed_tokens_are_rejected() {
    let cases = [
        String::new(),
        "onlyone".to_string(),
        "a..c".to_string(),
        "a.b".to_string(),
        "a.!!!.c".to_string(),
        format!("a.{}.c", URL_SAFE_NO_PAD.encode("not json")),
        format!("a.{}.c", URL_SAFE_NO_PAD.encode(r#"{"name":"no email"}"#)),
        format!("a.{}.c", URL_SAFE_NO_PAD.encode(r#"{"name":"blank","email":"  "}"#)),
    ];
    for t in &cases {
        assert!(
            matches!(decode_profile(t), Err(Error::MalformedToken(_))),
            "accepted {:?}",
            t
        );
    }
}

#[test]
fn sign_in_persists_profile_and_sign_out_clears_it() {
    let mut store = MemoryStore::new();
    let mut session = SessionManager::new();
    assert_eq!(session.partition_key(), "wealthwise-transactions");

    session.sign_in(&mut store, &token("Ada", "ada@example.com")).unwrap();
    assert!(session.is_signed_in());
    assert_eq!(session.partition_key(), "wealthwise-transactions-ada@example.com");
    let stored: Profile = serde_json::from_str(&store.get(PROFILE_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored.email, "ada@example.com");

    session.sign_out(&mut store).unwrap();
    assert!(!session.is_signed_in());
    assert_eq!(store.get(PROFILE_KEY).unwrap(), None);
}

#[test]
fn bad_token_keeps_existing_session() {
    let mut store = MemoryStore::new();
    let mut session = SessionManager::new();
    session.sign_in(&mut store, &token("Ada", "ada@example.com")).unwrap();
    assert!(session.sign_in(&mut store, "garbage").is_err());
    assert_eq!(session.current().unwrap().email, "ada@example.com");
}

#[test]
fn restore_ignores_profile_without_email() {
    let mut store = MemoryStore::new();
    store.set(PROFILE_KEY, r#"{"name":"x","email":""}"#).unwrap();
    let mut session = SessionManager::new();
    assert_eq!(session.restore(&store).unwrap(), None);
    assert!(!session.is_signed_in());
}

#[test]
fn corrupted_profile_is_fatal_at_start() {
    let mut store = MemoryStore::new();
    store.set(PROFILE_KEY, "{{{").unwrap();
    let err = App::start(store).err().unwrap();
    assert_eq!(
        err,
        Error::CorruptData {
            key: PROFILE_KEY.to_string(),
            source: serde_json::from_str::<Profile>("{").unwrap_err(),
        }
    );
}

#[test]
fn malformed_token_establishes_no_session() {
    let mut app = App::start(MemoryStore::new()).unwrap();
    assert!(matches!(app.sign_in("not-a-token"), Err(Error::MalformedToken(_))));
    assert!(app.profile().is_none());
    assert_eq!(app.store().get(PROFILE_KEY).unwrap(), None);
    assert_eq!(app.dashboard().unwrap_err(), Error::NotSignedIn);
}

#[test]
fn sign_out_and_back_in_recovers_transactions() {
    let mut app = App::start(MemoryStore::new()).unwrap();
    app.sign_in(&token("Ada", "ada@example.com")).unwrap();
    app.add_transaction(income(10)).unwrap();
    app.add_transaction(income(20)).unwrap();
    let before = app.ledger().transactions().to_vec();

    app.sign_out().unwrap();
    assert!(app.profile().is_none());
    assert!(app.ledger().is_empty());

    app.sign_in(&token("Ada", "ada@example.com")).unwrap();
    assert_eq!(app.ledger().transactions(), before.as_slice());
}

#[test]
fn switching_profiles_isolates_partitions() {
    let mut app = App::start(MemoryStore::new()).unwrap();
    app.sign_in(&token("Ada", "ada@example.com")).unwrap();
    app.add_transaction(income(1)).unwrap();
    let ada = app.ledger().transactions().to_vec();

    app.sign_in(&token("Bob", "bob@example.com")).unwrap();
    assert!(app.ledger().is_empty());
    app.add_transaction(income(2)).unwrap();
    app.add_transaction(income(3)).unwrap();
    let bob = app.ledger().transactions().to_vec();

    app.sign_in(&token("Ada", "ada@example.com")).unwrap();
    assert_eq!(app.ledger().transactions(), ada.as_slice());
    app.sign_in(&token("Bob", "bob@example.com")).unwrap();
    assert_eq!(app.ledger().transactions(), bob.as_slice());
}

#[test]
fn restart_restores_profile_and_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ww.sqlite");
    let open = || SqliteStore::new(wealthwise::db::open_or_init(&path).unwrap()).unwrap();

    let mut app = App::start(open()).unwrap();
    app.sign_in(&token("Ada", "ada@example.com")).unwrap();
    app.add_transaction(income(42)).unwrap();
    let before = app.ledger().transactions().to_vec();
    drop(app);

    let app = App::start(open()).unwrap();
    assert_eq!(app.profile().unwrap().email, "ada@example.com");
    assert_eq!(app.ledger().transactions(), before.as_slice());
}

#[test]
fn corrupted_ledger_on_sign_in_leaves_no_session() {
    let mut store = MemoryStore::new();
    store
        .set("wealthwise-transactions-ada@example.com", "[{]")
        .unwrap();
    let mut app = App::start(store).unwrap();
    let err = app.sign_in(&token("Ada", "ada@example.com")).unwrap_err();
    assert!(matches!(err, Error::CorruptData { .. }));
    assert!(app.profile().is_none());
    assert_eq!(app.store().get(PROFILE_KEY).unwrap(), None);

    // a restart is not locked out by the rejected profile
    let app = App::start(app.store().clone()).unwrap();
    assert!(app.profile().is_none());
}

#[test]
fn corrupted_ledger_on_sign_in_keeps_the_previous_session() {
    let mut app = App::start(MemoryStore::new()).unwrap();
    app.sign_in(&token("Bob", "bob@example.com")).unwrap();
    app.add_transaction(income(5)).unwrap();
    let bob = app.ledger().transactions().to_vec();

    let mut store = app.store().clone();
    store
        .set("wealthwise-transactions-ada@example.com", "[{]")
        .unwrap();
    let mut app = App::start(store).unwrap();
    assert!(app.sign_in(&token("Ada", "ada@example.com")).is_err());
    assert_eq!(app.profile().unwrap().email, "bob@example.com");
    assert_eq!(app.ledger().transactions(), bob.as_slice());
    let stored: Profile = serde_json::from_str(&app.store().get(PROFILE_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored.email, "bob@example.com");
}

#[test]
fn stored_profile_without_email_key_is_ignored() {
    let mut store = MemoryStore::new();
    store.set(PROFILE_KEY, r#"{"name":"x"}"#).unwrap();
    let app = App::start(store).unwrap();
    assert!(app.profile().is_none());
    assert!(app.ledger().is_empty());
}
