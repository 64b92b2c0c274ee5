// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Top-level application state: the store, the session and the active ledger.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::ledger::{self, Ledger};
use crate::models::{NewTransaction, Profile, Transaction};
use crate::report::{self, BudgetHealth, BudgetTargets, Summary};
use crate::session::SessionManager;
use crate::store::KeyValueStore;

pub struct App<S: KeyValueStore> {
    store: S,
    session: SessionManager,
    ledger: Ledger,
    targets: BudgetTargets,
}

/// Everything the dashboard shows, recomputed from the ledger.
#[derive(Debug, Serialize)]
pub struct Dashboard<'a> {
    pub profile: &'a Profile,
    pub summary: Summary,
    pub budget: BudgetHealth,
    pub transactions: Vec<&'a Transaction>,
}

impl<S: KeyValueStore> App<S> {
    /// Opens the app on `store`, restoring a persisted profile if present.
    pub fn start(store: S) -> Result<Self> {
        let mut app = Self {
            store,
            session: SessionManager::new(),
            ledger: Ledger::default(),
            targets: BudgetTargets::default(),
        };
        app.session.restore(&app.store)?;
        app.load_active_partition()?;
        Ok(app)
    }

    /// Signs in with `token` and switches to that profile's ledger.
    ///
    /// The partition is read before the profile is persisted, so a corrupted
    /// partition leaves both the store and the current session untouched.
    pub fn sign_in(&mut self, token: &str) -> Result<&Profile> {
        let profile = self.session.decode(token)?;
        let key = ledger::partition_key(Some(&profile.email));
        let mut next = Ledger::default();
        next.load(&self.store, &key)?;
        self.session.establish(&mut self.store, profile)?;
        self.ledger = next;
        self.session.current().ok_or(Error::NotSignedIn)
    }

    pub fn sign_out(&mut self) -> Result<()> {
        self.session.sign_out(&mut self.store)?;
        self.load_active_partition()
    }

    pub fn add_transaction(&mut self, input: NewTransaction) -> Result<&Transaction> {
        self.ledger.append(&mut self.store, input)
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.session.current()
    }

    pub fn require_profile(&self) -> Result<&Profile> {
        self.session.current().ok_or(Error::NotSignedIn)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn summary(&self) -> Summary {
        report::summary(self.ledger.transactions())
    }

    pub fn budget_health(&self) -> BudgetHealth {
        report::budget_health(self.ledger.transactions(), &self.targets)
    }

    pub fn dashboard(&self) -> Result<Dashboard<'_>> {
        Ok(Dashboard {
            profile: self.require_profile()?,
            summary: self.summary(),
            budget: self.budget_health(),
            transactions: self.ledger.recent_first().collect(),
        })
    }

    // The session must be settled before this runs so the right key is used.
    fn load_active_partition(&mut self) -> Result<()> {
        let key = self.session.partition_key();
        self.ledger.load(&self.store, &key)
    }
}
