// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Holds at most one signed-in [Profile] and decides which ledger partition
//! is active.
//!
//! A profile restored from the store at startup is trusted as-is: the
//! identity token is not re-validated. The local store is assumed to be
//! under the user's control and is not a security boundary.

use crate::error::{Error, Result};
use crate::ledger;
use crate::models::Profile;
use crate::store::KeyValueStore;
use crate::token;

pub const PROFILE_KEY: &str = "wealthwise-profile";

#[derive(Debug, Default, Clone)]
pub struct SessionManager {
    current: Option<Profile>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Profile> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn partition_key(&self) -> String {
        ledger::partition_key(self.current.as_ref().map(|p| p.email.as_str()))
    }

    /// Decodes `token` and establishes the profile it carries.
    ///
    /// A malformed token leaves any existing session untouched.
    pub fn sign_in<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, token: &str) -> Result<&Profile> {
        let profile = self.decode(token)?;
        self.establish(store, profile)
    }

    /// Decodes `token` without touching the session or the store.
    pub fn decode(&self, token: &str) -> Result<Profile> {
        token::decode_profile(token).inspect_err(|e| {
            tracing::warn!(error = %e, "identity token rejected");
        })
    }

    /// Makes `profile` current and persists it as the current-profile record.
    pub fn establish<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, profile: Profile) -> Result<&Profile> {
        let raw = serde_json::to_string(&profile).map_err(|source| Error::CorruptData {
            key: PROFILE_KEY.to_string(),
            source,
        })?;
        store.set(PROFILE_KEY, &raw)?;
        tracing::info!(email = %profile.email, "signed in");
        Ok(&*self.current.insert(profile))
    }

    /// Clears the current profile. Ledger partitions are left in the store.
    pub fn sign_out<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Result<()> {
        store.remove(PROFILE_KEY)?;
        if let Some(p) = self.current.take() {
            tracing::info!(email = %p.email, "signed out");
        }
        Ok(())
    }

    /// Restores the persisted profile as an implicit sign-in.
    ///
    /// A stored record without an email is ignored.
    pub fn restore<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> Result<Option<&Profile>> {
        let profile = match read_profile(store)? {
            Some(p) if !p.email.is_empty() => p,
            _ => return Ok(None),
        };
        tracing::debug!(email = %profile.email, "restored profile");
        Ok(Some(&*self.current.insert(profile)))
    }
}

pub fn read_profile<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Profile>> {
    match store.get(PROFILE_KEY)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| Error::CorruptData {
                key: PROFILE_KEY.to_string(),
                source,
            }),
        None => Ok(None),
    }
}
