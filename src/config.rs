// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use crate::db;

pub const CLIENT_ID_ENV: &str = "WEALTHWISE_CLIENT_ID";
pub const DB_ENV: &str = "WEALTHWISE_DB";

const PLACEHOLDER_MARKER: &str = "REPLACE_ME";

pub const SIGN_IN_UNAVAILABLE: &str =
    "Provide a valid identity client ID (WEALTHWISE_CLIENT_ID) to enable sign-in.";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub client_id: Option<String>,
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Builds the config from CLI values, which clap already falls back to the
    /// environment for.
    pub fn from_matches(m: &clap::ArgMatches) -> Self {
        Self {
            client_id: m.get_one::<String>("client-id").cloned(),
            db_path: m.get_one::<PathBuf>("db").cloned(),
        }
    }

    /// Whether the identity client id is usable. Empty and placeholder ids are not.
    pub fn sign_in_enabled(&self) -> bool {
        match self.client_id.as_deref().map(str::trim) {
            Some(id) => !id.is_empty() && !id.contains(PLACEHOLDER_MARKER),
            None => false,
        }
    }

    pub fn resolve_db_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(p) => Ok(p.clone()),
            None => db::default_db_path(),
        }
    }
}
