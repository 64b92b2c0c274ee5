// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Errors raised by the ledger, the session manager and the stores.

use thiserror::Error;

/// Message shown when a transaction amount is missing, zero or negative.
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount greater than zero.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please enter a valid amount greater than zero.")]
    InvalidAmount,
    #[error("Malformed identity token: {0}")]
    MalformedToken(String),
    #[error("Persisted data under '{key}' is corrupted: {source}")]
    CorruptData {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Not signed in")]
    NotSignedIn,
    #[error(transparent)]
    Store(#[from] rusqlite::Error),
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount, Self::InvalidAmount) => true,
            (Self::MalformedToken(a), Self::MalformedToken(b)) => a == b,
            (Self::CorruptData { key: a, .. }, Self::CorruptData { key: b, .. }) => a == b,
            (Self::NotSignedIn, Self::NotSignedIn) => true,
            (Self::Store(a), Self::Store(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
