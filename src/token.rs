// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Decoding of the identity token handed over by the sign-in widget.
//!
//! The token is three dot-separated segments; the middle one is a
//! base64url-encoded JSON object carrying `name`, `email` and `picture`.
//! The signature is not checked here.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::{Error, Result};
use crate::models::Profile;

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn decode_profile(token: &str) -> Result<Profile> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(Error::MalformedToken(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }
    let payload = segments[1];
    if payload.is_empty() {
        return Err(Error::MalformedToken("empty payload segment".into()));
    }
    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .map_err(|e| Error::MalformedToken(format!("invalid base64: {}", e)))?;
    let profile = serde_json::from_slice::<Profile>(&bytes)
        .map_err(|e| Error::MalformedToken(format!("invalid payload: {}", e)))?;
    if profile.email.trim().is_empty() {
        return Err(Error::MalformedToken("payload has no email".into()));
    }
    Ok(profile)
}
