// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::app::App;
use crate::commands::reports;
use crate::config::{Config, SIGN_IN_UNAVAILABLE};
use crate::error::Error;
use crate::store::KeyValueStore;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    SignedIn,
    /// Sign-in is not configured; the token was not looked at.
    Unavailable,
    /// The token could not be decoded; no session was established.
    Rejected,
}

pub fn login<S: KeyValueStore>(app: &mut App<S>, config: &Config, token: &str) -> Result<LoginOutcome> {
    if !config.sign_in_enabled() {
        return Ok(LoginOutcome::Unavailable);
    }
    match app.sign_in(token) {
        Ok(_) => Ok(LoginOutcome::SignedIn),
        Err(Error::MalformedToken(_)) => Ok(LoginOutcome::Rejected),
        Err(e) => Err(e.into()),
    }
}

pub fn handle_login<S: KeyValueStore>(
    app: &mut App<S>,
    config: &Config,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let token = sub
        .get_one::<String>("token")
        .map(String::as_str)
        .unwrap_or_default();
    match login(app, config, token)? {
        LoginOutcome::SignedIn => reports::print_dashboard(app, false, false)?,
        LoginOutcome::Unavailable => println!("{}", SIGN_IN_UNAVAILABLE),
        LoginOutcome::Rejected => {}
    }
    Ok(())
}

pub fn handle_logout<S: KeyValueStore>(app: &mut App<S>, config: &Config) -> Result<()> {
    app.sign_out()?;
    println!("Signed out.");
    if config.sign_in_enabled() {
        println!("Sign in again with `wealthwise login --token <TOKEN>`.");
    } else {
        println!("{}", SIGN_IN_UNAVAILABLE);
    }
    Ok(())
}

pub fn handle_whoami<S: KeyValueStore>(app: &App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let Some(profile) = app.profile() else {
        println!("Not signed in");
        return Ok(());
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), profile)? {
        let rows = vec![vec![
            profile.name.clone(),
            profile.email.clone(),
            profile.picture.clone().unwrap_or_default(),
        ]];
        println!("{}", pretty_table(&["Name", "Email", "Picture"], rows));
    }
    Ok(())
}
