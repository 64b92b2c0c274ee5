// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use wealthwise::app::App;
use wealthwise::config::Config;
use wealthwise::store::SqliteStore;
use wealthwise::{cli, commands, db, logging};

fn main() -> Result<()> {
    logging::init();

    let matches = cli::build_cli().get_matches();
    let config = Config::from_matches(&matches);
    let path = config.resolve_db_path()?;
    let store = SqliteStore::new(db::open_or_init(&path)?)?;

    // doctor has to work on stores the app itself refuses to start on
    if let Some(("doctor", _)) = matches.subcommand() {
        return commands::doctor::handle(&store);
    }

    let mut app = App::start(store)?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::auth::handle_login(&mut app, &config, sub)?,
        Some(("logout", _)) => commands::auth::handle_logout(&mut app, &config)?,
        Some(("whoami", sub)) => commands::auth::handle_whoami(&app, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut app, sub)?,
        Some(("report", sub)) => commands::reports::handle(&app, sub)?,
        Some(("dashboard", sub)) => commands::reports::handle_dashboard(&app, sub)?,
        _ => {
            if app.profile().is_none() && !config.sign_in_enabled() {
                println!("{}", wealthwise::config::SIGN_IN_UNAVAILABLE);
            }
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
