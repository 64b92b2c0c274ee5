// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{arg, value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

use crate::config::{CLIENT_ID_ENV, DB_ENV};
use crate::models::TransactionKind;

fn json_args(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print as pretty JSON").action(ArgAction::SetTrue))
        .arg(arg!(--jsonl "Print as JSON lines").action(ArgAction::SetTrue))
}

pub fn build_cli() -> Command {
    Command::new("wealthwise")
        .about("Track income and expenses, see your balance and budget health")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env(DB_ENV)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("SQLite file holding profiles and ledgers"),
        )
        .arg(
            Arg::new("client-id")
                .long("client-id")
                .global(true)
                .env(CLIENT_ID_ENV)
                .value_name("ID")
                .help("Identity provider client ID used to accept sign-in tokens"),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in with an identity token")
                .arg(arg!(--token <TOKEN> "Signed identity token").required(true)),
        )
        .subcommand(Command::new("logout").about("Sign out; stored ledgers are kept"))
        .subcommand(json_args(
            Command::new("whoami").about("Show the signed-in profile"),
        ))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_parser(value_parser!(TransactionKind))
                                .help("income or expense"),
                        )
                        .arg(
                            arg!(--amount <AMOUNT> "Positive amount")
                                .required(false)
                                .allow_negative_numbers(true),
                        )
                        .arg(arg!(--category <CATEGORY> "Category (default: General)").required(false))
                        .arg(arg!(--notes <NOTES> "Free-form notes").required(false)),
                )
                .subcommand(json_args(
                    Command::new("list")
                        .about("List transactions, most recent first")
                        .arg(
                            arg!(--limit <N> "Show at most N transactions")
                                .required(false)
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Reports")
                .subcommand(json_args(
                    Command::new("summary").about("Income, expenses and balance"),
                ))
                .subcommand(json_args(
                    Command::new("budget").about("Spending per category against budget targets"),
                )),
        )
        .subcommand(json_args(
            Command::new("dashboard").about("Summary, budget health and recent transactions"),
        ))
        .subcommand(Command::new("doctor").about("Check persisted profile and ledgers"))
}
