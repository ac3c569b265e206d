// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dsf get-config` — print the serialised children of a datastore.

use anyhow::Result;
use clap::Args;

use super::common::{open_datastore, SessionArgs, TargetArg};

#[derive(Args)]
pub struct GetConfigArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Datastore to read
    #[arg(long = "source", value_enum)]
    pub source: TargetArg,
}

pub fn run(args: GetConfigArgs) -> Result<()> {
    let mut ds = open_datastore()?;
    let config = ds
        .get_config(&args.session.session(), args.source.into())
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    println!("{config}");
    Ok(())
}
