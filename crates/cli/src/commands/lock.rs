// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dsf lock` — acquire a NETCONF lock on a datastore.

use anyhow::Result;
use clap::Args;

use super::common::{open_datastore, SessionArgs, TargetArg};

#[derive(Args)]
pub struct LockArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Datastore to lock
    #[arg(long = "target", value_enum)]
    pub target: TargetArg,
}

pub fn run(args: LockArgs) -> Result<()> {
    let mut ds = open_datastore()?;
    ds.lock(&args.session.session(), args.target.into())
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    println!("locked");
    Ok(())
}
