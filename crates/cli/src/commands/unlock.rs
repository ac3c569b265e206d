// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dsf unlock` — release a NETCONF lock on a datastore.

use anyhow::Result;
use clap::Args;

use super::common::{open_datastore, SessionArgs, TargetArg};

#[derive(Args)]
pub struct UnlockArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Datastore to unlock
    #[arg(long = "target", value_enum)]
    pub target: TargetArg,
}

pub fn run(args: UnlockArgs) -> Result<()> {
    let mut ds = open_datastore()?;
    ds.unlock(&args.session.session(), args.target.into())
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    println!("unlocked");
    Ok(())
}
