// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dsf lockinfo` — query the current NETCONF lock holder of a datastore.

use anyhow::Result;
use clap::Args;

use super::common::{open_datastore, TargetArg};

#[derive(Args)]
pub struct LockinfoArgs {
    /// Datastore to query
    #[arg(long = "target", value_enum)]
    pub target: TargetArg,
}

pub fn run(args: LockinfoArgs) -> Result<()> {
    let mut ds = open_datastore()?;
    let (sid, time) = ds
        .lockinfo(args.target.into())
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    match (sid, time) {
        (Some(sid), Some(time)) => println!("{sid}\t{time}"),
        _ => println!("unlocked"),
    }
    Ok(())
}
