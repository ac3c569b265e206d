// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dsf delete-config` — clear a datastore's children.

use anyhow::Result;
use clap::Args;

use super::common::{open_datastore, SessionArgs, TargetArg};

#[derive(Args)]
pub struct DeleteConfigArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Datastore to delete (running is always rejected)
    #[arg(long = "target", value_enum)]
    pub target: TargetArg,
}

pub fn run(args: DeleteConfigArgs) -> Result<()> {
    let mut ds = open_datastore()?;
    ds.delete_config(&args.session.session(), args.target.into())
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    println!("deleted");
    Ok(())
}
