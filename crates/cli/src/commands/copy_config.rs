// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dsf copy-config` — copy one datastore (or an inline XML document)
//! into another.

use anyhow::{bail, Result};
use clap::Args;
use dsf_core::Source;

use super::common::{open_datastore, SessionArgs, TargetArg};

#[derive(Args)]
pub struct CopyConfigArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Datastore to overwrite
    #[arg(long = "target", value_enum)]
    pub target: TargetArg,

    /// Stored datastore to copy from
    #[arg(long = "source", value_enum, conflicts_with = "source_config")]
    pub source: Option<TargetArg>,

    /// Inline XML fragment to copy from, instead of a stored datastore
    #[arg(long = "source-config", conflicts_with = "source")]
    pub source_config: Option<String>,
}

pub fn run(args: CopyConfigArgs) -> Result<()> {
    let source = match (args.source, args.source_config) {
        (Some(t), None) => match t {
            TargetArg::Running => Source::Running,
            TargetArg::Startup => Source::Startup,
            TargetArg::Candidate => Source::Candidate,
        },
        (None, Some(xml)) => Source::Config(xml),
        _ => bail!("exactly one of --source or --source-config is required"),
    };

    let mut ds = open_datastore()?;
    ds.copy_config(&args.session.session(), args.target.into(), source)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    println!("copied");
    Ok(())
}
