// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dsf edit-config` — apply an RFC 6241 `edit-config` patch to a datastore.

use anyhow::Result;
use clap::{Args, ValueEnum};
use dsf_nacm::{DefaultOperation, ErrorOption};

use super::common::{open_datastore, SessionArgs, TargetArg};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DefaultOperationArg {
    Merge,
    Replace,
    None,
}

impl From<DefaultOperationArg> for DefaultOperation {
    fn from(d: DefaultOperationArg) -> DefaultOperation {
        match d {
            DefaultOperationArg::Merge => DefaultOperation::Merge,
            DefaultOperationArg::Replace => DefaultOperation::Replace,
            DefaultOperationArg::None => DefaultOperation::None,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ErrorOptionArg {
    StopOnError,
    ContinueOnError,
}

impl From<ErrorOptionArg> for ErrorOption {
    fn from(e: ErrorOptionArg) -> ErrorOption {
        match e {
            ErrorOptionArg::StopOnError => ErrorOption::StopOnError,
            ErrorOptionArg::ContinueOnError => ErrorOption::ContinueOnError,
        }
    }
}

#[derive(Args)]
pub struct EditConfigArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Datastore to edit
    #[arg(long = "target", value_enum)]
    pub target: TargetArg,

    /// RFC 6241 edit-config XML patch
    #[arg(long = "config")]
    pub config: String,

    #[arg(long = "default-operation", value_enum, default_value = "merge")]
    pub default_operation: DefaultOperationArg,

    #[arg(long = "error-option", value_enum, default_value = "stop-on-error")]
    pub error_option: ErrorOptionArg,
}

pub fn run(args: EditConfigArgs) -> Result<()> {
    let mut ds = open_datastore()?;
    ds.edit_config(
        &args.session.session(),
        args.target.into(),
        &args.config,
        args.default_operation.into(),
        args.error_option.into(),
    )
    .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    println!("edited");
    Ok(())
}
