// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! dsf - a thin exerciser CLI over the file-backed NETCONF configuration
//! datastore.

mod commands;
mod env;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{copy_config, delete_config, edit_config, get_config, lock, lockinfo, unlock};

#[derive(Parser)]
#[command(name = "dsf", version, about = "File-backed NETCONF configuration datastore")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Acquire a NETCONF lock on a datastore
    Lock(lock::LockArgs),
    /// Release a NETCONF lock on a datastore
    Unlock(unlock::UnlockArgs),
    /// Query the current lock holder of a datastore
    Lockinfo(lockinfo::LockinfoArgs),
    /// Print the serialised children of a datastore
    GetConfig(get_config::GetConfigArgs),
    /// Copy one datastore (or inline XML) into another
    CopyConfig(copy_config::CopyConfigArgs),
    /// Clear a datastore's children
    DeleteConfig(delete_config::DeleteConfigArgs),
    /// Apply an edit-config patch to a datastore
    EditConfig(edit_config::EditConfigArgs),
}

fn main() -> Result<()> {
    logging::setup_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Lock(args) => lock::run(args),
        Commands::Unlock(args) => unlock::run(args),
        Commands::Lockinfo(args) => lockinfo::run(args),
        Commands::GetConfig(args) => get_config::run(args),
        Commands::CopyConfig(args) => copy_config::run(args),
        Commands::DeleteConfig(args) => delete_config::run(args),
        Commands::EditConfig(args) => edit_config::run(args),
    }
}
