// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Arguments and helpers shared by every subcommand.

use clap::{Args, ValueEnum};
use dsf_core::{Session, SystemClock, Target};
use dsf_nacm::PermissiveNacm;
use dsf_storage::Datastore;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TargetArg {
    Running,
    Startup,
    Candidate,
}

impl From<TargetArg> for Target {
    fn from(t: TargetArg) -> Target {
        match t {
            TargetArg::Running => Target::Running,
            TargetArg::Startup => Target::Startup,
            TargetArg::Candidate => Target::Candidate,
        }
    }
}

#[derive(Args)]
pub struct SessionArgs {
    /// NETCONF session id to act as
    #[arg(long = "session-id")]
    pub session_id: String,

    /// Username recorded on the session, for audit logging
    #[arg(long = "username", default_value = "cli")]
    pub username: String,

    /// Hostname recorded on the session, for audit logging
    #[arg(long = "hostname", default_value = "localhost")]
    pub hostname: String,
}

impl SessionArgs {
    pub fn session(&self) -> Session {
        Session::new(self.session_id.clone(), self.username.clone(), self.hostname.clone())
    }
}

/// Open the datastore named by `DSF_DATASTORE_PATH`, honoring
/// `DSF_FILE_MODE` for a file this call creates.
pub fn open_datastore() -> anyhow::Result<Datastore> {
    let path = crate::env::datastore_path()?;
    let mode = crate::env::file_mode();
    Datastore::open_with_mode(path, Box::new(SystemClock), Box::new(PermissiveNacm), mode)
        .map_err(|e| anyhow::anyhow!(e.to_string()))
}
