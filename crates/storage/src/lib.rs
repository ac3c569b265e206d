// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Unlike the rest of the workspace, this crate talks to a POSIX named
// semaphore via raw libc FFI (see `mutex`), so `unsafe_code` is denied
// rather than forbidden at the crate root and locally allowed in the
// one module that needs it.
#![deny(unsafe_code)]

//! dsf-storage: the coordination and consistency layer of the
//! file-backed NETCONF configuration datastore — C1 through C6.

mod bootstrap;
mod frame;
mod handle;
mod lockreg;
mod mutex;
mod ops;
mod sync;

pub use bootstrap::DEFAULT_CREATE_MODE;
pub use frame::{structure_check, EMPTY_FRAME, NAMESPACE};
pub use handle::Datastore;
