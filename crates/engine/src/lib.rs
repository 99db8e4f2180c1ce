// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! batchinfer-engine: launch and teardown orchestration
//!
//! Every control-plane call goes through a [`CallGuard`], which bounds it by a
//! deadline and a cancellation token. Execution is strictly sequential.

mod guard;
mod launch;
mod preflight;
mod teardown;

pub use guard::{CallGuard, GuardError};
pub use launch::{LaunchError, LaunchReceipt, LaunchRequest, Launcher};
pub use preflight::{preflight, PreflightError};
pub use teardown::{DeleteError, Teardown, TeardownError, TeardownReport};
