// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! batchinfer-core: job configuration, naming and credentials for batch
//! inference launches

pub mod clock;
pub mod config;
pub mod credentials;
pub mod name;

pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{JobConfig, ValidationError};
pub use credentials::{Credentials, PreconditionError, S3Credentials, CONTAINER_IMAGE};
pub use name::{codename, JobName, NameGenerator};
