// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod controller;
mod error;
mod feed;
mod session;

#[cfg(test)]
mod tests;

pub use controller::SessionController;
pub use error::CoreError;
pub use feed::{ChangeEvent, ChangeFeed, refresh_on_change};
pub use session::Session;
