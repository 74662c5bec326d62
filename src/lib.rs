//! Conditional purging of local artifact repositories (e.g. `~/.m2/repository`) before a build.
//!
//! The host resolves the repository roots and the effective [`PurgeConfig`], then calls
//! [`run`] (or [`run_all`]) once per build.

pub mod config;
pub mod decision;
pub mod error;
pub mod i18n;
pub mod namespace;
pub mod orchestrator;
pub mod purger;
pub mod state;

pub use config::{PurgeConfig, PurgeSettings};
pub use decision::{is_purge_due, Verdict};
pub use error::{PurgeError, PurgeResult};
pub use orchestrator::{now_local, run, run_all, Outcome};
pub use state::PurgeState;
