//! App - application layer.
//!
//! Combines the ports into the decision loop:
//! - **ControllerBuilder**: construction and wiring (fail-fast)
//! - **Controller**: lifecycle, the polling cycle, runtime controls
//! - **prompt**: decision-request construction from a snapshot
//! - **status**: read-only views for the presentation layer

pub mod builder;
pub mod controller;
pub mod prompt;
pub mod status;

pub use self::builder::{BuildError, ControllerBuilder};
pub use self::controller::{Controller, InvalidInterval};
pub use self::prompt::build_prompt;
pub use self::status::ControllerStatus;
