//! Ports - abstraction layer over the external collaborators.
//!
//! Each trait hides one collaborator behind an interface the controller
//! can be tested against: the status backend, the reasoning service, the
//! actuator gateway, and the clock. The `http` module provides the
//! production implementations; tests script their own.

pub mod clock;
pub mod command_gateway;
pub mod decision_service;
pub mod status_provider;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::command_gateway::CommandGateway;
pub use self::decision_service::DecisionService;
pub use self::status_provider::StatusProvider;
