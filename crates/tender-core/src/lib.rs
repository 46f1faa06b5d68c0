//! tender-core
//!
//! Core building blocks for the tender autonomous greenhouse controller:
//! a polling loop that reads sensor status, asks an external reasoning
//! service for a decision, screens the proposal, applies it through an
//! actuator gateway, and keeps a bounded audit log.
//!
//! # Module layout
//! - **domain**: value types and pure logic (snapshot, decision, validation,
//!   JSON extraction, bounded log + statistics, error taxonomy)
//! - **ports**: abstraction layer (StatusProvider, DecisionService,
//!   CommandGateway, Clock)
//! - **app**: application logic (ControllerBuilder, Controller, prompt
//!   construction, status views)
//! - **http**: reqwest adapters for the real endpoints

pub mod app;
pub mod domain;
pub mod http;
pub mod ports;
