//! ControllerBuilder - construction and wiring.
//!
//! Fail-fast: every missing or nonsensical piece of configuration is
//! reported at build time, before the loop ever runs. A controller that
//! could not be built does not exist ("running = false forever" is not a
//! state we allow into the system).

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{DecisionLog, DEFAULT_MAX_LOG_SIZE};
use crate::ports::{Clock, CommandGateway, DecisionService, StatusProvider, SystemClock};

use super::controller::Controller;

/// Default polling cadence (matches the original dashboard's 10 s).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("missing port: {0}. Wire it before calling build().")]
    MissingPort(&'static str),

    #[error("decision service API key is required")]
    MissingApiKey,

    #[error("poll interval must be positive")]
    NonPositiveInterval,

    #[error("decision log cap must be positive")]
    ZeroLogCap,
}

/// Builder for [`Controller`].
///
/// # Example
/// ```ignore
/// let controller = ControllerBuilder::new()
///     .status_provider(provider)
///     .decision_service(service)
///     .command_gateway(gateway)
///     .build()?;
/// ```
pub struct ControllerBuilder {
    status_provider: Option<Arc<dyn StatusProvider>>,
    decision_service: Option<Arc<dyn DecisionService>>,
    command_gateway: Option<Arc<dyn CommandGateway>>,
    clock: Arc<dyn Clock>,
    poll_interval: Duration,
    max_log_size: usize,
}

impl ControllerBuilder {
    pub fn new() -> Self {
        Self {
            status_provider: None,
            decision_service: None,
            command_gateway: None,
            clock: Arc::new(SystemClock),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_log_size: DEFAULT_MAX_LOG_SIZE,
        }
    }

    pub fn status_provider(mut self, provider: impl StatusProvider + 'static) -> Self {
        self.status_provider = Some(Arc::new(provider));
        self
    }

    pub fn decision_service(mut self, service: impl DecisionService + 'static) -> Self {
        self.decision_service = Some(Arc::new(service));
        self
    }

    pub fn command_gateway(mut self, gateway: impl CommandGateway + 'static) -> Self {
        self.command_gateway = Some(Arc::new(gateway));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn max_log_size(mut self, cap: usize) -> Self {
        self.max_log_size = cap;
        self
    }

    /// Validate the wiring and produce an idle controller.
    pub fn build(self) -> Result<Controller, BuildError> {
        let status_provider = self
            .status_provider
            .ok_or(BuildError::MissingPort("status_provider"))?;
        let decision_service = self
            .decision_service
            .ok_or(BuildError::MissingPort("decision_service"))?;
        let command_gateway = self
            .command_gateway
            .ok_or(BuildError::MissingPort("command_gateway"))?;

        if self.poll_interval.is_zero() {
            return Err(BuildError::NonPositiveInterval);
        }
        if self.max_log_size == 0 {
            return Err(BuildError::ZeroLogCap);
        }

        Ok(Controller::new(
            status_provider,
            decision_service,
            command_gateway,
            self.clock,
            self.poll_interval,
            DecisionLog::new(self.max_log_size),
        ))
    }
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
