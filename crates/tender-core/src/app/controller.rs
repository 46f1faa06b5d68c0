//! Controller - automation lifecycle and the polling cycle.
//!
//! One cycle: fetch status -> build prompt -> ask the reasoner ->
//! extract/parse -> validate -> execute -> log -> wait. The loop runs one
//! cycle at a time on the tokio runtime; cycle errors are contained at
//! the cycle boundary and never terminate the loop.
//!
//! Shutdown is cooperative and coarse: `stop()` reports the controller
//! idle right away and trips a watch flag that is honored at the top of
//! the next iteration, so an in-flight cycle always completes. The
//! inter-cycle wait races the flag, which means a pending wait is
//! cancelled immediately instead of being slept out.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::{
    CommandPayload, ControlError, ControlStats, DecisionLog, LogEntry, StatusSnapshot,
    extract_json_object, validate,
};
use crate::ports::{Clock, CommandGateway, DecisionService, StatusProvider};

use super::prompt::build_prompt;
use super::status::ControllerStatus;

/// Rejected by [`Controller::set_poll_interval`] for a zero interval.
#[derive(Debug, thiserror::Error)]
#[error("poll interval must be positive")]
pub struct InvalidInterval;

/// State mutated only from the polling task; the accessors copy out of it.
struct SharedState {
    last_status: Option<StatusSnapshot>,
    log: DecisionLog,
}

struct ControllerInner {
    status_provider: Arc<dyn StatusProvider>,
    decision_service: Arc<dyn DecisionService>,
    command_gateway: Arc<dyn CommandGateway>,
    clock: Arc<dyn Clock>,

    /// Read fresh before every wait, so changes apply to the next wait
    /// without disturbing an in-progress one.
    poll_interval_ms: AtomicU64,

    /// Toggled by `start`/`stop` only; the loop task never writes it, so
    /// accessors report the requested state the moment `stop()` returns,
    /// even while a final in-flight cycle is still draining.
    running: AtomicBool,

    /// Sender for the current run; replaced on every `start()` so a
    /// draining loop from a previous run keeps listening to its own,
    /// already-tripped channel.
    shutdown_tx: Mutex<watch::Sender<bool>>,

    handle: Mutex<Option<JoinHandle<()>>>,

    state: tokio::sync::Mutex<SharedState>,
}

/// Handle to the decision loop. Cheap to clone; all clones drive the same
/// loop. Constructed through [`crate::app::ControllerBuilder`].
#[derive(Clone)]
pub struct Controller {
    inner: Arc<ControllerInner>,
}

impl Controller {
    pub(crate) fn new(
        status_provider: Arc<dyn StatusProvider>,
        decision_service: Arc<dyn DecisionService>,
        command_gateway: Arc<dyn CommandGateway>,
        clock: Arc<dyn Clock>,
        poll_interval: Duration,
        log: DecisionLog,
    ) -> Self {
        let (shutdown_tx, _) = watch::channel(true);
        Self {
            inner: Arc::new(ControllerInner {
                status_provider,
                decision_service,
                command_gateway,
                clock,
                poll_interval_ms: AtomicU64::new(poll_interval.as_millis() as u64),
                running: AtomicBool::new(false),
                shutdown_tx: Mutex::new(shutdown_tx),
                handle: Mutex::new(None),
                state: tokio::sync::Mutex::new(SharedState {
                    last_status: None,
                    log,
                }),
            }),
        }
    }

    /// Start the polling loop. A no-op when already running.
    ///
    /// Starting right after `stop()` is honored even while the previous
    /// run's final cycle is still draining: the new loop is chained
    /// behind it, so no more than one cycle is ever in flight.
    pub fn start(&self) {
        let mut handle = self.inner.handle.lock().unwrap_or_else(|e| e.into_inner());
        if self.inner.running.swap(true, Ordering::SeqCst) {
            warn!("controller already running");
            return;
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        *self
            .inner
            .shutdown_tx
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = shutdown_tx;

        let draining = handle.take();
        let inner = Arc::clone(&self.inner);
        *handle = Some(tokio::spawn(async move {
            if let Some(draining) = draining {
                let _ = draining.await;
            }
            run_loop(inner, shutdown_rx).await;
        }));
    }

    /// Request the loop to stop: sets `running = false` immediately and
    /// trips the shutdown flag. Idempotent; never aborts an in-flight
    /// cycle, but does cancel a pending inter-cycle wait.
    pub fn stop(&self) {
        self.inner.running.store(false, Ordering::SeqCst);
        self.inner
            .shutdown_tx
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .send_replace(true);
    }

    /// Stop and wait for the loop task to exit.
    pub async fn stop_and_join(&self) {
        self.stop();
        let handle = {
            let mut slot = self.inner.handle.lock().unwrap_or_else(|e| e.into_inner());
            slot.take()
        };
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::SeqCst)
    }

    /// Change the polling cadence. Takes effect with the next wait; an
    /// in-progress wait or cycle is not interrupted.
    pub fn set_poll_interval(&self, ms: u64) -> Result<(), InvalidInterval> {
        if ms == 0 {
            return Err(InvalidInterval);
        }
        self.inner.poll_interval_ms.store(ms, Ordering::SeqCst);
        info!(interval_ms = ms, "poll interval updated");
        Ok(())
    }

    pub fn poll_interval_ms(&self) -> u64 {
        self.inner.poll_interval_ms.load(Ordering::SeqCst)
    }

    /// Read-only snapshot of the controller for the presentation layer.
    pub async fn status(&self) -> ControllerStatus {
        let state = self.inner.state.lock().await;
        ControllerStatus {
            running: self.is_running(),
            poll_interval_ms: self.poll_interval_ms(),
            last_status: state.last_status.clone(),
            stats: state.log.stats(),
        }
    }

    /// Statistics over the retained log window.
    pub async fn stats(&self) -> ControlStats {
        self.inner.state.lock().await.log.stats()
    }

    /// Owned copy of the retained log, oldest first.
    pub async fn log(&self) -> Vec<LogEntry> {
        self.inner.state.lock().await.log.snapshot()
    }
}

async fn run_loop(inner: Arc<ControllerInner>, mut shutdown_rx: watch::Receiver<bool>) {
    info!("controller started");

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        if let Err(err) = run_cycle(&inner).await {
            warn!(error = %err, "cycle failed; retrying on the next poll");
        }

        let wait = Duration::from_millis(inner.poll_interval_ms.load(Ordering::SeqCst));
        tokio::select! {
            // Re-check the flag at the top of the loop on any change.
            _ = shutdown_rx.changed() => {}
            _ = tokio::time::sleep(wait) => {}
        }
    }

    info!("controller stopped");
}

/// One fetch -> decide -> validate -> execute -> log pass.
///
/// Returns `Err` only for the loggable cycle-level failures; a rejected
/// or `none` decision is a quiet `Ok`.
async fn run_cycle(inner: &ControllerInner) -> Result<(), ControlError> {
    let snapshot = inner.status_provider.fetch().await?;
    {
        let mut state = inner.state.lock().await;
        state.last_status = Some(snapshot.clone());
    }

    let prompt = build_prompt(&snapshot);
    let reply = inner.decision_service.propose(&prompt).await?;

    let raw = extract_json_object(&reply).ok_or_else(|| {
        ControlError::DecisionParse("no JSON object found in reply".to_string())
    })?;
    let candidate = serde_json::from_str(raw)
        .map_err(|err| ControlError::DecisionParse(err.to_string()))?;
    debug!(decision = ?candidate, "decision proposed");

    let Some(decision) = validate(candidate) else {
        debug!("decision rejected; treating as no action this cycle");
        return Ok(());
    };
    if decision.is_none_action() {
        debug!(reason = %decision.reason, "no action needed");
        return Ok(());
    }

    let payload = CommandPayload::from_decision(&decision);
    let result = inner.command_gateway.execute(&payload).await?;
    info!(
        action = %decision.action,
        command = %decision.command,
        status = ?result.status,
        "command executed"
    );

    let entry = LogEntry::new(inner.clock.now(), decision, result);
    inner.state.lock().await.log.push(entry);
    Ok(())
}
