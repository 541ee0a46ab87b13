//! Running analysis tools behind the usage gate.

use std::sync::{Arc, Mutex, PoisonError};

use crezia_core::account::Account;
use crezia_core::config::LatencySettings;
use crezia_core::error::Result;
use crezia_core::tool::{SampleGenerator, ToolInput, ToolKind, ToolReport};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio_util::sync::CancellationToken;

use crate::scheduler::Scheduler;
use crate::session::SessionManager;

/// Outcome of one tool run.
#[derive(Debug, Clone)]
pub struct ToolRun {
    pub kind: ToolKind,
    /// `None` when the input was incomplete. The run is still charged.
    pub report: Option<ToolReport>,
    /// Session state after the charge.
    pub account: Account,
}

pub struct ToolUseCase {
    sessions: Arc<SessionManager>,
    scheduler: Arc<dyn Scheduler>,
    latency: LatencySettings,
    generator: Mutex<SampleGenerator<StdRng>>,
}

impl ToolUseCase {
    pub fn new(
        sessions: Arc<SessionManager>,
        scheduler: Arc<dyn Scheduler>,
        latency: LatencySettings,
    ) -> Self {
        Self::with_rng(sessions, scheduler, latency, StdRng::from_entropy())
    }

    /// Uses a fixed seed so random reports are reproducible.
    pub fn with_seed(
        sessions: Arc<SessionManager>,
        scheduler: Arc<dyn Scheduler>,
        latency: LatencySettings,
        seed: u64,
    ) -> Self {
        Self::with_rng(sessions, scheduler, latency, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        sessions: Arc<SessionManager>,
        scheduler: Arc<dyn Scheduler>,
        latency: LatencySettings,
        rng: StdRng,
    ) -> Self {
        Self {
            sessions,
            scheduler,
            latency,
            generator: Mutex::new(SampleGenerator::new(rng)),
        }
    }

    /// Opens a tool's form. Checks the gate but charges nothing.
    pub fn open(&self, kind: ToolKind) -> Result<ToolKind> {
        self.sessions.authorize()?;
        tracing::debug!(tool = %kind, "Tool opened");
        Ok(kind)
    }

    /// Runs a tool: authorize and charge, wait out the simulated processing
    /// time, then build the report.
    ///
    /// The charge happens before the delay and before the input is looked
    /// at. Cancelling during the delay does not refund it.
    pub async fn run(&self, input: &ToolInput, cancel: &CancellationToken) -> Result<ToolRun> {
        let kind = input.kind();
        let account = self.sessions.begin_gated_action()?;
        tracing::info!(tool = %kind, usage = account.usage, "Tool run started");

        self.scheduler
            .defer(self.latency.tool_delay(), cancel)
            .await?;

        let report = {
            let mut generator = self
                .generator
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            generator.generate(input)
        };

        if report.is_none() {
            tracing::debug!(tool = %kind, "Tool input incomplete, no report");
        }

        Ok(ToolRun {
            kind,
            report,
            account,
        })
    }
}
