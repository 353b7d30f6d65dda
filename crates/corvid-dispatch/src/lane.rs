// SPDX-FileCopyrightText: 2026 Corvid Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The desktop lane: single-worker serialization for tools that drive a
//! shared screen, keyboard, or browser window.
//!
//! The lane is an actor owning the shared OS UI resource. Jobs arrive on a
//! bounded mpsc queue and run one at a time, in arrival order; callers
//! await a oneshot for the result. At most one desktop-category execution
//! is in flight system-wide while a lane is attached. Everything
//! non-desktop bypasses the lane entirely.

use corvid_core::{CorvidError, RequestContext};
use corvid_tools::ToolOutput;
use futures::future::BoxFuture;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace};

/// A queued desktop execution.
struct LaneJob {
    /// The caller's context; a job whose caller cancelled while queued is
    /// skipped without running.
    ctx: RequestContext,
    run: BoxFuture<'static, Result<ToolOutput, CorvidError>>,
    respond: oneshot::Sender<Result<ToolOutput, CorvidError>>,
}

/// Single-worker execution lane for desktop-category tools.
pub struct DesktopLane {
    tx: mpsc::Sender<LaneJob>,
}

impl DesktopLane {
    /// Starts the lane worker with a bounded queue.
    pub fn new(queue_depth: usize) -> Self {
        let (tx, rx) = mpsc::channel(queue_depth.max(1));
        tokio::spawn(Self::worker(rx));
        Self { tx }
    }

    async fn worker(mut rx: mpsc::Receiver<LaneJob>) {
        while let Some(job) = rx.recv().await {
            if job.ctx.is_cancelled() || job.respond.is_closed() {
                trace!("skipping lane job whose caller gave up while queued");
                continue;
            }
            let result = job.run.await;
            // The caller may have cancelled mid-execution; the result is
            // simply dropped then.
            let _ = job.respond.send(result);
        }
        debug!("desktop lane worker stopped");
    }

    /// Queues an execution and waits for its result.
    ///
    /// The wait aborts with `Canceled` when the caller's cancellation or
    /// deadline fires, both while queued and while another job holds the
    /// lane. A job already running completes on the worker regardless.
    pub async fn enqueue(
        &self,
        ctx: &RequestContext,
        run: BoxFuture<'static, Result<ToolOutput, CorvidError>>,
    ) -> Result<ToolOutput, CorvidError> {
        let (respond_tx, respond_rx) = oneshot::channel();
        let job = LaneJob {
            ctx: ctx.clone(),
            run,
            respond: respond_tx,
        };

        tokio::select! {
            sent = self.tx.send(job) => {
                sent.map_err(|_| {
                    CorvidError::Internal("desktop lane worker is gone".to_string())
                })?;
            }
            _ = ctx.cancelled() => return Err(CorvidError::Canceled),
        }

        tokio::select! {
            result = respond_rx => match result {
                Ok(output) => output,
                Err(_) => Err(CorvidError::Internal(
                    "desktop lane dropped the job".to_string(),
                )),
            },
            _ = ctx.cancelled() => Err(CorvidError::Canceled),
        }
    }
}
