use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use futures::future::join_all;
use tokio::time::Duration;

use crate::core::constants::{batches, error_messages, timeouts};
use crate::core::types::{CheckableRow, ProbeResult, RowColor};
use crate::monitor::prober::Probe;

/// Mutable display surface the scheduler reports into.
///
/// Owned by the presentation layer: a terminal table, a grid widget, or a
/// test recorder. The scheduler calls `on_row_update` every time a row's
/// status surface changes and `on_progress` once per completed chunk.
pub trait StatusSink {
    fn on_row_update(&mut self, row: &CheckableRow);
    fn on_progress(&mut self, completed: usize);
}

/// Sink that ignores all updates, for callers that only want final rows
#[derive(Debug, Default)]
pub struct NullSink;

impl StatusSink for NullSink {
    fn on_row_update(&mut self, _row: &CheckableRow) {}
    fn on_progress(&mut self, _completed: usize) {}
}

/// Per-sweep settings, uniform across every probe of the sweep
#[derive(Debug, Clone, Copy)]
pub struct SweepOptions {
    /// Upper bound on concurrently in-flight probes
    pub batch_size: usize,
    /// Per-probe timeout
    pub timeout: Duration,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            batch_size: batches::DEFAULT_BATCH_SIZE,
            timeout: Duration::from_secs_f64(timeouts::DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

/// Maps a completed probe onto a row's status surface
pub type Classifier = dyn Fn(&mut CheckableRow, &ProbeResult) + Send + Sync;

/// Default classification policy:
/// - online -> "OK (<code>)", success color, measured latency
/// - error present -> error text, error color, latency 0
/// - offline status code -> "Error <code>", error color, latency 0
pub fn default_classification(row: &mut CheckableRow, result: &ProbeResult) {
    if result.is_online() {
        row.status_label = format!("OK ({})", result.status_code);
        row.color = RowColor::Success;
        row.latency = result.latency_seconds;
    } else if let Some(ref error) = result.error {
        row.mark_failed(error);
    } else {
        row.mark_failed(&format!("Error {}", result.status_code));
    }
}

/// Drives a full sweep over a row set with bounded concurrency.
///
/// Rows are partitioned into consecutive chunks of at most `batch_size`.
/// Chunks run strictly in row order; probes within a chunk run concurrently
/// and the scheduler joins the whole chunk before moving on. Presentation
/// variants share one scheduler and differ only in the classifier.
pub struct BatchScheduler<P> {
    prober: Arc<P>,
    classifier: Box<Classifier>,
}

impl<P: Probe + 'static> BatchScheduler<P> {
    pub fn new(prober: P) -> Self {
        Self {
            prober: Arc::new(prober),
            classifier: Box::new(default_classification),
        }
    }

    /// Replace the classification policy
    pub fn with_classifier<C>(mut self, classifier: C) -> Self
    where
        C: Fn(&mut CheckableRow, &ProbeResult) + Send + Sync + 'static,
    {
        self.classifier = Box::new(classifier);
        self
    }

    /// Run one sweep. Rows are mutated in place; all results are observed
    /// through the sink. Rows with an empty URL are skipped without a
    /// status change but still count toward progress. A failure while
    /// probing or classifying a single row marks that row and never aborts
    /// the sweep.
    pub async fn run<S: StatusSink>(
        &self,
        rows: &mut [CheckableRow],
        options: &SweepOptions,
        sink: &mut S,
    ) {
        let batch_size = options.batch_size.max(1);

        for chunk in rows.chunks_mut(batch_size) {
            // Visual feedback before any probe of this chunk is in flight
            for row in chunk.iter_mut().filter(|row| row.is_checkable()) {
                row.mark_checking();
                sink.on_row_update(row);
            }

            let mut indices = Vec::with_capacity(chunk.len());
            let mut tasks = Vec::with_capacity(chunk.len());
            for (index, row) in chunk.iter().enumerate() {
                if !row.is_checkable() {
                    continue;
                }
                let prober = Arc::clone(&self.prober);
                let url = row.url.clone();
                let timeout = options.timeout;
                indices.push(index);
                tasks.push(tokio::spawn(async move {
                    prober.check(&url, timeout).await
                }));
            }

            // Join the whole chunk; completion order within it is irrelevant
            for (index, outcome) in indices.into_iter().zip(join_all(tasks).await) {
                match outcome {
                    Ok(result) => self.classify(&mut chunk[index], &result),
                    Err(join_error) => chunk[index].mark_failed(&join_error.to_string()),
                }
                sink.on_row_update(&chunk[index]);
            }

            sink.on_progress(chunk.len());
        }
    }

    /// Apply the classifier at the per-row failure boundary
    fn classify(&self, row: &mut CheckableRow, result: &ProbeResult) {
        let outcome = catch_unwind(AssertUnwindSafe(|| (self.classifier)(row, result)));
        if let Err(payload) = outcome {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| error_messages::UNKNOWN_ERROR.to_string());
            row.mark_failed(&message);
        }
    }
}
