use std::sync::Mutex;

/// Counters for synchronization passes, updated by the engine and reported
/// by the host shell.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    passes: usize,
    primitives: usize,
    errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                passes: 0,
                primitives: 0,
                errors: 0,
            }),
        }
    }

    pub fn record_pass(&self, primitives: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.passes += 1;
            metrics.primitives += primitives;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.errors += 1;
        }
    }

    pub fn snapshot(&self) -> (usize, usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.passes, metrics.primitives, metrics.errors)
        } else {
            (0, 0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_accumulates_passes_and_primitives() {
        let recorder = MetricsRecorder::new();
        recorder.record_pass(4);
        recorder.record_pass(2);
        recorder.record_error();
        assert_eq!(recorder.snapshot(), (2, 6, 1));
    }
}
