//! Sink boundary for emitted samples.

use crate::error::SimResult;
use crate::sample::Sample;

/// Consumer of trajectory samples.
///
/// The runner calls `emit` once for the initial state and once per step. A
/// sink may fail (e.g. a file write error); the runner propagates the
/// failure and stops.
pub trait SampleSink {
    fn emit(&mut self, sample: &Sample) -> SimResult<()>;
}

/// Collects samples in memory. Useful for tests and programmatic callers.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    samples: Vec<Sample>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl SampleSink for MemorySink {
    fn emit(&mut self, sample: &Sample) -> SimResult<()> {
        self.samples.push(*sample);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        for t in 0..3 {
            sink.emit(&Sample {
                time_s: t,
                velocity: t as f64,
                temperature: 20.0,
            })
            .unwrap();
        }
        let times: Vec<u64> = sink.samples().iter().map(|s| s.time_s).collect();
        assert_eq!(times, vec![0, 1, 2]);
    }
}
