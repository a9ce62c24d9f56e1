//! Trajectory sinks and outcome formatting.

use std::io::Write;

use em_core::{EngineParameters, Real};
use em_sim::{Outcome, Sample, SampleSink, SimError, SimResult};

use crate::error::IoResult;

/// Tab-separated text sink: `t<TAB>v<TAB>T`, velocity to 2 and temperature
/// to 4 decimal places, preceded by a header block.
///
/// Works identically for a console stream and a file; the temperature rule
/// upstream never varies by target.
pub struct TrajectorySink<W: Write> {
    out: W,
}

impl<W: Write> TrajectorySink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the header block: parameter summary, ambient temperature, and
    /// the column line.
    pub fn write_header(&mut self, params: &EngineParameters, ambient: Real) -> IoResult<()> {
        write!(self.out, "{}", params.describe())?;
        writeln!(self.out, "  ambient temperature  = {ambient}")?;
        writeln!(self.out)?;
        writeln!(self.out, "t\tv\tT")?;
        Ok(())
    }

    pub fn flush(&mut self) -> IoResult<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SampleSink for TrajectorySink<W> {
    fn emit(&mut self, sample: &Sample) -> SimResult<()> {
        writeln!(
            self.out,
            "{}\t{:.2}\t{:.4}",
            sample.time_s, sample.velocity, sample.temperature
        )?;
        Ok(())
    }
}

/// JSON-lines sink: one object per sample.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn flush(&mut self) -> IoResult<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SampleSink for JsonLinesSink<W> {
    fn emit(&mut self, sample: &Sample) -> SimResult<()> {
        serde_json::to_writer(&mut self.out, sample).map_err(|e| SimError::Sink {
            message: e.to_string(),
        })?;
        writeln!(self.out)?;
        Ok(())
    }
}

/// Final human-readable verdict for a run.
pub fn format_outcome(outcome: &Outcome) -> String {
    if outcome.overheated {
        format!(
            "Engine running time = {} s.\nTemperature reached = {} degrees.",
            outcome.elapsed_s, outcome.final_temperature
        )
    } else {
        format!(
            "Engine does not overheat.\nMaximum temperature reached = {} degrees.",
            outcome.final_temperature
        )
    }
}
