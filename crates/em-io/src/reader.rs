//! Parameter readers: flat file format and interactive prompts.
//!
//! File format, one value per line:
//!
//! ```text
//! line 1    moment of inertia
//! line 2    overheat temperature
//! line 3    heat/torque coefficient
//! line 4    heat/speed coefficient
//! line 5    cooling coefficient
//! line 6    segment count N
//! N lines   torque speed   (two whitespace-separated floats, torque first)
//! ```
//!
//! Any parse failure invalidates the whole read; no partially built engine
//! is ever returned.

use std::io::{BufRead, Write};
use std::path::Path;

use em_core::{EngineParameters, Real, ensure_finite};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Lowest physically meaningful ambient temperature (°C).
const MIN_AMBIENT_TEMP: Real = -273.0;

struct LineReader<'a> {
    lines: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self, field: &'static str) -> IoResult<&'a str> {
        self.line_no += 1;
        self.lines
            .next()
            .ok_or(IoError::UnexpectedEof { field })
    }

    fn next_real(&mut self, field: &'static str) -> IoResult<Real> {
        let line = self.next_line(field)?;
        let value: Real = line.trim().parse().map_err(|_| IoError::Parse {
            line: self.line_no,
            field,
            value: line.to_string(),
        })?;
        Ok(ensure_finite(value, field)?)
    }

    fn next_count(&mut self, field: &'static str) -> IoResult<usize> {
        let line = self.next_line(field)?;
        line.trim().parse().map_err(|_| IoError::Parse {
            line: self.line_no,
            field,
            value: line.to_string(),
        })
    }

    fn next_pair(&mut self) -> IoResult<(Real, Real)> {
        let field = "curve segment";
        let line = self.next_line(field)?;
        let parse_err = || IoError::Parse {
            line: self.line_no,
            field,
            value: line.to_string(),
        };

        let mut parts = line.split_whitespace();
        let torque: Real = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(|| parse_err())?;
        let speed: Real = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(|| parse_err())?;
        if parts.next().is_some() {
            return Err(parse_err());
        }
        ensure_finite(torque, "segment torque")?;
        ensure_finite(speed, "segment speed")?;
        Ok((torque, speed))
    }
}

/// Parse engine parameters from flat text.
pub fn parse_parameters(text: &str) -> IoResult<EngineParameters> {
    let mut lines = LineReader::new(text);

    let inertia = lines.next_real("moment of inertia")?;
    let overheat_temp = lines.next_real("overheat temperature")?;
    let heat_torque_coeff = lines.next_real("heat/torque coefficient")?;
    let heat_speed_coeff = lines.next_real("heat/speed coefficient")?;
    let cool_coeff = lines.next_real("cooling coefficient")?;
    let segment_count = lines.next_count("segment count")?;

    // Capacity is a hint only; a hostile count line must fail at the first
    // missing pair, not allocate up front.
    let mut pairs = Vec::with_capacity(segment_count.min(1024));
    for _ in 0..segment_count {
        let (torque, speed) = lines.next_pair()?;
        pairs.push((speed, torque));
    }

    Ok(EngineParameters::from_values(
        inertia,
        overheat_temp,
        heat_torque_coeff,
        heat_speed_coeff,
        cool_coeff,
        pairs,
    )?)
}

/// Read engine parameters from a flat text file.
pub fn read_parameters_file(path: &Path) -> IoResult<EngineParameters> {
    let content = std::fs::read_to_string(path)?;
    let params = parse_parameters(&content)?;
    debug!(
        path = %path.display(),
        segments = params.curve().len(),
        "loaded engine parameters"
    );
    Ok(params)
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: &'static str,
    prompt: &str,
) -> IoResult<String> {
    write!(output, "{prompt} = ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(IoError::UnexpectedEof { field });
    }
    Ok(line.trim().to_string())
}

fn prompt_real<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: &'static str,
    prompt: &str,
) -> IoResult<Real> {
    let line = prompt_line(input, output, field, prompt)?;
    let value: Real = line.parse().map_err(|_| IoError::InvalidInput {
        field,
        value: line.clone(),
    })?;
    Ok(ensure_finite(value, field)?)
}

/// Read engine parameters interactively, one field per prompt.
///
/// The first invalid numeric input aborts the whole read; the caller decides
/// whether to retry from scratch.
pub fn read_parameters_interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> IoResult<EngineParameters> {
    let inertia = prompt_real(input, output, "moment of inertia", "Moment of inertia")?;
    let overheat_temp = prompt_real(
        input,
        output,
        "overheat temperature",
        "Overheat temperature",
    )?;
    let heat_torque_coeff = prompt_real(
        input,
        output,
        "heat/torque coefficient",
        "Heat/torque coefficient",
    )?;
    let heat_speed_coeff = prompt_real(
        input,
        output,
        "heat/speed coefficient",
        "Heat/speed coefficient",
    )?;
    let cool_coeff = prompt_real(input, output, "cooling coefficient", "Cooling coefficient")?;

    let count_line = prompt_line(input, output, "segment count", "Number of curve segments")?;
    let segment_count: usize = count_line.parse().map_err(|_| IoError::InvalidInput {
        field: "segment count",
        value: count_line.clone(),
    })?;

    let mut pairs = Vec::with_capacity(segment_count.min(1024));
    for i in 1..=segment_count {
        let field = "curve segment";
        let line = prompt_line(
            input,
            output,
            field,
            &format!("Segment {i} (torque speed)"),
        )?;
        let mut parts = line.split_whitespace();
        let parsed = (
            parts.next().and_then(|p| p.parse::<Real>().ok()),
            parts.next().and_then(|p| p.parse::<Real>().ok()),
            parts.next(),
        );
        match parsed {
            (Some(torque), Some(speed), None) => {
                ensure_finite(torque, "segment torque")?;
                ensure_finite(speed, "segment speed")?;
                pairs.push((speed, torque));
            }
            _ => {
                return Err(IoError::InvalidInput { field, value: line });
            }
        }
    }

    Ok(EngineParameters::from_values(
        inertia,
        overheat_temp,
        heat_torque_coeff,
        heat_speed_coeff,
        cool_coeff,
        pairs,
    )?)
}

/// Prompt for the ambient temperature, re-asking while the input is not a
/// number at or above -273.
///
/// # Errors
/// Only on end of input or a write failure on the prompt stream.
pub fn prompt_ambient_temperature<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> IoResult<Real> {
    let field = "ambient temperature";
    loop {
        let line = prompt_line(input, output, field, "Ambient temperature")?;
        match line.parse::<Real>() {
            Ok(value) if value.is_finite() && value >= MIN_AMBIENT_TEMP => return Ok(value),
            _ => {
                writeln!(
                    output,
                    "Invalid ambient temperature (expected a number >= {MIN_AMBIENT_TEMP}). Try again."
                )?;
            }
        }
    }
}
