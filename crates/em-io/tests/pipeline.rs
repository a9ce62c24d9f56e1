//! Integration test: parse -> run -> write, and sink independence.
//!
//! The temperature update rule lives in the runner, so the trajectory and
//! outcome must be identical no matter which sink consumes the samples.

use em_io::{JsonLinesSink, TrajectorySink, format_outcome, parse_parameters};
use em_sim::{MemorySink, RunOptions, run};

const ENGINE_FILE: &str = "10\n100\n1\n0\n0.2\n2\n50 0\n40 10\n";

fn options() -> RunOptions {
    RunOptions {
        ambient_temperature: 20.0,
        max_time_s: 1000,
    }
}

#[test]
fn outcome_is_identical_across_sinks() {
    let params = parse_parameters(ENGINE_FILE).unwrap();
    let opts = options();

    let mut memory = MemorySink::new();
    let via_memory = run(&params, &opts, &mut memory).unwrap();

    let mut text = TrajectorySink::new(Vec::new());
    let via_text = run(&params, &opts, &mut text).unwrap();

    let mut json = JsonLinesSink::new(Vec::new());
    let via_json = run(&params, &opts, &mut json).unwrap();

    assert_eq!(via_memory, via_text);
    assert_eq!(via_memory, via_json);
}

#[test]
fn text_trajectory_matches_the_memory_samples() {
    let params = parse_parameters(ENGINE_FILE).unwrap();
    let opts = options();

    let mut memory = MemorySink::new();
    run(&params, &opts, &mut memory).unwrap();

    let mut text = TrajectorySink::new(Vec::new());
    text.write_header(&params, opts.ambient_temperature).unwrap();
    run(&params, &opts, &mut text).unwrap();
    let written = String::from_utf8(text.into_inner()).unwrap();

    let body = written.split("t\tv\tT\n").nth(1).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), memory.samples().len());

    for (line, sample) in lines.iter().zip(memory.samples()) {
        let expected = format!(
            "{}\t{:.2}\t{:.4}",
            sample.time_s, sample.velocity, sample.temperature
        );
        assert_eq!(*line, expected);
    }
}

#[test]
fn full_pipeline_reports_the_overheat_verdict() {
    let params = parse_parameters(ENGINE_FILE).unwrap();
    let opts = options();

    let mut sink = MemorySink::new();
    let outcome = run(&params, &opts, &mut sink).unwrap();

    // Heating dominates the mild cooling; the engine must overheat well
    // inside the horizon.
    assert!(outcome.overheated);
    assert!(outcome.elapsed_s < opts.max_time_s);
    assert!(outcome.final_temperature >= params.overheat_temp());
    assert!(format_outcome(&outcome).contains("running time"));
}
