//! Check command handler

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use flip::config::frame_time_from_ms;
use flip::player::{plan, Plan, PlanOptions};
use flip::Config;

use super::{format_duration, load_sequence};

/// Summary of a validated sequence file.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub file: PathBuf,
    pub directory: PathBuf,
    pub entries: usize,
    pub frames: usize,
    pub unique_frames: usize,
    pub loops: usize,
    pub frame_time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub plan: Plan,
}

/// Validate a sequence file and print its playback plan.
#[cfg(not(tarpaulin_include))]
pub fn handle(path: &Path, json: bool) -> Result<()> {
    let config = Config::load()?;
    let report = build_report(path, &config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

/// Load, validate and dry-run `path`. Missing frame files are an error.
pub(crate) fn build_report(path: &Path, config: &Config) -> Result<CheckReport> {
    let (file, sequence) = load_sequence(path)?;
    let directory = file.frame_directory();
    let background = file
        .background
        .clone()
        .or_else(|| config.display.background.clone());

    let mut missing: Vec<&str> = sequence
        .identifiers()
        .into_iter()
        .filter(|id| !directory.join(id).is_file())
        .collect();
    if let Some(bg) = background.as_deref() {
        if !directory.join(bg).is_file() {
            missing.push(bg);
        }
    }
    if !missing.is_empty() {
        anyhow::bail!(
            "Missing frame files in {}: {}",
            directory.display(),
            missing.join(", ")
        );
    }

    let frame_time_ms = file.frame_time_ms.unwrap_or(config.playback.frame_time_ms);
    let frame_time = frame_time_from_ms(frame_time_ms)
        .with_context(|| format!("Invalid frame time: {} ms", frame_time_ms))?;
    let options = PlanOptions {
        frame_time,
        redirect: file.redirect.clone(),
        ..PlanOptions::default()
    };
    let plan = plan(&sequence, &options)?;

    Ok(CheckReport {
        file: path.to_path_buf(),
        directory,
        entries: sequence.len(),
        frames: sequence.frames().count(),
        unique_frames: sequence.identifiers().len(),
        loops: sequence.loop_count(),
        frame_time_ms,
        background,
        plan,
    })
}

/// Human-readable report.
pub(crate) fn render_report(report: &CheckReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {} entries, {} frames ({} unique), {} loop{}",
        report.file.display(),
        report.entries,
        report.frames,
        report.unique_frames,
        report.loops,
        if report.loops == 1 { "" } else { "s" }
    );
    let _ = writeln!(out, "Frame time: {} ms", report.frame_time_ms);
    if let Some(bg) = &report.background {
        let _ = writeln!(out, "Background: {}", bg);
    }
    let _ = writeln!(out);

    let width = report
        .plan
        .frames
        .iter()
        .map(|f| f.identifier.len())
        .max()
        .unwrap_or(0);
    for frame in &report.plan.frames {
        let delay = frame
            .delay
            .map(format_duration)
            .unwrap_or_else(|| "manual".to_string());
        let _ = writeln!(
            out,
            "{:>5}  {:<width$}  {}",
            frame.index,
            frame.identifier,
            delay,
            width = width
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} rendered, {} timed, {} manual stop{}",
        report.plan.frames.len(),
        format_duration(report.plan.timed_duration()),
        report.plan.manual_stops(),
        if report.plan.manual_stops() == 1 { "" } else { "s" }
    );
    let _ = writeln!(out, "Then: {}", report.plan.end);
    out
}
