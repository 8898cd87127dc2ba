//! `flightdeck replay`: run a recorded file through a status monitor and
//! print the transitions it publishes.

use crate::commands::read_input;
use crate::error::CliError;
use crate::output;
use anyhow::{Context, Result};
use flightdeck_monitor::{ChannelSink, MonitorConfig, StatusMonitor};
use std::path::Path;
use tracing::info;

pub async fn execute(input: &str, config: Option<&Path>, json: bool) -> Result<()> {
    let config = match config {
        Some(path) => MonitorConfig::load_from_path(path).map_err(CliError::from)?,
        None => MonitorConfig::default(),
    };
    let lines = read_input(input)?;

    let (sink, mut receiver) = ChannelSink::new();
    let collector = tokio::spawn(async move {
        let mut transitions = Vec::new();
        while let Some(transition) = receiver.recv().await {
            transitions.push(transition);
        }
        transitions
    });

    let monitor = StatusMonitor::new(config, sink);
    let stats = monitor.process_lines(&lines).map_err(CliError::from)?;
    // closes the channel so the collector finishes
    drop(monitor);

    let transitions = collector
        .await
        .context("Transition collector task failed")?;

    info!(
        lines = stats.lines,
        decoded = stats.decoded,
        ignored = stats.ignored,
        skipped = stats.skipped,
        published = stats.published,
        "Replay finished"
    );

    output::print_replay(&transitions, &stats, json);
    Ok(())
}
