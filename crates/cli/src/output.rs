//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use flightdeck_monitor::MonitorStats;
use flightdeck_status::{FieldValue, SemanticTransition, Status, StatusField};
use serde_json::json;

use crate::commands::decode::DecodeReport;
use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    print_json(&error_json);
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    error.downcast_ref::<CliError>().map_or("error", CliError::kind)
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format output as JSON: {e}"),
    }
}

/// Print the result of `flightdeck decode`
pub fn print_decode_report(report: &DecodeReport, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "statuses": report.statuses,
            "ignored": report.ignored,
            "skipped": report.skipped,
        });
        print_json(&output);
        return;
    }

    if report.statuses.is_empty() {
        println!("{}", "No status frames found".yellow());
    }
    for decoded in &report.statuses {
        println!(
            "{} {} {}",
            "Status".bold(),
            decoded.status.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            format!("(line {})", decoded.line).dimmed()
        );
        for line in status_lines(&decoded.status) {
            println!("  {line}");
        }
    }
    for skipped in &report.skipped {
        println!(
            "{} line {}: {}",
            "Skipped".yellow(),
            skipped.line,
            skipped.reason
        );
    }
}

/// Human-readable description of a snapshot, one fact per line.
pub fn status_lines(status: &Status) -> Vec<String> {
    let mut lines = Vec::new();

    if !status.is_signed_in() {
        lines.push("Not signed in".to_string());
        return lines;
    }

    lines.push(format!(
        "Vehicle: {}   FSD: {}",
        status.vehicle, status.fsd_status
    ));

    let active: Vec<&str> = StatusField::ALL
        .iter()
        .filter(|field| field.value(status) == FieldValue::Bool(true))
        .map(|field| field.name())
        .collect();
    if !active.is_empty() {
        lines.push(format!("Active: {}", active.join(", ")));
    }

    lines.push(format!(
        "Pips: SYS {} ENG {} WEA {}   Fire group: {}   Focus: {}",
        status.pips_sys, status.pips_eng, status.pips_wea, status.firegroup, status.gui_focus
    ));

    match (status.fuel, status.fuel_in_tanks, status.fuel_in_reservoir) {
        (Some(total), Some(main), Some(reservoir)) => lines.push(format!(
            "Fuel: {total} t (main {main}, reservoir {reservoir})"
        )),
        (None, Some(main), _) => lines.push(format!("Fuel: main {main} t")),
        _ => {}
    }
    if status.cargo_carried > 0 {
        lines.push(format!("Cargo: {} t", status.cargo_carried));
    }
    if let Some(legal) = &status.legal_status {
        lines.push(format!("Legal: {legal}"));
    }
    if let Some(balance) = status.balance {
        lines.push(format!("Balance: {balance} CR"));
    }

    if let Some(fix) = status.position() {
        lines.push(format!(
            "Position: {}, {}   Altitude: {} m   Heading: {}",
            fix.latitude, fix.longitude, fix.altitude, fix.heading
        ));
    }
    if let Some(body) = &status.body_name {
        lines.push(format!("Body: {body}"));
    }
    if let Some(destination) = &status.destination {
        lines.push(format!("Destination: {}", destination.name));
    }

    if let Some(temperature) = status.on_foot_temperature {
        lines.push(format!("Temperature: {temperature}"));
    }
    if let (Some(oxygen), Some(health)) = (status.oxygen, status.health) {
        lines.push(format!("Oxygen: {oxygen}   Health: {health}"));
    }
    if let Some(weapon) = &status.selected_weapon {
        lines.push(format!("Weapon: {weapon}"));
    }

    lines
}

/// Print the result of `flightdeck replay`
pub fn print_replay(transitions: &[SemanticTransition], stats: &MonitorStats, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "transitions": transitions,
            "stats": stats,
        });
        print_json(&output);
        return;
    }

    for transition in transitions {
        println!(
            "{} {}: {} -> {}",
            transition.timestamp.format("%H:%M:%S").to_string().dimmed(),
            transition.field.name().bold(),
            transition.old,
            transition.new
        );
    }
    println!(
        "Replayed {} lines: {} decoded, {} ignored, {} skipped, {} transitions",
        stats.lines, stats.decoded, stats.ignored, stats.skipped, stats.published
    );
}

/// Print the tracked field names, in reporting order
pub fn print_fields(json: bool) {
    let names: Vec<&str> = StatusField::ALL.iter().map(|f| f.name()).collect();
    if json {
        print_json(&json!({ "success": true, "fields": names }));
    } else {
        for name in names {
            println!("{name}");
        }
    }
}
