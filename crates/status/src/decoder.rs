//! Status record decoder.
//!
//! Turns one raw record into a [`Status`]. Decoding is pure: no I/O, no
//! logging, no retained state, so identical input always yields an identical
//! snapshot.
//!
//! Derivations:
//! - vehicle: on foot > SRV > fighter > taxi > ship, first match wins
//! - `fsd_status`: charging > cooldown > masslock > ready
//! - pips: raw half-pip units clamped to `0..=8`, then halved
//! - fuel: tanks + reservoir, only when both are reported
//! - position: latitude/longitude/altitude/heading decode all together or not
//!   at all; heading is wrapped into `[0, 360)`
//! - on-foot temperature: only while on foot
//! - a reading with no decimal rendering is treated as not reported

use crate::error::DecodeError;
use crate::flags::{StatusFlags, StatusFlags2};
use crate::frame::{RawDestination, RawStatusFrame, STATUS_EVENT};
use crate::status::{PositionFix, Status};
use crate::types::{Destination, FsdStatus, GuiFocus, LegalStatus, OnFootTemperature, Vehicle};
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Number, Value};
use std::str::FromStr;

/// Raw pip values are half-pips; a system can hold at most four full pips.
const MAX_HALF_PIPS: i64 = 8;

/// Decode one status line.
///
/// # Errors
///
/// [`DecodeError::NotAStatusRecord`] when the record is some other event,
/// [`DecodeError::MalformedFrame`] when it cannot be decoded.
pub fn decode(line: &str) -> Result<Status, DecodeError> {
    let value: Value = serde_json::from_str(line.trim())
        .map_err(|e| DecodeError::malformed(format!("invalid JSON: {e}")))?;
    decode_value(value)
}

/// Decode one status record from raw bytes (UTF-8 JSON).
///
/// # Errors
///
/// As [`decode`], plus [`DecodeError::MalformedFrame`] for empty or non-UTF-8
/// input.
pub fn decode_bytes(data: &[u8]) -> Result<Status, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::malformed("status record is empty"));
    }
    let text = std::str::from_utf8(data)
        .map_err(|e| DecodeError::malformed(format!("status record is not valid UTF-8: {e}")))?;
    decode(text)
}

/// Decode an already-parsed JSON record.
///
/// The event discriminator is checked before any other field so that other
/// journal events are reported as [`DecodeError::NotAStatusRecord`] whatever
/// their shape.
///
/// # Errors
///
/// As [`decode`].
pub fn decode_value(value: Value) -> Result<Status, DecodeError> {
    let Value::Object(map) = &value else {
        return Err(DecodeError::malformed("status record is not a JSON object"));
    };

    match map.get("event") {
        Some(Value::String(event)) if event == STATUS_EVENT => {}
        Some(Value::String(event)) => {
            return Err(DecodeError::NotAStatusRecord {
                event: Some(event.clone()),
            });
        }
        _ => return Err(DecodeError::NotAStatusRecord { event: None }),
    }

    let raw: RawStatusFrame = serde_json::from_value(value)
        .map_err(|e| DecodeError::malformed(format!("unexpected field type: {e}")))?;
    decode_frame(&raw)
}

/// Decode a deserialized [`RawStatusFrame`].
///
/// # Errors
///
/// As [`decode`].
pub fn decode_frame(raw: &RawStatusFrame) -> Result<Status, DecodeError> {
    if !raw.is_status() {
        return Err(DecodeError::NotAStatusRecord {
            event: raw.event.clone(),
        });
    }

    let timestamp = parse_timestamp(raw.timestamp.as_deref())?;
    let flags = StatusFlags::from_raw(raw.flags.unwrap_or(0));
    let flags2 = StatusFlags2::from_raw(raw.flags2.unwrap_or(0));
    let vehicle = resolve_vehicle(flags, flags2);

    let pips: Vec<i64> = raw
        .pips
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(pip_units)
        .collect();
    let (fuel_in_tanks, fuel_in_reservoir) = match &raw.fuel {
        Some(fuel) => (
            optional_decimal(fuel.fuel_main),
            optional_decimal(fuel.fuel_reservoir),
        ),
        None => (None, None),
    };
    let fuel = match (fuel_in_tanks, fuel_in_reservoir) {
        (Some(tanks), Some(reservoir)) => tanks.checked_add(reservoir),
        _ => None,
    };

    let cargo_carried = optional_decimal(raw.cargo).map_or(0, cargo_tonnes);
    let position = position_fix(raw);

    Ok(Status {
        timestamp,
        flags,
        flags2,
        vehicle,

        docked: flags.contains(StatusFlags::DOCKED),
        landed: flags.contains(StatusFlags::LANDED),
        landing_gear_down: flags.contains(StatusFlags::LANDING_GEAR_DOWN),
        shields_up: flags.contains(StatusFlags::SHIELDS_UP),
        supercruise: flags.contains(StatusFlags::SUPERCRUISE),
        hyperspace: flags.contains(StatusFlags::FSD_JUMP),
        flight_assist_off: flags.contains(StatusFlags::FLIGHT_ASSIST_OFF),
        hardpoints_deployed: flags.contains(StatusFlags::HARDPOINTS_DEPLOYED),
        in_wing: flags.contains(StatusFlags::IN_WING),
        lights_on: flags.contains(StatusFlags::LIGHTS_ON),
        cargo_scoop_deployed: flags.contains(StatusFlags::CARGO_SCOOP_DEPLOYED),
        silent_running: flags.contains(StatusFlags::SILENT_RUNNING),
        scooping_fuel: flags.contains(StatusFlags::SCOOPING_FUEL),
        low_fuel: flags.contains(StatusFlags::LOW_FUEL),
        overheating: flags.contains(StatusFlags::OVERHEATING),
        near_surface: flags.contains(StatusFlags::HAS_LAT_LONG),
        in_danger: flags.contains(StatusFlags::IN_DANGER),
        being_interdicted: flags.contains(StatusFlags::BEING_INTERDICTED),
        analysis_mode: flags.contains(StatusFlags::ANALYSIS_MODE),
        night_vision: flags.contains(StatusFlags::NIGHT_VISION),
        altitude_from_average_radius: flags.contains(StatusFlags::ALTITUDE_FROM_AVERAGE_RADIUS),
        fsd_status: resolve_fsd_status(flags),
        fsd_hyperdrive_charging: flags2.contains(StatusFlags2::FSD_HYPERDRIVE_CHARGING),
        in_multicrew: flags2.contains(StatusFlags2::IN_MULTICREW),

        srv_drive_assist: flags.contains(StatusFlags::SRV_DRIVE_ASSIST),
        srv_under_ship: flags.contains(StatusFlags::SRV_UNDER_SHIP),
        srv_turret_deployed: flags.contains(StatusFlags::SRV_TURRET_VIEW),
        srv_handbrake_activated: flags.contains(StatusFlags::SRV_HANDBRAKE),
        srv_high_beams: flags.contains(StatusFlags::SRV_HIGH_BEAM),

        on_foot_in_station: flags2.contains(StatusFlags2::ON_FOOT_IN_STATION),
        on_foot_on_planet: flags2.contains(StatusFlags2::ON_FOOT_ON_PLANET),
        on_foot_in_hangar: flags2.contains(StatusFlags2::ON_FOOT_IN_HANGAR),
        on_foot_social_space: flags2.contains(StatusFlags2::ON_FOOT_SOCIAL_SPACE),
        on_foot_exterior: flags2.contains(StatusFlags2::ON_FOOT_EXTERIOR),
        aim_down_sight: flags2.contains(StatusFlags2::AIM_DOWN_SIGHT),
        low_oxygen: flags2.contains(StatusFlags2::LOW_OXYGEN),
        low_health: flags2.contains(StatusFlags2::LOW_HEALTH),
        glide_mode: flags2.contains(StatusFlags2::GLIDE_MODE),
        breathable_atmosphere: flags2.contains(StatusFlags2::BREATHABLE_ATMOSPHERE),
        on_foot_temperature: resolve_temperature(vehicle, flags2),
        oxygen: optional_decimal(raw.oxygen),
        health: optional_decimal(raw.health),
        temperature: optional_decimal(raw.temperature),
        gravity: optional_decimal(raw.gravity),
        selected_weapon: raw
            .selected_weapon_localised
            .clone()
            .or_else(|| raw.selected_weapon.clone()),

        pips_sys: half_pips(pips.first()),
        pips_eng: half_pips(pips.get(1)),
        pips_wea: half_pips(pips.get(2)),
        firegroup: raw.fire_group.unwrap_or(0),
        gui_focus: GuiFocus::from_code(raw.gui_focus.unwrap_or(0)),

        fuel_in_tanks,
        fuel_in_reservoir,
        fuel,
        cargo_carried,
        legal_state: raw.legal_state.clone(),
        legal_status: raw.legal_state.as_deref().map(LegalStatus::from_journal),
        balance: raw.balance,

        latitude: position.map(|fix| fix.latitude),
        longitude: position.map(|fix| fix.longitude),
        altitude: position.map(|fix| fix.altitude),
        heading: position.map(|fix| fix.heading),
        body_name: raw.body_name.clone(),
        planet_radius: optional_decimal(raw.planet_radius),
        destination: raw.destination.as_ref().map(destination),
    })
}

/// Priority-ordered vehicle resolution. The raw bits are not guaranteed to be
/// mutually exclusive.
#[must_use]
pub fn resolve_vehicle(flags: StatusFlags, flags2: StatusFlags2) -> Vehicle {
    if flags2.contains(StatusFlags2::ON_FOOT) {
        Vehicle::OnFoot
    } else if flags.contains(StatusFlags::IN_SRV) {
        Vehicle::Srv
    } else if flags.contains(StatusFlags::IN_FIGHTER) {
        Vehicle::Fighter
    } else if flags2.contains(StatusFlags2::IN_TAXI) {
        Vehicle::Taxi
    } else {
        Vehicle::Ship
    }
}

/// Charging and masslock can be raised together; charging wins.
#[must_use]
pub fn resolve_fsd_status(flags: StatusFlags) -> FsdStatus {
    if flags.contains(StatusFlags::FSD_CHARGING) {
        FsdStatus::Charging
    } else if flags.contains(StatusFlags::FSD_COOLDOWN) {
        FsdStatus::Cooldown
    } else if flags.contains(StatusFlags::FSD_MASS_LOCKED) {
        FsdStatus::Masslock
    } else {
        FsdStatus::Ready
    }
}

#[must_use]
pub fn resolve_temperature(vehicle: Vehicle, flags2: StatusFlags2) -> Option<OnFootTemperature> {
    if vehicle != Vehicle::OnFoot {
        return None;
    }
    let band = if flags2.contains(StatusFlags2::VERY_COLD) {
        OnFootTemperature::Freezing
    } else if flags2.contains(StatusFlags2::COLD) {
        OnFootTemperature::Cold
    } else if flags2.contains(StatusFlags2::VERY_HOT) {
        OnFootTemperature::Searing
    } else if flags2.contains(StatusFlags2::HOT) {
        OnFootTemperature::Hot
    } else {
        OnFootTemperature::Temperate
    };
    Some(band)
}

/// Convert a raw half-pip value into pips, clamping out-of-range telemetry.
#[must_use]
pub fn half_pips(raw: Option<&i64>) -> Decimal {
    let clamped = raw.copied().unwrap_or(0).clamp(0, MAX_HALF_PIPS);
    // clamped * 5 with scale 1 is clamped / 2
    Decimal::new(clamped.saturating_mul(5), 1).normalize()
}

/// Whole half-pip count of one raw `Pips` entry, clamped to `0..=8`.
///
/// The game writes integers, but float renderings (`9.0`) and numbers beyond
/// the `i64` range are clamped like any other out-of-range value.
fn pip_units(raw: &Number) -> i64 {
    if let Some(value) = raw.as_i64() {
        return value.clamp(0, MAX_HALF_PIPS);
    }
    if raw.as_u64().is_some() {
        return MAX_HALF_PIPS;
    }
    let Some(value) = raw.as_f64() else {
        return 0;
    };
    if value >= 8.0 {
        return MAX_HALF_PIPS;
    }
    Decimal::from_f64(value)
        .and_then(|units| units.round().to_i64())
        .map_or(0, |units| units.clamp(0, MAX_HALF_PIPS))
}

/// Latitude, longitude, altitude and heading as one fix. Any of the four
/// missing or unrepresentable means no fix at all.
fn position_fix(raw: &RawStatusFrame) -> Option<PositionFix> {
    Some(PositionFix {
        latitude: to_decimal(raw.latitude?)?,
        longitude: to_decimal(raw.longitude?)?,
        altitude: to_decimal(raw.altitude?)?,
        heading: normalize_heading(to_decimal(raw.heading?)?),
    })
}

/// Wrap a heading into `[0, 360)`.
#[must_use]
pub fn normalize_heading(heading: Decimal) -> Decimal {
    let full_circle = Decimal::from(360);
    let wrapped = heading % full_circle;
    if wrapped < Decimal::ZERO {
        wrapped + full_circle
    } else {
        wrapped
    }
}

fn cargo_tonnes(cargo: Decimal) -> u32 {
    cargo
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

fn destination(raw: &RawDestination) -> Destination {
    Destination {
        system: raw.system,
        body: raw.body,
        name: raw
            .name_localised
            .clone()
            .unwrap_or_else(|| raw.name.clone()),
    }
}

/// JSON numbers arrive as `f64`; going through the shortest round-trip
/// rendering keeps the value the record actually wrote. Values outside the
/// `Decimal` range give `None`.
fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string()).ok()
}

fn optional_decimal(value: Option<f64>) -> Option<Decimal> {
    value.and_then(to_decimal)
}

/// Parse the record timestamp.
///
/// Some recorded frames carry stray whitespace inside the timestamp
/// (`"2018 - 11 - 15T04: 41:06Z"`); it is removed before parsing. A
/// timestamp without an offset is taken as UTC.
fn parse_timestamp(raw: Option<&str>) -> Result<DateTime<Utc>, DecodeError> {
    let raw = raw.ok_or_else(|| DecodeError::malformed("missing timestamp"))?;
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&compact) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&compact, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| DecodeError::malformed(format!("unparseable timestamp '{raw}': {e}")))
}
