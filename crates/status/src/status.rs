//! The decoded, immutable status snapshot.

use crate::flags::{StatusFlags, StatusFlags2};
use crate::types::{Destination, FsdStatus, GuiFocus, LegalStatus, OnFootTemperature, Vehicle};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// One fully decoded status frame.
///
/// Built once by [`crate::decode`] and never mutated. Optional fields are
/// `None` when the record did not report them; a reported zero stays
/// `Some(0)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Status {
    pub timestamp: DateTime<Utc>,
    pub flags: StatusFlags,
    pub flags2: StatusFlags2,

    pub vehicle: Vehicle,

    // === Ship state ===
    pub docked: bool,
    pub landed: bool,
    pub landing_gear_down: bool,
    pub shields_up: bool,
    pub supercruise: bool,
    pub hyperspace: bool,
    pub flight_assist_off: bool,
    pub hardpoints_deployed: bool,
    pub in_wing: bool,
    pub lights_on: bool,
    pub cargo_scoop_deployed: bool,
    pub silent_running: bool,
    pub scooping_fuel: bool,
    pub low_fuel: bool,
    pub overheating: bool,
    pub near_surface: bool,
    pub in_danger: bool,
    pub being_interdicted: bool,
    pub analysis_mode: bool,
    pub night_vision: bool,
    pub altitude_from_average_radius: bool,
    pub fsd_status: FsdStatus,
    pub fsd_hyperdrive_charging: bool,
    pub in_multicrew: bool,

    // === SRV ===
    pub srv_drive_assist: bool,
    pub srv_under_ship: bool,
    pub srv_turret_deployed: bool,
    pub srv_handbrake_activated: bool,
    pub srv_high_beams: bool,

    // === On foot ===
    pub on_foot_in_station: bool,
    pub on_foot_on_planet: bool,
    pub on_foot_in_hangar: bool,
    pub on_foot_social_space: bool,
    pub on_foot_exterior: bool,
    pub aim_down_sight: bool,
    pub low_oxygen: bool,
    pub low_health: bool,
    pub glide_mode: bool,
    pub breathable_atmosphere: bool,
    /// Only reported while on foot.
    pub on_foot_temperature: Option<OnFootTemperature>,
    pub oxygen: Option<Decimal>,
    pub health: Option<Decimal>,
    /// Kelvin.
    pub temperature: Option<Decimal>,
    pub gravity: Option<Decimal>,
    pub selected_weapon: Option<String>,

    // === Power and controls ===
    pub pips_sys: Decimal,
    pub pips_eng: Decimal,
    pub pips_wea: Decimal,
    pub firegroup: u32,
    pub gui_focus: GuiFocus,

    // === Fuel, cargo, legal ===
    pub fuel_in_tanks: Option<Decimal>,
    pub fuel_in_reservoir: Option<Decimal>,
    /// Tanks plus reservoir, only when both are reported.
    pub fuel: Option<Decimal>,
    pub cargo_carried: u32,
    pub legal_state: Option<String>,
    pub legal_status: Option<LegalStatus>,
    pub balance: Option<u64>,

    // === Position ===
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub altitude: Option<Decimal>,
    /// Degrees in `[0, 360)`.
    pub heading: Option<Decimal>,
    pub body_name: Option<String>,
    pub planet_radius: Option<Decimal>,
    pub destination: Option<Destination>,
}

/// A complete surface position fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionFix {
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub altitude: Decimal,
    pub heading: Decimal,
}

impl Status {
    /// `false` when both flag words are empty, which the game writes while the
    /// player is at the main menu.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        !self.flags.is_empty() || !self.flags2.is_empty()
    }

    /// Label of the current GUI focus.
    #[must_use]
    pub fn gui_focus_label(&self) -> String {
        self.gui_focus.label()
    }

    /// The surface position, if the frame carried a complete fix.
    #[must_use]
    pub fn position(&self) -> Option<PositionFix> {
        Some(PositionFix {
            latitude: self.latitude?,
            longitude: self.longitude?,
            altitude: self.altitude?,
            heading: self.heading?,
        })
    }

    /// Whether the player is inside any vehicle controlled from a cockpit.
    #[must_use]
    pub fn is_piloting(&self) -> bool {
        matches!(
            self.vehicle,
            Vehicle::Ship | Vehicle::Srv | Vehicle::Fighter
        ) && self.is_signed_in()
    }
}
