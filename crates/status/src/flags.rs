//! Raw `Flags` / `Flags2` bit layouts of the status record.
//!
//! Both words are 32-bit masks. Bits are retained verbatim (including bits this
//! crate does not know about) so that a decoded [`crate::Status`] can always be
//! compared and logged against the raw record it came from.

use bitflags::bitflags;

bitflags! {
    /// Primary status word (`Flags`).
    ///
    /// A value of zero means the player is not signed in.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
    pub struct StatusFlags: u32 {
        /// Docked on a landing pad.
        const DOCKED                       = 1 << 0;
        /// Landed on a planet surface.
        const LANDED                       = 1 << 1;
        const LANDING_GEAR_DOWN            = 1 << 2;
        const SHIELDS_UP                   = 1 << 3;
        const SUPERCRUISE                  = 1 << 4;
        const FLIGHT_ASSIST_OFF            = 1 << 5;
        const HARDPOINTS_DEPLOYED          = 1 << 6;
        const IN_WING                      = 1 << 7;
        const LIGHTS_ON                    = 1 << 8;
        const CARGO_SCOOP_DEPLOYED         = 1 << 9;
        const SILENT_RUNNING               = 1 << 10;
        const SCOOPING_FUEL                = 1 << 11;
        const SRV_HANDBRAKE                = 1 << 12;
        /// SRV is using turret view.
        const SRV_TURRET_VIEW              = 1 << 13;
        /// SRV turret retracted because the SRV is close to (under) the ship.
        const SRV_UNDER_SHIP               = 1 << 14;
        const SRV_DRIVE_ASSIST             = 1 << 15;
        const FSD_MASS_LOCKED              = 1 << 16;
        const FSD_CHARGING                 = 1 << 17;
        const FSD_COOLDOWN                 = 1 << 18;
        /// Fuel below 25%.
        const LOW_FUEL                     = 1 << 19;
        /// Heat above 100%.
        const OVERHEATING                  = 1 << 20;
        /// Latitude/longitude are valid; the vehicle is near a surface.
        const HAS_LAT_LONG                 = 1 << 21;
        const IN_DANGER                    = 1 << 22;
        const BEING_INTERDICTED            = 1 << 23;
        const IN_MAIN_SHIP                 = 1 << 24;
        const IN_FIGHTER                   = 1 << 25;
        const IN_SRV                       = 1 << 26;
        /// HUD in analysis mode.
        const ANALYSIS_MODE                = 1 << 27;
        const NIGHT_VISION                 = 1 << 28;
        const ALTITUDE_FROM_AVERAGE_RADIUS = 1 << 29;
        /// FSD jump in progress (hyperspace).
        const FSD_JUMP                     = 1 << 30;
        const SRV_HIGH_BEAM                = 1 << 31;
    }
}

bitflags! {
    /// Secondary status word (`Flags2`), added with the on-foot game content.
    ///
    /// Legacy records omit it; it then decodes as empty.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
    pub struct StatusFlags2: u32 {
        const ON_FOOT                 = 1 << 0;
        /// Travelling in a taxi or dropship.
        const IN_TAXI                 = 1 << 1;
        const IN_MULTICREW            = 1 << 2;
        const ON_FOOT_IN_STATION      = 1 << 3;
        const ON_FOOT_ON_PLANET       = 1 << 4;
        const AIM_DOWN_SIGHT          = 1 << 5;
        const LOW_OXYGEN              = 1 << 6;
        const LOW_HEALTH              = 1 << 7;
        const COLD                    = 1 << 8;
        const HOT                     = 1 << 9;
        const VERY_COLD               = 1 << 10;
        const VERY_HOT                = 1 << 11;
        const GLIDE_MODE              = 1 << 12;
        const ON_FOOT_IN_HANGAR       = 1 << 13;
        const ON_FOOT_SOCIAL_SPACE    = 1 << 14;
        const ON_FOOT_EXTERIOR        = 1 << 15;
        const BREATHABLE_ATMOSPHERE   = 1 << 16;
        const TELEPRESENCE_MULTICREW  = 1 << 17;
        const PHYSICAL_MULTICREW      = 1 << 18;
        const FSD_HYPERDRIVE_CHARGING = 1 << 19;
    }
}

impl StatusFlags {
    /// Wrap a raw `Flags` word, keeping unknown bits.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }
}

impl StatusFlags2 {
    /// Wrap a raw `Flags2` word, keeping unknown bits.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }

    /// The four temperature bits.
    pub const TEMPERATURE: Self = Self::COLD
        .union(Self::HOT)
        .union(Self::VERY_COLD)
        .union(Self::VERY_HOT);
}
