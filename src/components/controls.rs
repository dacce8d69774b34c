use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Position of the landing-gear lever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GearSwitch {
    #[default]
    Down,
    Up,
}

/// One logical pilot input, as delivered by the host's input mapper.
///
/// Axis values are clamped to their documented range on arrival.
#[derive(Event, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlEvent {
    /// Stick deflection, each axis in `[-1, 1]`. Positive pitch raises the
    /// nose, positive roll lowers the right wing.
    Stick { pitch: f64, roll: f64 },
    /// Stick let go.
    StickReleased,
    /// Engine levers, each in `[-1, 1]` with -1 at idle.
    Throttle { left: f64, right: f64 },
    /// Pedals in `[-1, 1]`, positive yaws the nose right.
    Rudder(f64),
    Gear(GearSwitch),
    /// Toe brakes, each in `[-1, 1]`; only positive deflection brakes.
    ToeBrakes { left: f64, right: f64 },
    /// Spoiler deployment in `[0, 1]`.
    Spoiler(f64),
}

/// Snapshot of every pilot input at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlState {
    pub stick_pitch: f64,
    pub stick_roll: f64,
    pub throttle_left: f64,
    pub throttle_right: f64,
    pub rudder: f64,
    pub gear_switch: GearSwitch,
    pub toe_brake_left: f64,
    pub toe_brake_right: f64,
    pub spoiler: f64,
}

impl ControlState {
    /// Idle engines, everything else centred.
    pub fn idle() -> Self {
        Self {
            throttle_left: -1.0,
            throttle_right: -1.0,
            ..Default::default()
        }
    }

    pub fn clamped(&self) -> Self {
        Self {
            stick_pitch: clamp_axis(self.stick_pitch),
            stick_roll: clamp_axis(self.stick_roll),
            throttle_left: clamp_axis(self.throttle_left),
            throttle_right: clamp_axis(self.throttle_right),
            rudder: clamp_axis(self.rudder),
            gear_switch: self.gear_switch,
            toe_brake_left: clamp_axis(self.toe_brake_left),
            toe_brake_right: clamp_axis(self.toe_brake_right),
            spoiler: clamp_unit(self.spoiler),
        }
    }

    /// The snapshot as the sequence of events a host would have sent.
    pub fn events(&self) -> [ControlEvent; 6] {
        [
            ControlEvent::Stick {
                pitch: self.stick_pitch,
                roll: self.stick_roll,
            },
            ControlEvent::Throttle {
                left: self.throttle_left,
                right: self.throttle_right,
            },
            ControlEvent::Rudder(self.rudder),
            ControlEvent::Gear(self.gear_switch),
            ControlEvent::ToeBrakes {
                left: self.toe_brake_left,
                right: self.toe_brake_right,
            },
            ControlEvent::Spoiler(self.spoiler),
        ]
    }
}

/// Lag-filtered pilot intent consumed by the dynamics each tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedControl {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    /// Combined engine command in `[0, 2]`.
    pub throttle_position: f64,
    /// Left lever minus right lever, in `[-2, 2]`.
    pub throttle_asymmetry: f64,
}

/// Clamp a bipolar axis sample to `[-1, 1]`, mapping NaN to 0.
pub fn clamp_axis(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// Clamp a unipolar axis sample to `[0, 1]`, mapping NaN to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
