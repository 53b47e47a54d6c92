/// Kinematics mechanics: per-tick vertical displacement and presentation tilt.
/// Screen coordinates: y grows downward, so a jump is a negative velocity.

/// Unclamped displacement after `t` ticks: v·t + ½·g·t².
#[inline]
pub fn displacement(velocity: f64, gravity: f64, t: f64) -> f64 {
    velocity * t + 0.5 * gravity * t * t
}

/// Terminal clamp on the way down, extra lift on the way up.
#[inline]
pub fn clamp_displacement(d: f64, terminal: f64, rise_boost: f64) -> f64 {
    if d >= terminal {
        terminal
    } else if d < 0.0 {
        d - rise_boost
    } else {
        d
    }
}

/// Presentation-only rotation limits, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TiltRule {
    pub max: f64,
    pub rate: f64,
    /// Distance below the jump height the nose stays up.
    pub hold: f64,
    pub floor: f64,
}

impl Default for TiltRule {
    fn default() -> Self {
        Self { max: 25.0, rate: 20.0, hold: 50.0, floor: -90.0 }
    }
}

/// Tilt after a tick. While rising or still near the jump height the sprite
/// snaps nose-up to `rule.max`; once it falls past the hold band it rotates down
/// by `rule.rate` per tick until reaching `rule.floor`.
#[inline]
pub fn tilt_after(tilt: f64, y: f64, reference: f64, d: f64, rule: &TiltRule) -> f64 {
    if y < reference + rule.hold || d < 0.0 {
        tilt.max(rule.max)
    } else if tilt > rule.floor {
        tilt - rule.rate
    } else {
        tilt
    }
}
