//! # Servo Controller Module
//!
//! This module provides a unified servo control interface which can abstract
//! over different servo backends. The arm control modules only ever talk to a
//! [`ServoDriver`], never to a concrete backend.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

/// [`ServoDriver`] implementation simulating the arm's two servos in memory.
mod sim;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use sim::*;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Lowest angle a servo can be driven to.
///
/// Units: degrees
pub const SERVO_TRAVEL_MIN_DEG: f64 = 0.0;

/// Highest angle a servo can be driven to.
///
/// Units: degrees
pub const SERVO_TRAVEL_MAX_DEG: f64 = 180.0;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// IDs of the servos on the arm.
#[derive(Serialize, Deserialize, Debug, Hash, Eq, PartialEq, Copy, Clone)]
pub enum ServoId {
    /// The base (shoulder) servo, rotating in the drawing plane.
    ArmBase,

    /// The top (elbow) servo, mounted rotated 90 degrees from the base.
    ArmTop,
}

/// Possible errors raised by a servo driver.
#[derive(thiserror::Error, Debug)]
pub enum ServoError {
    #[error("Demanded angle {0:.2} deg is outside the servo travel range [{min:.0}, {max:.0}] deg",
        min = SERVO_TRAVEL_MIN_DEG, max = SERVO_TRAVEL_MAX_DEG)]
    AngleOutOfTravel(f64),

    #[error("No servo on the requested channel")]
    UnknownChannel,
}

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// Trait to provide a unified API for accessing servo backends.
///
/// A driver owns one or more servos, each identified by a channel. The arm
/// assumes that `write_angle` completes synchronously and is idempotent, and
/// that consecutive writes at the configured step cadence produce smooth
/// motion.
pub trait ServoDriver {
    /// The type that the underlying driver uses for channel identification
    type Channel: Copy;

    /// Command the servo on `channel` to the given angle.
    ///
    /// Angles outside the servo travel range are rejected.
    fn write_angle(&mut self, channel: Self::Channel, angle_deg: f64) -> Result<(), ServoError>;

    /// Read the last commanded angle of the servo on `channel`.
    fn read_angle(&mut self, channel: Self::Channel) -> Result<f64, ServoError>;
}
