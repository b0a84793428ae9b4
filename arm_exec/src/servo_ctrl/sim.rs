//! [`ServoDriver`] implementation simulating the arm's servos

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::trace;
use std::collections::HashMap;

use super::{ServoDriver, ServoError, ServoId, SERVO_TRAVEL_MAX_DEG, SERVO_TRAVEL_MIN_DEG};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A simulated servo driver.
///
/// Holds the last commanded angle of each servo in memory and records every
/// command it is given, so tests can inspect the exact command stream the arm
/// produced. Also stands in for real hardware when the executable runs
/// without any.
pub struct SimServoDriver {
    angles_deg: HashMap<ServoId, f64>,

    history: Vec<(ServoId, f64)>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SimServoDriver {
    /// Create a new simulated driver with both servos at the given angles.
    ///
    /// The starting angles model whatever pose the physical arm happens to be
    /// in at power-on.
    pub fn with_start_angles(base_deg: f64, top_deg: f64) -> Self {
        let mut angles_deg = HashMap::new();
        angles_deg.insert(ServoId::ArmBase, base_deg);
        angles_deg.insert(ServoId::ArmTop, top_deg);

        Self {
            angles_deg,
            history: Vec::new(),
        }
    }

    /// Create a new simulated driver with both servos at 90 degrees.
    pub fn new() -> Self {
        Self::with_start_angles(90.0, 90.0)
    }

    /// All commands issued to this driver, in order.
    pub fn history(&self) -> &[(ServoId, f64)] {
        &self.history
    }

    /// All angles commanded on the given servo, in order.
    pub fn commands_for(&self, id: ServoId) -> Vec<f64> {
        self.history
            .iter()
            .filter(|(servo, _)| *servo == id)
            .map(|(_, angle_deg)| *angle_deg)
            .collect()
    }
}

impl Default for SimServoDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ServoDriver for SimServoDriver {
    type Channel = ServoId;

    fn write_angle(&mut self, channel: Self::Channel, angle_deg: f64) -> Result<(), ServoError> {
        // Reject angles the physical servo could not reach
        if !(SERVO_TRAVEL_MIN_DEG..=SERVO_TRAVEL_MAX_DEG).contains(&angle_deg) {
            return Err(ServoError::AngleOutOfTravel(angle_deg));
        }

        trace!("{:?} commanded to {:.2} deg", channel, angle_deg);

        self.angles_deg.insert(channel, angle_deg);
        self.history.push((channel, angle_deg));

        Ok(())
    }

    fn read_angle(&mut self, channel: Self::Channel) -> Result<f64, ServoError> {
        self.angles_deg
            .get(&channel)
            .copied()
            .ok_or(ServoError::UnknownChannel)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_write_read() {
        let mut driver = SimServoDriver::with_start_angles(40.0, 120.0);

        assert_eq!(driver.read_angle(ServoId::ArmBase).unwrap(), 40.0);
        assert_eq!(driver.read_angle(ServoId::ArmTop).unwrap(), 120.0);

        driver.write_angle(ServoId::ArmBase, 95.5).unwrap();
        assert_eq!(driver.read_angle(ServoId::ArmBase).unwrap(), 95.5);
        assert_eq!(driver.history(), &[(ServoId::ArmBase, 95.5)]);
    }

    #[test]
    fn test_travel_limits() {
        let mut driver = SimServoDriver::new();

        assert!(driver.write_angle(ServoId::ArmBase, -1.0).is_err());
        assert!(driver.write_angle(ServoId::ArmBase, 180.5).is_err());
        assert!(driver.write_angle(ServoId::ArmBase, 0.0).is_ok());
        assert!(driver.write_angle(ServoId::ArmBase, 180.0).is_ok());
    }
}
