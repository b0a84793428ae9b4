//! Trajectory interpolation
//!
//! The single motion primitive of the arm: a fixed-step linear angle ramp
//! between two joint-angle pairs, commanding both servos once per step with a
//! blocking delay between steps.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use std::thread;
use std::time::Duration;

// Internal
use super::JointAngles;
use crate::servo_ctrl::{ServoDriver, ServoError, ServoId};

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Move both joints linearly from `current` to `target`.
///
/// Emits `steps + 1` samples inclusive of both endpoints: the first commanded
/// sample equals `current` and the last equals `target` exactly, so no drift
/// accumulates across chained moves. Blocks for `step_delay` after each step;
/// the whole move owns the control flow until it completes.
///
/// Returns the final commanded angles, which become the next move's
/// `current`. Both inputs must already be valid (clamped) servo angles.
pub fn execute_move<D>(
    driver: &mut D,
    current: JointAngles,
    target: JointAngles,
    steps: u32,
    step_delay: Duration,
) -> Result<JointAngles, ServoError>
where
    D: ServoDriver<Channel = ServoId>,
{
    // At least one step, so both endpoints are always commanded
    let steps = steps.max(1);

    for step in 0..=steps {
        let frac = f64::from(step) / f64::from(steps);

        driver.write_angle(
            ServoId::ArmBase,
            current.base_deg + (target.base_deg - current.base_deg) * frac,
        )?;
        driver.write_angle(
            ServoId::ArmTop,
            current.top_deg + (target.top_deg - current.top_deg) * frac,
        )?;

        thread::sleep(step_delay);
    }

    Ok(target)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::servo_ctrl::SimServoDriver;

    #[test]
    fn test_endpoints_exact() {
        let mut driver = SimServoDriver::new();
        let current = JointAngles { base_deg: 90.0, top_deg: 90.0 };
        let target = JointAngles { base_deg: 33.3, top_deg: 127.1 };

        let end = execute_move(&mut driver, current, target, 30, Duration::from_secs(0)).unwrap();

        assert_eq!(end, target);

        let base_cmds = driver.commands_for(ServoId::ArmBase);
        let top_cmds = driver.commands_for(ServoId::ArmTop);

        // Both endpoints inclusive: steps + 1 samples per servo
        assert_eq!(base_cmds.len(), 31);
        assert_eq!(top_cmds.len(), 31);

        assert_eq!(base_cmds[0], current.base_deg);
        assert_eq!(top_cmds[0], current.top_deg);
        assert_eq!(base_cmds[30], target.base_deg);
        assert_eq!(top_cmds[30], target.top_deg);
    }

    #[test]
    fn test_linear_ramp() {
        let mut driver = SimServoDriver::new();
        let current = JointAngles { base_deg: 0.0, top_deg: 180.0 };
        let target = JointAngles { base_deg: 180.0, top_deg: 0.0 };

        execute_move(&mut driver, current, target, 10, Duration::from_secs(0)).unwrap();

        let base_cmds = driver.commands_for(ServoId::ArmBase);
        let top_cmds = driver.commands_for(ServoId::ArmTop);

        for (i, (base_deg, top_deg)) in base_cmds.iter().zip(top_cmds.iter()).enumerate() {
            let expected_deg = 180.0 * i as f64 / 10.0;
            assert!((base_deg - expected_deg).abs() < 1e-9);
            assert!((top_deg - (180.0 - expected_deg)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_step() {
        let mut driver = SimServoDriver::new();
        let current = JointAngles { base_deg: 10.0, top_deg: 20.0 };
        let target = JointAngles { base_deg: 30.0, top_deg: 40.0 };

        execute_move(&mut driver, current, target, 1, Duration::from_secs(0)).unwrap();

        let base_cmds = driver.commands_for(ServoId::ArmBase);
        assert_eq!(base_cmds, vec![10.0, 30.0]);
    }

    #[test]
    fn test_zero_length_move() {
        let mut driver = SimServoDriver::new();
        let pose = JointAngles { base_deg: 90.0, top_deg: 90.0 };

        let end = execute_move(&mut driver, pose, pose, 5, Duration::from_secs(0)).unwrap();

        assert_eq!(end, pose);
        assert!(driver
            .commands_for(ServoId::ArmBase)
            .iter()
            .all(|&angle_deg| angle_deg == 90.0));
    }
}
