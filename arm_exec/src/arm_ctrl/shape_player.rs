//! Shape playback sequencing
//!
//! The shape player walks an ordered list of target points, resolving each to
//! joint angles, skipping unreachable points, and chaining interpolated
//! moves. Every playback ends with a move back to the home pose, slower than
//! the tracing moves.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Internal
use super::{clamp_to_travel, execute_move, ArmCtrlError, JointAngles, KinematicsSolver, Params};
use crate::servo_ctrl::{ServoDriver, ServoId};
use crate::shapes::Shape;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Status report for a single shape playback.
#[derive(Clone, Copy, Default, Serialize, Deserialize, Debug)]
pub struct PlaybackReport {
    /// Number of points resolved and traced.
    pub points_traced: usize,

    /// Number of points skipped as unreachable.
    pub points_skipped: usize,

    /// Whether the playback was aborted before reaching the last point.
    pub aborted: bool,
}

/// Shape playback state.
///
/// Owns the servo driver and tracks the arm's current joint angles in memory
/// between moves. Hardware angles are only read once, by [`reset_to_home`],
/// as the cold-start anchor; re-reading per point would race a potentially
/// slow hardware layer.
///
/// [`reset_to_home`]: ShapePlayer::reset_to_home
pub struct ShapePlayer<D>
where
    D: ServoDriver<Channel = ServoId>,
{
    params: Params,

    solver: KinematicsSolver,

    driver: D,

    current_angles: JointAngles,

    abort: Arc<AtomicBool>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<D> ShapePlayer<D>
where
    D: ServoDriver<Channel = ServoId>,
{
    /// Create a new shape player over the given driver.
    pub fn new(params: Params, driver: D) -> Self {
        let solver = KinematicsSolver::new(params.geometry());
        let current_angles = params.home_angles();

        Self {
            params,
            solver,
            driver,
            current_angles,
            abort: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a handle which aborts playback when set.
    ///
    /// The flag is checked between points: the move in progress completes,
    /// remaining points are dropped, and the arm still returns home.
    pub fn abort_handle(&self) -> Arc<AtomicBool> {
        self.abort.clone()
    }

    /// The underlying servo driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Move the arm from wherever it actually is back to the home pose.
    ///
    /// This is the only operation that reads hardware angle state, since at
    /// cold start there is no other source of truth for the arm's pose. Use
    /// it once before the first shape of a session.
    pub fn reset_to_home(&mut self) -> Result<(), ArmCtrlError> {
        let start = JointAngles {
            base_deg: self.driver.read_angle(ServoId::ArmBase)?,
            top_deg: self.driver.read_angle(ServoId::ArmTop)?,
        };

        info!(
            "Resetting arm to home from base {:.2} deg, top {:.2} deg",
            start.base_deg, start.top_deg
        );

        self.current_angles = execute_move(
            &mut self.driver,
            start,
            self.params.home_angles(),
            self.params.home_steps,
            self.params.home_step_delay(),
        )?;

        Ok(())
    }

    /// Trace a shape, then return home.
    ///
    /// Unreachable points are skipped with a warning and do not alter the
    /// tracked angle state. The final homing move is unconditional, including
    /// for empty shapes and aborted playbacks.
    pub fn play(&mut self, shape: &Shape) -> Result<PlaybackReport, ArmCtrlError> {
        info!(
            "Starting to trace \"{}\" ({} points)...",
            shape.name,
            shape.points_cm.len()
        );

        let mut report = PlaybackReport::default();

        // Playback starts from the home pose; angles are tracked in memory
        // from here, not re-read from hardware
        self.current_angles = self.params.home_angles();

        for point in &shape.points_cm {
            if self.abort.load(Ordering::Relaxed) {
                warn!("{}: playback aborted, returning home", shape.name);
                report.aborted = true;
                break;
            }

            let raw = match self.solver.solve(*point) {
                Ok(angles) => angles,
                Err(ArmCtrlError::TargetUnreachable { x_cm, y_cm }) => {
                    warn!(
                        "{}: point ({:.2}, {:.2}) cm is out of reach, skipping",
                        shape.name, x_cm, y_cm
                    );
                    report.points_skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let target = JointAngles {
                base_deg: clamp_to_travel(raw.base_deg),
                top_deg: clamp_to_travel(raw.top_deg),
            };

            info!(
                "{}: moving to ({:.2}, {:.2}) cm with base {:.2} deg, top {:.2} deg",
                shape.name, point.x_cm, point.y_cm, target.base_deg, target.top_deg
            );

            self.current_angles = execute_move(
                &mut self.driver,
                self.current_angles,
                target,
                self.params.trace_steps,
                self.params.trace_step_delay(),
            )?;

            report.points_traced += 1;
        }

        // Unconditional reset after every shape
        self.current_angles = execute_move(
            &mut self.driver,
            self.current_angles,
            self.params.home_angles(),
            self.params.home_steps,
            self.params.home_step_delay(),
        )?;

        info!(
            "Finished tracing \"{}\": {} traced, {} skipped",
            shape.name, report.points_traced, report.points_skipped
        );

        Ok(report)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::servo_ctrl::SimServoDriver;
    use crate::shapes::Point2D;

    /// Params with zeroed delays so tests run instantly.
    fn test_params() -> Params {
        Params {
            trace_step_delay_s: 0.0,
            home_step_delay_s: 0.0,
            ..Params::default()
        }
    }

    fn shape(name: &str, points: &[(f64, f64)]) -> Shape {
        Shape {
            name: String::from(name),
            points_cm: points
                .iter()
                .map(|&(x_cm, y_cm)| Point2D { x_cm, y_cm })
                .collect(),
        }
    }

    #[test]
    fn test_empty_shape_still_homes() {
        let mut player = ShapePlayer::new(test_params(), SimServoDriver::new());

        let report = player.play(&shape("Empty", &[])).unwrap();

        assert_eq!(report.points_traced, 0);
        assert_eq!(report.points_skipped, 0);

        // Exactly one homing move and nothing else
        let base_cmds = player.driver().commands_for(ServoId::ArmBase);
        assert_eq!(base_cmds.len(), 31);
        assert!(base_cmds.iter().all(|&angle_deg| angle_deg == 90.0));
    }

    #[test]
    fn test_three_point_shape() {
        let mut player = ShapePlayer::new(test_params(), SimServoDriver::new());

        let report = player
            .play(&shape("Triangle", &[(5.0, 3.0), (6.0, 7.0), (7.0, 3.0)]))
            .unwrap();

        assert_eq!(report.points_traced, 3);
        assert_eq!(report.points_skipped, 0);
        assert!(!report.aborted);

        // 3 trace moves plus the reset, 31 samples each
        let base_cmds = player.driver().commands_for(ServoId::ArmBase);
        let top_cmds = player.driver().commands_for(ServoId::ArmTop);
        assert_eq!(base_cmds.len(), 31 * 4);

        // First sample of the first move is the home pose, last sample of the
        // reset is the home pose again
        assert_eq!(base_cmds[0], 90.0);
        assert_eq!(base_cmds[31 * 4 - 1], 90.0);
        assert_eq!(top_cmds[31 * 4 - 1], 90.0);
    }

    #[test]
    fn test_unreachable_point_skipped() {
        let mut player = ShapePlayer::new(test_params(), SimServoDriver::new());

        // (13, 0) has d = 13 > 12 and must be skipped without altering the
        // angle state, so the move to (6, 0) still starts from home
        let report = player
            .play(&shape("Partial", &[(13.0, 0.0), (6.0, 0.0)]))
            .unwrap();

        assert_eq!(report.points_traced, 1);
        assert_eq!(report.points_skipped, 1);

        let base_cmds = player.driver().commands_for(ServoId::ArmBase);
        assert_eq!(base_cmds.len(), 31 * 2);
        assert_eq!(base_cmds[0], 90.0);
    }

    #[test]
    fn test_abort_still_homes() {
        let mut player = ShapePlayer::new(test_params(), SimServoDriver::new());
        player.abort_handle().store(true, Ordering::Relaxed);

        let report = player
            .play(&shape("Aborted", &[(5.0, 3.0), (6.0, 7.0)]))
            .unwrap();

        assert!(report.aborted);
        assert_eq!(report.points_traced, 0);

        // Only the homing move ran
        assert_eq!(player.driver().commands_for(ServoId::ArmBase).len(), 31);
    }

    #[test]
    fn test_cold_start_reset() {
        let driver = SimServoDriver::with_start_angles(40.0, 120.0);
        let mut player = ShapePlayer::new(test_params(), driver);

        player.reset_to_home().unwrap();

        // The reset anchors on the angles read from the driver
        let base_cmds = player.driver().commands_for(ServoId::ArmBase);
        let top_cmds = player.driver().commands_for(ServoId::ArmTop);
        assert_eq!(base_cmds[0], 40.0);
        assert_eq!(top_cmds[0], 120.0);
        assert_eq!(base_cmds[30], 90.0);
        assert_eq!(top_cmds[30], 90.0);
    }
}
