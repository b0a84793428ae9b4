//! Arm inverse kinematics calculations
//!
//! Planar two-link inverse kinematics, see
//! https://en.wikipedia.org/wiki/Inverse_kinematics. The solver maps a target
//! point in the drawing plane to a pair of joint angles, fixing the elbow to
//! the `acos` branch (elbow angle in [0, pi]).

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};

// Internal
use super::{ArmCtrlError, TOP_SERVO_MOUNT_OFFSET_DEG};
use crate::shapes::Point2D;
use util::maths;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A pair of joint angles in servo degree space.
///
/// Angles straight out of the solver are unclamped and may fall outside the
/// servo travel range; the caller clamps before commanding hardware.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    /// Units: degrees
    pub base_deg: f64,

    /// Units: degrees
    pub top_deg: f64,
}

/// The fixed geometry of the two-link arm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArmGeometry {
    /// Units: centimeters
    pub shoulder_length_cm: f64,

    /// Units: centimeters
    pub elbow_length_cm: f64,
}

/// Inverse kinematics solver for a fixed arm geometry.
pub struct KinematicsSolver {
    geom: ArmGeometry,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl KinematicsSolver {
    /// Create a solver for the given geometry. The geometry is fixed for the
    /// lifetime of the solver.
    pub fn new(geom: ArmGeometry) -> Self {
        Self { geom }
    }

    /// Solve for the joint angles placing the arm head at `target`.
    ///
    /// Returns [`ArmCtrlError::TargetUnreachable`] if the target distance
    /// falls outside the annulus the arm can reach. The reachability check
    /// runs before any trigonometry so no domain errors can occur downstream.
    pub fn solve(&self, target: Point2D) -> Result<JointAngles, ArmCtrlError> {
        let l1 = self.geom.shoulder_length_cm;
        let l2 = self.geom.elbow_length_cm;

        let max_distance_cm = l1 + l2;
        let min_distance_cm = (l1 - l2).abs();
        let head_target_distance_cm = target.x_cm.hypot(target.y_cm);

        if head_target_distance_cm > max_distance_cm
            || head_target_distance_cm < min_distance_cm
        {
            return Err(ArmCtrlError::TargetUnreachable {
                x_cm: target.x_cm,
                y_cm: target.y_cm,
            });
        }

        // Elbow angle from the law of cosines. The clamp absorbs floating
        // point rounding at the reachability boundary, where cos can land
        // just outside [-1, 1]; this is numerical tolerance, not a second
        // reachability check.
        let cos_top = (target.x_cm.powi(2) + target.y_cm.powi(2) - l1.powi(2) - l2.powi(2))
            / (2.0 * l1 * l2);
        let top_rad = maths::clamp(&cos_top, &-1.0, &1.0).acos();

        let base_rad = target.y_cm.atan2(target.x_cm)
            - (l2 * top_rad.sin()).atan2(l1 + l2 * top_rad.cos());

        Ok(JointAngles {
            base_deg: base_rad.to_degrees(),
            top_deg: top_rad.to_degrees() - TOP_SERVO_MOUNT_OFFSET_DEG,
        })
    }

    /// Forward kinematics: the head position produced by a pair of unclamped
    /// joint angles.
    pub fn end_effector_position(&self, angles: JointAngles) -> Point2D {
        let base_rad = angles.base_deg.to_radians();
        let top_rad = (angles.top_deg + TOP_SERVO_MOUNT_OFFSET_DEG).to_radians();

        Point2D {
            x_cm: self.geom.shoulder_length_cm * base_rad.cos()
                + self.geom.elbow_length_cm * (base_rad + top_rad).cos(),
            y_cm: self.geom.shoulder_length_cm * base_rad.sin()
                + self.geom.elbow_length_cm * (base_rad + top_rad).sin(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arm_ctrl::Params;

    fn solver() -> KinematicsSolver {
        KinematicsSolver::new(Params::default().geometry())
    }

    /// Solve for a point and check forward kinematics reproduces it.
    fn assert_round_trip(solver: &KinematicsSolver, x_cm: f64, y_cm: f64, tol_cm: f64) {
        let angles = solver
            .solve(Point2D { x_cm, y_cm })
            .expect("point should be reachable");

        let head = solver.end_effector_position(angles);
        let error_cm = util::maths::norm(&[x_cm, y_cm], &[head.x_cm, head.y_cm]).unwrap();

        assert!(
            error_cm < tol_cm,
            "round trip error {} cm for ({}, {})",
            error_cm,
            x_cm,
            y_cm
        );
    }

    #[test]
    fn test_round_trip() {
        let solver = solver();

        // Concrete scenario: (6, 0) has d = 6, inside [4, 12]
        assert_round_trip(&solver, 6.0, 0.0, 1e-6);

        // Waypoints of the M and Fish shapes
        for &(x_cm, y_cm) in &[(5.0, 3.0), (6.0, 7.0), (8.0, 3.0), (4.0, 3.0), (10.0, 4.0)] {
            assert_round_trip(&solver, x_cm, y_cm, 1e-6);
        }
    }

    #[test]
    fn test_boundary_reachable() {
        let solver = solver();

        // Fully stretched (d = 12) and fully folded (d = 4) are both on the
        // boundary and must not be rejected
        assert_round_trip(&solver, 12.0, 0.0, 1e-6);
        assert_round_trip(&solver, 0.0, 4.0, 1e-6);
    }

    #[test]
    fn test_unreachable() {
        let solver = solver();

        // Too far: d = 13 > 12
        assert!(matches!(
            solver.solve(Point2D { x_cm: 13.0, y_cm: 0.0 }),
            Err(ArmCtrlError::TargetUnreachable { .. })
        ));

        // Too close: d = 1 < 4, the arm cannot fold that tightly
        assert!(matches!(
            solver.solve(Point2D { x_cm: 1.0, y_cm: 0.0 }),
            Err(ArmCtrlError::TargetUnreachable { .. })
        ));
    }

    #[test]
    fn test_elbow_branch_fixed() {
        let solver = solver();

        // The elbow angle is always in [0, 180] deg, so the reported top
        // servo angle is always in [-90, 90] deg
        for &(x_cm, y_cm) in &[(6.0, 0.0), (5.0, 3.0), (0.0, 4.0), (12.0, 0.0), (6.0, -7.0)] {
            let angles = solver.solve(Point2D { x_cm, y_cm }).unwrap();
            assert!(angles.top_deg >= -90.0 - 1e-9);
            assert!(angles.top_deg <= 90.0 + 1e-9);
        }
    }
}
