use anyhow::{ensure, Error, Result};
use glam::{DQuat, DVec3};

use crate::tolerance::{is_negligible, SQ_EPSILON};

// where "0 = 0" rows are parked, well outside of any rendered scene
pub const IDENTITY_PLANE_PARKING: DVec3 = DVec3::new(0.0, -1.0e4, 0.0);

// a·x + b·y + c·z = d, (a, b, c) kept as the unnormalized normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneEquation {
    pub normal: DVec3,
    pub constant: f64,
}

impl PlaneEquation {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            normal: DVec3::new(a, b, c),
            constant: d,
        }
    }

    pub fn has_vanishing_normal(&self) -> bool {
        self.normal.length_squared() < SQ_EPSILON
    }
}

impl TryFrom<&[f64]> for PlaneEquation {
    type Error = Error;

    fn try_from(row: &[f64]) -> Result<Self> {
        ensure!(
            row.len() == 4,
            "a plane needs exactly 3 coefficients and a constant, got {} entries",
            row.len()
        );
        Ok(Self::new(row[0], row[1], row[2], row[3]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePose {
    // foot of the perpendicular from the origin
    pub position: DVec3,
    // rotates +Z onto the unit normal
    pub orientation: DQuat,
    // unit normal, zero for the "0 = 0" identity row
    pub normal: DVec3,
    // "0 = d" with d != 0, no point satisfies it
    pub is_degenerate: bool,
}

impl PlanePose {
    // only proper planes get drawn or intersected
    pub fn is_renderable(&self) -> bool {
        !self.is_degenerate && self.normal != DVec3::ZERO
    }
}

pub fn plane_pose_from_equation(plane: &PlaneEquation) -> PlanePose {
    if plane.has_vanishing_normal() {
        return PlanePose {
            position: IDENTITY_PLANE_PARKING,
            orientation: DQuat::IDENTITY,
            normal: DVec3::ZERO,
            is_degenerate: !is_negligible(plane.constant),
        };
    }
    let length_squared = plane.normal.length_squared();
    let unit_normal = plane.normal / length_squared.sqrt();
    PlanePose {
        position: plane.normal * (plane.constant / length_squared),
        orientation: DQuat::from_rotation_arc(DVec3::Z, unit_normal),
        normal: unit_normal,
        is_degenerate: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: DVec3, b: DVec3) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn rows_must_have_four_entries() {
        assert!(PlaneEquation::try_from(&[1.0, 2.0, 3.0][..]).is_err());
        assert!(PlaneEquation::try_from(&[1.0, 2.0, 3.0, 4.0, 5.0][..]).is_err());
        let plane = PlaneEquation::try_from(&[1.0, 2.0, 3.0, 4.0][..]).unwrap();
        assert_eq!(plane, PlaneEquation::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn position_is_foot_of_perpendicular() {
        let pose = plane_pose_from_equation(&PlaneEquation::new(0.0, 0.0, 2.0, 6.0));
        assert!(close(pose.position, DVec3::new(0.0, 0.0, 3.0)));
        assert!(close(pose.normal, DVec3::Z));
        assert!(!pose.is_degenerate);

        let pose = plane_pose_from_equation(&PlaneEquation::new(1.0, 1.0, 1.0, 3.0));
        assert!(close(pose.position, DVec3::ONE));
    }

    #[test]
    fn orientation_turns_z_onto_normal() {
        for normal in [
            DVec3::new(1.0, 2.0, -2.0),
            DVec3::new(0.0, 0.0, -5.0),
            DVec3::new(-3.0, 0.0, 0.0),
        ] {
            let pose = plane_pose_from_equation(&PlaneEquation {
                normal,
                constant: 1.0,
            });
            assert!(close(pose.orientation * DVec3::Z, normal.normalize()));
            assert!(pose.is_renderable());
        }
    }

    #[test]
    fn zero_normals_split_on_the_constant() {
        let identity = plane_pose_from_equation(&PlaneEquation::new(0.0, 0.0, 0.0, 0.0));
        assert!(!identity.is_degenerate);
        assert!(!identity.is_renderable());
        assert_eq!(identity.position, IDENTITY_PLANE_PARKING);

        let contradiction = plane_pose_from_equation(&PlaneEquation::new(0.0, 1e-8, 0.0, 5.0));
        assert!(contradiction.is_degenerate);
        assert!(!contradiction.is_renderable());
    }
}
