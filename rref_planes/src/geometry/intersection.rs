use glam::DVec3;

use crate::tolerance::{EPSILON, SQ_EPSILON};

use super::plane::PlaneEquation;

// length of the segment drawn for an intersection line
pub const LINE_SEGMENT_LENGTH: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub point: DVec3,
    // unit length
    pub direction: DVec3,
}

impl Line {
    // fixed-length segment centered on `point`
    pub fn segment(&self) -> (DVec3, DVec3) {
        let half = self.direction * (LINE_SEGMENT_LENGTH / 2.0);
        (self.point - half, self.point + half)
    }

    pub fn distance_to(&self, p: DVec3) -> f64 {
        (p - self.point).cross(self.direction).length()
    }
}

// None when the planes are parallel or coincide
pub fn intersect_plane_plane(p1: &PlaneEquation, p2: &PlaneEquation) -> Option<Line> {
    let u = p1.normal.cross(p2.normal);
    let u_length_squared = u.length_squared();
    if u_length_squared < SQ_EPSILON {
        return None;
    }
    // n1·point = d1 and n2·point = d2, the component along u is zero
    let point = (p1.constant * p2.normal.cross(u) + p2.constant * u.cross(p1.normal))
        / u_length_squared;
    Some(Line {
        point,
        direction: u / u_length_squared.sqrt(),
    })
}

// None when the three normals are linearly dependent
pub fn intersect_three_planes(
    p1: &PlaneEquation,
    p2: &PlaneEquation,
    p3: &PlaneEquation,
) -> Option<DVec3> {
    let n2_cross_n3 = p2.normal.cross(p3.normal);
    let determinant = p1.normal.dot(n2_cross_n3);
    if determinant.abs() < EPSILON {
        return None;
    }
    Some(
        (p1.constant * n2_cross_n3
            + p2.constant * p3.normal.cross(p1.normal)
            + p3.constant * p1.normal.cross(p2.normal))
            / determinant,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(a: f64, b: f64, c: f64, d: f64) -> PlaneEquation {
        PlaneEquation::new(a, b, c, d)
    }

    fn on_plane(p: &PlaneEquation, point: DVec3) -> bool {
        (p.normal.dot(point) - p.constant).abs() < 1e-9
    }

    #[test]
    fn two_planes_meet_in_a_line_on_both() {
        let p1 = plane(1.0, 1.0, 1.0, 3.0);
        let p2 = plane(1.0, -1.0, 1.0, 1.0);
        let line = intersect_plane_plane(&p1, &p2).unwrap();
        assert!((line.direction.length() - 1.0).abs() < 1e-12);
        assert!(on_plane(&p1, line.point));
        assert!(on_plane(&p2, line.point));
        let (start, end) = line.segment();
        assert!(on_plane(&p1, start) && on_plane(&p2, start));
        assert!(on_plane(&p1, end) && on_plane(&p2, end));
        assert!((start.distance(end) - LINE_SEGMENT_LENGTH).abs() < 1e-9);
        assert!(line.distance_to(DVec3::ONE) < 1e-9);
    }

    #[test]
    fn parallel_and_coincident_planes_have_no_line() {
        let p1 = plane(1.0, 1.0, 1.0, 1.0);
        assert_eq!(intersect_plane_plane(&p1, &plane(2.0, 2.0, 2.0, 7.0)), None);
        assert_eq!(intersect_plane_plane(&p1, &plane(-1.0, -1.0, -1.0, -1.0)), None);
    }

    #[test]
    fn three_planes_meet_in_the_solution() {
        let point = intersect_three_planes(
            &plane(1.0, 1.0, 1.0, 3.0),
            &plane(1.0, -1.0, 1.0, 1.0),
            &plane(2.0, 1.0, -1.0, 2.0),
        )
        .unwrap();
        assert!(point.distance(DVec3::ONE) < 1e-12);

        let point = intersect_three_planes(
            &plane(1.0, 0.0, 0.0, 1.0),
            &plane(0.0, 1.0, 0.0, 2.0),
            &plane(0.0, 0.0, 1.0, 3.0),
        )
        .unwrap();
        assert_eq!(point, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn parallel_planes_share_nothing() {
        let p1 = plane(1.0, 1.0, 1.0, 1.0);
        let p2 = plane(1.0, 1.0, 1.0, 2.0);
        let p3 = plane(2.0, 2.0, 2.0, 6.0);
        assert_eq!(intersect_three_planes(&p1, &p2, &p3), None);
        assert_eq!(intersect_plane_plane(&p1, &p2), None);
        assert_eq!(intersect_plane_plane(&p2, &p3), None);
        assert_eq!(intersect_plane_plane(&p1, &p3), None);
    }

    #[test]
    fn planes_through_a_common_line_have_no_single_point() {
        assert_eq!(
            intersect_three_planes(
                &plane(1.0, 1.0, 1.0, 3.0),
                &plane(1.0, -1.0, 1.0, 1.0),
                &plane(2.0, 0.0, 2.0, 4.0),
            ),
            None
        );
    }
}
