use anyhow::{Context, Result};
use glam::DVec3;
use indexmap::IndexMap;
use itertools::Itertools;

use crate::linear_system::{AnalysisResult, Matrix};
use crate::tolerance::EPSILON;

use super::intersection::{intersect_plane_plane, intersect_three_planes, Line};
use super::plane::{plane_pose_from_equation, PlaneEquation, PlanePose};

#[derive(Debug, Clone, PartialEq)]
pub struct ScenePlane {
    pub equation: PlaneEquation,
    pub pose: PlanePose,
}

// What one displayed matrix looks like in space. Rows map to planes by index;
// lines and points are keyed by the rows that produce them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneGeometry {
    pub planes: IndexMap<usize, ScenePlane>,
    pub lines: IndexMap<(usize, usize), Line>,
    pub points: IndexMap<(usize, usize, usize), DVec3>,
}

impl SceneGeometry {
    pub fn from_matrix(matrix: &Matrix) -> Result<Self> {
        let mut scene = Self::default();
        for (idx, row) in matrix.rows().iter().enumerate() {
            let equation = PlaneEquation::try_from(row.as_slice())
                .with_context(|| format!("reading row {} as a plane", idx + 1))?;
            let pose = plane_pose_from_equation(&equation);
            scene.planes.insert(idx, ScenePlane { equation, pose });
        }
        let renderable = scene
            .planes
            .iter()
            .filter(|(_, plane)| plane.pose.is_renderable())
            .map(|(idx, plane)| (*idx, plane.equation))
            .collect_vec();
        for ((i, p1), (j, p2)) in renderable.iter().tuple_combinations() {
            if let Some(line) = intersect_plane_plane(p1, p2) {
                scene.lines.insert((*i, *j), line);
            }
        }
        for ((i, p1), (j, p2), (k, p3)) in renderable.iter().tuple_combinations() {
            if let Some(point) = intersect_three_planes(p1, p2, p3) {
                scene.points.insert((*i, *j, *k), point);
            }
        }
        log::trace!(
            "scene with {} planes ({} renderable), {} lines, {} points",
            scene.planes.len(),
            renderable.len(),
            scene.lines.len(),
            scene.points.len()
        );
        Ok(scene)
    }

    pub fn renderable_planes(&self) -> impl Iterator<Item = (&usize, &ScenePlane)> {
        self.planes
            .iter()
            .filter(|(_, plane)| plane.pose.is_renderable())
    }

    // a unique verdict has to show up as the point every plane triple meets in
    pub fn agrees_with(&self, analysis: &AnalysisResult) -> bool {
        match analysis.solution_point {
            Some(solution) if analysis.is_unique() => self
                .points
                .values()
                .all(|point| point.distance(solution) < EPSILON),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_system::{analyze, compute_rref_history};

    #[test]
    fn builds_planes_lines_and_point() {
        let matrix: Matrix = "1,1,1,3; 1,-1,1,1; 2,1,-1,2".parse().unwrap();
        let scene = SceneGeometry::from_matrix(&matrix).unwrap();
        assert_eq!(scene.planes.len(), 3);
        assert_eq!(
            scene.lines.keys().copied().collect_vec(),
            vec![(0, 1), (0, 2), (1, 2)]
        );
        assert_eq!(scene.points.len(), 1);
        assert!(scene.points[&(0, 1, 2)].distance(DVec3::ONE) < 1e-9);
    }

    #[test]
    fn every_step_agrees_with_a_unique_verdict() {
        let matrix: Matrix = "1,1,1,3; 1,-1,1,1; 2,1,-1,2".parse().unwrap();
        let history = compute_rref_history(&matrix);
        let analysis = analyze(history.last());
        for step in history.matrices() {
            let scene = SceneGeometry::from_matrix(step).unwrap();
            assert_eq!(scene.points.len(), 1);
            assert!(scene.agrees_with(&analysis));
        }
    }

    #[test]
    fn skips_zero_and_contradictory_rows() {
        let matrix: Matrix = "1,0,0,1; 0,1,0,2; 0,0,0,0; 0,0,0,4".parse().unwrap();
        let scene = SceneGeometry::from_matrix(&matrix).unwrap();
        assert_eq!(scene.planes.len(), 4);
        assert_eq!(scene.renderable_planes().count(), 2);
        assert!(scene.planes[&3].pose.is_degenerate);
        assert!(!scene.planes[&2].pose.is_degenerate);
        assert_eq!(scene.lines.keys().copied().collect_vec(), vec![(0, 1)]);
        assert!(scene.points.is_empty());
    }

    #[test]
    fn parallel_planes_draw_nothing_between_them() {
        let matrix: Matrix = "1,1,1,1; 1,1,1,2; 2,2,2,6".parse().unwrap();
        let scene = SceneGeometry::from_matrix(&matrix).unwrap();
        assert_eq!(scene.renderable_planes().count(), 3);
        assert!(scene.lines.is_empty());
        assert!(scene.points.is_empty());
    }

    #[test]
    fn only_three_variable_systems_have_a_scene() {
        let matrix: Matrix = "1,2,3; 4,5,6".parse().unwrap();
        assert!(SceneGeometry::from_matrix(&matrix).is_err());
    }
}
