pub mod intersection;
pub mod plane;
pub mod scene;

pub use intersection::{intersect_plane_plane, intersect_three_planes, Line, LINE_SEGMENT_LENGTH};
pub use plane::{plane_pose_from_equation, PlaneEquation, PlanePose};
pub use scene::{SceneGeometry, ScenePlane};
