use nalgebra as na;

// Input
pub const DEFAULT_DATA_PATH: &str = "orbit_simulation.csv";
pub const DEFAULT_X_COLUMN: &str = "x";
pub const DEFAULT_Y_COLUMN: &str = "y";
pub const DEFAULT_Z_COLUMN: &str = "z";

// Central body, fixed at the origin
pub const REFERENCE_POINT: na::Point3<f64> = na::Point3::new(0.0, 0.0, 0.0);

// Labels
pub const WINDOW_TITLE: &str = "Satellite Orbit";
pub const TRAJECTORY_LABEL: &str = "Satellite Orbit";
pub const REFERENCE_LABEL: &str = "Earth";
pub const X_AXIS_LABEL: &str = "X Position (m)";
pub const Y_AXIS_LABEL: &str = "Y Position (m)";
pub const Z_AXIS_LABEL: &str = "Z Position (m)";
