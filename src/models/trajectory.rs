use crate::constants::REFERENCE_POINT;
use nalgebra as na;

/// Ordered positions of a simulated orbit, one per sample, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<na::Point3<f64>>,
}

impl Trajectory {
    pub fn new(points: Vec<na::Point3<f64>>) -> Self {
        Self { points }
    }

    /// Builds a trajectory from three coordinate columns. Returns `None` if their lengths differ.
    pub fn from_columns(xs: &[f64], ys: &[f64], zs: &[f64]) -> Option<Self> {
        if xs.len() != ys.len() || ys.len() != zs.len() {
            return None;
        }

        let points = xs
            .iter()
            .zip(ys)
            .zip(zs)
            .map(|((&x, &y), &z)| na::Point3::new(x, y, z))
            .collect();
        Some(Self { points })
    }

    pub fn points(&self) -> &[na::Point3<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest absolute finite coordinate over all samples, 0 for an empty trajectory.
    pub fn extent(&self) -> f64 {
        self.points
            .iter()
            .flat_map(|p| p.coords.iter().copied())
            .filter(|c| c.is_finite())
            .map(f64::abs)
            .fold(0.0, f64::max)
    }

    /// Closest and farthest distance from the reference point (periapsis/apoapsis radii
    /// for a full orbit).
    pub fn radius_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|p| na::distance(p, &REFERENCE_POINT))
            .fold(None, |range, r| match range {
                None => Some((r, r)),
                Some((min, max)) => Some((min.min(r), max.max(r))),
            })
    }
}
