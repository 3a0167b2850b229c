//! Backend-independent description of what gets drawn.
//!
//! A [`Figure`] owns one [`Axes3D`]. Primitives are kept in world coordinates (meters);
//! scaling to screen space is left to the renderer.

use nalgebra as na;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const GRAY: Color = Color::new(0.6, 0.6, 0.6);
    /// First color of the usual plotting cycle (#1f77b4).
    pub const TAB_BLUE: Color = Color::new(0.122, 0.467, 0.706);
}

/// Connected polyline through points in the given order.
#[derive(Debug, Clone, PartialEq)]
pub struct Line3D {
    pub points: Vec<na::Point3<f64>>,
    pub label: Option<String>,
    pub color: Color,
}

impl Line3D {
    /// Consecutive point pairs. An open line of N points has N-1 segments.
    pub fn segments(&self) -> impl Iterator<Item = (&na::Point3<f64>, &na::Point3<f64>)> + '_ {
        self.points.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// A single point marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter3D {
    pub position: na::Point3<f64>,
    pub label: Option<String>,
    pub color: Color,
    /// Marker diameter in pixels.
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendStyle {
    Line,
    Marker,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub style: LegendStyle,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axes3D {
    pub x_label: String,
    pub y_label: String,
    pub z_label: String,
    pub lines: Vec<Line3D>,
    pub markers: Vec<Scatter3D>,
    pub show_legend: bool,
}

impl Axes3D {
    pub fn plot(&mut self, points: Vec<na::Point3<f64>>, label: &str, color: Color) {
        self.lines.push(Line3D {
            points,
            label: Some(label.to_string()),
            color,
        });
    }

    pub fn scatter(&mut self, position: na::Point3<f64>, label: &str, color: Color, size: f32) {
        self.markers.push(Scatter3D {
            position,
            label: Some(label.to_string()),
            color,
            size,
        });
    }

    pub fn set_labels(&mut self, x: &str, y: &str, z: &str) {
        self.x_label = x.to_string();
        self.y_label = y.to_string();
        self.z_label = z.to_string();
    }

    pub fn legend(&mut self) {
        self.show_legend = true;
    }

    /// Legend entries of labeled primitives, lines first, in draw order.
    /// Empty while the legend is not enabled.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        if !self.show_legend {
            return Vec::new();
        }

        let lines = self.lines.iter().filter_map(|line| {
            line.label.as_ref().map(|label| LegendEntry {
                label: label.clone(),
                color: line.color,
                style: LegendStyle::Line,
            })
        });
        let markers = self.markers.iter().filter_map(|marker| {
            marker.label.as_ref().map(|label| LegendEntry {
                label: label.clone(),
                color: marker.color,
                style: LegendStyle::Marker,
            })
        });
        lines.chain(markers).collect()
    }

    /// Largest absolute finite coordinate of anything drawn, 0 for empty axes.
    pub fn data_extent(&self) -> f64 {
        let line_points = self.lines.iter().flat_map(|line| line.points.iter());
        let marker_points = self.markers.iter().map(|marker| &marker.position);
        line_points
            .chain(marker_points)
            .flat_map(|p| p.coords.iter().copied())
            .filter(|c| c.is_finite())
            .map(f64::abs)
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub axes: Axes3D,
}

impl Figure {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            axes: Axes3D::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn line_of(n: usize) -> Line3D {
        Line3D {
            points: (0..n).map(|i| na::Point3::new(i as f64, 0.0, 0.0)).collect(),
            label: None,
            color: Color::TAB_BLUE,
        }
    }

    #[test_case(0 => 0 ; "empty line")]
    #[test_case(1 => 0 ; "single point")]
    #[test_case(2 => 1 ; "two points")]
    #[test_case(100 => 99 ; "many points")]
    fn segment_count_is_one_less_than_points(n: usize) -> usize {
        let line = line_of(n);
        assert_eq!(line.segments().count(), line.segment_count());
        line.segment_count()
    }

    #[test]
    fn segments_connect_consecutive_points() {
        let line = line_of(3);
        let segments: Vec<_> = line.segments().map(|(a, b)| (a.x, b.x)).collect();
        assert_eq!(segments, vec![(0.0, 1.0), (1.0, 2.0)]);
    }

    #[test]
    fn legend_is_hidden_until_enabled() {
        let mut axes = Axes3D::default();
        axes.plot(vec![], "orbit", Color::TAB_BLUE);
        assert!(axes.legend_entries().is_empty());
        axes.legend();
        assert_eq!(axes.legend_entries().len(), 1);
    }

    #[test]
    fn legend_lists_lines_before_markers() {
        let mut axes = Axes3D::default();
        axes.scatter(na::Point3::origin(), "body", Color::BLUE, 8.0);
        axes.plot(vec![na::Point3::new(1.0, 2.0, 3.0)], "path", Color::TAB_BLUE);
        axes.legend();

        let entries = axes.legend_entries();
        assert_eq!(entries[0].label, "path");
        assert_eq!(entries[0].style, LegendStyle::Line);
        assert_eq!(entries[1].label, "body");
        assert_eq!(entries[1].style, LegendStyle::Marker);
    }

    #[test]
    fn data_extent_covers_lines_and_markers() {
        let mut axes = Axes3D::default();
        assert_eq!(axes.data_extent(), 0.0);
        axes.plot(vec![na::Point3::new(1.0, -4.0, 3.0)], "path", Color::TAB_BLUE);
        axes.scatter(na::Point3::new(0.0, 0.0, 2.0), "body", Color::BLUE, 8.0);
        assert_eq!(axes.data_extent(), 4.0);
    }

    #[test]
    fn data_extent_ignores_non_finite_coordinates() {
        let mut axes = Axes3D::default();
        axes.plot(
            vec![
                na::Point3::new(f64::INFINITY, 1.0, 0.0),
                na::Point3::new(f64::NAN, -2.5, 0.0),
            ],
            "path",
            Color::TAB_BLUE,
        );
        assert_eq!(axes.data_extent(), 2.5);
    }
}
