use super::figure::{Color, Figure};
use crate::config::plot::PlotConfig;
use crate::constants::*;
use crate::data::{LoadError, TrajectoryLoader};
use crate::models::Trajectory;
use log::{debug, info};
use std::error::Error;

pub const REFERENCE_MARKER_SIZE: f32 = 12.0;

/// Something that can put a finished figure in front of the user.
pub trait FigureRenderer {
    /// Displays the figure. Implementations may block until the viewer is closed.
    fn show(&mut self, figure: &Figure) -> Result<(), Box<dyn Error>>;
}

pub struct OrbitPlotter {
    config: PlotConfig,
}

impl OrbitPlotter {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    pub fn load(&self) -> Result<Trajectory, LoadError> {
        TrajectoryLoader::new(self.config.columns.clone()).load(&self.config.data_path)
    }

    /// Orbit line in row order, the central body at the origin, labeled axes and a legend.
    pub fn build_figure(&self, trajectory: &Trajectory) -> Figure {
        let mut figure = Figure::new(&self.config.title);
        let axes = &mut figure.axes;

        axes.plot(
            trajectory.points().to_vec(),
            TRAJECTORY_LABEL,
            Color::TAB_BLUE,
        );
        axes.scatter(
            REFERENCE_POINT,
            REFERENCE_LABEL,
            Color::BLUE,
            REFERENCE_MARKER_SIZE,
        );
        axes.set_labels(X_AXIS_LABEL, Y_AXIS_LABEL, Z_AXIS_LABEL);
        axes.legend();

        debug!(
            "Built figure with {} line segments and {} marker(s)",
            axes.lines.iter().map(|line| line.segment_count()).sum::<usize>(),
            axes.markers.len()
        );
        figure
    }

    /// Loads the data, builds the figure and hands it to the renderer.
    /// Nothing is rendered if loading fails.
    pub fn plot<R: FigureRenderer>(&self, renderer: &mut R) -> Result<Figure, Box<dyn Error>> {
        let trajectory = self.load()?;
        debug!("Largest coordinate magnitude {:.1} m", trajectory.extent());

        if let Some(summary) = radius_summary(&trajectory) {
            info!("{}", summary);
        }

        let figure = self.build_figure(&trajectory);
        renderer.show(&figure)?;
        Ok(figure)
    }
}

/// Closest and farthest distance from the central body, in the units of the data.
fn radius_summary(trajectory: &Trajectory) -> Option<String> {
    trajectory.radius_range().map(|(r_min, r_max)| {
        format!(
            "Orbit radius {:.1} to {:.1} (data units) from the central body",
            r_min, r_max
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::figure::LegendStyle;
    use nalgebra as na;

    fn three_point_trajectory() -> Trajectory {
        Trajectory::new(vec![
            na::Point3::new(1.0, 0.0, 0.0),
            na::Point3::new(0.0, 1.0, 0.0),
            na::Point3::new(0.0, 0.0, 1.0),
        ])
    }

    #[test]
    fn figure_has_one_line_and_one_marker() {
        let plotter = OrbitPlotter::new(PlotConfig::default());
        let figure = plotter.build_figure(&three_point_trajectory());

        assert_eq!(figure.axes.lines.len(), 1);
        assert_eq!(figure.axes.markers.len(), 1);
        assert_eq!(figure.axes.lines[0].points.len(), 3);
        assert_eq!(figure.axes.lines[0].segment_count(), 2);
    }

    #[test]
    fn marker_sits_at_origin_whatever_the_data() {
        let plotter = OrbitPlotter::new(PlotConfig::default());
        let offset = Trajectory::new(vec![na::Point3::new(7.0e6, 7.0e6, 7.0e6)]);
        let figure = plotter.build_figure(&offset);

        let marker = &figure.axes.markers[0];
        assert_eq!(marker.position, na::Point3::new(0.0, 0.0, 0.0));
        assert_eq!(marker.label.as_deref(), Some("Earth"));
        assert_ne!(marker.color, figure.axes.lines[0].color);
    }

    #[test]
    fn axes_are_labeled_in_meters() {
        let figure = OrbitPlotter::new(PlotConfig::default()).build_figure(&Trajectory::default());
        assert_eq!(figure.axes.x_label, "X Position (m)");
        assert_eq!(figure.axes.y_label, "Y Position (m)");
        assert_eq!(figure.axes.z_label, "Z Position (m)");
    }

    #[test]
    fn legend_names_orbit_and_earth() {
        let figure = OrbitPlotter::new(PlotConfig::default()).build_figure(&three_point_trajectory());
        let entries = figure.axes.legend_entries();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Satellite Orbit");
        assert_eq!(entries[0].style, LegendStyle::Line);
        assert_eq!(entries[1].label, "Earth");
        assert_eq!(entries[1].style, LegendStyle::Marker);
    }

    #[test]
    fn empty_trajectory_still_shows_marker_and_legend() {
        let figure = OrbitPlotter::new(PlotConfig::default()).build_figure(&Trajectory::default());
        assert_eq!(figure.axes.lines[0].segment_count(), 0);
        assert_eq!(figure.axes.markers.len(), 1);
        assert_eq!(figure.axes.legend_entries().len(), 2);
    }

    #[test]
    fn radius_summary_keeps_data_units() {
        // Kilometer export: no meter-based altitude offset may be applied
        let trajectory = Trajectory::new(vec![
            na::Point3::new(-6428.1, 0.0, 0.0),
            na::Point3::new(0.0, 6778.1, 0.0),
        ]);
        let summary = radius_summary(&trajectory).unwrap();
        assert_eq!(
            summary,
            "Orbit radius 6428.1 to 6778.1 (data units) from the central body"
        );
    }

    #[test]
    fn radius_summary_is_absent_for_empty_data() {
        assert!(radius_summary(&Trajectory::default()).is_none());
    }

    #[test]
    fn title_comes_from_config() {
        let config = PlotConfig {
            title: "LEO transfer".to_string(),
            ..PlotConfig::default()
        };
        let figure = OrbitPlotter::new(config).build_figure(&Trajectory::default());
        assert_eq!(figure.title, "LEO transfer");
    }
}
