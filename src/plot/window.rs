//! Interactive display of a [`Figure`] in a `kiss3d` window.
//!
//! Scene space is Y-up while the figure is Z-up, so data axes are rotated
//! (x, y, z) -> (y, z, x). The rotation keeps handedness. Data is scaled so the
//! largest coordinate lands on the unit sphere.

use super::figure::{Color, Figure, LegendStyle};
use super::plotter::FigureRenderer;
use kiss3d::camera::{ArcBall, Camera};
use kiss3d::light::Light;
use kiss3d::nalgebra::{Point2, Point3, Vector2};
use kiss3d::text::Font;
use kiss3d::window::Window;
use log::info;
use nalgebra as na;
use std::error::Error;
use std::rc::Rc;

const AXIS_LENGTH: f32 = 1.25;
const TEXT_SCALE: f32 = 36.0;
const LEGEND_ORIGIN: (f32, f32) = (20.0, 20.0);
const LEGEND_LINE_SPACING: f32 = 40.0;

fn to_point(color: Color) -> Point3<f32> {
    Point3::new(color.r, color.g, color.b)
}

struct AxisGuide {
    tip: Point3<f32>,
    label: String,
}

/// Figure content converted to `f32` scene coordinates.
struct Scene {
    segments: Vec<(Point3<f32>, Point3<f32>, Point3<f32>)>,
    points: Vec<(Point3<f32>, Point3<f32>)>,
    point_size: f32,
    axes: Vec<AxisGuide>,
    legend: Vec<(String, Point3<f32>)>,
}

impl Scene {
    fn from_figure(figure: &Figure) -> Self {
        let axes = &figure.axes;
        let extent = axes.data_extent();
        let scale = if extent > 0.0 { 1.0 / extent } else { 1.0 };
        let to_scene = |p: &na::Point3<f64>| {
            Point3::new((p.y * scale) as f32, (p.z * scale) as f32, (p.x * scale) as f32)
        };

        let segments = axes
            .lines
            .iter()
            .flat_map(|line| {
                line.segments()
                    .map(move |(a, b)| (to_scene(a), to_scene(b), to_point(line.color)))
            })
            .collect();
        let points = axes
            .markers
            .iter()
            .map(|marker| (to_scene(&marker.position), to_point(marker.color)))
            .collect();
        let point_size = axes
            .markers
            .iter()
            .map(|marker| marker.size)
            .fold(1.0, f32::max);

        let guide = |x: f64, y: f64, z: f64, label: &str| AxisGuide {
            tip: to_scene(&na::Point3::new(x, y, z)) * AXIS_LENGTH,
            label: label.to_string(),
        };
        let axis_scale = 1.0 / scale;
        let guides = vec![
            guide(axis_scale, 0.0, 0.0, &axes.x_label),
            guide(0.0, axis_scale, 0.0, &axes.y_label),
            guide(0.0, 0.0, axis_scale, &axes.z_label),
        ];

        let legend = axes
            .legend_entries()
            .into_iter()
            .map(|entry| {
                let glyph = match entry.style {
                    LegendStyle::Line => "---",
                    LegendStyle::Marker => " o ",
                };
                (format!("{} {}", glyph, entry.label), to_point(entry.color))
            })
            .collect();

        Self {
            segments,
            points,
            point_size,
            axes: guides,
            legend,
        }
    }

    fn draw(&self, window: &mut Window, camera: &dyn Camera, font: &Rc<Font>) {
        let size = window.size();
        let size = Vector2::new(size.x as f32, size.y as f32);
        let gray = to_point(Color::GRAY);
        let white = to_point(Color::WHITE);

        for axis in &self.axes {
            window.draw_line(&(-axis.tip), &axis.tip, &gray);
            let screen = camera.project(&axis.tip, &size);
            // project() measures y from the bottom, text is placed from the top
            let position = Point2::new(screen.x, size.y - screen.y);
            window.draw_text(&axis.label, &position, TEXT_SCALE, font, &white);
        }

        for (a, b, color) in &self.segments {
            window.draw_line(a, b, color);
        }
        for (position, color) in &self.points {
            window.draw_point(position, color);
        }

        for (i, (text, color)) in self.legend.iter().enumerate() {
            let position = Point2::new(
                LEGEND_ORIGIN.0,
                LEGEND_ORIGIN.1 + i as f32 * LEGEND_LINE_SPACING,
            );
            window.draw_text(text, &position, TEXT_SCALE, font, color);
        }
    }
}

/// Opens a window and redraws the figure until the viewer closes it.
pub struct WindowRenderer {
    background: Color,
    line_width: f32,
}

impl WindowRenderer {
    pub fn new() -> Self {
        Self {
            background: Color::new(0.05, 0.05, 0.08),
            line_width: 2.0,
        }
    }
}

impl Default for WindowRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FigureRenderer for WindowRenderer {
    fn show(&mut self, figure: &Figure) -> Result<(), Box<dyn Error>> {
        let scene = Scene::from_figure(figure);

        let mut window = Window::new(&figure.title);
        window.set_background_color(self.background.r, self.background.g, self.background.b);
        window.set_light(Light::StickToCamera);
        window.set_line_width(self.line_width);
        window.set_point_size(scene.point_size);

        let mut camera = ArcBall::new(Point3::new(2.2, 1.6, 2.2), Point3::origin());
        let font = Font::default();

        info!("Showing '{}', close the window to exit", figure.title);
        while window.render_with_camera(&mut camera) {
            scene.draw(&mut window, &camera, &font);
        }

        Ok(())
    }
}
