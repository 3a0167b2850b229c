pub mod figure;
pub mod plotter;
pub mod window;

pub use figure::{Axes3D, Color, Figure, LegendEntry, Line3D, Scatter3D};
pub use plotter::{FigureRenderer, OrbitPlotter};
pub use window::WindowRenderer;
