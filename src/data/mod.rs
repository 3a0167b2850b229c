pub mod load_errors;
pub mod trajectory_loader;

pub use load_errors::LoadError;
pub use trajectory_loader::TrajectoryLoader;
