//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die reinen Geometrie-Funktionen sowie die Verträge zwischen
//! Host, Komponente und Linien-Renderer.

pub mod curve_geometry;
mod line_sink;
pub mod options;
mod rope_scene;

pub use curve_geometry::{quadratic_bezier, sample_quadratic_into, swing_control_point};
pub use line_sink::{LineSink, PolylineBuffer};
pub use options::RopeOptions;
pub use options::{SEGMENTS_DEFAULT, SEGMENTS_MIN};
pub use rope_scene::RopeScene;
