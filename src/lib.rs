//! Seil-Schwung-Komponente.
//!
//! Berechnet pro Frame eine quadratische Bézier-Kurve zwischen zwei
//! Haltepunkten (Hände), deren Kontrollpunkt auf einer Kreisbahn um die
//! Rechts-Achse des Charakters schwingt, und schreibt die abgetasteten
//! Punkte in eine Linien-Senke.

pub mod core;
pub mod rope;
pub mod shared;

pub use core::{CharacterFrame, SwingState};
pub use rope::RopeController;
pub use shared::{
    quadratic_bezier, sample_quadratic_into, swing_control_point, LineSink, PolylineBuffer,
    RopeOptions, RopeScene,
};
