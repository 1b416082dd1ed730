//! Core-Domänentypen: Schwungwinkel und Charakter-Rahmen.

pub mod character;
pub mod swing;

pub use character::CharacterFrame;
pub use swing::SwingState;
