//! Seil-Komponente: schwingende quadratische Bézier-Kurve.
//!
//! Pro Tick läuft:
//! 1. Referenz-Prüfung — fehlt ein Haltepunkt oder der Charakter-Rahmen,
//!    wird der komplette Tick mit Warnung übersprungen.
//! 2. Schwungwinkel-Akkumulation (`delta_time * swing_speed`, Wrap bei 2π).
//! 3. Kontrollpunkt-Berechnung und Kurven-Abtastung.
//! 4. Positions-Schreibzugriffe in die Linien-Senke.
//!
//! `set_phase` erlaubt einem Animations-System, den Zyklus jederzeit zu
//! synchronisieren (typisch aus einem Animations-Event vor dem Tick
//! desselben Frames).
//!
//! Aufgeteilt in:
//! - `controller` — Zustand, Konstruktor, Tick- und Sync-Einstiegspunkte

mod controller;

pub use controller::RopeController;
