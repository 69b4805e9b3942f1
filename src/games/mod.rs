//! Playable game definitions.
//!
//! The engine itself is data-driven; this module holds what ships in
//! the box. [`build_default_game`] is the facility the session manager
//! falls back to whenever no save file is available.

pub mod nexus;

pub use nexus::build_default_game;
