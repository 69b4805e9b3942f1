//! Core engine types: entity ids, items, inventories, RNG.
//!
//! This module contains the fundamental building blocks shared by every
//! layer above it. Nothing here knows about rooms, sessions, or persistence.

pub mod entity;
pub mod inventory;
pub mod item;
pub mod rng;

pub use entity::{GameId, ItemId, PlayerId, PuzzleId, RoomId};
pub use inventory::Inventory;
pub use item::{Item, ItemState};
pub use rng::{GameRng, GameRngState};
