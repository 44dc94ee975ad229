//! # clipdeck-entity
//!
//! Domain entity models for the ClipDeck material library. Row types
//! derive `sqlx::FromRow`; derived tree types are plain values rebuilt
//! from rows on every change.

pub mod folder;
pub mod material;
pub mod picker;

pub use clipdeck_core::types::MaterialType;
