//! Artifact planning, persistence and the save coordinator.

pub mod artifact;
pub mod memory;
#[cfg(not(target_family = "wasm"))]
pub mod native;
pub mod save;
pub mod writer;
