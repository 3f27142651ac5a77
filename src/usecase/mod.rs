//! Usecase layer: application workflows + events.

pub mod calculate;
pub mod event;
pub mod inspect;
pub mod stats;
