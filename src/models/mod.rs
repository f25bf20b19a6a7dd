//! Core data models for the draft assistant.

mod board;
mod draft;
mod ids;
mod league;
pub(crate) mod player;
mod position;
mod settings;

pub use board::*;
pub use draft::*;
pub use ids::*;
pub use league::*;
pub use player::*;
pub use position::*;
pub use settings::*;
