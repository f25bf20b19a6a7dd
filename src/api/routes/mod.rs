pub mod draft;
pub mod rankings;
pub mod settings;
