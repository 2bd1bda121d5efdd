// Service module exports

pub mod assignment;
pub mod catalog;
pub mod drag;
pub mod grid;
pub mod settings;
pub mod time_slots;
