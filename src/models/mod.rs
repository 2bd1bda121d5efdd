// Module exports for models

pub mod activity;
pub mod assignment;
pub mod schedule;
pub mod settings;
