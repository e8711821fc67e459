// API handlers, one module per route group.

pub mod keywords;
pub mod rankings;
pub mod status;
pub mod update;
