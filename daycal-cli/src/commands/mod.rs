pub mod check;
pub mod config;
pub mod day;
pub mod week;
