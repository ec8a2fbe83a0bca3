pub mod answers;
pub mod bot;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use bot::run;
