mod commands;
mod print;
mod session;
mod setup;

pub use commands::run;
