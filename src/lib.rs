pub mod banner;
pub mod config;
pub mod consts;
pub mod error;
pub mod problem;
pub mod scratch;
pub mod server;
pub mod solver;
pub mod template;
