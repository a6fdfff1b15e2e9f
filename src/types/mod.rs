pub mod config;
pub mod profile;
pub mod role;
pub mod scoring;
