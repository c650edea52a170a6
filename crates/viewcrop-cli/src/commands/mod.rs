pub mod config;
pub mod crop;
pub mod frame;
pub mod info;
