pub mod config;
pub mod consts;
pub mod crop;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod io;
pub mod pan;
pub mod session;
pub mod viewport;
pub mod zoom;
