pub mod access;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod viewer;
