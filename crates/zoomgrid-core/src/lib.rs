pub mod compose;
pub mod config;
pub mod consts;
pub mod draw;
pub mod error;
pub mod grid;
pub mod io;
pub mod state;
pub mod viewer;
pub mod viewport;
