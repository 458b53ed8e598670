pub mod board;
pub mod board_dump;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod layout;
pub mod render;
pub mod scene;
pub mod seed;
pub mod selection;
pub mod store;
pub mod theme;
pub mod visibility;

#[cfg(feature = "cli")]
pub use cli::run;
