//! Configuration adapters

mod xdg;

pub use xdg::{XdgConfigStore, APP_NAME};
