pub mod get_navigation;

pub use get_navigation::*;
