pub mod domain;
pub mod theme_state;

pub use domain::theme_mode::ThemeMode;
pub use theme_state::ThemeState;
