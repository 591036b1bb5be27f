pub mod domain;
pub mod navigator;

pub use domain::section::{ScrollRequest, ScrollTarget, SectionId};
pub use navigator::{NavLink, SmoothScrollNavigator};
