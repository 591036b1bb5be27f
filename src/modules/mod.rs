pub mod contact;
pub mod content;
pub mod navigation;
pub mod page;
pub mod theme;
