pub mod content_registry;

pub use content_registry::ContentRegistry;
