pub mod session;

pub use session::{PageSession, PageView};
