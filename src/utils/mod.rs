pub mod launcher;
pub mod loader;

pub use launcher::*;
pub use loader::*;
