pub mod config;
pub mod item;
pub mod session;

pub use config::*;
pub use item::*;
pub use session::*;
