pub mod brand;
pub mod config;
pub mod kind;
pub mod platform;

pub use brand::*;
pub use config::*;
pub use kind::*;
pub use platform::*;
