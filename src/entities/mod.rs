pub mod button;
pub mod clothing;
pub mod person;

pub use button::*;
pub use clothing::*;
pub use person::*;
