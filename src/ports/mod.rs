// src/ports/mod.rs

pub use button::{Button, ButtonFactory};
pub use clothes::ClothesFactory;
pub use person::Person;

mod button;
mod clothes;
mod person;
