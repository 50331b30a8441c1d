// src/factories/mod.rs

mod button_factory;
mod clothes_factory;
mod person_factory;

pub use button_factory::{
    LinuxFactory, MacFactory, WindowsFactory, button_factory, button_factory_for_os,
};
pub use clothes_factory::{Adidas, Nike, clothes_factory, clothes_factory_named};
pub use person_factory::{get_person, person_from_code};
