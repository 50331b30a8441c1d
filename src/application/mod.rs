mod button_drawer;
pub mod demos;
mod wardrobe;

pub use button_drawer::ButtonDrawer;
pub use demos::{run_button_drawer, run_clothes, run_person};
pub use wardrobe::{Outfit, Wardrobe};
