use crate::{
    Brand, FactoryError, Hat, Shirt,
    factories::{clothes_factory, clothes_factory_named},
    ports::ClothesFactory,
};

/// One shirt and one hat from the same brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outfit {
    pub brand: Brand,
    pub shirt: Shirt,
    pub hat: Hat,
}

/// Client of the clothes abstract factory.
pub struct Wardrobe {
    factory: Box<dyn ClothesFactory>,
}

impl Wardrobe {
    pub fn new(factory: Box<dyn ClothesFactory>) -> Self {
        Self { factory }
    }

    pub fn for_brand(brand: Brand) -> Self {
        Self::new(clothes_factory(brand))
    }

    pub fn named(name: &str) -> Result<Self, FactoryError> {
        Ok(Self::new(clothes_factory_named(name)?))
    }

    pub fn brand(&self) -> Brand {
        self.factory.brand()
    }

    pub fn hat(&self) -> Hat {
        self.factory.produce_hat()
    }

    pub fn shirt(&self) -> Shirt {
        self.factory.produce_shirt()
    }

    pub fn outfit(&self) -> Outfit {
        Outfit {
            brand: self.brand(),
            shirt: self.shirt(),
            hat: self.hat(),
        }
    }
}
