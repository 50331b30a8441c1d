// src/factories/clothes_factory.rs

use crate::{Brand, FactoryError, Hat, Shirt, ports::ClothesFactory};

/// Nike clothing line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nike;

impl ClothesFactory for Nike {
    fn brand(&self) -> Brand {
        Brand::Nike
    }

    fn produce_shirt(&self) -> Shirt {
        Shirt::new("cotton", "nike-wild-zebra")
    }

    fn produce_hat(&self) -> Hat {
        Hat::new("m", "nike-cap")
    }
}

/// Adidas clothing line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Adidas;

impl ClothesFactory for Adidas {
    fn brand(&self) -> Brand {
        Brand::Adidas
    }

    fn produce_shirt(&self) -> Shirt {
        Shirt::new("cotton", "adidas-three-stripes")
    }

    fn produce_hat(&self) -> Hat {
        Hat::new("m", "adidas-cap")
    }
}

/// Selects the clothes factory for a brand.
pub fn clothes_factory(brand: Brand) -> Box<dyn ClothesFactory> {
    tracing::debug!(%brand, "selected clothes factory");
    match brand {
        Brand::Nike => Box::new(Nike),
        Brand::Adidas => Box::new(Adidas),
    }
}

/// Selects the clothes factory from a brand name.
///
/// # Returns
/// * `Ok(Box<dyn ClothesFactory>)` - Factory for `"nike"` or `"adidas"`
/// * `Err(FactoryError::UnsupportedBrand)` - Any other name
pub fn clothes_factory_named(name: &str) -> Result<Box<dyn ClothesFactory>, FactoryError> {
    let brand = Brand::try_from(name).inspect_err(|_| {
        tracing::warn!(name, "no clothes factory for brand");
    })?;
    Ok(clothes_factory(brand))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nike_hat() {
        let hat = clothes_factory_named("nike").unwrap().produce_hat();
        assert_eq!(hat.hat_type(), "nike-cap");
        assert_eq!(hat.size(), "m");
    }

    #[test]
    fn test_adidas_hat() {
        let hat = clothes_factory_named("adidas").unwrap().produce_hat();
        assert_eq!(hat.hat_type(), "adidas-cap");
        assert_eq!(hat.size(), "m");
    }

    #[test]
    fn test_brands_do_not_mix() {
        let nike = clothes_factory(Brand::Nike);
        let adidas = clothes_factory(Brand::Adidas);

        assert_ne!(nike.produce_hat(), adidas.produce_hat());
        assert_ne!(nike.produce_shirt(), adidas.produce_shirt());
        assert!(nike.produce_shirt().design().starts_with("nike"));
        assert!(adidas.produce_shirt().design().starts_with("adidas"));
    }

    #[test]
    fn test_produce_is_idempotent() {
        let factory = Nike;
        assert_eq!(factory.produce_hat(), factory.produce_hat());
        assert_eq!(factory.produce_shirt(), factory.produce_shirt());
    }

    #[test]
    fn test_unsupported_brand() {
        let result = clothes_factory_named("puma");
        assert!(matches!(
            result,
            Err(FactoryError::UnsupportedBrand(ref name)) if name == "puma"
        ));
    }
}
