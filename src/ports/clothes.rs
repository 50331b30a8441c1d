use crate::{Brand, Hat, Shirt};

/// Abstract factory producing one brand's clothing line.
///
/// Implementations must only hand out products of their own brand.
pub trait ClothesFactory: Send + Sync {
    fn brand(&self) -> Brand;

    fn produce_shirt(&self) -> Shirt;

    fn produce_hat(&self) -> Hat;
}
