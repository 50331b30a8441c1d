use crate::{
    DemoConfig, FactoryError, Platform,
    factories::{button_factory, button_factory_for_os},
    ports::ButtonFactory,
};
use std::io::Write;

/// Client of the button abstract factory.
///
/// The drawer never names a concrete button type: it is handed a factory
/// once and asks it for buttons. Supporting another platform means adding a
/// factory, not touching this code.
pub struct ButtonDrawer {
    factory: Box<dyn ButtonFactory>,
}

impl ButtonDrawer {
    pub fn new(factory: Box<dyn ButtonFactory>) -> Self {
        Self { factory }
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self::new(button_factory(platform))
    }

    pub fn from_os(os: &str) -> Result<Self, FactoryError> {
        Ok(Self::new(button_factory_for_os(os)?))
    }

    /// Builds a drawer for the configured platform, or the host's when the
    /// config leaves it unset.
    pub fn from_config(config: &DemoConfig) -> Result<Self, FactoryError> {
        Ok(Self::for_platform(config.resolve_platform()?))
    }

    pub fn platform(&self) -> Platform {
        self.factory.platform()
    }

    /// Creates one button and draws it to `out`.
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<(), FactoryError> {
        let button = self.factory.create_button();
        tracing::debug!(platform = %self.platform(), tag = button.tag(), "drawing button");
        button.draw(out)?;
        Ok(())
    }
}
