// src/factories/button_factory.rs

use crate::{
    FactoryError, LinuxButton, MacButton, Platform, WindowsButton,
    ports::{Button, ButtonFactory},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsFactory;

impl ButtonFactory for WindowsFactory {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MacFactory;

impl ButtonFactory for MacFactory {
    fn platform(&self) -> Platform {
        Platform::Darwin
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxFactory;

impl ButtonFactory for LinuxFactory {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LinuxButton)
    }
}

/// Selects the button factory for a platform.
///
/// # Arguments
/// * `platform` - Platform to render buttons for
///
/// # Returns
/// * `Box<dyn ButtonFactory>` - Factory producing only that platform's buttons
pub fn button_factory(platform: Platform) -> Box<dyn ButtonFactory> {
    tracing::debug!(%platform, "selected button factory");
    match platform {
        Platform::Darwin => Box::new(MacFactory),
        Platform::Windows => Box::new(WindowsFactory),
        Platform::Linux => Box::new(LinuxFactory),
    }
}

/// Selects the button factory from an operating system name.
///
/// # Arguments
/// * `os` - OS name such as `"darwin"`, `"windows"` or `"linux"`
///
/// # Returns
/// * `Ok(Box<dyn ButtonFactory>)` - Factory for that OS
/// * `Err(FactoryError::UnsupportedPlatform)` - The name is not recognized
pub fn button_factory_for_os(os: &str) -> Result<Box<dyn ButtonFactory>, FactoryError> {
    let platform = Platform::try_from(os).inspect_err(|_| {
        tracing::warn!(os, "no button factory for operating system");
    })?;
    Ok(button_factory(platform))
}
