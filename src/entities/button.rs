use crate::ports::Button;

/// Renders only on Windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowsButton;

impl Button for WindowsButton {
    fn tag(&self) -> &'static str {
        "[Windows button]"
    }
}

/// Renders only on macOS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacButton;

impl Button for MacButton {
    fn tag(&self) -> &'static str {
        "[macOS button]"
    }
}

/// Renders only on Linux.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinuxButton;

impl Button for LinuxButton {
    fn tag(&self) -> &'static str {
        "[Linux button]"
    }
}
