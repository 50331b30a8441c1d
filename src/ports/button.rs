use crate::Platform;
use std::io::Write;

/// A button that knows how to draw itself.
pub trait Button: Send + Sync {
    /// Literal text the button renders as.
    fn tag(&self) -> &'static str;

    fn draw(&self, out: &mut dyn Write) -> std::io::Result<()> {
        out.write_all(self.tag().as_bytes())
    }
}

/// Abstract factory for one platform's family of widgets.
pub trait ButtonFactory: Send + Sync {
    fn platform(&self) -> Platform;

    fn create_button(&self) -> Box<dyn Button>;
}
