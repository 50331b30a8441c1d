use factory_kit::{DemoConfig, FactoryError, application::run_button_drawer, logging};

fn main() -> Result<(), FactoryError> {
    logging::init();

    // More platforms only means more factories; this client stays the same.
    run_button_drawer(&DemoConfig::default(), &mut std::io::stdout().lock())
}
