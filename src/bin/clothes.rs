use factory_kit::{DemoConfig, FactoryError, application::run_clothes, logging};

fn main() -> Result<(), FactoryError> {
    logging::init();
    run_clothes(&DemoConfig::default(), &mut std::io::stdout().lock())
}
