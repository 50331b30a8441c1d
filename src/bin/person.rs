use factory_kit::{DemoConfig, FactoryError, application::run_person, logging};

fn main() -> Result<(), FactoryError> {
    logging::init();
    run_person(&DemoConfig::default(), &mut std::io::stdout().lock())
}
