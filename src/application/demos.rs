//! Entry points of the demo binaries, written against any output sink.

use crate::{
    DemoConfig, FactoryError, describe,
    application::{ButtonDrawer, Wardrobe},
    factories::person_from_code,
};
use std::io::Write;

/// Draws one button for the configured (or host) platform, then a newline.
pub fn run_button_drawer<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), FactoryError> {
    let drawer = ButtonDrawer::from_config(config)?;
    drawer.draw(out)?;
    writeln!(out)?;
    Ok(())
}

/// Prints one hat per configured brand, in order, one per line.
pub fn run_clothes<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), FactoryError> {
    for brand in config.resolve_brands()? {
        let hat = Wardrobe::for_brand(brand).hat();
        writeln!(out, "{hat}")?;
    }
    Ok(())
}

/// Builds the configured person through its kind code and prints it.
pub fn run_person<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), FactoryError> {
    let folk = person_from_code(config.resolve_person()?.code())?;
    writeln!(out, "{}", describe(folk.as_ref()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output<F>(run: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), FactoryError>,
    {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_button_drawer_prints_tag_and_newline() {
        let config = DemoConfig::default().with_platform("windows");
        let printed = output(|out| run_button_drawer(&config, out));
        assert_eq!(printed, "[Windows button]\n");
    }

    #[test]
    fn test_button_drawer_unsupported_platform_prints_nothing() {
        let config = DemoConfig::default().with_platform("amiga");
        let mut out = Vec::new();
        let result = run_button_drawer(&config, &mut out);

        assert!(matches!(result, Err(FactoryError::UnsupportedPlatform(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_clothes_prints_nike_then_adidas() {
        let printed = output(|out| run_clothes(&DemoConfig::default(), out));
        assert_eq!(printed, "nike-cap (size m)\nadidas-cap (size m)\n");
    }

    #[test]
    fn test_clothes_unknown_brand_prints_nothing() {
        let config = DemoConfig {
            brands: vec!["nike".to_string(), "fila".to_string()],
            ..DemoConfig::default()
        };
        let mut out = Vec::new();
        let result = run_clothes(&config, &mut out);

        assert!(matches!(result, Err(FactoryError::UnsupportedBrand(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_person_prints_villager() {
        let printed = output(|out| run_person(&DemoConfig::default(), out));
        assert_eq!(printed, "Villager, I am a villager\n");
    }

    #[test]
    fn test_person_metropolitan() {
        let config = DemoConfig {
            person: "metropolitan".to_string(),
            ..DemoConfig::default()
        };
        let printed = output(|out| run_person(&config, out));
        assert_eq!(printed, "Metropolitan, I am a metropolitan\n");
    }
}
