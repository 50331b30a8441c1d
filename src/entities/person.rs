use crate::{PersonKind, ports::Person};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Villager;

impl Person for Villager {
    fn kind(&self) -> PersonKind {
        PersonKind::Villager
    }

    fn name(&self) -> &'static str {
        "villager"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metropolitan;

impl Person for Metropolitan {
    fn kind(&self) -> PersonKind {
        PersonKind::Metropolitan
    }

    fn name(&self) -> &'static str {
        "metropolitan"
    }
}

/// Formats the line a client prints for a person, e.g. `Villager, I am a villager`.
pub fn describe(person: &dyn Person) -> String {
    format!("{:?}, I am a {}", person.kind(), person.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_kind() {
        assert_eq!(Villager.name(), Villager.kind().as_str());
        assert_eq!(Metropolitan.name(), Metropolitan.kind().as_str());
        assert_ne!(Villager.name(), Metropolitan.name());
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&Villager), "Villager, I am a villager");
        assert_eq!(describe(&Metropolitan), "Metropolitan, I am a metropolitan");
    }
}
