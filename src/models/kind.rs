use crate::FactoryError;
use std::fmt;

/// Kind of person the factory method builds. Discriminants are the
/// integer codes accepted by [`crate::factories::person_from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PersonKind {
    Villager = 0,
    Metropolitan = 1,
}

impl PersonKind {
    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Villager => "villager",
            Self::Metropolitan => "metropolitan",
        }
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for PersonKind {
    type Error = FactoryError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Villager),
            1 => Ok(Self::Metropolitan),
            _ => Err(FactoryError::invalid_kind(value)),
        }
    }
}

impl TryFrom<&str> for PersonKind {
    type Error = FactoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "villager" => Ok(Self::Villager),
            "metropolitan" => Ok(Self::Metropolitan),
            _ => Err(FactoryError::invalid_kind(value)),
        }
    }
}
