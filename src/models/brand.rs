use crate::FactoryError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    Nike,
    Adidas,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Self::Nike, Self::Adidas];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nike => "nike",
            Self::Adidas => "adidas",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Brand {
    type Error = FactoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "nike" => Ok(Self::Nike),
            "adidas" => Ok(Self::Adidas),
            _ => Err(FactoryError::unsupported_brand(value)),
        }
    }
}
