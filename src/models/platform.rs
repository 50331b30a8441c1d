use crate::FactoryError;
use std::fmt;

/// Operating system family a button factory renders for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Darwin,
    Windows,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Self::Darwin, Self::Windows, Self::Linux];

    /// Resolves the platform of the running host.
    ///
    /// This is the only place the host environment is consulted; everything
    /// else takes the platform as an argument.
    pub fn detect() -> Result<Self, FactoryError> {
        Self::from_host_os(std::env::consts::OS)
    }

    /// Resolves an OS name as reported by `std::env::consts::OS`, which
    /// names Darwin `"macos"`.
    pub fn from_host_os(os: &str) -> Result<Self, FactoryError> {
        match os {
            "macos" => Ok(Self::Darwin),
            other => Self::try_from(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Darwin => "darwin",
            Self::Windows => "windows",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Platform {
    type Error = FactoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "darwin" => Ok(Self::Darwin),
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            _ => Err(FactoryError::unsupported_platform(value)),
        }
    }
}
