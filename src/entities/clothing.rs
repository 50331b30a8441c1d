use std::fmt;

/// Shirt produced by a clothes factory.
///
/// Fields are fixed by the factory that builds it; the setters exist for
/// callers that want to customize a shirt after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shirt {
    material: String,
    design: String,
}

impl Shirt {
    pub fn new<M, D>(material: M, design: D) -> Self
    where
        M: Into<String>,
        D: Into<String>,
    {
        Self {
            material: material.into(),
            design: design.into(),
        }
    }

    /// Returns shirt material.
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Returns shirt design.
    pub fn design(&self) -> &str {
        &self.design
    }

    pub fn set_material<S: Into<String>>(&mut self, material: S) {
        self.material = material.into();
    }

    pub fn set_design<S: Into<String>>(&mut self, design: S) {
        self.design = design.into();
    }
}

impl fmt::Display for Shirt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.design, self.material)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hat {
    size: String,
    hat_type: String,
}

impl Hat {
    pub fn new<S, T>(size: S, hat_type: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            size: size.into(),
            hat_type: hat_type.into(),
        }
    }

    /// Returns hat size.
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Returns hat type.
    pub fn hat_type(&self) -> &str {
        &self.hat_type
    }

    pub fn set_size<S: Into<String>>(&mut self, size: S) {
        self.size = size.into();
    }

    pub fn set_hat_type<S: Into<String>>(&mut self, hat_type: S) {
        self.hat_type = hat_type.into();
    }
}

impl fmt::Display for Hat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (size {})", self.hat_type, self.size)
    }
}
