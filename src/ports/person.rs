use crate::PersonKind;

/// Product of the person factory method.
pub trait Person: Send + Sync {
    /// Kind this person was built as.
    fn kind(&self) -> PersonKind;

    /// Literal name the person reports for itself.
    fn name(&self) -> &'static str;
}
