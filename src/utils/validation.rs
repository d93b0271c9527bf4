use crate::utils::error::{ProcessorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A missing required value is a usage error: the caller never supplied it.
pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| {
        tracing::debug!("Required field '{}' is missing", field_name);
        ProcessorError::Usage
    })
}
