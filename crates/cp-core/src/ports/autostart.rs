use crate::ports::errors::AutostartError;

/// Login item registration.
pub trait AutostartPort: Send + Sync {
    fn is_enabled(&self) -> Result<bool, AutostartError>;
    fn enable(&self) -> Result<(), AutostartError>;
    fn disable(&self) -> Result<(), AutostartError>;
}
