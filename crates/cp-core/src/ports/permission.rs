pub trait PermissionPort: Send + Sync {
    /// Whether the process may observe other applications.
    ///
    /// Platforms without such a gate report `true`.
    fn is_accessibility_trusted(&self) -> bool;
}
