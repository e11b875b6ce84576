use cp_core::ports::PermissionPort;

/// Accessibility trust of the running process.
#[derive(Debug, Default)]
pub struct AccessibilityPermission;

impl AccessibilityPermission {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "macos")]
impl PermissionPort for AccessibilityPermission {
    fn is_accessibility_trusted(&self) -> bool {
        #[link(name = "ApplicationServices", kind = "framework")]
        extern "C" {
            fn AXIsProcessTrusted() -> bool;
        }
        unsafe { AXIsProcessTrusted() }
    }
}

#[cfg(not(target_os = "macos"))]
impl PermissionPort for AccessibilityPermission {
    fn is_accessibility_trusted(&self) -> bool {
        true
    }
}
