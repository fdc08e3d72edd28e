//! The component contract shared by every component kind.

use std::fmt;
use std::io::Write;

use uk_kconfig::{KConfigMenu, KConfigValues};

use crate::config::ComponentConfig;
use crate::error::{Error, Result};
use crate::kind::ComponentType;
use crate::plat::PlatformConfig;

/// Trait for buildable components.
///
/// Generic pipeline code works against this trait so that platforms,
/// libraries and architectures can be handled the same way.
pub trait Component: fmt::Debug + Send + Sync {
    /// Returns the component's name (e.g., "kvm", "xen")
    fn name(&self) -> &str {
        self.component().name()
    }

    /// Returns where the component comes from; may be empty.
    fn source(&self) -> &str {
        self.component().source()
    }

    /// Returns the requested version; may be empty.
    fn version(&self) -> &str {
        self.component().version()
    }

    /// Returns the component kind. Fixed per implementing type.
    fn kind(&self) -> ComponentType;

    /// Returns the identity record.
    fn component(&self) -> &ComponentConfig;

    /// Look up the component's option menu.
    ///
    /// `Ok(None)` means undetermined and is not a failure.
    fn option_menu(&self) -> Result<Option<KConfigMenu>>;

    /// KConfig flags implied by this component, overrides included.
    fn configuration_flags(&self) -> Result<KConfigValues>;

    /// Write a human-readable description of the component to `sink`.
    fn describe(&self, sink: &mut dyn Write) -> Result<()>;
}

/// Parse the short syntax of a component of the given kind.
///
/// Only kinds with a variant type can be parsed; the others fail with
/// [`Error::Unsupported`].
pub fn parse_short(kind: ComponentType, value: &str) -> Result<Box<dyn Component>> {
    match kind {
        ComponentType::Plat => Ok(Box::new(PlatformConfig::parse_short(value)?)),
        ComponentType::Core | ComponentType::Arch | ComponentType::Lib | ComponentType::App => {
            Err(Error::unsupported(kind, "short syntax parsing"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_platform() {
        let component = parse_short(ComponentType::Plat, "xen").unwrap();
        assert_eq!(component.kind(), ComponentType::Plat);
        assert_eq!(component.name(), "xen");
    }

    #[test]
    fn test_parse_short_unsupported_kind() {
        let err = parse_short(ComponentType::Lib, "ukdebug").unwrap_err();
        assert!(matches!(
            err,
            Error::Unsupported {
                kind: ComponentType::Lib,
                ..
            }
        ));
    }
}
