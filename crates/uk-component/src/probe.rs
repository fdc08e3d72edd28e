//! Option menu discovery.
//!
//! A [`MenuProbe`] looks for the authoritative option menu of a component,
//! for example by reading the Kconfig sources of its checkout. It has three
//! outcomes: a menu, `None` when the menu is undetermined, or an error when
//! the probe itself broke.

use uk_kconfig::KConfigMenu;

use crate::config::ComponentConfig;
use crate::kind::ComponentType;

/// Error reported by a probe implementation.
pub type ProbeError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Read-only lookup of a component's option menu.
pub trait MenuProbe: Send + Sync {
    /// Look up the menu of `component`.
    ///
    /// `Ok(None)` means the menu could not be determined, which is a normal
    /// outcome; `Err` is reserved for a probe that failed.
    fn probe(
        &self,
        kind: ComponentType,
        component: &ComponentConfig,
    ) -> std::result::Result<Option<KConfigMenu>, ProbeError>;
}

/// Probe that never determines a menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMenu;

impl MenuProbe for NoMenu {
    fn probe(
        &self,
        _kind: ComponentType,
        _component: &ComponentConfig,
    ) -> std::result::Result<Option<KConfigMenu>, ProbeError> {
        Ok(None)
    }
}

/// A known menu answers every probe with itself.
impl MenuProbe for KConfigMenu {
    fn probe(
        &self,
        _kind: ComponentType,
        _component: &ComponentConfig,
    ) -> std::result::Result<Option<KConfigMenu>, ProbeError> {
        Ok(Some(self.clone()))
    }
}
