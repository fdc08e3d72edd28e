//! KConfig flag derivation.
//!
//! The flags a component implies come from its user overrides plus one
//! enablement symbol. The symbol is taken from the component's option menu
//! when that menu declares it, and otherwise follows the Unikraft naming
//! convention (`CONFIG_PLAT_<NAME>`, `CONFIG_ARCH_<NAME>`, `CONFIG_LIB<NAME>`).

use uk_kconfig::{KConfigMenu, KConfigValues, PREFIX, YES};

use crate::component::Component;
use crate::config::ComponentConfig;
use crate::error::{Error, Result};
use crate::kind::ComponentType;
use crate::probe::MenuProbe;

/// Symbol infix used by the naming convention of each kind.
fn convention_infix(kind: ComponentType) -> Option<&'static str> {
    match kind {
        ComponentType::Plat => Some("PLAT_"),
        ComponentType::Arch => Some("ARCH_"),
        ComponentType::Lib => Some("LIB"),
        ComponentType::Core | ComponentType::App => None,
    }
}

/// Build the conventional enablement symbol for a component.
///
/// ASCII alphanumerics of `name` are upper-cased; any other character is
/// replaced by `_` so the result is always a valid KConfig symbol.
///
/// ```
/// use uk_component::{ComponentType, convention_symbol};
///
/// assert_eq!(convention_symbol(ComponentType::Plat, "xen").unwrap(), "CONFIG_PLAT_XEN");
/// assert_eq!(convention_symbol(ComponentType::Lib, "ukdebug").unwrap(), "CONFIG_LIBUKDEBUG");
/// ```
pub fn convention_symbol(kind: ComponentType, name: &str) -> Result<String> {
    let infix = convention_infix(kind)
        .ok_or_else(|| Error::unsupported(kind, "convention-based flag derivation"))?;

    if name.is_empty() {
        return Err(Error::invalid_spec(name, "component name must not be empty"));
    }

    let mut symbol = String::with_capacity(PREFIX.len() + infix.len() + name.len());
    symbol.push_str(PREFIX);
    symbol.push_str(infix);
    symbol.extend(name.chars().map(|c| {
        if c.is_ascii_alphanumeric() {
            c.to_ascii_uppercase()
        } else {
            '_'
        }
    }));
    Ok(symbol)
}

/// Derive the KConfig flags implied by a component.
///
/// The result starts from the component's overrides. The enablement
/// symbol is then set to `y` unless an override already assigns it.
pub fn derive_flags(
    kind: ComponentType,
    component: &ComponentConfig,
    menu: Option<&KConfigMenu>,
) -> Result<KConfigValues> {
    let mut values = component.configuration().clone();
    let convention = convention_symbol(kind, component.name())?;

    let symbol = match menu.and_then(|menu| menu.enablement(&convention)) {
        Some(entry) => {
            tracing::debug!(
                component = component.name(),
                symbol = %entry.symbol,
                "Using enablement symbol from option menu"
            );
            entry.symbol.clone()
        }
        None => {
            tracing::debug!(
                component = component.name(),
                symbol = %convention,
                menu = menu.is_some(),
                "Falling back to naming convention"
            );
            convention
        }
    };

    if !values.set_default(&symbol, YES)? {
        tracing::debug!(
            component = component.name(),
            symbol = %symbol,
            "Enablement symbol overridden by configuration"
        );
    }

    Ok(values)
}

/// Derive flags for `component` using the menu found by `probe`.
///
/// A probe failure aborts derivation with [`Error::MenuProbeFailed`]; only
/// an undetermined menu falls back to the naming convention.
pub fn derive_with_probe(component: &dyn Component, probe: &dyn MenuProbe) -> Result<KConfigValues> {
    let menu = probe
        .probe(component.kind(), component.component())
        .map_err(|source| Error::MenuProbeFailed {
            component: component.name().to_string(),
            source,
        })?;
    derive_flags(component.kind(), component.component(), menu.as_ref())
}
