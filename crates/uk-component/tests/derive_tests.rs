//! Integration tests for flag derivation with option menus and probes

use pretty_assertions::assert_eq;
use uk_component::{
    ComponentConfig, ComponentType, Error, MenuProbe, NoMenu, PlatformConfig, ProbeError,
    derive_flags, derive_with_probe,
};
use uk_kconfig::{KConfigMenu, MenuEntry, OptionType};

struct FailingProbe;

impl MenuProbe for FailingProbe {
    fn probe(
        &self,
        _kind: ComponentType,
        _component: &ComponentConfig,
    ) -> Result<Option<KConfigMenu>, ProbeError> {
        Err("Kconfig sources unreadable".into())
    }
}

fn kvm_menu() -> KConfigMenu {
    [
        MenuEntry::new("PLAT_KVM", OptionType::Bool).with_prompt("KVM guest"),
        MenuEntry::new("KVM_VMM_QEMU", OptionType::Bool),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_undetermined_menu_uses_convention() {
    let platform = PlatformConfig::parse_short("xen").unwrap();
    let flags = derive_with_probe(&platform, &NoMenu).unwrap();

    let entries: Vec<_> = flags.iter().collect();
    assert_eq!(entries, vec![("CONFIG_PLAT_XEN", "y")]);
}

#[test]
fn test_menu_entry_enables_platform() {
    let platform = PlatformConfig::parse_short("kvm").unwrap();
    let flags = derive_with_probe(&platform, &kvm_menu()).unwrap();

    let entries: Vec<_> = flags.iter().collect();
    assert_eq!(entries, vec![("CONFIG_PLAT_KVM", "y")]);
}

#[test]
fn test_menu_without_entry_falls_back_to_convention() {
    let platform = PlatformConfig::parse_short("xen").unwrap();
    let flags = derive_with_probe(&platform, &kvm_menu()).unwrap();

    assert_eq!(flags.len(), 1);
    assert_eq!(flags.get("CONFIG_PLAT_XEN"), Some("y"));
}

#[test]
fn test_non_boolean_menu_entry_does_not_enable() {
    let menu: KConfigMenu = [MenuEntry::new("PLAT_XEN", OptionType::String)]
        .into_iter()
        .collect();
    let component = ComponentConfig::new("xen").unwrap();

    let flags = derive_flags(ComponentType::Plat, &component, Some(&menu)).unwrap();
    assert_eq!(flags.get("CONFIG_PLAT_XEN"), Some("y"));
}

#[test]
fn test_probe_failure_is_not_absence() {
    let platform = PlatformConfig::parse_short("kvm").unwrap();
    match derive_with_probe(&platform, &FailingProbe) {
        Err(Error::MenuProbeFailed { component, source }) => {
            assert_eq!(component, "kvm");
            assert_eq!(source.to_string(), "Kconfig sources unreadable");
        }
        other => panic!("expected MenuProbeFailed, got {:?}", other),
    }
}

#[test]
fn test_derivation_for_other_kinds() {
    let component = ComponentConfig::new("ukdebug").unwrap();
    let flags = derive_flags(ComponentType::Lib, &component, None).unwrap();
    assert_eq!(flags.get("CONFIG_LIBUKDEBUG"), Some("y"));

    let component = ComponentConfig::new("x86_64").unwrap();
    let flags = derive_flags(ComponentType::Arch, &component, None).unwrap();
    assert_eq!(flags.get("CONFIG_ARCH_X86_64"), Some("y"));

    let err = derive_flags(ComponentType::App, &component, None).unwrap_err();
    assert!(matches!(err, Error::Unsupported { .. }));
}
