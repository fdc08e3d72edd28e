//! Integration tests for the platform component

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::{self, Write};
use uk_component::{Component, ComponentType, Error, PlatformConfig, parse_short};
use uk_kconfig::KConfigValues;

#[rstest]
#[case("kvm", "CONFIG_PLAT_KVM")]
#[case("xen", "CONFIG_PLAT_XEN")]
#[case("linuxu", "CONFIG_PLAT_LINUXU")]
#[case("Firecracker", "CONFIG_PLAT_FIRECRACKER")]
fn test_short_syntax_enables_platform(#[case] name: &str, #[case] symbol: &str) {
    let platform = PlatformConfig::parse_short(name).unwrap();
    let flags = platform.configuration_flags().unwrap();

    let entries: Vec<_> = flags.iter().collect();
    assert_eq!(entries, vec![(symbol, "y")]);
}

#[test]
fn test_empty_short_syntax_is_invalid() {
    match PlatformConfig::parse_short("") {
        Err(Error::InvalidSpec { input, reason }) => {
            assert_eq!(input, "");
            assert!(reason.contains("platform name"));
        }
        other => panic!("expected InvalidSpec, got {:?}", other),
    }
}

#[test]
fn test_override_keeps_user_value() {
    let mut overrides = KConfigValues::new();
    overrides.set("CONFIG_PLAT_XEN", "n").unwrap();
    overrides.set("XEN_HVMLITE", "y").unwrap();

    let component = uk_component::ComponentConfig::new("xen")
        .unwrap()
        .with_configuration(overrides);
    let platform = PlatformConfig::from_component(component);
    let flags = platform.configuration_flags().unwrap();

    let entries: Vec<_> = flags.iter().collect();
    assert_eq!(
        entries,
        vec![("CONFIG_PLAT_XEN", "n"), ("CONFIG_XEN_HVMLITE", "y")]
    );
}

#[test]
fn test_unprefixed_override_keeps_user_value() {
    let overrides = KConfigValues::from_pairs([("PLAT_KVM", "n")]).unwrap();
    let platform = PlatformConfig::from_component(
        uk_component::ComponentConfig::new("kvm")
            .unwrap()
            .with_configuration(overrides),
    );

    let flags = platform.configuration_flags().unwrap();
    assert_eq!(flags.len(), 1);
    assert_eq!(flags.get("CONFIG_PLAT_KVM"), Some("n"));
}

#[test]
fn test_derived_flag_follows_overrides() {
    let overrides =
        KConfigValues::from_pairs([("KVM_VMM_QEMU", "y"), ("KVM_DEBUG", "n")]).unwrap();
    let platform = PlatformConfig::from_component(
        uk_component::ComponentConfig::new("kvm")
            .unwrap()
            .with_configuration(overrides),
    );

    let flags = platform.configuration_flags().unwrap();
    let keys: Vec<_> = flags.iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec!["CONFIG_KVM_VMM_QEMU", "CONFIG_KVM_DEBUG", "CONFIG_PLAT_KVM"]
    );
}

#[test]
fn test_configuration_flags_is_deterministic() {
    let overrides = KConfigValues::from_pairs([("B", "2"), ("A", "1")]).unwrap();
    let platform = PlatformConfig::from_component(
        uk_component::ComponentConfig::new("xen")
            .unwrap()
            .with_configuration(overrides),
    );

    let first = platform.configuration_flags().unwrap();
    let second = platform.configuration_flags().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.iter().collect::<Vec<_>>(),
        second.iter().collect::<Vec<_>>()
    );
}

#[test]
fn test_option_menu_is_always_undetermined() {
    for name in ["kvm", "xen", "linuxu"] {
        let platform = PlatformConfig::parse_short(name).unwrap();
        assert!(platform.option_menu().unwrap().is_none());
    }
}

#[test]
fn test_describe_writes_one_unsupported_line() {
    let platform = PlatformConfig::parse_short("kvm").unwrap();
    let mut out = Vec::new();
    platform.describe(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.ends_with('\n'));
    assert!(text.contains("unsupported"));
    assert!(text.contains("kvm"));
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_describe_reports_sink_failure() {
    let platform = PlatformConfig::parse_short("kvm").unwrap();
    let err = platform.describe(&mut BrokenSink).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_components_are_uniform_behind_trait() {
    let components: Vec<Box<dyn Component>> = vec![
        parse_short(ComponentType::Plat, "kvm").unwrap(),
        Box::new(PlatformConfig::parse_short("xen").unwrap()),
    ];

    let names: Vec<_> = components.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["kvm", "xen"]);
    for component in &components {
        assert_eq!(component.kind(), ComponentType::Plat);
        assert_eq!(component.configuration_flags().unwrap().len(), 1);
    }
}

#[rstest]
#[case(ComponentType::Core)]
#[case(ComponentType::Arch)]
#[case(ComponentType::Lib)]
#[case(ComponentType::App)]
fn test_parse_short_without_variant_is_unsupported(#[case] kind: ComponentType) {
    let err = parse_short(kind, "anything").unwrap_err();
    assert!(matches!(err, Error::Unsupported { .. }));
    assert!(err.to_string().contains(kind.as_str()));
}
