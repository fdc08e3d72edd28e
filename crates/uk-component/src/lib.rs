//! Buildable Unikraft components.
//!
//! A component is identified by a [`ComponentConfig`] (name, source,
//! version and user-supplied KConfig overrides) and wrapped by one variant
//! type per [`ComponentType`]. Every variant implements [`Component`], which
//! gives the build pipeline uniform access to identity, option menus and
//! the KConfig flags the component implies.
//!
//! # Example
//!
//! ```
//! use uk_component::{Component, plat::PlatformConfig};
//!
//! let platform = PlatformConfig::parse_short("kvm").unwrap();
//! let flags = platform.configuration_flags().unwrap();
//! assert_eq!(flags.get("CONFIG_PLAT_KVM"), Some("y"));
//! ```

pub mod component;
pub mod config;
pub mod derive;
pub mod error;
pub mod kind;
pub mod plat;
pub mod probe;

pub use component::{Component, parse_short};
pub use config::ComponentConfig;
pub use derive::{convention_symbol, derive_flags, derive_with_probe};
pub use error::{Error, Result};
pub use kind::ComponentType;
pub use plat::PlatformConfig;
pub use probe::{MenuProbe, NoMenu, ProbeError};
