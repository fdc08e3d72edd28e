//! Error types for uk-component

use crate::kind::ComponentType;
use crate::probe::ProbeError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input that does not identify a component.
    #[error("invalid component specification {input:?}: {reason}")]
    InvalidSpec { input: String, reason: String },

    /// The option menu probe failed; this is not the same as "no menu".
    #[error("failed to probe option menu for component '{component}': {source}")]
    MenuProbeFailed {
        component: String,
        #[source]
        source: ProbeError,
    },

    /// A capability the component kind does not implement.
    #[error("{capability} is not supported for {kind} components")]
    Unsupported {
        kind: ComponentType,
        capability: String,
    },

    #[error(transparent)]
    KConfig(#[from] uk_kconfig::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_spec(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(kind: ComponentType, capability: impl Into<String>) -> Self {
        Self::Unsupported {
            kind,
            capability: capability.into(),
        }
    }
}
