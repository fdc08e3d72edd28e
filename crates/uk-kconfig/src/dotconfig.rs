//! `.config` text for KConfig value sets.
//!
//! The format is the one written by the Kconfig tooling:
//!
//! ```text
//! CONFIG_PLAT_KVM=y
//! # CONFIG_PLAT_XEN is not set
//! CONFIG_STACK_SIZE_PAGE_ORDER=4
//! CONFIG_UK_NAME="helloworld"
//! ```

use crate::error::{Error, Result};
use crate::values::{KConfigValues, validate_symbol};
use crate::{MODULE, NO, PREFIX, YES};

const NOT_SET_SUFFIX: &str = " is not set";

impl KConfigValues {
    /// Render the set as `.config` text, one line per assignment in
    /// insertion order.
    pub fn to_dotconfig(&self) -> String {
        let mut out = String::new();
        for (symbol, value) in self.iter() {
            out.push_str(&render_line(symbol, value));
            out.push('\n');
        }
        out
    }

    /// Parse `.config` text.
    ///
    /// Blank lines and comments other than `# CONFIG_X is not set` are
    /// skipped.
    pub fn from_dotconfig(text: &str) -> Result<Self> {
        let mut values = KConfigValues::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(comment) = line.strip_prefix('#') {
                let comment = comment.trim();
                if let Some(symbol) = comment.strip_suffix(NOT_SET_SUFFIX) {
                    if symbol.starts_with(PREFIX) {
                        values.set(symbol, NO)?;
                    }
                }
                continue;
            }

            let malformed = || Error::ParseLine {
                line: idx + 1,
                content: raw.to_string(),
            };

            let (symbol, value) = line.split_once('=').ok_or_else(malformed)?;
            let symbol = symbol.trim();
            if !symbol.starts_with(PREFIX) || validate_symbol(symbol).is_err() {
                return Err(malformed());
            }
            values.set(symbol, unquote(value.trim()).ok_or_else(malformed)?)?;
        }

        Ok(values)
    }
}

fn render_line(symbol: &str, value: &str) -> String {
    if value == NO {
        format!("# {symbol}{NOT_SET_SUFFIX}")
    } else if is_bare(value) {
        format!("{symbol}={value}")
    } else {
        format!("{symbol}=\"{}\"", escape(value))
    }
}

/// Values that `.config` writes without quotes.
fn is_bare(value: &str) -> bool {
    if value == YES || value == MODULE {
        return true;
    }
    if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Escape a string value so it stays on one line.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Strip quotes and escapes from a `.config` value. Returns `None` for an
/// unterminated string.
fn unquote(value: &str) -> Option<String> {
    let Some(inner) = value.strip_prefix('"') else {
        return Some(value.to_string());
    };
    let inner = inner.strip_suffix('"')?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next()? {
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                other => out.push(other),
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bare() {
        assert!(is_bare("y"));
        assert!(is_bare("m"));
        assert!(is_bare("42"));
        assert!(is_bare("-1"));
        assert!(is_bare("0x1000"));
        assert!(!is_bare("0x"));
        assert!(!is_bare(""));
        assert!(!is_bare("kvm"));
    }

    #[test]
    fn test_escape_and_unquote() {
        let escaped = escape(r#"say "hi" \o/"#);
        assert_eq!(escaped, r#"say \"hi\" \\o/"#);
        assert_eq!(
            unquote(&format!("\"{escaped}\"")).as_deref(),
            Some(r#"say "hi" \o/"#)
        );
        assert_eq!(unquote("\"open"), None);
    }

    #[test]
    fn test_escape_control_characters() {
        let escaped = escape("x\nCONFIG_EVIL=y\r\tz");
        assert_eq!(escaped, r"x\nCONFIG_EVIL=y\r\tz");
        assert!(!escaped.contains('\n'));
        assert_eq!(
            unquote(&format!("\"{escaped}\"")).as_deref(),
            Some("x\nCONFIG_EVIL=y\r\tz")
        );
        assert_eq!(unquote(r#""a\\nb""#).as_deref(), Some(r"a\nb"));
    }
}
