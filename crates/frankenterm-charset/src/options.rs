//! Caller policy for bulk conversions.
//!
//! The codecs only report failures. Whether a failure aborts the conversion
//! or is papered over with a replacement is decided here, by the caller.

/// Environment variable: `strict` or `lenient`.
const ENV_CODEC_MODE: &str = "FRANKENTERM_CODEC_MODE";
/// Environment variable: replacement character, literal or `U+XXXX`.
const ENV_CODEC_REPLACEMENT: &str = "FRANKENTERM_CODEC_REPLACEMENT";

/// What a bulk conversion does with an input it cannot convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorMode {
    /// Stop and report the position of the first failure.
    #[default]
    Strict,
    /// Substitute a replacement and keep going.
    Lenient,
}

impl ErrorMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "lenient" | "lossy" | "replace" => Some(Self::Lenient),
            _ => None,
        }
    }
}

/// Options shared by every bulk conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub mode: ErrorMode,
    /// Substituted for undecodable input, and for unencodable characters
    /// when the target charset can hold it.
    pub replacement: char,
    /// Substituted for unencodable characters when the target charset
    /// cannot hold `replacement` either.
    pub replacement_byte: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::STRICT
    }
}

impl ConvertOptions {
    pub const STRICT: Self = Self {
        mode: ErrorMode::Strict,
        replacement: char::REPLACEMENT_CHARACTER,
        replacement_byte: b'?',
    };

    pub const LENIENT: Self = Self {
        mode: ErrorMode::Lenient,
        ..Self::STRICT
    };

    #[must_use]
    pub const fn with_mode(mut self, mode: ErrorMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_replacement(mut self, replacement: char) -> Self {
        self.replacement = replacement;
        self
    }

    #[must_use]
    pub const fn with_replacement_byte(mut self, byte: u8) -> Self {
        self.replacement_byte = byte;
        self
    }

    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.mode, ErrorMode::Strict)
    }

    /// Read options from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read options through a custom environment lookup (for tests).
    /// Unset or unparseable variables keep the [`STRICT`](Self::STRICT) value.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        if let Some(mode) = get_env(ENV_CODEC_MODE).and_then(|v| ErrorMode::parse(&v)) {
            options.mode = mode;
        }
        if let Some(ch) = get_env(ENV_CODEC_REPLACEMENT).and_then(|v| parse_replacement(&v)) {
            options.replacement = ch;
        }
        options
    }

    /// Serialize options to JSON (for diagnostics logs).
    #[must_use]
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"mode":"{}","replacement":"U+{:04X}","replacement_byte":{}}}"#,
            self.mode.as_str(),
            u32::from(self.replacement),
            self.replacement_byte
        )
    }
}

/// A single character, or `U+XXXX` hex notation.
fn parse_replacement(value: &str) -> Option<char> {
    let value = value.trim();
    if let Some(hex) = value
        .strip_prefix("U+")
        .or_else(|| value.strip_prefix("u+"))
    {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key| map.get(key).map(|v| (*v).to_string())
    }

    #[test]
    fn defaults_are_strict_with_standard_replacements() {
        let options = ConvertOptions::default();
        assert!(options.is_strict());
        assert_eq!(options.replacement, '\u{FFFD}');
        assert_eq!(options.replacement_byte, b'?');
        assert!(!ConvertOptions::LENIENT.is_strict());
    }

    #[test]
    fn builders() {
        let options = ConvertOptions::STRICT
            .with_mode(ErrorMode::Lenient)
            .with_replacement('?')
            .with_replacement_byte(b'_');
        assert_eq!(options.mode, ErrorMode::Lenient);
        assert_eq!(options.replacement, '?');
        assert_eq!(options.replacement_byte, b'_');
    }

    #[test]
    fn env_sets_mode_and_replacement() {
        let options = ConvertOptions::from_env_with(env(&[
            (ENV_CODEC_MODE, "Lenient"),
            (ENV_CODEC_REPLACEMENT, "U+3013"),
        ]));
        assert_eq!(options.mode, ErrorMode::Lenient);
        assert_eq!(options.replacement, '\u{3013}');

        let options = ConvertOptions::from_env_with(env(&[(ENV_CODEC_REPLACEMENT, "*")]));
        assert_eq!(options.replacement, '*');
    }

    #[test]
    fn env_garbage_keeps_defaults() {
        let options = ConvertOptions::from_env_with(env(&[
            (ENV_CODEC_MODE, "sometimes"),
            (ENV_CODEC_REPLACEMENT, "ab"),
        ]));
        assert_eq!(options, ConvertOptions::STRICT);

        let options = ConvertOptions::from_env_with(env(&[(ENV_CODEC_REPLACEMENT, "U+D800")]));
        assert_eq!(options.replacement, char::REPLACEMENT_CHARACTER);
        assert_eq!(ConvertOptions::from_env_with(|_| None), ConvertOptions::default());
    }

    #[test]
    fn mode_parse_round_trips() {
        for mode in [ErrorMode::Strict, ErrorMode::Lenient] {
            assert_eq!(ErrorMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn diagnostics_json() {
        assert_eq!(
            ConvertOptions::LENIENT.to_json(),
            r#"{"mode":"lenient","replacement":"U+FFFD","replacement_byte":63}"#
        );
    }
}
