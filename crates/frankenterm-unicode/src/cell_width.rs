//! Terminal cell width of a single code point.
//!
//! Combines the width, combining, and emoji classifiers into the number of
//! columns a renderer should advance. Ambiguous-width and emoji handling
//! vary between terminals and fonts, so both are controlled by a
//! [`WidthPolicy`] supplied by the caller.

use crate::combining::{CombiningClass, combining_class};
use crate::properties::is_emoji;
use crate::width::{WidthClass, width_class};

/// Environment variable: treat ambiguous-width characters as double width.
const ENV_CJK_WIDTH: &str = "FRANKENTERM_CJK_WIDTH";
/// Environment variable: draw emoji presentation characters two cells wide.
const ENV_EMOJI_WIDE: &str = "FRANKENTERM_EMOJI_WIDE";

/// Caller policy for the context-dependent width classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthPolicy {
    /// Render [`WidthClass::Ambiguous`] in two cells (East Asian locales).
    pub ambiguous_wide: bool,
    /// Render emoji presentation characters in two cells.
    pub emoji_wide: bool,
}

impl Default for WidthPolicy {
    fn default() -> Self {
        Self::WESTERN
    }
}

impl WidthPolicy {
    /// Ambiguous characters narrow, emoji wide.
    pub const WESTERN: Self = Self {
        ambiguous_wide: false,
        emoji_wide: true,
    };

    /// Ambiguous characters wide, emoji wide.
    pub const CJK: Self = Self {
        ambiguous_wide: true,
        emoji_wide: true,
    };

    /// Read the policy from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read the policy through a custom environment lookup (for tests).
    /// Unset or unparseable variables keep the [`WESTERN`](Self::WESTERN) value.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut policy = Self::default();
        if let Some(value) = env_override_bool(&get_env, ENV_CJK_WIDTH) {
            policy.ambiguous_wide = value;
        }
        if let Some(value) = env_override_bool(&get_env, ENV_EMOJI_WIDE) {
            policy.emoji_wide = value;
        }
        policy
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_override_bool<F>(get_env: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    get_env(key).and_then(|value| parse_bool(&value))
}

/// Columns occupied by `cp` under `policy`: 0, 1, or 2.
///
/// C0/C1 controls and nonspacing marks take no cells. Spacing marks take
/// one. Emoji take two unless the policy narrows them. Otherwise the East
/// Asian Width decides, with ambiguous characters following the policy.
#[must_use]
pub fn cell_width(cp: u32, policy: &WidthPolicy) -> usize {
    if cp < 0x20 || (0x7F..=0x9F).contains(&cp) {
        return 0;
    }
    match combining_class(cp) {
        CombiningClass::Nonspacing => return 0,
        CombiningClass::Spacing => return 1,
        CombiningClass::None => {}
    }
    if is_emoji(cp) {
        return if policy.emoji_wide { 2 } else { 1 };
    }
    match width_class(cp) {
        WidthClass::Fullwidth | WidthClass::Wide => 2,
        WidthClass::Ambiguous if policy.ambiguous_wide => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn get_env<'a>(
        map: &'a HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| map.get(key).map(|v| (*v).to_string())
    }

    #[test]
    fn controls_take_no_cells() {
        let policy = WidthPolicy::default();
        assert_eq!(cell_width(0x00, &policy), 0);
        assert_eq!(cell_width(0x1B, &policy), 0);
        assert_eq!(cell_width(0x7F, &policy), 0);
        assert_eq!(cell_width(0x9F, &policy), 0);
        assert_eq!(cell_width(0xA0, &policy), 1);
    }

    #[test]
    fn narrow_wide_and_marks() {
        let policy = WidthPolicy::default();
        assert_eq!(cell_width('a' as u32, &policy), 1);
        assert_eq!(cell_width(0x4E2D, &policy), 2);
        assert_eq!(cell_width(0xFF21, &policy), 2);
        assert_eq!(cell_width(0xFF71, &policy), 1);
        assert_eq!(cell_width(0x0301, &policy), 0);
        assert_eq!(cell_width(0x0903, &policy), 1);
    }

    #[test]
    fn ambiguous_follows_policy() {
        assert_eq!(cell_width(0x03B1, &WidthPolicy::WESTERN), 1);
        assert_eq!(cell_width(0x03B1, &WidthPolicy::CJK), 2);
        assert_eq!(cell_width(0x2500, &WidthPolicy::CJK), 2);
    }

    #[test]
    fn emoji_follow_policy_and_modifiers_collapse() {
        let narrow = WidthPolicy {
            emoji_wide: false,
            ..WidthPolicy::WESTERN
        };
        assert_eq!(cell_width(0x1F600, &WidthPolicy::WESTERN), 2);
        assert_eq!(cell_width(0x1F600, &narrow), 1);
        assert_eq!(cell_width(0x1F3FB, &WidthPolicy::WESTERN), 0);
        assert_eq!(cell_width(0xFE0F, &WidthPolicy::WESTERN), 0);
    }

    #[test]
    fn unassigned_code_points_are_single_cell() {
        assert_eq!(cell_width(0x10FFFE, &WidthPolicy::CJK), 1);
        assert_eq!(cell_width(0x110000, &WidthPolicy::CJK), 1);
    }

    #[test]
    fn env_overrides() {
        let env: HashMap<_, _> = [(ENV_CJK_WIDTH, "yes"), (ENV_EMOJI_WIDE, "0")].into();
        let policy = WidthPolicy::from_env_with(get_env(&env));
        assert!(policy.ambiguous_wide);
        assert!(!policy.emoji_wide);
    }

    #[test]
    fn env_garbage_keeps_defaults() {
        let env: HashMap<_, _> = [(ENV_CJK_WIDTH, "maybe")].into();
        assert_eq!(
            WidthPolicy::from_env_with(get_env(&env)),
            WidthPolicy::WESTERN
        );
        assert_eq!(WidthPolicy::from_env_with(|_| None), WidthPolicy::default());
    }
}
