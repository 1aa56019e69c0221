//! Inspector configuration.
//!
//! The only tunable today is which notion of "fully undefined" the
//! [`Inspector`](crate::analysis::Inspector) answers with. The default is the
//! top-level check; the recursive walk is opt-in.

use std::env;
use std::str::FromStr;

/// Environment variable read by [`InspectorConfig::from_env`].
pub const UNDEF_CHECK_ENV: &str = "VECIR_UNDEF_CHECK";

/// How `is_fully_undefined` decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UndefinedCheck {
    /// Only the value itself is looked at.
    #[default]
    TopLevel,
    /// Aggregates are walked down to their leaves.
    Recursive,
}

impl FromStr for UndefinedCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "top-level" | "shallow" => Ok(UndefinedCheck::TopLevel),
            "recursive" | "deep" => Ok(UndefinedCheck::Recursive),
            other => Err(format!("unknown undefined-check mode '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InspectorConfig {
    pub undefined_check: UndefinedCheck,
}

impl InspectorConfig {
    /// Read overrides from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = env::var(UNDEF_CHECK_ENV) {
            match raw.parse() {
                Ok(check) => config.undefined_check = check,
                Err(e) => log::warn!("ignoring {UNDEF_CHECK_ENV}: {e}"),
            }
        }
        config
    }

    pub fn with_undefined_check(mut self, check: UndefinedCheck) -> Self {
        self.undefined_check = check;
        self
    }
}
