//! Property-test run profile shared by the workspace's proptest suites.
//!
//! Case counts and process forking come from the environment so CI can run
//! heavier profiles than local development without touching the suites.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const BRG_PBT_FORK_ENV_KEY: &str = "BRG_PBT_FORK";

/// Reasons an override value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
    /// The value is not an unsigned integer.
    #[error("expected an unsigned integer, got `{raw}`")]
    NotANumber {
        /// Trimmed input.
        raw: String,
    },
    /// A case count of zero would skip the property entirely.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The value is not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got `{raw}`")]
    NotABool {
        /// Trimmed input.
        raw: String,
    },
}

/// Resolved proptest settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Resolves the profile, falling back to the provided defaults for unset
    /// or invalid overrides.
    ///
    /// # Examples
    ///
    /// ```
    /// use brg_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: resolve(PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: resolve(BRG_PBT_FORK_ENV_KEY, default_fork, parse_bool),
        }
    }

    /// Cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, OverrideError>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %error,
            "ignoring invalid property-test override",
        );
        default
    })
}

/// Parses a case-count override.
///
/// # Errors
/// Returns [`OverrideError::NotANumber`] for non-numeric input and
/// [`OverrideError::ZeroCases`] for zero.
pub fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    let trimmed = raw.trim();
    match trimmed.parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber {
            raw: trimmed.to_owned(),
        }),
    }
}

/// Parses a boolean override, case-insensitively.
///
/// # Errors
/// Returns [`OverrideError::NotABool`] for unrecognised spellings.
pub fn parse_bool(raw: &str) -> Result<bool, OverrideError> {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool {
            raw: trimmed.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::{Mutex, PoisonError};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Restores a variable to its prior state on drop.
    struct ScopedVar {
        key: &'static str,
        previous: Option<String>,
    }

    impl ScopedVar {
        fn new(key: &'static str, value: Option<&str>) -> Self {
            let previous = env::var(key).ok();
            apply(key, value);
            Self { key, previous }
        }
    }

    impl Drop for ScopedVar {
        fn drop(&mut self) {
            apply(self.key, self.previous.as_deref());
        }
    }

    fn apply(key: &str, value: Option<&str>) {
        // SAFETY: every test touching the environment holds ENV_LOCK.
        unsafe {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }

    fn load_with(
        cases: Option<&str>,
        fork: Option<&str>,
        default_fork: bool,
    ) -> ProptestRunProfile {
        let _lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let _cases = ScopedVar::new(PROPTEST_CASES_ENV_KEY, cases);
        let _fork = ScopedVar::new(BRG_PBT_FORK_ENV_KEY, fork);
        ProptestRunProfile::load(64, default_fork)
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let profile = load_with(None, None, false);
        assert_eq!(profile.cases(), 64);
        assert!(!profile.fork());
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 512 ", 512)]
    #[case("25000", 25_000)]
    fn valid_case_overrides_apply(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(load_with(Some(raw), None, false).cases(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("many")]
    fn invalid_case_overrides_fall_back(#[case] raw: &str) {
        assert_eq!(load_with(Some(raw), None, false).cases(), 64);
    }

    #[rstest]
    #[case("true", true)]
    #[case("On", true)]
    #[case("1", true)]
    #[case("YES", true)]
    #[case("false", false)]
    #[case("off", false)]
    #[case("0", false)]
    #[case("No", false)]
    fn valid_fork_overrides_apply(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(load_with(None, Some(raw), !expected).fork(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("sometimes")]
    #[case("2")]
    fn invalid_fork_overrides_fall_back(#[case] raw: &str) {
        assert!(load_with(None, Some(raw), true).fork());
    }

    #[test]
    fn parse_errors_name_the_problem() {
        assert_eq!(parse_cases("0"), Err(OverrideError::ZeroCases));
        assert_eq!(
            parse_cases(" x "),
            Err(OverrideError::NotANumber { raw: "x".to_owned() })
        );
        assert_eq!(
            parse_bool("maybe"),
            Err(OverrideError::NotABool { raw: "maybe".to_owned() })
        );
    }
}
