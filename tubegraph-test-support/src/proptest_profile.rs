//! Property-test run profile shared by every proptest suite.
//!
//! Local runs use each suite's defaults. CI raises or lowers the case count
//! and enables forking through environment variables.

use std::env;

/// Environment variable overriding proptest case counts.
pub const CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const FORK_ENV_KEY: &str = "TUBEGRAPH_PBT_FORK";

/// Case count and fork policy for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads the profile from the process environment.
    ///
    /// Unset variables keep the defaults. Malformed values are logged at
    /// `warn` and also keep the defaults, so a typo in CI never aborts a run.
    ///
    /// # Examples
    ///
    /// ```
    /// use tubegraph_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Builds the profile from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(
        default_cases: u32,
        default_fork: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        Self {
            cases: resolve(&lookup, CASES_ENV_KEY, default_cases, parse_cases),
            fork: resolve(&lookup, FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether proptest runs each case in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T: Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, String>,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring malformed property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be positive".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("not a case count: {error}")),
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("not a boolean flag: {other}")),
    }
}
