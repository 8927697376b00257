//! Field constraint checks for framework records.
//!
//! Rules live in a single ordered table. Each rule names the JSON field it
//! guards, the violation kind it reports, and a predicate that holds for
//! valid records. [`validate`] runs every rule and collects all failures.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::record::FrameworkRecord;

/// Maximum length of `name`, in characters.
pub const MAX_NAME_LEN: usize = 30;

/// Maximum length of `version`, in characters.
pub const MAX_VERSION_LEN: usize = 30;

/// Inclusive bounds of `hypeLevel`.
const HYPE_LEVEL_MIN: i64 = 0;
const HYPE_LEVEL_MAX: i64 = 10;

/// Semantic versioning grammar (semver.org suggested expression).
/// Digits are ASCII only.
const SEMVER_PATTERN: &str = r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$";

static SEMVER: OnceLock<Regex> = OnceLock::new();

fn semver() -> &'static Regex {
    SEMVER.get_or_init(|| Regex::new(SEMVER_PATTERN).expect("semver pattern is a valid regex"))
}

/// Kind of constraint a field failed. Rendered verbatim as the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    /// Required text was empty
    NotEmpty,
    /// Text exceeded its maximum length
    Size,
    /// Text did not match the required grammar
    Pattern,
    /// Number fell outside its allowed range
    Range,
}

impl ViolationKind {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::NotEmpty => "NotEmpty",
            ViolationKind::Size => "Size",
            ViolationKind::Pattern => "Pattern",
            ViolationKind::Range => "Range",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON name of the offending field
    pub field: &'static str,
    /// Constraint that failed
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(field: &'static str, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

struct Rule {
    field: &'static str,
    kind: ViolationKind,
    holds: fn(&FrameworkRecord) -> bool,
}

const RULES: &[Rule] = &[
    Rule { field: "name", kind: ViolationKind::NotEmpty, holds: name_present },
    Rule { field: "name", kind: ViolationKind::Size, holds: name_fits },
    Rule { field: "version", kind: ViolationKind::Size, holds: version_fits },
    Rule { field: "version", kind: ViolationKind::Pattern, holds: version_is_semver },
    Rule { field: "hypeLevel", kind: ViolationKind::Range, holds: hype_level_in_range },
];

fn name_present(record: &FrameworkRecord) -> bool {
    !record.name.is_empty()
}

fn name_fits(record: &FrameworkRecord) -> bool {
    record.name.chars().count() <= MAX_NAME_LEN
}

// Absent versions pass both version rules.
fn version_fits(record: &FrameworkRecord) -> bool {
    record
        .version
        .as_deref()
        .map_or(true, |v| v.chars().count() <= MAX_VERSION_LEN)
}

fn version_is_semver(record: &FrameworkRecord) -> bool {
    record.version.as_deref().map_or(true, |v| semver().is_match(v))
}

fn hype_level_in_range(record: &FrameworkRecord) -> bool {
    (HYPE_LEVEL_MIN..=HYPE_LEVEL_MAX).contains(&record.hype_level)
}

/// Check every field constraint against `record`.
///
/// Returns all violations in rule order, or `Ok(())` when none fail.
pub fn validate(record: &FrameworkRecord) -> Result<(), Vec<Violation>> {
    let violations: Vec<Violation> = RULES
        .iter()
        .filter(|rule| !(rule.holds)(record))
        .map(|rule| Violation::new(rule.field, rule.kind))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
