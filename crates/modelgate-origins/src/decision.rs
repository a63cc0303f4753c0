use crate::policy::{PolicyConfig, PolicyMode};

/// Outcome of an origin check.
///
/// `value` is the origin to echo in the allow-origin response header, and is
/// `Some` only when a concrete origin should be echoed. Same-origin and
/// non-browser callers (no Origin header) are allowed with no value; the
/// HTTP layer then emits no CORS headers at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginDecision {
    pub allowed: bool,
    pub value: Option<String>,
}

impl OriginDecision {
    fn allowed_with(origin: &str) -> Self {
        Self {
            allowed: true,
            value: Some(origin.to_string()),
        }
    }

    fn allowed_bare() -> Self {
        Self {
            allowed: true,
            value: None,
        }
    }

    fn denied() -> Self {
        Self {
            allowed: false,
            value: None,
        }
    }
}

/// Decide whether `raw_origin` is permitted under `config`.
///
/// Pure function of its inputs. Comparison is exact-string and
/// case-sensitive after trimming; no scheme, host, or port canonicalization
/// is performed, so callers must supply browser-canonical Origin values.
pub fn decide(config: &PolicyConfig, raw_origin: Option<&str>) -> OriginDecision {
    // Absent and all-whitespace both collapse to "no origin supplied".
    let origin = raw_origin.map(str::trim).filter(|o| !o.is_empty());

    match (config.mode, origin) {
        // Echo the caller's origin rather than a wildcard so credentialed
        // requests keep working downstream.
        (PolicyMode::AllowAll, Some(origin)) => OriginDecision::allowed_with(origin),
        // Requests without an Origin header are never blocked here; IP and
        // API-key checks are the collaborators responsible for those callers.
        (_, None) => OriginDecision::allowed_bare(),
        (PolicyMode::Explicit, Some(origin)) => {
            if config.origins.contains(origin) {
                OriginDecision::allowed_with(origin)
            } else {
                OriginDecision::denied()
            }
        }
        (PolicyMode::DenyByDefault, Some(_)) => OriginDecision::denied(),
    }
}
