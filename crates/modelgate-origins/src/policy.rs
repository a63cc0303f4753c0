use std::collections::HashSet;
use std::sync::Arc;

use crate::config::OriginSettings;
use crate::decision::{decide, OriginDecision};
use crate::warn::WarnOnceGate;

/// How origin checks behave for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyMode {
    /// Every origin is allowed (wildcard spec, or a local environment).
    AllowAll,
    /// Only origins in the configured set are allowed.
    Explicit,
    /// No origins configured in a production-like environment; every
    /// cross-origin caller is rejected.
    DenyByDefault,
}

/// Resolved origin policy: a mode plus the explicit origin set.
///
/// An immutable value owned by the call that resolved it. `origins` is
/// non-empty only under `Explicit`; `AllowAll` and `DenyByDefault` never
/// consult it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    pub mode: PolicyMode,
    pub origins: HashSet<String>,
}

impl PolicyConfig {
    fn allow_all() -> Self {
        Self {
            mode: PolicyMode::AllowAll,
            origins: HashSet::new(),
        }
    }

    fn explicit(origins: HashSet<String>) -> Self {
        Self {
            mode: PolicyMode::Explicit,
            origins,
        }
    }

    fn deny_by_default() -> Self {
        Self {
            mode: PolicyMode::DenyByDefault,
            origins: HashSet::new(),
        }
    }
}

/// Resolves the origin policy from settings captured at wiring time.
///
/// Cheap to clone; the warn-once gate is shared behind an `Arc` so every
/// clone reports through the same gate.
#[derive(Clone)]
pub struct OriginResolver {
    settings: OriginSettings,
    gate: Arc<WarnOnceGate>,
}

impl OriginResolver {
    pub fn new(settings: OriginSettings, gate: Arc<WarnOnceGate>) -> Self {
        match settings.origins_spec.as_deref() {
            Some(spec) => {
                tracing::info!(origins = %spec, "origin policy configured explicitly");
            }
            None => {
                tracing::info!(
                    env = settings.runtime_env.as_deref().unwrap_or("unset"),
                    "no explicit origins configured; policy follows runtime environment"
                );
            }
        }
        Self { settings, gate }
    }

    /// Reduce the captured settings to a policy.
    ///
    /// Order: wildcard spec, explicit list, local-environment allow, then
    /// the fail-safe deny. A spec that parses to zero usable origins (for
    /// example `",,"`) counts as no configuration at all, so an effectively
    /// unconfigured production deployment still lands on the deny path and
    /// triggers the one-time warning.
    pub fn resolve(&self) -> PolicyConfig {
        if let Some(spec) = self.settings.origins_spec.as_deref() {
            if spec.trim() == "*" {
                return PolicyConfig::allow_all();
            }
            let origins: HashSet<String> = spec
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
            if !origins.is_empty() {
                return PolicyConfig::explicit(origins);
            }
        }

        if self.settings.is_local_env() {
            return PolicyConfig::allow_all();
        }

        self.gate.warn();
        PolicyConfig::deny_by_default()
    }

    /// Per-request entry point: resolve the policy and decide for
    /// `raw_origin`.
    pub fn decide(&self, raw_origin: Option<&str>) -> OriginDecision {
        decide(&self.resolve(), raw_origin)
    }
}
