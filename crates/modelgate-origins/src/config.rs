use std::env;

const ORIGINS_VAR: &str = "ALLOWED_ORIGINS";
const RUNTIME_ENV_VAR: &str = "MODELGATE_ENV";

/// Raw origin-policy inputs, captured once at wiring time.
///
/// Reading the process environment happens here and nowhere else; the
/// resolver works from these captured values. Absent and empty variables
/// are equivalent, and malformed input never fails — it degrades to the
/// fail-safe default during resolution.
#[derive(Debug, Clone)]
pub struct OriginSettings {
    /// Comma-separated allowed origins, or `*`, as deployed.
    pub origins_spec: Option<String>,
    /// Free-form runtime environment indicator (e.g. "development").
    pub runtime_env: Option<String>,
}

impl OriginSettings {
    pub fn new(origins_spec: Option<String>, runtime_env: Option<String>) -> Self {
        Self {
            origins_spec: origins_spec.filter(|s| !s.trim().is_empty()),
            runtime_env: runtime_env.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Capture `ALLOWED_ORIGINS` and `MODELGATE_ENV` from the process
    /// environment.
    pub fn from_env() -> Self {
        Self::new(env::var(ORIGINS_VAR).ok(), env::var(RUNTIME_ENV_VAR).ok())
    }

    /// Whether the runtime environment indicator names a local context
    /// (`development` or `test`, compared case-insensitively).
    pub fn is_local_env(&self) -> bool {
        self.runtime_env
            .as_deref()
            .map(|e| e.eq_ignore_ascii_case("development") || e.eq_ignore_ascii_case("test"))
            .unwrap_or(false)
    }
}
