//! Connection configuration and its resolution order.
//!
//! Every value resolves through the same ordered chain: an explicit override
//! wins over the process environment, which wins over the built-in default.
//! The environment lookup is injected so tests can supply their own.

/// Default Langfuse SaaS endpoint, used when no host is configured anywhere.
pub const DEFAULT_HOST: &str = "https://cloud.langfuse.com";

pub const ENV_HOST: &str = "LANGFUSE_HOST";
pub const ENV_SECRET_KEY: &str = "LANGFUSE_SECRET_KEY";
pub const ENV_PUBLIC_KEY: &str = "LANGFUSE_PUBLIC_KEY";

/// Comma-separated persona roster override.
pub const ENV_PERSONAS: &str = "PROMPTUARY_PERSONAS";

/// Built-in persona roster served when none is configured.
pub const DEFAULT_PERSONAS: &[&str] = &[
    "denis", "frankie", "jess", "peggy", "mish", "otto", "gertie",
];

/// Resolved connection parameters for the remote prompt API.
#[derive(Debug, Clone, Default)]
pub struct Connection {
    pub host: String,
    pub public_key: String,
    pub secret_key: String,
}

/// Explicit per-field overrides, the highest-precedence source.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub public_key: Option<String>,
    pub secret_key: Option<String>,
}

impl Connection {
    /// Resolve a connection through the documented precedence chain:
    /// override, then environment, then default. Keys default to empty
    /// strings, matching the remote API's behavior of rejecting them itself.
    pub fn resolve<F>(overrides: &Overrides, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |over: &Option<String>, var: &str, default: &str| {
            over.clone()
                .filter(|v| !v.is_empty())
                .or_else(|| env(var))
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            host: pick(&overrides.host, ENV_HOST, DEFAULT_HOST),
            public_key: pick(&overrides.public_key, ENV_PUBLIC_KEY, ""),
            secret_key: pick(&overrides.secret_key, ENV_SECRET_KEY, ""),
        }
    }

    /// Resolve against the real process environment.
    pub fn from_env(overrides: &Overrides) -> Self {
        Self::resolve(overrides, |var| std::env::var(var).ok())
    }
}

/// Resolve the persona roster: explicit list, then environment
/// (comma-separated), then the built-in default.
pub fn resolve_personas<F>(overrides: &[String], env: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    if !overrides.is_empty() {
        return overrides.to_vec();
    }
    if let Some(raw) = env(ENV_PERSONAS) {
        let personas: Vec<String> = raw
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        if !personas.is_empty() {
            return personas;
        }
    }
    DEFAULT_PERSONAS.iter().map(|p| p.to_string()).collect()
}

/// Resolve personas against the real process environment.
pub fn personas_from_env(overrides: &[String]) -> Vec<String> {
    resolve_personas(overrides, |var| std::env::var(var).ok())
}
