use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `connaudit`.
///
/// Each subsystem defines its own error variant. Every variant is fatal to
/// the run: the binary prints a labeled diagnostic and exits non-zero.
/// Library callers can match on these to decide for themselves; internal
/// orchestration uses `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum AuditError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Model resolution ────────────────────────────────────────────────
    #[error("resolve: {0}")]
    Resolve(#[from] ResolveError),

    // ── Inference ───────────────────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingToken(&'static str),
}

// ─── Model-resolution errors ────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to fetch resolution rules: {0}")]
    Fetch(String),

    #[error("no rule found for use case '{use_case}'")]
    RuleNotFound { use_case: String },

    #[error("rule for use case '{use_case}' has no model")]
    MissingModel { use_case: String },
}

// ─── Inference errors ───────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("inference request failed: {0}")]
    Request(String),

    #[error("inference endpoint rejected the token (HTTP {status})")]
    Auth { status: u16 },

    #[error("inference endpoint returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body did not contain `choices[0].message.content`.
    /// Carries the raw body so the caller can opt into a best-effort dump.
    #[error("inference response missing message content")]
    MalformedResponse { raw: String },
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, AuditError>;
