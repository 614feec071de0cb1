use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `send-whatsapp`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; binary code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum WhatsappError {
    // ── Link generation ──────────────────────────────────────────────────
    #[error("link: {0}")]
    Link(#[from] LinkError),

    // ── Settings ─────────────────────────────────────────────────────────
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),

    // ── Generic fallthrough (wraps anyhow for interop) ───────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Link generation errors ──────────────────────────────────────────────────

/// Failures in the directive pipeline. None of these are fatal: every one
/// degrades to "render nothing" at the directive boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    #[error("phone number must contain only digits, including the international prefix")]
    InvalidPhoneNumber,

    #[error("no usable phone number at any precedence level")]
    MissingDestination,

    #[error("resolved title is empty after all fallbacks")]
    MissingContent,
}

// ─── Settings errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("store: {0}")]
    Store(String),

    #[error("parse: {0}")]
    Parse(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Convenience re-exports ──────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, WhatsappError>;
