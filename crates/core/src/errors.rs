use thiserror::Error;

/// Unified error type for the entire trading-journal-core library.
/// Every fallible public function returns `Result<T, JournalError>`.
#[derive(Debug, Error)]
pub enum JournalError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("API request failed ({operation}): HTTP {status}")]
    Api {
        operation: String,
        status: u16,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Payloads ────────────────────────────────────────────────────
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Trade validation failed: {0}")]
    ValidationError(String),

    #[error("Trade not found: {0}")]
    TradeNotFound(i64),

    // ── Configuration / File I/O ────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for JournalError {
    fn from(e: std::io::Error) -> Self {
        JournalError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(e: serde_json::Error) -> Self {
        JournalError::Deserialization(e.to_string())
    }
}

impl From<toml::de::Error> for JournalError {
    fn from(e: toml::de::Error) -> Self {
        JournalError::Config(e.to_string())
    }
}

impl From<reqwest::Error> for JournalError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return JournalError::Deserialization(redact_query(e.to_string()));
        }
        // reqwest errors carry the full URL; keep query strings out of logs.
        JournalError::Network(redact_query(e.to_string()))
    }
}

fn redact_query(msg: String) -> String {
    match msg.find('?') {
        Some(idx) => format!("{}?<query redacted>", &msg[..idx]),
        None => msg,
    }
}
