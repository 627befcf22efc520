//! Centralized constants for the PR assistant
//!
//! Defaults and user-facing messages that more than one crate needs.

/// Completion service endpoints
pub mod endpoints {
    /// OpenAI chat completions API base
    pub const OPENAI_DEFAULT: &str = "https://api.openai.com/v1";
}

/// Model identifiers
pub mod models {
    /// The single model every tool uses
    pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o";
}

/// Environment variable names
pub mod env {
    /// Prefix for settings overrides (PR_ASSISTANT__LLM__API_KEY, ...)
    pub const SETTINGS_PREFIX: &str = "PR_ASSISTANT";

    /// Separator between nested keys in overrides
    pub const SETTINGS_SEPARATOR: &str = "__";

    /// Selects config/{env}.yaml
    pub const RUNTIME_ENV: &str = "PR_ASSISTANT_ENV";

    /// Fallback location of the API key
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
}

/// Server defaults
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;
}

/// User-facing messages
pub mod messages {
    pub const MISSING_CREDENTIAL: &str = "Error: API Key de OpenAI no configurada.";

    pub const CREDENTIAL_REMEDIATION: &str = "\
Para solucionar esto, sigue estos pasos:
1. Define la variable de entorno OPENAI_API_KEY (o PR_ASSISTANT__LLM__API_KEY) con tu API Key.
2. El valor debe tener este formato: OPENAI_API_KEY=\"sk-...\"
3. Alternativamente, añade `llm.api_key` en config/default.yaml y reinicia el servicio.";
}
