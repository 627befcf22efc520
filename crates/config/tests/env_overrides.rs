//! Environment variables layered over config files
//!
//! Kept as a single test so nothing else in this binary reads the process
//! environment while it is being changed.

use pr_assistant_config::load_settings_from;

#[test]
fn test_env_overrides_files_and_fallback_key() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("default.yaml"), "server:\n  port: 9000\n").unwrap();

    std::env::remove_var("PR_ASSISTANT__LLM__API_KEY");
    std::env::remove_var("PR_ASSISTANT__SERVER__PORT");
    std::env::set_var("OPENAI_API_KEY", "sk-fallback");

    let settings = load_settings_from(dir.path(), None).unwrap();
    assert_eq!(settings.server.port, 9000);
    assert_eq!(settings.llm.credential().unwrap(), "sk-fallback");

    std::env::set_var("PR_ASSISTANT__LLM__API_KEY", "sk-env");
    std::env::set_var("PR_ASSISTANT__SERVER__PORT", "9100");

    let settings = load_settings_from(dir.path(), None).unwrap();
    assert_eq!(settings.server.port, 9100);
    assert_eq!(settings.llm.credential().unwrap(), "sk-env");

    std::env::remove_var("PR_ASSISTANT__LLM__API_KEY");
    std::env::remove_var("PR_ASSISTANT__SERVER__PORT");
    std::env::remove_var("OPENAI_API_KEY");
}
