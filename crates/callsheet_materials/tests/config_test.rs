//! Integration tests for configuration loading.

use callsheet_core::GenerationPhase;
use callsheet_materials::CallsheetConfig;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_bundled_defaults() {
    let config = CallsheetConfig::bundled().unwrap();

    assert_eq!(*config.pipeline().dialogue_limit(), 30);
    assert_eq!(*config.pipeline().scene_dialogue_limit(), 40);
    assert_eq!(config.pipeline().workers(), 1);
    assert_eq!(config.pipeline().call_timeout(), Duration::from_secs(180));
    assert_eq!(config.phases().params(GenerationPhase::Core).max_tokens, 6000);
    assert_eq!(config.phases().params(GenerationPhase::Practice).temperature, 0.8);
    assert_eq!(config.provider().model(), "gpt-4o-mini");
    assert_eq!(config.provider().api_key_env(), "OPENAI_API_KEY");
}

#[test]
fn test_bundled_matches_default() {
    assert_eq!(CallsheetConfig::bundled().unwrap(), CallsheetConfig::default());
}

#[test]
fn test_file_overrides_bundled_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("callsheet.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
[pipeline]
aggregation_workers = 8
call_timeout_secs = 30

[phases.core]
temperature = 0.2
model = "local-large"

[provider]
base_url = "http://localhost:8080/v1"
api_key_env = ""
"#
    )
    .unwrap();

    let config = CallsheetConfig::from_file(&path).unwrap();

    assert_eq!(config.pipeline().workers(), 4);
    assert_eq!(config.pipeline().call_timeout(), Duration::from_secs(30));
    assert_eq!(*config.pipeline().dialogue_limit(), 30);

    let core = config.phases().params(GenerationPhase::Core);
    assert_eq!(core.temperature, 0.2);
    assert_eq!(core.max_tokens, 6000);
    assert_eq!(core.model.as_deref(), Some("local-large"));
    assert_eq!(config.phases().relationships.max_tokens, 4000);

    assert_eq!(config.provider().base_url(), "http://localhost:8080/v1");
    assert_eq!(config.provider().api_key_env(), "");
    assert_eq!(config.provider().model(), "gpt-4o-mini");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = CallsheetConfig::from_file(dir.path().join("absent.toml")).unwrap_err();

    assert!(err.to_string().contains("configuration"));
}
