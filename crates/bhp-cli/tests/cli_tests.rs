use bhp_cli::{build_cli, run, Settings};
use bhp_test_utils::{StubApi, StubBehavior};
use pretty_assertions::assert_eq;
use std::io::Write;

fn settings_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{text}").unwrap();
    file
}

async fn run_with_file(file: &tempfile::NamedTempFile, argv: &[&str]) -> anyhow::Result<String> {
    let matches = build_cli().try_get_matches_from(argv)?;
    let settings = Settings::load(Some(file.path()))?;
    run(&matches, &settings).await
}

#[tokio::test]
async fn settings_file_points_predict_at_service() {
    let stub = StubApi::spawn(StubBehavior::healthy(7_000_000.0));
    let file = settings_file(&format!("[api]\nbase_url = \"{}\"\n", stub.base_url()));

    let out = run_with_file(&file, &["bhp", "predict", "--location", "HSR Layout"])
        .await
        .unwrap();

    assert_eq!(out, "Estimated price (remote): ₹7,000,000\n");
    assert_eq!(stub.predict_requests().len(), 1);
}

#[tokio::test]
async fn settings_file_overrides_location_weights() {
    let file = settings_file(
        r#"
        [weights.location]
        Koramangala = 0.27
        Atlantis = 0.5
        default = 0.1
        "#,
    );

    let out = run_with_file(&file, &["bhp", "estimate", "--location", "Atlantis"])
        .await
        .unwrap();

    // (6500 + 3250 + 650 + 650) * 1200
    assert_eq!(out, "Estimated price (local): ₹13,260,000\n");
}

#[tokio::test]
async fn unreachable_service_reports_user_message() {
    let file = settings_file("[api]\nbase_url = \"http://127.0.0.1:9/api\"\n");

    let err = run_with_file(&file, &["bhp", "metadata"]).await.unwrap_err();
    assert_eq!(err.to_string(), bhp_client::USER_MESSAGE);

    let out = run_with_file(&file, &["bhp", "locations"]).await.unwrap();
    assert_eq!(out, "");
}

#[test]
fn invalid_base_url_rejected_at_load() {
    let file = settings_file("[api]\nbase_url = \"ftp://example.com\"\n");
    assert!(Settings::load(Some(file.path())).is_err());
}
