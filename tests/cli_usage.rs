use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("sitelens").unwrap()
}

#[test]
fn missing_url_argument_prints_usage_and_exits_nonzero() {
    cmd()
        .env_clear()
        .assert()
        .failure()
        .stderr(contains("Usage"));
}

#[test]
fn missing_configuration_exits_nonzero_before_any_network_call() {
    // All four evaluation settings are absent; the process must fail at
    // startup, naming them, without touching the browser endpoint (an
    // unroutable address, so any attempt would hang past the test).
    cmd()
        .env_clear()
        .arg("https://example.com")
        .arg("--browser-endpoint")
        .arg("http://127.0.0.1:9")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("AZURE_OPENAI_ENDPOINT"))
        .stderr(contains("AZURE_OPENAI_API_KEY"))
        .stderr(contains("AZURE_OPENAI_DEPLOYMENT"))
        .stderr(contains("AZURE_OPENAI_API_VERSION"));
}
