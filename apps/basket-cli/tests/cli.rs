use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("basket").unwrap();
    cmd.env_remove("BASKET_RULES_PATH")
        .env_remove("BASKET_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn demo_scenarios_all_pass() {
    cmd()
        .assert()
        .success()
        .stdout(contains("Test case 1: Items: B01, G01"))
        .stdout(contains("Total: $54.37"))
        .stdout(contains("Total: $60.85"))
        .stdout(contains("Test case 4: Items: B01, B01, R01, R01\nTotal: $68.27"))
        .stdout(contains("Pass: false").not());
}

#[test]
fn prices_given_codes() {
    cmd()
        .args(["B01", "G01"])
        .assert()
        .success()
        .stdout("Basket total: $37.85\n");
}

#[test]
fn json_breakdown() {
    cmd()
        .args(["--json", "R01", "R01"])
        .assert()
        .success()
        .stdout(contains("\"discount\": 1648"))
        .stdout(contains("\"delivery\": 495"))
        .stdout(contains("\"total\": 5437"));
}

#[test]
fn unknown_code_fails() {
    cmd()
        .args(["R01", "X99"])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("Invalid product code: X99"));
}

#[test]
fn unknown_flag_fails() {
    cmd()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(contains("Unknown option: --frobnicate"));
}

#[test]
fn help_prints_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage: basket"));
}

#[test]
fn custom_rules_file() {
    let path = std::env::temp_dir().join(format!("basket-rules-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            "products": [{ "code": "T01", "name": "Teapot", "price_cents": 1999 }],
            "delivery_rules": [{ "threshold_cents": 0, "cost_cents": 1 }]
        }"#,
    )
    .unwrap();

    cmd()
        .env("BASKET_RULES_PATH", &path)
        .args(["T01", "T01"])
        .assert()
        .success()
        .stdout("Basket total: $39.99\n");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_rules_file_fails() {
    cmd()
        .args(["--rules", "/nonexistent/basket-rules.json", "R01"])
        .assert()
        .failure()
        .stderr(contains("Failed to read rules file"));
}

#[test]
fn dump_rules_lists_standard_catalog() {
    cmd()
        .arg("--dump-rules")
        .assert()
        .success()
        .stdout(contains("\"code\": \"R01\""))
        .stdout(contains("\"kind\": \"second_half_price\""));
}
