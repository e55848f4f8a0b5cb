use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finplan(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finplan").unwrap();
    cmd.env("FINPLAN_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn seed_reference_budget(dir: &TempDir) {
    finplan(dir).args(["income", "set", "3000"]).assert().success();
    finplan(dir)
        .args(["expense", "add", "Rent", "1000"])
        .assert()
        .success();
    finplan(dir)
        .args(["expense", "add", "Food", "400"])
        .assert()
        .success();
}

#[test]
fn test_income_set_and_show() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["income", "set", "3000.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Net income set to €3000.50"));

    finplan(&dir)
        .args(["income", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€3000.50"));

    assert!(dir.path().join("data").join("budget.json").exists());
}

#[test]
fn test_negative_income_is_rejected() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["income", "set", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Net income cannot be negative"));
}

#[test]
fn test_dashboard_of_reference_budget() {
    let dir = TempDir::new().unwrap();
    seed_reference_budget(&dir);

    finplan(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("€1600.00"))
        .stdout(predicate::str::contains("53.3%"))
        .stdout(predicate::str::contains("Health score: 80/100 (Good)"));
}

#[test]
fn test_dashboard_with_corrupt_budget_uses_default() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data").join("budget.json"), "{ broken").unwrap();

    finplan(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Health score: 30/100 (Critical)"));
}

#[test]
fn test_expense_list_and_remove() {
    let dir = TempDir::new().unwrap();
    seed_reference_budget(&dir);

    finplan(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Total: €1400.00"));

    finplan(&dir)
        .args(["expense", "remove", "rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed expense 'Rent'"));

    finplan(&dir)
        .args(["expense", "remove", "Rent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: Rent"));
}

#[test]
fn test_ineffective_expense_is_ignored() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["expense", "add", "Gym", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignored"));

    finplan(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn test_history_close_and_trend() {
    let dir = TempDir::new().unwrap();
    seed_reference_budget(&dir);

    finplan(&dir)
        .args(["history", "close", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded January 2025"));

    finplan(&dir).args(["income", "set", "3200"]).assert().success();

    finplan(&dir)
        .args(["history", "close", "--period", "2025-02"])
        .assert()
        .success();

    finplan(&dir)
        .args(["history", "close", "--period", "2025-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated February 2025"));

    finplan(&dir)
        .args(["history", "trend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Surplus rose by €200.00 since last month."))
        .stdout(predicate::str::contains("needs 3 months, have 2"));
}

#[test]
fn test_history_close_rejects_bad_period() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["history", "close", "--period", "2025-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}

#[test]
fn test_history_export_csv() {
    let dir = TempDir::new().unwrap();
    seed_reference_budget(&dir);
    finplan(&dir)
        .args(["history", "close", "--period", "2025-03"])
        .assert()
        .success();

    let out = dir.path().join("history.csv");
    finplan(&dir)
        .args(["history", "export"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 month(s)"));

    let csv = std::fs::read_to_string(out).unwrap();
    assert!(csv.starts_with("period,income,expenses,surplus,savings_rate\n"));
    assert!(csv.contains("2025-03,3000.00,1400.00,1600.00,0.5333"));
}

#[test]
fn test_invest_with_overrides() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["invest", "--monthly", "100", "--rate", "6", "--years", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€1233.56"))
        .stdout(predicate::str::contains("€1200.00"));
}

#[test]
fn test_invest_zero_rate_cannot_solve_goal() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["invest", "--monthly", "100", "--rate", "0", "--years", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€2400.00"))
        .stdout(predicate::str::contains("cannot solve"));
}

#[test]
fn test_invest_rejects_out_of_range_inputs() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["invest", "--monthly", "100", "--rate", "5000", "--years", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Annual return rate must be between 0 and 20%",
        ));

    finplan(&dir)
        .args(["invest", "--monthly", "100", "--rate", "5", "--years", "3000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duration must be between 1 and 50 years"));

    finplan(&dir)
        .args(["invest", "--monthly", "100", "--rate", "5", "--years", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duration must be between"));
}

#[test]
fn test_amount_with_sub_cent_precision_is_rejected() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["income", "set", "10.999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_invest_uses_suggested_contribution() {
    let dir = TempDir::new().unwrap();
    seed_reference_budget(&dir);

    finplan(&dir)
        .arg("invest")
        .assert()
        .success()
        .stdout(predicate::str::contains("€480.00 per month at 5.00% for 10 years"));
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory"))
        .stdout(predicate::str::contains("Currency symbol:     €"));
}
