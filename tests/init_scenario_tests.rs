use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn init_writes_a_starter_scenario() {
    let output_file = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::Command::cargo_bin("bullwhip").unwrap();
    cmd.args(["init", "-o", &output_arg]);

    cmd.assert().success().stdout(predicate::str::contains(
        format!("Starter scenario written to {output_arg}"),
    ));

    let contents = std::fs::read_to_string(&output_arg).unwrap();
    assert!(contents.contains("base_demand: 100"));
    assert!(contents.contains("demand_spike_pct: 10"));
    assert!(contents.contains("safety_buffer_pct: 20"));
    assert!(contents.contains("unit_price: 5"));
    assert!(contents.contains("- Customer"));
    assert!(contents.contains("- Pharmacy"));
    assert!(contents.contains("- Wholesaler"));
    assert!(contents.contains("- Distributor"));
    assert!(contents.contains("- Factory"));
}

#[test]
fn init_output_can_be_simulated() {
    let scenario_file = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
    let scenario_arg = scenario_file.path().to_str().unwrap().to_string();

    let mut init = assert_cmd::Command::cargo_bin("bullwhip").unwrap();
    init.args(["init", "-o", &scenario_arg]);
    init.assert().success();

    let report_file = assert_fs::NamedTempFile::new("report.yaml").unwrap();
    let report_arg = report_file.path().to_str().unwrap().to_string();

    let mut simulate = assert_cmd::Command::cargo_bin("bullwhip").unwrap();
    simulate.args(["simulate", "-i", &scenario_arg, "-o", &report_arg]);
    simulate
        .assert()
        .success()
        .stdout(predicate::str::contains("Trapped capital: 1592.88"));

    std::fs::remove_file(format!("{report_arg}.png")).unwrap();
}
