use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn casino() -> Command {
    Command::cargo_bin("casino").expect("binary built")
}

#[test]
fn scripted_session_plays_both_tables() {
    let script = "\
bj bet 100
bj deal
bj stand
rl amount 10
rl bet red
rl bet number_17 5
rl spin
chips
quit
";
    casino()
        .args(["--seed", "42", "--tick-ms", "0"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Blackjack [betting]  bet 100"))
        .stdout(predicate::str::contains("Bets: red 10, number_17 5  (total 15)"))
        .stdout(predicate::str::contains("Ball lands on"))
        .stdout(predicate::str::contains("Leaving with"));
}

#[test]
fn bad_commands_do_not_end_the_session() {
    casino()
        .args(["--seed", "1", "--chips", "250"])
        .write_stdin("bj stand\nrl bet purple\nchips\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: cannot stand while idle"))
        .stdout(predicate::str::contains("error: invalid bet: unknown bet 'purple'"))
        .stdout(predicate::str::contains("Chips: 250"));
}

#[test]
fn json_mode_prints_views() {
    let output = casino()
        .args(["--seed", "9", "--tick-ms", "0", "--json"])
        .write_stdin("rl bet odd 20\nrl spin\n")
        .output()
        .expect("runs");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["total_staked"], 20);
    assert_eq!(lines[1]["phase"], "result");
    assert!(lines[1]["last_result"]["number"].as_u64().unwrap() <= 36);
}

#[test]
fn config_file_is_validated() {
    let dir = tempdir().expect("temp dir");
    let good = dir.path().join("casino.yaml");
    fs::write(&good, "table:\n  starting_chips: 300\nroulette:\n  tick_ms: 0\n").expect("write");
    casino()
        .args(["--validate-only", "--config"])
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("300 starting chips, 0 ms wheel tick"));

    let bad = dir.path().join("bad.yaml");
    fs::write(&bad, "roulette:\n  tick_ms: 9999\n").expect("write");
    casino()
        .args(["--validate-only", "--config"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("roulette.tick_ms"));
}

#[test]
fn structured_logging_writes_json_lines() {
    let dir = tempdir().expect("temp dir");
    let log_path = dir.path().join("logs/casino.jsonl");
    let config = dir.path().join("casino.yaml");
    fs::write(
        &config,
        format!(
            "logging:\n  enable_structured: true\n  tracing_level: info\n  path: \"{}\"\n",
            log_path.display()
        ),
    )
    .expect("write");

    casino()
        .args(["--seed", "3", "--tick-ms", "0", "--config"])
        .arg(&config)
        .env_remove("RUST_LOG")
        .write_stdin("rl bet red 10\nrl spin\n")
        .assert()
        .success();

    let log = fs::read_to_string(&log_path).expect("log written");
    assert!(log.contains("spin resolved"));
}
