mod common;
use common::{init_roster_with_data, setup_test_roster, xb};
use predicates::prelude::*;

#[test]
fn test_add_and_list() {
    let roster = setup_test_roster("add_and_list");
    init_roster_with_data(&roster);

    xb()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Math - 2025-09-01T09:00:00 to 2025-09-01T11:00:00",
        ))
        .stdout(predicate::str::contains(
            "2. Physics - 2025-09-01T14:00:00 to 2025-09-01T16:00:00",
        ));
}

#[test]
fn test_add_normalizes_liberal_input() {
    let roster = setup_test_roster("add_liberal");

    xb()
        .args([
            "--roster", &roster, "add", "Math", "2024/1/5", "9：0：0", "11:00:00",
        ])
        .assert()
        .success();

    xb()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Math - 2024-01-05T09:00:00 to 2024-01-05T11:00:00",
        ));
}

#[test]
fn test_add_rejects_empty_name() {
    let roster = setup_test_roster("add_empty_name");

    xb()
        .args(["--roster", &roster, "add", "", "2024-01-05", "09:00:00", "11:00:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_add_rejects_bad_date() {
    let roster = setup_test_roster("add_bad_date");

    xb()
        .args(["--roster", &roster, "add", "Math", "2024-01", "09:00:00", "11:00:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_add_rejects_bad_time() {
    let roster = setup_test_roster("add_bad_time");

    xb()
        .args(["--roster", &roster, "add", "Math", "2024-01-05", "09:00", "11:00:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}

#[test]
fn test_failed_add_leaves_roster_unchanged() {
    let roster = setup_test_roster("failed_add_keeps_roster");
    init_roster_with_data(&roster);

    xb()
        .args(["--roster", &roster, "add", "Math", "bad-date", "09:00:00", "11:00:00"])
        .assert()
        .failure();

    xb()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Math"))
        .stdout(predicate::str::contains("2. Physics"))
        .stdout(predicate::str::contains("3.").not());
}

#[test]
fn test_edit_replaces_record() {
    let roster = setup_test_roster("edit_replaces");
    init_roster_with_data(&roster);

    xb()
        .args([
            "--roster", &roster, "edit", "2", "Biology", "2025-09-02", "10:00:00", "12:00:00",
        ])
        .assert()
        .success();

    xb()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2. Biology - 2025-09-02T10:00:00 to 2025-09-02T12:00:00",
        ));
}

#[test]
fn test_edit_out_of_range_fails() {
    let roster = setup_test_roster("edit_out_of_range");
    init_roster_with_data(&roster);

    xb()
        .args([
            "--roster", &roster, "edit", "5", "Biology", "2025-09-02", "10:00:00", "12:00:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index out of range"));
}

#[test]
fn test_del_with_confirmation() {
    let roster = setup_test_roster("del_confirmed");
    init_roster_with_data(&roster);

    xb()
        .args(["--roster", &roster, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success();

    xb()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Physics"))
        .stdout(predicate::str::contains("Math").not());
}

#[test]
fn test_del_cancelled_keeps_record() {
    let roster = setup_test_roster("del_cancelled");
    init_roster_with_data(&roster);

    xb()
        .args(["--roster", &roster, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success();

    xb()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Math"));
}

#[test]
fn test_del_out_of_range_fails() {
    let roster = setup_test_roster("del_out_of_range");
    init_roster_with_data(&roster);

    xb()
        .args(["--roster", &roster, "del", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index out of range"));
}

#[test]
fn test_move_down_then_list() {
    let roster = setup_test_roster("move_down");
    init_roster_with_data(&roster);

    xb()
        .args(["--roster", &roster, "move", "1", "--dir", "down"])
        .assert()
        .success();

    xb()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Physics"))
        .stdout(predicate::str::contains("2. Math"));
}

#[test]
fn test_move_up_at_top_is_noop() {
    let roster = setup_test_roster("move_up_top");
    init_roster_with_data(&roster);

    xb()
        .args(["--roster", &roster, "move", "1", "--dir", "up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already at the top"));

    xb()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Math"));
}

#[test]
fn test_move_down_at_bottom_is_noop() {
    let roster = setup_test_roster("move_down_bottom");
    init_roster_with_data(&roster);

    xb()
        .args(["--roster", &roster, "move", "2", "--dir", "down"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already at the bottom"));
}

#[test]
fn test_move_out_of_range_fails() {
    let roster = setup_test_roster("move_out_of_range");
    init_roster_with_data(&roster);

    xb()
        .args(["--roster", &roster, "move", "9", "--dir", "up"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index out of range"));
}

#[test]
fn test_list_empty_roster() {
    let roster = setup_test_roster("list_empty");

    xb()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No exam records."));
}

#[test]
fn test_list_table_renders_headers() {
    let roster = setup_test_roster("list_table");
    init_roster_with_data(&roster);

    xb()
        .args(["--roster", &roster, "list", "--table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subject"))
        .stdout(predicate::str::contains("Start"))
        .stdout(predicate::str::contains("Math"));
}
