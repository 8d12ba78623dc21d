mod common;
use common::{init_data_with_bookings, setup_test_data, tc};
use predicates::prelude::*;

#[test]
fn test_init_creates_data_file() {
    let data_path = setup_test_data("init_creates");

    tc().args(["--data", &data_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    assert!(std::path::Path::new(&data_path).exists());
}

#[test]
fn test_book_and_list() {
    let data_path = setup_test_data("book_and_list");
    init_data_with_bookings(&data_path);

    tc().args([
        "--data",
        &data_path,
        "--test",
        "list",
        "--period",
        "2030-06",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Alice"))
    .stdout(predicate::str::contains("Bob"))
    .stdout(predicate::str::contains("2 appointment(s)"));
}

#[test]
fn test_list_filters_by_student_and_status() {
    let data_path = setup_test_data("list_filters");
    init_data_with_bookings(&data_path);

    tc().args([
        "--data",
        &data_path,
        "--test",
        "list",
        "--period",
        "all",
        "--student",
        "Alice",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Alice"))
    .stdout(predicate::str::contains("1 appointment(s)"));

    tc().args([
        "--data",
        &data_path,
        "--test",
        "list",
        "--period",
        "all",
        "--status",
        "completed",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("No appointments found"));
}

#[test]
fn test_booking_in_the_past_is_refused() {
    let data_path = setup_test_data("past_refused");

    tc().args(["--data", &data_path, "--test", "init"])
        .assert()
        .success();

    tc().args([
        "--data",
        &data_path,
        "--test",
        "book",
        "2020-01-10",
        "10:00",
        "--student",
        "Alice",
        "--subject",
        "Math",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("in the past"));

    // --past allows backfilling history
    tc().args([
        "--data",
        &data_path,
        "--test",
        "book",
        "2020-01-10",
        "10:00",
        "--student",
        "Alice",
        "--subject",
        "Math",
        "--past",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Appointment #1 booked"));
}

#[test]
fn test_conflicting_booking_warns_but_proceeds() {
    let data_path = setup_test_data("advisory_conflict");
    init_data_with_bookings(&data_path);

    // overlaps Alice's 10:00 lesson on 2030-06-10
    tc().args([
        "--data",
        &data_path,
        "--test",
        "book",
        "2030-06-10",
        "10:30",
        "--student",
        "Carol",
        "--subject",
        "Chemistry",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("overlap"))
    .stdout(predicate::str::contains("booked"));
}

#[test]
fn test_strict_mode_blocks_conflicting_booking() {
    let data_path = setup_test_data("strict_conflict");
    init_data_with_bookings(&data_path);

    tc().args([
        "--data",
        &data_path,
        "--test",
        "book",
        "2030-06-10",
        "10:30",
        "--student",
        "Carol",
        "--subject",
        "Chemistry",
        "--strict",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Booking refused"));

    // nothing was saved
    tc().args([
        "--data",
        &data_path,
        "--test",
        "list",
        "--period",
        "all",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("2 appointment(s)"));
}

#[test]
fn test_check_reports_conflicts_without_saving() {
    let data_path = setup_test_data("check_conflicts");
    init_data_with_bookings(&data_path);

    // same start time: overlap + double-booking + capacity
    tc().args([
        "--data",
        &data_path,
        "--test",
        "check",
        "2030-06-10",
        "10:00",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("overlap"))
    .stdout(predicate::str::contains("double-booking"))
    .stdout(predicate::str::contains("capacity"))
    .stdout(predicate::str::contains("3 conflict(s)"));

    // 5 minute gap: adjacent only
    tc().args([
        "--data",
        &data_path,
        "--test",
        "check",
        "2030-06-10",
        "11:05",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("adjacent"))
    .stdout(predicate::str::contains("1 conflict(s)"));

    // a free afternoon is clean
    tc().args([
        "--data",
        &data_path,
        "--test",
        "check",
        "2030-06-10",
        "15:00",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("No conflicts detected"));
}

#[test]
fn test_check_disable_suppresses_rules() {
    let data_path = setup_test_data("check_disable");
    init_data_with_bookings(&data_path);

    tc().args([
        "--data",
        &data_path,
        "--test",
        "check",
        "2030-06-10",
        "10:00",
        "--disable",
        "overlap,double-booking,capacity",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("No conflicts detected"));

    tc().args([
        "--data",
        &data_path,
        "--test",
        "check",
        "2030-06-10",
        "10:00",
        "--disable",
        "bogus-rule",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown conflict rule"));
}

#[test]
fn test_del_only_removes_pending_bookings() {
    let data_path = setup_test_data("del_pending");
    init_data_with_bookings(&data_path);

    // confirm appointment #2, then try to delete it
    tc().args([
        "--data",
        &data_path,
        "--test",
        "status",
        "2",
        "--set",
        "confirmed",
    ])
    .assert()
    .success();

    tc().args(["--data", &data_path, "--test", "del", "2", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only pending"));

    // the still-pending #1 can be deleted
    tc().args(["--data", &data_path, "--test", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    tc().args(["--data", &data_path, "--test", "list", "--period", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 appointment(s)"));
}

#[test]
fn test_status_transitions() {
    let data_path = setup_test_data("status_flow");
    init_data_with_bookings(&data_path);

    // pending → confirmed → completed
    tc().args([
        "--data",
        &data_path,
        "--test",
        "status",
        "1",
        "--set",
        "confirmed",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Confirmed"));

    tc().args([
        "--data",
        &data_path,
        "--test",
        "status",
        "1",
        "--set",
        "completed",
    ])
    .assert()
    .success();

    // completed is final
    tc().args([
        "--data",
        &data_path,
        "--test",
        "status",
        "1",
        "--set",
        "cancelled",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Status change not allowed"));

    // unknown id
    tc().args([
        "--data",
        &data_path,
        "--test",
        "status",
        "99",
        "--set",
        "confirmed",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("No appointment found"));
}

#[test]
fn test_cancelled_bookings_free_the_slot() {
    let data_path = setup_test_data("cancel_frees");
    init_data_with_bookings(&data_path);

    tc().args([
        "--data",
        &data_path,
        "--test",
        "status",
        "1",
        "--set",
        "cancelled",
    ])
    .assert()
    .success();

    // the 10:00 slot on 2030-06-10 no longer conflicts
    tc().args([
        "--data",
        &data_path,
        "--test",
        "check",
        "2030-06-10",
        "10:00",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("No conflicts detected"));
}

#[test]
fn test_slots_generate_and_book_marks_slot() {
    let data_path = setup_test_data("slots_flow");

    tc().args(["--data", &data_path, "--test", "init"])
        .assert()
        .success();

    // 9..18 hourly → 9 slots
    tc().args([
        "--data",
        &data_path,
        "--test",
        "slots",
        "2030-06-10",
        "--generate",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("9 slot(s)"));

    tc().args([
        "--data",
        &data_path,
        "--test",
        "book",
        "2030-06-10",
        "10:00",
        "--student",
        "Alice",
        "--subject",
        "Math",
    ])
    .assert()
    .success();

    tc().args(["--data", &data_path, "--test", "slots", "2030-06-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("booked: 10:00 (Alice)"));
}

#[test]
fn test_grid_renders_month() {
    let data_path = setup_test_data("grid_render");

    tc().args(["--data", &data_path, "--test", "init"])
        .assert()
        .success();

    tc().args([
        "--data",
        &data_path,
        "--test",
        "slots",
        "2030-06-10",
        "--generate",
    ])
    .assert()
    .success();

    tc().args([
        "--data",
        &data_path,
        "--test",
        "grid",
        "--month",
        "2030-06",
        "--min",
        "2030-06-01",
        "--slots",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("June 2030"))
    .stdout(predicate::str::contains("2030-06-10"));
}

#[test]
fn test_log_records_operations() {
    let data_path = setup_test_data("audit_log");
    init_data_with_bookings(&data_path);

    tc().args(["--data", &data_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Internal log"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("book"));
}

#[test]
fn test_backup_copies_the_data_file() {
    let data_path = setup_test_data("backup_copy");
    init_data_with_bookings(&data_path);

    let dest = common::temp_out("backup_copy", "json");

    tc().args(["--data", &data_path, "--test", "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));

    assert!(std::path::Path::new(&dest).exists());
}

#[test]
fn test_invalid_date_and_time_are_rejected() {
    let data_path = setup_test_data("invalid_inputs");
    init_data_with_bookings(&data_path);

    tc().args([
        "--data",
        &data_path,
        "--test",
        "book",
        "junk",
        "10:00",
        "--student",
        "Alice",
        "--subject",
        "Math",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid date"));

    tc().args([
        "--data",
        &data_path,
        "--test",
        "check",
        "2030-06-10",
        "25:99",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid time"));
}
