//! Interactive-mode tests for the rite binary.
//!
//! Each test scripts one session over stdin:
//! - Onboarding when the profile is not preconfigured
//! - Browsing, searching, and category menus
//! - The booking flow end to end, including the ledger screens after it
//! - Status management (confirm, complete, cancel with refund)
//!
//! A config file written into a temp directory presets the profile, so the
//! scripts are deterministic and never touch the host config.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Profile that skips onboarding and browses Hindu ceremonies
const HINDU_PROFILE: &str = "[profile]\nname = \"Asha\"\nreligion = \"hindu\"\nrole = \"customer\"\n";

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("rite"))
}

#[test]
fn test_quit_immediately() {
    let temp_dir = setup_test_dir();
    let config = write_config(&temp_dir, HINDU_PROFILE);

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Asha!"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_eof_ends_session() {
    let temp_dir = setup_test_dir();
    let config = write_config(&temp_dir, HINDU_PROFILE);

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_onboarding_prompts_when_profile_unset() {
    let temp_dir = setup_test_dir();
    let config = write_config(&temp_dir, "");

    // Pick role 1 (customer), religion 2 (muslim), then quit
    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n2\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Guest!"))
        .stdout(predicate::str::contains("Choose Your Role"))
        .stdout(predicate::str::contains("Select how you'd like to use the app"))
        .stdout(predicate::str::contains("Choose Your Religion"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_onboarding_rejects_out_of_range_choice() {
    let temp_dir = setup_test_dir();
    let config = write_config(&temp_dir, "");

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("9\n1\n1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter a number between 1 and 3"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_browse_ceremonies_and_details() {
    let temp_dir = setup_test_dir();
    let config = write_config(&temp_dir, HINDU_PROFILE);

    // Open ceremony 1 (Marriage), back out of the detail, back to the menu
    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n1\nb\nb\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hindu Ceremonies"))
        .stdout(predicate::str::contains("1. Marriage (Wedding)"))
        .stdout(predicate::str::contains("Available Pandits:"))
        .stdout(predicate::str::contains("Pandit Rajesh Sharma"));
}

#[test]
fn test_search_narrows_the_list() {
    let temp_dir = setup_test_dir();
    let config = write_config(&temp_dir, HINDU_PROFILE);

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\ns\nganesh\nb\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search: ganesh"))
        .stdout(predicate::str::contains("1. Ganesh Puja (Puja)"));
}

#[test]
fn test_category_menu_filters_the_list() {
    let temp_dir = setup_test_dir();
    let config = write_config(&temp_dir, HINDU_PROFILE);

    // Category menu: 1 is All, Festival is the 7th category so entry 8
    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\nc\n8\nb\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: Festival"))
        .stdout(predicate::str::contains("1. Navratri Puja (Festival)"))
        .stdout(predicate::str::contains("2. Diwali Puja (Festival)"));
}

#[test]
fn test_full_booking_flow() {
    let temp_dir = setup_test_dir();
    let config = write_config(&temp_dir, HINDU_PROFILE);

    // Book ceremony 1 (Marriage) with officiant 1 (Rajesh Sharma), slot 2,
    // no notes; then check the bookings and transactions screens
    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n1\n1\n2025-05-01\n2\n\nb\n3\nb\n4\nb\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Booking Confirmed!"))
        .stdout(predicate::str::contains("Date: Thursday, May 1, 2025"))
        .stdout(predicate::str::contains("Time: 10:00 AM"))
        .stdout(predicate::str::contains("Amount Paid: ₹11,000"))
        .stdout(predicate::str::contains("Marriage with Pandit Rajesh Sharma [Pending]"))
        .stdout(predicate::str::contains("Payment"))
        .stdout(predicate::str::contains("Total Spent: ₹11,000"));
}

#[test]
fn test_booking_from_officiant_profile() {
    let temp_dir = setup_test_dir();
    let config = write_config(
        &temp_dir,
        "[profile]\nreligion = \"muslim\"\nrole = \"customer\"\n",
    );

    // Top-rated Maulvi is Abdul Rahman; book him without picking a ceremony
    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("2\n1\ny\n2025-06-10\n1\n\nb\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Maulvi Abdul Rahman"))
        .stdout(predicate::str::contains("Booking Confirmed!"))
        .stdout(predicate::str::contains("Amount Paid: ₹8,000"))
        .stdout(predicate::str::contains("Ceremony:").not());
}

#[test]
fn test_cancel_refunds_payment() {
    let temp_dir = setup_test_dir();
    let config = write_config(&temp_dir, HINDU_PROFILE);

    // Book, then cancel from the bookings screen, then look at transactions
    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n1\n1\n2025-05-01\n2\n\nb\n3\n1\nx\nb\n4\nb\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Booking cancelled"))
        .stdout(predicate::str::contains("✓ Refund of ₹11,000 recorded"))
        .stdout(predicate::str::contains("Refund"))
        .stdout(predicate::str::contains("Total Spent: ₹0"));
}

#[test]
fn test_confirm_then_complete() {
    let temp_dir = setup_test_dir();
    let config = write_config(&temp_dir, HINDU_PROFILE);

    // Book, confirm it, mark it completed, then switch to the completed tab
    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n1\n1\n2025-05-01\n2\n\nb\n3\n1\nc\n1\nd\nc\nb\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Booking confirmed"))
        .stdout(predicate::str::contains("✓ Booking completed"))
        .stdout(predicate::str::contains("No upcoming bookings"))
        .stdout(predicate::str::contains("[Completed]"));
}

#[test]
fn test_booking_reprompts_until_date_and_time_valid() {
    let temp_dir = setup_test_dir();
    let config = write_config(&temp_dir, HINDU_PROFILE);

    // Empty date, then a real one; slot 99, then slot 2
    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n1\n1\n\n2025-05-01\n99\n2\n\nb\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please select date and time"))
        .stdout(predicate::str::contains("Booking Confirmed!"));
}

#[test]
fn test_malformed_date_shows_alert_and_stays() {
    let temp_dir = setup_test_dir();
    let config = write_config(&temp_dir, HINDU_PROFILE);

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\n1\n1\ngarbage\n2\n\nb\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid date 'garbage'"))
        .stdout(predicate::str::contains("Booking Confirmed!").not())
        .stdout(predicate::str::contains("Goodbye!"));
}
