// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use spendlog::application::ExpenseService;
use tempfile::TempDir;

/// Helper to create a test service over a JSON file in a temporary directory.
/// The file itself is not created.
pub fn test_service() -> (ExpenseService, PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("expenses.json");
    let service = ExpenseService::open(&path);
    (service, path, temp_dir)
}

/// Helper to parse a date string into a NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

pub fn read_file(path: &PathBuf) -> String {
    fs::read_to_string(path).unwrap()
}

/// Test fixture: a few expenses spread over May and June 2024.
pub fn seed(service: &ExpenseService) {
    service
        .add("Coffee".into(), 3.5, parse_date("2024-05-02"))
        .unwrap();
    service
        .add("Rent".into(), 800.0, parse_date("2024-06-01"))
        .unwrap();
    service
        .add("Groceries".into(), 42.25, parse_date("2024-05-20"))
        .unwrap();
}
