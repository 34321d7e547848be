mod common;

use std::fs;

use anyhow::Result;
use common::{parse_date, read_file, seed, test_service};
use spendlog::application::{AppError, Command, Report};
use spendlog::storage::StorageError;

#[test]
fn test_first_load_creates_empty_file() -> Result<()> {
    let (service, path, _temp) = test_service();
    assert!(!path.exists());

    let expenses = service.list()?;

    assert!(expenses.is_empty());
    assert_eq!(read_file(&path), "[]");
    Ok(())
}

#[test]
fn test_empty_file_loads_as_empty() -> Result<()> {
    let (service, path, _temp) = test_service();
    fs::write(&path, "   \n")?;

    assert!(service.list()?.is_empty());
    // Reading never rewrites an existing file
    assert_eq!(read_file(&path), "   \n");
    Ok(())
}

#[test]
fn test_file_layout() -> Result<()> {
    let (service, path, _temp) = test_service();

    service.add("Coffee".into(), 3.5, parse_date("2024-05-02"))?;

    let expected = r#"[
  {
    "id": 1,
    "description": "Coffee",
    "amount": 3.5,
    "date": "2024-05-02"
  }
]"#;
    assert_eq!(read_file(&path), expected);
    Ok(())
}

#[test]
fn test_reads_file_written_by_hand() -> Result<()> {
    let (service, path, _temp) = test_service();
    fs::write(
        &path,
        r#"[{ "id": 4, "description": "Book", "amount": 100, "date": "2024-03-09" }]"#,
    )?;

    let expenses = service.list()?;
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].amount, 100.0);
    assert_eq!(expenses[0].date, parse_date("2024-03-09"));

    let added = service.add("Pen".into(), 2.0, parse_date("2024-03-10"))?;
    assert_eq!(added.id, 5);
    Ok(())
}

#[test]
fn test_ids_increase_without_reusing_deleted() -> Result<()> {
    let (service, _path, _temp) = test_service();
    seed(&service);

    service.delete(2)?;
    let added = service.add("Taxi".into(), 15.0, parse_date("2024-06-02"))?;

    let ids: Vec<u64> = service.list()?.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(added.id, 4);
    Ok(())
}

#[test]
fn test_delete_unknown_leaves_file_untouched() -> Result<()> {
    let (service, path, _temp) = test_service();
    seed(&service);
    let before = read_file(&path);

    let result = service.delete(999);

    assert!(matches!(result, Err(AppError::ExpenseNotFound(ref id)) if id == "999"));
    assert_eq!(result.unwrap_err().to_string(), "Expense not found.");
    assert_eq!(read_file(&path), before);
    Ok(())
}

#[test]
fn test_update_keeps_id_and_date() -> Result<()> {
    let (service, _path, _temp) = test_service();
    seed(&service);

    service.execute(
        Command::update(3, Some("Market".into()), Some("40")),
        parse_date("2025-01-01"),
    )?;

    let expense = service.list()?.into_iter().find(|e| e.id == 3).unwrap();
    assert_eq!(expense.description, "Market");
    assert_eq!(expense.amount, 40.0);
    assert_eq!(expense.date, parse_date("2024-05-20"));
    Ok(())
}

#[test]
fn test_update_with_negative_amount_still_rewrites_file() -> Result<()> {
    let (service, path, _temp) = test_service();
    fs::write(
        &path,
        r#"[{"id":1,"description":"Coffee","amount":3.5,"date":"2024-05-02"}]"#,
    )?;

    let report = service.execute(Command::update(1, None, Some("-5")), parse_date("2024-05-03"))?;

    assert_eq!(report, Report::Updated);
    assert_eq!(service.list()?[0].amount, 3.5);
    // Saved in pretty form even though nothing changed
    assert!(read_file(&path).starts_with("[\n  {\n"));
    Ok(())
}

#[test]
fn test_summary_totals() -> Result<()> {
    let (service, _path, _temp) = test_service();
    assert_eq!(service.summary(None)?.total, 0.0);

    seed(&service);

    assert_eq!(service.summary(None)?.total, 845.75);
    assert_eq!(service.summary(Some(5))?.total, 45.75);
    assert_eq!(service.summary(Some(6))?.total, 800.0);
    assert_eq!(service.summary(Some(1))?.total, 0.0);
    Ok(())
}

#[test]
fn test_corrupt_file_is_fatal_and_untouched() -> Result<()> {
    let (service, path, _temp) = test_service();
    fs::write(&path, "[{\"id\": 1,")?;

    let result = service.add("Coffee".into(), 3.5, parse_date("2024-05-02"));

    assert!(matches!(
        result,
        Err(AppError::Storage(StorageError::Corrupt { .. }))
    ));
    assert!(
        result
            .unwrap_err()
            .to_string()
            .starts_with("Invalid JSON format")
    );
    assert_eq!(read_file(&path), "[{\"id\": 1,");
    Ok(())
}

#[test]
fn test_save_load_round_trip() -> Result<()> {
    let (service, path, _temp) = test_service();
    seed(&service);
    let first = read_file(&path);

    let loaded = service.list()?;
    service.repository().save(&loaded)?;

    assert_eq!(read_file(&path), first);
    assert_eq!(service.list()?, loaded);
    Ok(())
}
