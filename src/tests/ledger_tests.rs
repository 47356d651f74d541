use crate::constants::{EXPENSE_ADDED, EXPENSES_CLEARED, NO_EXPENSES_MESSAGE};
use crate::error::LedgerError;
use crate::tests::create_test_service;

#[tokio::test]
async fn test_add_expense_returns_created_record() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;

    let expense = ledger
        .add_expense("c1", 0.5, "taxi", Some("Amal"))
        .await
        .unwrap();

    assert_eq!(expense.amount, 0.5);
    assert_eq!(expense.description, "taxi");
    assert_eq!(expense.paid_by, "Amal");
    assert!(!expense.id.is_empty());
    assert!(!expense.timestamp.is_empty());
}

#[tokio::test]
async fn test_paid_by_defaults_to_user() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;

    let expense = ledger.add_expense("c1", 1.0, "dinner", None).await.unwrap();
    assert_eq!(expense.paid_by, "user");
}

#[tokio::test]
async fn test_total_is_sum_of_added_amounts() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;

    ledger.add_expense("c1", 0.1, "coffee", None).await.unwrap();
    ledger.add_expense("c1", 0.2, "snacks", None).await.unwrap();
    ledger.add_expense("c1", 0.3, "museum", None).await.unwrap();

    assert!((ledger.get_total("c1").await - 0.6).abs() < 1e-9);
}

#[tokio::test]
async fn test_total_is_zero_for_unknown_conversation() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;
    assert_eq!(ledger.get_total("nobody").await, 0.0);
}

#[tokio::test]
async fn test_expenses_keep_insertion_order() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;

    ledger.add_expense("c1", 2.0, "flight", None).await.unwrap();
    ledger.add_expense("c1", 1.0, "dinner", None).await.unwrap();
    ledger.add_expense("c1", 0.5, "taxi", None).await.unwrap();

    let expenses = ledger.get_expenses("c1").await;
    let descriptions: Vec<&str> = expenses.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["flight", "dinner", "taxi"]);
}

#[tokio::test]
async fn test_conversations_are_isolated() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;

    ledger.add_expense("c1", 2.0, "flight", None).await.unwrap();
    ledger.add_expense("c2", 9.0, "hotel", None).await.unwrap();

    assert_eq!(ledger.get_expenses("c1").await.len(), 1);
    assert!((ledger.get_total("c2").await - 9.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_rejects_empty_conversation_id() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;

    let result = ledger.add_expense("  ", 1.0, "dinner", None).await;
    assert!(matches!(result, Err(LedgerError::MissingConversationId)));
}

#[tokio::test]
async fn test_rejects_empty_description() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;

    let result = ledger.add_expense("c1", 1.0, "   ", None).await;
    assert!(matches!(result, Err(LedgerError::MissingDescription)));
    assert!(ledger.get_expenses("c1").await.is_empty());
}

#[tokio::test]
async fn test_rejects_non_positive_and_non_finite_amounts() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;

    for bad in [0.0, -1.5, f64::NAN, f64::INFINITY] {
        let result = ledger.add_expense("c1", bad, "dinner", None).await;
        assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));
    }
    assert!(ledger.get_expenses("c1").await.is_empty());
}

#[tokio::test]
async fn test_clear_removes_everything() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;

    ledger.add_expense("c1", 2.0, "flight", None).await.unwrap();
    ledger.clear("c1").await.unwrap();

    assert!(ledger.get_expenses("c1").await.is_empty());
    assert_eq!(ledger.get_total("c1").await, 0.0);
}

#[tokio::test]
async fn test_clear_is_idempotent() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;

    ledger.clear("never-seen").await.unwrap();
    ledger.clear("never-seen").await.unwrap();
    assert!(ledger.get_expenses("never-seen").await.is_empty());
}

#[tokio::test]
async fn test_format_expenses_lists_each_record() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;

    ledger
        .add_expense("c1", 2.0, "flight", Some("user"))
        .await
        .unwrap();
    ledger
        .add_expense("c1", 1.0, "dinner", Some("Amal"))
        .await
        .unwrap();

    let summary = ledger.format_expenses("c1").await;
    assert!(summary.starts_with("Expenses: total 3.000000 ETH"));
    assert!(summary.contains("1. flight: 2 ETH (paid by: user)"));
    assert!(summary.contains("2. dinner: 1 ETH (paid by: Amal)"));
}

#[tokio::test]
async fn test_format_expenses_empty_sentinel() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;
    assert_eq!(ledger.format_expenses("c1").await, NO_EXPENSES_MESSAGE);
}

#[tokio::test]
async fn test_mutations_are_audited() {
    let _ = env_logger::try_init();
    let ledger = create_test_service().await;

    ledger.add_expense("c1", 2.0, "flight", None).await.unwrap();
    ledger.clear("c1").await.unwrap();

    let entries = ledger.audit_entries().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].action, EXPENSE_ADDED);
    assert_eq!(entries[0].conversation_id.as_deref(), Some("c1"));
    assert_eq!(entries[1].action, EXPENSES_CLEARED);
}
