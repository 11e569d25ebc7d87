use engine::{
    CashflowStatus, CategoryTotal, DateRange, Engine, NewExpense, NewIncome, SourceTotal, storage,
};

async fn engine_with_db() -> Engine {
    let db = storage::open_memory().await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

fn january() -> DateRange {
    DateRange::new("2024-01-01", "2024-01-31")
}

#[tokio::test]
async fn summarize_single_category() {
    let engine = engine_with_db().await;

    engine
        .add_expense(NewExpense::new("2024-01-05", 50.0, "food"))
        .await
        .unwrap();
    engine
        .add_expense(NewExpense::new("2024-01-10", 30.0, "food"))
        .await
        .unwrap();

    let totals = engine.summarize_expenses(&january(), None).await.unwrap();
    assert_eq!(
        totals,
        vec![CategoryTotal {
            category: "food".to_string(),
            total_amount: 80.0
        }]
    );
}

#[tokio::test]
async fn summarize_matches_list_grouped_by_category() {
    let engine = engine_with_db().await;

    for (date, amount, category) in [
        ("2024-01-02", 12.5, "Transport"),
        ("2024-01-03", 40.0, "Food"),
        ("2024-01-31", 7.5, "Transport"),
        ("2024-02-01", 99.0, "Food"),
        ("2024-01-15", 20.0, "Bills"),
        ("2024-01-20", 2.0, "Food"),
    ] {
        engine
            .add_expense(NewExpense::new(date, amount, category))
            .await
            .unwrap();
    }

    let totals = engine.summarize_expenses(&january(), None).await.unwrap();
    let labels: Vec<&str> = totals.iter().map(|t| t.category.as_str()).collect();
    assert_eq!(labels, vec!["Bills", "Food", "Transport"]);

    let listed = engine.list_expenses(&january()).await.unwrap();
    for total in &totals {
        let sum: f64 = listed
            .iter()
            .filter(|e| e.category == total.category)
            .map(|e| e.amount)
            .sum();
        assert_eq!(total.total_amount, sum);
    }
}

#[tokio::test]
async fn summarize_with_filter() {
    let engine = engine_with_db().await;

    engine
        .add_expense(NewExpense::new("2024-01-02", 12.5, "Transport"))
        .await
        .unwrap();
    engine
        .add_expense(NewExpense::new("2024-01-03", 40.0, "Food"))
        .await
        .unwrap();

    let totals = engine
        .summarize_expenses(&january(), Some("Food"))
        .await
        .unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].category, "Food");
    assert_eq!(totals[0].total_amount, 40.0);

    let totals = engine
        .summarize_expenses(&january(), Some(""))
        .await
        .unwrap();
    assert_eq!(totals.len(), 2);

    let totals = engine
        .summarize_expenses(&january(), Some("Travel"))
        .await
        .unwrap();
    assert!(totals.is_empty());
}

#[tokio::test]
async fn summarize_income_by_source() {
    let engine = engine_with_db().await;

    engine
        .add_income(NewIncome::new("2024-01-01", 3000.0, "Salary"))
        .await
        .unwrap();
    engine
        .add_income(NewIncome::new("2024-01-15", 250.0, "Freelance"))
        .await
        .unwrap();
    engine
        .add_income(NewIncome::new("2024-01-20", 150.0, "Freelance"))
        .await
        .unwrap();

    let totals = engine.summarize_income(&january(), None).await.unwrap();
    assert_eq!(
        totals,
        vec![
            SourceTotal {
                source: "Freelance".to_string(),
                total_amount: 400.0
            },
            SourceTotal {
                source: "Salary".to_string(),
                total_amount: 3000.0
            },
        ]
    );

    let totals = engine
        .summarize_income(&january(), Some("Salary"))
        .await
        .unwrap();
    assert_eq!(totals.len(), 1);
}

#[tokio::test]
async fn net_cashflow_rounds_independently() {
    let engine = engine_with_db().await;

    engine
        .add_income(NewIncome::new("2024-01-05", 100.004, "Salary"))
        .await
        .unwrap();
    engine
        .add_income(NewIncome::new("2024-01-06", 0.001, "Interest"))
        .await
        .unwrap();
    engine
        .add_expense(NewExpense::new("2024-01-07", 40.002, "Food"))
        .await
        .unwrap();

    let report = engine.net_cashflow(&january()).await.unwrap();
    // The stored sum is 100.00500000000001, just above the midpoint.
    assert_eq!(report.total_income, 100.01);
    assert_eq!(report.start_date, "2024-01-01");
    assert_eq!(report.end_date, "2024-01-31");
    assert_eq!(report.total_expenses, 40.0);
    assert_eq!(report.net_cashflow, 60.0);
    assert_eq!(report.status, CashflowStatus::Positive);
}

#[tokio::test]
async fn net_cashflow_empty_ledgers() {
    let engine = engine_with_db().await;

    let report = engine.net_cashflow(&january()).await.unwrap();
    assert_eq!(report.total_income, 0.0);
    assert_eq!(report.total_expenses, 0.0);
    assert_eq!(report.net_cashflow, 0.0);
    assert_eq!(report.status, CashflowStatus::Positive);
}

#[tokio::test]
async fn net_cashflow_negative() {
    let engine = engine_with_db().await;

    engine
        .add_income(NewIncome::new("2024-01-05", 100.0, "Salary"))
        .await
        .unwrap();
    engine
        .add_expense(NewExpense::new("2024-01-07", 150.25, "Rent"))
        .await
        .unwrap();
    engine
        .add_expense(NewExpense::new("2024-02-07", 1000.0, "Rent"))
        .await
        .unwrap();

    let report = engine.net_cashflow(&january()).await.unwrap();
    assert_eq!(report.total_income, 100.0);
    assert_eq!(report.total_expenses, 150.25);
    assert_eq!(report.net_cashflow, -50.25);
    assert_eq!(report.status, CashflowStatus::Negative);
}

#[tokio::test]
async fn net_cashflow_zero_is_positive() {
    let engine = engine_with_db().await;

    engine
        .add_income(NewIncome::new("2024-01-05", 75.5, "Salary"))
        .await
        .unwrap();
    engine
        .add_expense(NewExpense::new("2024-01-07", 75.5, "Rent"))
        .await
        .unwrap();

    let report = engine.net_cashflow(&january()).await.unwrap();
    assert_eq!(report.net_cashflow, 0.0);
    assert_eq!(report.status, CashflowStatus::Positive);
}
