use chrono::Utc;

use engine::{
    BudgetStatus, DeletionWorkflow, Expense, ExpenseSnapshot, ExpenseViews, Pagination, evaluate,
    summarize,
};

fn expense(id: &str, category: &str, amount: f64) -> Expense {
    Expense {
        id: id.to_string(),
        item: format!("item-{id}"),
        category: category.to_string(),
        amount,
        date: Utc::now(),
    }
}

#[test]
fn summary_and_budget_agree_on_an_exceeded_month() {
    let expenses = [
        expense("1", "Food", 100.0),
        expense("2", "Food", 50.0),
        expense("3", "Travel", 200.0),
    ];

    let summary = summarize(&expenses);
    assert_eq!(summary.amount_for("Food"), Some(150.0));
    assert_eq!(summary.amount_for("Travel"), Some(200.0));
    assert_eq!(summary.total_spend(), 350.0);

    let status = evaluate(summary.total_spend(), 300.0);
    assert_eq!(status, BudgetStatus::Exceeded);
    assert_eq!(status.remaining(), None);
}

#[test]
fn confirmed_delete_flows_through_views_summary_and_pagination() {
    let mut views = ExpenseViews::new();
    views.apply_snapshot(ExpenseSnapshot {
        page_view: vec![expense("a", "Food", 60.0)],
        full_view: vec![
            expense("a", "Food", 60.0),
            expense("b", "Food", 40.0),
            expense("c", "Travel", 80.0),
            expense("d", "Travel", 20.0),
            expense("e", "Misc", 10.0),
            expense("f", "Misc", 5.0),
        ],
        total_count: 6,
    });

    let mut pagination = Pagination::new(1);
    pagination.set_total_count(views.total_count());
    while pagination.next().is_some() {}
    assert_eq!(pagination.page(), 6);

    let mut workflow = DeletionWorkflow::new();
    assert!(workflow.select("a"));
    let target = workflow.confirm().unwrap();

    // Server confirmed: both views mutate in one step.
    assert!(views.remove(&target));
    workflow.finish();

    let summary = summarize(views.full_view());
    assert_eq!(summary.amount_for("Food"), Some(40.0));
    assert_eq!(summary.total_spend(), 155.0);

    // Count shrank below the current page: a clamp emits the refetch trigger.
    assert_eq!(pagination.set_total_count(views.total_count()), Some(5));

    // The budget recomputation sees the post-delete total.
    let status = evaluate(summary.total_spend(), 200.0);
    assert_eq!(status.remaining(), Some(45.0));
}

#[test]
fn cancelled_delete_leaves_every_view_untouched() {
    let mut views = ExpenseViews::new();
    views.apply_snapshot(ExpenseSnapshot {
        page_view: vec![expense("a", "Food", 60.0)],
        full_view: vec![expense("a", "Food", 60.0), expense("b", "Travel", 40.0)],
        total_count: 2,
    });

    let mut workflow = DeletionWorkflow::new();
    workflow.select("a");
    workflow.cancel();

    assert_eq!(workflow.confirm(), None);
    assert_eq!(views.total_count(), 2);
    assert_eq!(summarize(views.full_view()).total_spend(), 100.0);
}
