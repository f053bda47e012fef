// ============================================================================
// Basic Usage Example
// ============================================================================

use budget_view::prelude::*;

const BUDGETS: &str = r#"{"data": {
    "budgets": [{"id": "6ee704d9-ee24-4c36-b1a6-cb8ccf6a216c", "name": "My Budget"}],
    "default_budget": null
}}"#;

const ACCOUNTS: &str = r#"{"data": {"accounts": [
    {"id": "0c8a8a7e-1a4b-4c39-9b1c-0f3c1b2d7a01", "name": "Checking", "balance": 245080},
    {"id": "0c8a8a7e-1a4b-4c39-9b1c-0f3c1b2d7a02", "name": "Credit Card", "balance": -31295},
    {"id": "0c8a8a7e-1a4b-4c39-9b1c-0f3c1b2d7a03", "name": "Imported", "balance": 12.5}
]}}"#;

const CATEGORIES: &str = r#"{"data": {"category_groups": [
    {"name": "Bills", "categories": [
        {"id": "9f1d1c52-5a6e-4b8e-8d1e-3a0a2b1c0d01", "name": "Rent", "balance": 0, "budgeted": 120000}
    ]},
    {"name": "Everyday", "categories": [
        {"id": "9f1d1c52-5a6e-4b8e-8d1e-3a0a2b1c0d02", "name": "Groceries", "balance": 8030, "budgeted": 40000},
        {"id": "9f1d1c52-5a6e-4b8e-8d1e-3a0a2b1c0d03", "name": "Coffee", "balance": -450, "budgeted": 2000}
    ]}
]}}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    budget_view::utils::init_logging(tracing::Level::DEBUG);

    println!("=== Budget View Example ===\n");

    let session = Session::new(ClientConfig::new("example-token"))?;
    println!("Budgets endpoint: {}", session.budgets_url());

    let budgets = decode_budgets(BUDGETS)?;
    let budget = budgets.primary().ok_or("no budgets")?;
    println!("Using budget {} ({})\n", budget.name, budget.id);

    let accounts = decode_accounts(ACCOUNTS)?;
    for skipped in &accounts.skipped {
        println!(
            "Skipped account #{} ({}): {}",
            skipped.index, skipped.field, skipped.error
        );
    }
    let categories = decode_categories(CATEGORIES)?;

    println!(
        "\n{}\n",
        render_report(&budgets.budgets, &accounts.records, &categories.records)
    );

    let summary = BudgetSummary::from_records(&accounts.records, &categories.records)?;
    println!("=== Summary ===\n{}", summary);
    println!("Unassigned: {}", summary.unassigned()?);

    Ok(())
}
