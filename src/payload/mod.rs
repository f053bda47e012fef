// ============================================================================
// Payload Decoding
// Locates money fields in service responses and hands their raw tokens to
// the fixed-point decoder
// ============================================================================
//
// Responses are wrapped as {"data": {...}} on success and {"error": {...}} on
// failure. Amount fields are captured as raw JSON text so that the exact
// token bytes reach Money::decode_wire. A record whose amount does not decode
// is skipped and reported; the rest of the response is still returned.

use crate::domain::{Account, Budget, Category};
use crate::numeric::{Money, MoneyError, MoneyResult};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// Errors and Results
// ============================================================================

/// Failures that abort decoding of a whole response
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Body is not JSON or does not have the expected shape
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Service answered with an error object
    #[error("service error {id} ({name}): {detail}")]
    Service {
        id: String,
        name: String,
        detail: String,
    },

    /// Neither "data" nor "error" was present
    #[error("payload has no data")]
    MissingData,
}

/// A record left out of the result because one of its amounts was invalid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position of the record in the response
    pub index: usize,
    pub id: Uuid,
    /// Name of the offending field
    pub field: &'static str,
    pub error: MoneyError,
}

/// Records decoded from a response together with the ones that were skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRecord>,
}

impl<T> Decoded<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Budgets listed for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetList {
    pub budgets: Vec<Budget>,
    pub default_budget: Option<Budget>,
}

impl BudgetList {
    /// The default budget if the service named one, otherwise the first listed.
    pub fn primary(&self) -> Option<&Budget> {
        self.default_budget.as_ref().or_else(|| self.budgets.first())
    }
}

// ============================================================================
// Wire Shapes
// ============================================================================

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    error: Option<ServiceError>,
}

#[derive(Deserialize)]
struct ServiceError {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    detail: String,
}

#[derive(Deserialize)]
struct BudgetsData {
    budgets: Vec<WireBudget>,
    #[serde(default)]
    default_budget: Option<WireBudget>,
}

#[derive(Deserialize)]
struct WireBudget {
    id: Uuid,
    name: String,
    #[serde(default)]
    last_modified_on: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct AccountsData {
    accounts: Vec<WireAccount>,
}

#[derive(Deserialize)]
struct WireAccount {
    id: Uuid,
    name: String,
    balance: Box<RawValue>,
    #[serde(default)]
    closed: bool,
    #[serde(default)]
    deleted: bool,
}

#[derive(Deserialize)]
struct CategoriesData {
    category_groups: Vec<WireCategoryGroup>,
}

#[derive(Deserialize)]
struct WireCategoryGroup {
    categories: Vec<WireCategory>,
}

#[derive(Deserialize)]
struct WireCategory {
    id: Uuid,
    name: String,
    balance: Box<RawValue>,
    budgeted: Box<RawValue>,
    #[serde(default)]
    hidden: bool,
    #[serde(default)]
    deleted: bool,
}

impl From<WireBudget> for Budget {
    fn from(wire: WireBudget) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            last_modified_on: wire.last_modified_on,
        }
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode an amount from the raw text of a JSON value.
pub fn decode_amount(raw: &RawValue) -> MoneyResult<Money> {
    Money::decode_wire(raw.get().as_bytes())
}

fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T, PayloadError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    if let Some(error) = envelope.error {
        return Err(PayloadError::Service {
            id: error.id,
            name: error.name,
            detail: error.detail,
        });
    }
    envelope.data.ok_or(PayloadError::MissingData)
}

fn skip(index: usize, id: Uuid, field: &'static str, error: MoneyError) -> SkippedRecord {
    tracing::warn!(index, %id, field, %error, "skipping record with undecodable amount");
    SkippedRecord {
        index,
        id,
        field,
        error,
    }
}

/// Decode the response of the budget listing endpoint.
pub fn decode_budgets(body: &str) -> Result<BudgetList, PayloadError> {
    let data: BudgetsData = unwrap_envelope(body)?;
    let list = BudgetList {
        budgets: data.budgets.into_iter().map(Budget::from).collect(),
        default_budget: data.default_budget.map(Budget::from),
    };
    tracing::debug!(count = list.budgets.len(), "decoded budgets");
    Ok(list)
}

/// Decode the response of the account listing endpoint.
///
/// Deleted accounts are dropped; accounts with an invalid balance are skipped.
pub fn decode_accounts(body: &str) -> Result<Decoded<Account>, PayloadError> {
    let data: AccountsData = unwrap_envelope(body)?;
    let mut decoded = Decoded::new();

    for (index, wire) in data.accounts.into_iter().enumerate() {
        if wire.deleted {
            continue;
        }
        match decode_amount(&wire.balance) {
            Ok(balance) => decoded.records.push(Account {
                id: wire.id,
                name: wire.name,
                balance,
                closed: wire.closed,
            }),
            Err(error) => decoded.skipped.push(skip(index, wire.id, "balance", error)),
        }
    }

    tracing::debug!(
        count = decoded.records.len(),
        skipped = decoded.skipped.len(),
        "decoded accounts"
    );
    Ok(decoded)
}

/// Decode the response of the category listing endpoint.
///
/// Categories of all groups are flattened in response order. `index` in a
/// skipped record counts across groups.
pub fn decode_categories(body: &str) -> Result<Decoded<Category>, PayloadError> {
    let data: CategoriesData = unwrap_envelope(body)?;
    let mut decoded = Decoded::new();

    let categories = data
        .category_groups
        .into_iter()
        .flat_map(|group| group.categories);

    for (index, wire) in categories.enumerate() {
        if wire.deleted {
            continue;
        }
        let balance = match decode_amount(&wire.balance) {
            Ok(balance) => balance,
            Err(error) => {
                decoded.skipped.push(skip(index, wire.id, "balance", error));
                continue;
            }
        };
        let budgeted = match decode_amount(&wire.budgeted) {
            Ok(budgeted) => budgeted,
            Err(error) => {
                decoded.skipped.push(skip(index, wire.id, "budgeted", error));
                continue;
            }
        };
        decoded.records.push(Category {
            id: wire.id,
            name: wire.name,
            balance,
            budgeted,
            hidden: wire.hidden,
        });
    }

    tracing::debug!(
        count = decoded.records.len(),
        skipped = decoded.skipped.len(),
        "decoded categories"
    );
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID_A: &str = "11111111-1111-1111-1111-111111111111";
    const ID_B: &str = "22222222-2222-2222-2222-222222222222";

    #[test]
    fn test_decode_budgets() {
        let body = format!(
            r#"{{"data": {{
                "budgets": [
                    {{"id": "{ID_A}", "name": "Household", "last_modified_on": "2024-03-01T12:00:00Z"}},
                    {{"id": "{ID_B}", "name": "Travel"}}
                ],
                "default_budget": {{"id": "{ID_B}", "name": "Travel"}}
            }}}}"#
        );

        let list = decode_budgets(&body).unwrap();
        assert_eq!(list.budgets.len(), 2);
        assert_eq!(list.budgets[0].name, "Household");
        assert!(list.budgets[0].last_modified_on.is_some());
        assert_eq!(list.primary().unwrap().name, "Travel");
    }

    #[test]
    fn test_primary_falls_back_to_first() {
        let body = format!(
            r#"{{"data": {{"budgets": [{{"id": "{ID_A}", "name": "Household"}}], "default_budget": null}}}}"#
        );
        let list = decode_budgets(&body).unwrap();
        assert_eq!(list.primary().unwrap().name, "Household");
    }

    #[test]
    fn test_decode_accounts() {
        let body = format!(
            r#"{{"data": {{"accounts": [
                {{"id": "{ID_A}", "name": "Checking", "balance": 123450, "closed": false}},
                {{"id": "{ID_B}", "name": "Savings", "balance": 0, "closed": true}}
            ]}}}}"#
        );

        let decoded = decode_accounts(&body).unwrap();
        assert!(decoded.is_complete());
        assert_eq!(decoded.records.len(), 2);
        assert_eq!(decoded.records[0].balance, Money::new(1234, 50).unwrap());
        assert_eq!(decoded.records[1].balance, Money::ZERO);
        assert!(decoded.records[1].closed);
    }

    #[test]
    fn test_bad_amount_skips_only_that_record() {
        let body = format!(
            r#"{{"data": {{"accounts": [
                {{"id": "{ID_A}", "name": "Broken", "balance": 12.5}},
                {{"id": "{ID_B}", "name": "Fine", "balance": 250}}
            ]}}}}"#
        );

        let decoded = decode_accounts(&body).unwrap();
        assert!(!decoded.is_complete());
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.records[0].name, "Fine");

        let skipped = &decoded.skipped[0];
        assert_eq!(skipped.index, 0);
        assert_eq!(skipped.field, "balance");
        assert!(skipped.error.is_decode_error());
    }

    #[test]
    fn test_deleted_accounts_are_dropped() {
        let body = format!(
            r#"{{"data": {{"accounts": [
                {{"id": "{ID_A}", "name": "Old", "balance": 100, "deleted": true}}
            ]}}}}"#
        );
        let decoded = decode_accounts(&body).unwrap();
        assert!(decoded.records.is_empty());
        assert!(decoded.is_complete());
    }

    #[test]
    fn test_decode_categories_flattens_groups() {
        let body = format!(
            r#"{{"data": {{"category_groups": [
                {{"name": "Bills", "categories": [
                    {{"id": "{ID_A}", "name": "Rent", "balance": 0, "budgeted": 150000}}
                ]}},
                {{"name": "Fun", "categories": [
                    {{"id": "{ID_B}", "name": "Games", "balance": -1250, "budgeted": "oops", "hidden": true}},
                    {{"id": "{ID_B}", "name": "Books", "balance": 50, "budgeted": 50}}
                ]}}
            ]}}}}"#
        );

        let decoded = decode_categories(&body).unwrap();
        let names: Vec<_> = decoded.records.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Rent", "Books"]);
        assert_eq!(decoded.records[0].budgeted.to_string(), "1500.00");
        assert_eq!(decoded.records[1].balance.to_string(), "0.50");

        assert_eq!(decoded.skipped.len(), 1);
        assert_eq!(decoded.skipped[0].index, 1);
        assert_eq!(decoded.skipped[0].field, "budgeted");
    }

    #[test]
    fn test_service_error() {
        let body = r#"{"error": {"id": "401", "name": "unauthorized", "detail": "Unauthorized"}}"#;
        match decode_accounts(body) {
            Err(PayloadError::Service { id, name, .. }) => {
                assert_eq!(id, "401");
                assert_eq!(name, "unauthorized");
            }
            other => panic!("expected service error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_payloads() {
        assert!(matches!(decode_budgets("not json"), Err(PayloadError::Json(_))));
        assert!(matches!(decode_budgets("{}"), Err(PayloadError::MissingData)));
        assert!(matches!(
            decode_accounts(r#"{"data": {"accounts": [{"name": "no id", "balance": 1}]}}"#),
            Err(PayloadError::Json(_))
        ));
    }
}
