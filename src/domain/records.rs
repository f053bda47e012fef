// ============================================================================
// Budget Resource Records
// Budgets, accounts and categories as consumed by the report layer
// ============================================================================

use crate::numeric::Money;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A budget owned by the authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Budget {
    pub id: Uuid,
    pub name: String,

    /// Last server-side modification, when the service reports one
    pub last_modified_on: Option<DateTime<Utc>>,
}

impl Budget {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            last_modified_on: None,
        }
    }
}

/// An account within a budget
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Account {
    pub id: Uuid,
    pub name: String,

    /// Current balance
    pub balance: Money,

    /// Closed accounts are kept for history but excluded from totals
    pub closed: bool,
}

impl Account {
    pub fn new(id: Uuid, name: impl Into<String>, balance: Money) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            closed: false,
        }
    }
}

/// A spending category within a budget
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Category {
    pub id: Uuid,
    pub name: String,

    /// Amount available in the category
    pub balance: Money,

    /// Amount assigned for the current month
    pub budgeted: Money,

    /// Hidden categories are excluded from totals
    pub hidden: bool,
}

impl Category {
    pub fn new(id: Uuid, name: impl Into<String>, balance: Money, budgeted: Money) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            budgeted,
            hidden: false,
        }
    }

    /// Amount spent against the assignment (`budgeted - balance`).
    ///
    /// Positive for outflows, the opposite sign of the service's own
    /// `activity` field.
    pub fn spent(&self) -> crate::numeric::MoneyResult<Money> {
        self.budgeted.checked_sub(self.balance)
    }
}
