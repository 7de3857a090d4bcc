//! Reimbursement domain entity and related types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

use super::account::Account;

/// Reimbursement workflow status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReimbursementStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Paid,
}

impl ReimbursementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReimbursementStatus::Pending => "PENDING",
            ReimbursementStatus::Approved => "APPROVED",
            ReimbursementStatus::Rejected => "REJECTED",
            ReimbursementStatus::Paid => "PAID",
        }
    }
}

impl From<&str> for ReimbursementStatus {
    fn from(s: &str) -> Self {
        match s {
            "APPROVED" => ReimbursementStatus::Approved,
            "REJECTED" => ReimbursementStatus::Rejected,
            "PAID" => ReimbursementStatus::Paid,
            _ => ReimbursementStatus::Pending,
        }
    }
}

impl fmt::Display for ReimbursementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reimbursement record.
///
/// Used both as the request body and the response body: `id` is absent on
/// create and required on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Reimbursement {
    /// Store-assigned identifier
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Owning account
    #[schema(example = 2)]
    pub account_id: i64,
    #[serde(default)]
    #[validate(length(max = 255, message = "Description must be at most 255 characters"))]
    #[schema(example = "Taxi to the airport")]
    pub description: Option<String>,
    #[schema(value_type = String, example = "125.50")]
    pub amount: Decimal,
    #[schema(example = "2024-03-18")]
    pub date: NaiveDate,
    #[serde(default)]
    pub status: ReimbursementStatus,
}

impl Reimbursement {
    /// Whether `account` owns this record
    pub fn is_owned_by(&self, account: &Account) -> bool {
        self.account_id == account.id
    }
}
