//! Domain model: request and response payload shapes.
//!
//! These are the wire shapes the backend emits inside the
//! [`crate::ApiResponse`] envelope. The backend owns all business meaning;
//! the client treats them as data.

use serde::{Deserialize, Serialize};

/// A registered member, as listed by `/users/details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub mobile: u64,
    pub total_chits: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Payload for `/onboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOnboardRequest {
    pub name: String,
    pub total_chits: u32,
    pub mobile: u64,
}

/// `/onboard` response: the new user plus the auto-created chit reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardedUser {
    #[serde(flatten)]
    pub user: User,
    pub chit: serde_json::Value,
}

/// One member with full chit and loan history, from `/users/details/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub chit_payment_history: Vec<ChitPayment>,
    #[serde(default)]
    pub loan_details: Vec<Loan>,
}

/// One weekly chit installment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChitPayment {
    pub id: u64,
    pub created_at: String,
    pub user_id: String,
    pub chit_id: String,
    pub due_amount: f64,
    pub amount_paid: f64,
    pub balance: f64,
    pub weekly_installment: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<String>,
    pub is_paid: bool,
    #[serde(default)]
    pub transaction_history: Vec<Transaction>,
}

/// Payload for `/pay/chit-funds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChitPaymentRequest {
    pub user_id: String,
    pub chit_id: String,
    pub amount: f64,
    pub payment_mode: String,
}

/// Payload for `/chits/deactive`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChitDeactivateRequest {
    pub chit_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// `/update/weekly-chits` response: the billing-cycle advance summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyChitsUpdate {
    pub message: String,
    pub current_week: u32,
    pub payments_created: u32,
    #[serde(default)]
    pub chits_processed: Vec<ChitPayment>,
}

/// A borrowed-amount record with tracked balance and payment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: u64,
    pub created_at: String,
    pub loan_id: String,
    pub is_active: bool,
    pub user_id: String,
    pub interest_rate: String,
    pub interest_type: String,
    pub borrowed_amount: f64,
    pub balance: f64,
    pub amount_paid: f64,
    #[serde(default)]
    pub transaction_history: Vec<Transaction>,
    pub is_paid: bool,
}

/// Payload for `/loan/apply`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplicationRequest {
    pub user_id: String,
    pub interest_rate: String,
    pub interest_type: String,
    pub borrowed_amount: f64,
}

/// Payload for `/loan/pay`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPaymentRequest {
    pub user_id: String,
    pub loan_id: String,
    pub amount: f64,
    pub payment_mode: String,
}

/// Payload for `/loan/deactive`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDeactivateRequest {
    pub loan_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One entry in a payment's transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub timestamp: String,
    pub amount: f64,
    pub mode: String,
}

/// System-wide chit and loan aggregates from `/analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub total_persons_applied_for_chits: u32,
    pub total_persons_applied_for_loans: u32,
    pub total_number_of_active_chits: u32,
    pub total_pending_loans: u32,
    pub total_pending_chits: u32,
    pub amount_in_chits: f64,
    pub amount_pending_to_be_paid_chits: f64,
    pub amount_provided_for_loans: f64,
    pub amount_paid_for_loans: f64,
    pub count_of_unpaid_chits: u32,
    pub count_of_unpaid_loans: u32,
}

/// Liveness and version info from `/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: ServiceStatus,
    pub timestamp: String,
    pub uptime: f64,
    pub environment: String,
    pub version: String,
}

/// Backend-reported liveness state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Error,
}
