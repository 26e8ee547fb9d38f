//! Loan application and payment endpoints.

use serde_json::Value;

use crate::api::{ApiClient, ApiResponse};
use crate::model::{Loan, LoanApplicationRequest, LoanDeactivateRequest, LoanPaymentRequest};

/// Loan lifecycle: application, repayment, closure.
#[derive(Debug, Clone)]
pub struct LoanService {
    api: ApiClient,
}

impl LoanService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Apply for a new loan.
    pub async fn apply_for_loan(&self, request: &LoanApplicationRequest) -> ApiResponse<Loan> {
        self.api.post("/loan/apply", Some(request)).await
    }

    /// Record a repayment against a loan.
    pub async fn make_loan_payment(&self, request: &LoanPaymentRequest) -> ApiResponse<Loan> {
        self.api.post("/loan/pay", Some(request)).await
    }

    /// Close a loan; response payload is passed through opaquely.
    pub async fn deactivate_loan(&self, request: &LoanDeactivateRequest) -> ApiResponse<Value> {
        self.api.post("/loan/deactive", Some(request)).await
    }
}
