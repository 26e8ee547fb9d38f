//! Chit billing-cycle and payment endpoints.

use serde_json::Value;

use crate::api::{ApiClient, ApiResponse};
use crate::model::{ChitDeactivateRequest, ChitPayment, ChitPaymentRequest, WeeklyChitsUpdate};

/// Chit installment payments and the weekly billing cycle.
#[derive(Debug, Clone)]
pub struct ChitService {
    api: ApiClient,
}

impl ChitService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Advance the weekly billing cycle for all active chits.
    pub async fn update_weekly_chits(&self) -> ApiResponse<WeeklyChitsUpdate> {
        self.api
            .post::<WeeklyChitsUpdate, ()>("/update/weekly-chits", None)
            .await
    }

    /// Record a payment against a chit installment.
    pub async fn make_chit_payment(&self, request: &ChitPaymentRequest) -> ApiResponse<ChitPayment> {
        self.api.post("/pay/chit-funds", Some(request)).await
    }

    /// Close a chit. The backend decides what closing entails; the
    /// response payload is passed through opaquely.
    pub async fn deactivate_chit(&self, request: &ChitDeactivateRequest) -> ApiResponse<Value> {
        self.api.post("/chits/deactive", Some(request)).await
    }
}
