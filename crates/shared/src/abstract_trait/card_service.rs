use crate::{
    domain::{
        requests::{GenerateCardRequest, ValidateCardRequest},
        responses::{ApiResponse, CardRecordResponse, GeneratedCardResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardSynthService = Arc<dyn CardSynthServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardSynthServiceTrait {
    async fn generate(
        &self,
        req: &GenerateCardRequest,
    ) -> Result<ApiResponse<GeneratedCardResponse>, ServiceError>;

    fn validate(
        &self,
        req: &ValidateCardRequest,
    ) -> Result<ApiResponse<CardRecordResponse>, ServiceError>;
}
