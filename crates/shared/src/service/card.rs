use crate::{
    abstract_trait::{CardSynthServiceTrait, DynBinLookup},
    config::GeneratorConfig,
    domain::{
        requests::{GenerateCardRequest, ValidateCardRequest},
        responses::{ApiResponse, CardRecordResponse, GeneratedCardResponse},
    },
    errors::{CardError, ServiceError, format_validation_errors},
    model::{Bin, BinMetadata, CardRecord},
    utils::{current_year, generate_card_number, parse_card_record, random_cvc, random_expiry},
};
use async_trait::async_trait;
use rand::rng;
use tracing::{error, info, warn};
use validator::Validate;

pub struct CardSynthService {
    config: GeneratorConfig,
    lookup: DynBinLookup,
}

impl CardSynthService {
    pub fn new(config: GeneratorConfig, lookup: DynBinLookup) -> Self {
        Self { config, lookup }
    }

    fn synthesize(&self, bin: &Bin) -> Result<CardRecord, CardError> {
        let mut rng = rng();

        let number = generate_card_number(
            bin,
            self.config.card_length,
            self.config.max_attempts,
            &mut rng,
        )?;
        let expiry = random_expiry(&mut rng, current_year());
        let cvc = random_cvc(&mut rng);

        info!("🃏 Generated card {} for bin={bin}", number.masked());

        Ok(CardRecord::new(&number, expiry, &cvc))
    }
}

#[async_trait]
impl CardSynthServiceTrait for CardSynthService {
    async fn generate(
        &self,
        req: &GenerateCardRequest,
    ) -> Result<ApiResponse<GeneratedCardResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::InvalidBin(error_msg));
        }

        let bin = Bin::parse(&req.bin).map_err(|e| ServiceError::InvalidBin(e.to_string()))?;

        // rng is thread-local and must not live across the lookup await
        let record = self.synthesize(&bin).map_err(|e| {
            error!("💥 Failed to generate card for bin={bin}: {e}");
            ServiceError::Card(e)
        })?;

        let metadata = match self.lookup.fetch(&bin).await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("🔍 BIN lookup failed for bin={bin}: {e}, using unknown metadata");
                BinMetadata::default()
            }
        };

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ Card generated successfully!".into(),
            data: GeneratedCardResponse::new(bin.as_str(), &record, &metadata),
        })
    }

    fn validate(
        &self,
        req: &ValidateCardRequest,
    ) -> Result<ApiResponse<CardRecordResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::InvalidFormat(error_msg));
        }

        let record = parse_card_record(&req.record).map_err(|e| {
            warn!("Rejected card record: {e}");
            match e {
                CardError::InvalidFormat(input) => ServiceError::InvalidFormat(input),
                other => ServiceError::Card(other),
            }
        })?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ Card record is well formed".into(),
            data: CardRecordResponse::from(record),
        })
    }
}
