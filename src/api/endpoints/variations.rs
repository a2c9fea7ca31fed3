//! Product variation ("combination") endpoints.

use crate::api::client::EcwidClient;
use crate::api::error::ApiResult;
use crate::api::response::{decode, interpret_update};
use crate::api::types::{Id, NewProductVariation, ProductVariation};

const COMBINATIONS_PATH: &str = "/products/{productId}/combinations";
const COMBINATION_PATH: &str = "/products/{productId}/combinations/{combinationId}";

impl EcwidClient {
    // =========================================================================
    // Product variations
    // =========================================================================

    /// Get all variations of a product.
    pub async fn product_variations_get(
        &self,
        product_id: impl Into<Id>,
    ) -> ApiResult<Vec<ProductVariation>> {
        let response = self
            .get(COMBINATIONS_PATH)
            .path_id("productId", product_id)
            .send()
            .await?;
        decode(&response)
    }

    /// Get one variation of a product.
    pub async fn product_variation_get(
        &self,
        product_id: impl Into<Id>,
        variation_id: impl Into<Id>,
    ) -> ApiResult<ProductVariation> {
        let response = self
            .get(COMBINATION_PATH)
            .path_id("productId", product_id)
            .path_id("combinationId", variation_id)
            .send()
            .await?;
        decode(&response)
    }

    /// Update one variation of a product.
    pub async fn product_variation_update(
        &self,
        product_id: impl Into<Id>,
        variation_id: impl Into<Id>,
        variation: &NewProductVariation,
    ) -> ApiResult<()> {
        let response = self
            .put(COMBINATION_PATH)
            .path_id("productId", product_id)
            .path_id("combinationId", variation_id)
            .json(variation)
            .send()
            .await?;
        interpret_update(&response)
    }
}
