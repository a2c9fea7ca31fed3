//! Product type ("class") endpoints.

use crate::api::client::EcwidClient;
use crate::api::error::ApiResult;
use crate::api::response::{decode, interpret_create, interpret_delete_one, interpret_update};
use crate::api::types::{Id, ProductType};

const CLASSES_PATH: &str = "/classes";
const CLASS_PATH: &str = "/classes/{classId}";

impl EcwidClient {
    // =========================================================================
    // Product types
    // =========================================================================

    /// Get all product types of the store.
    pub async fn product_types_get(&self) -> ApiResult<Vec<ProductType>> {
        let response = self.get(CLASSES_PATH).send().await?;
        decode(&response)
    }

    /// Get a product type with its attributes.
    pub async fn product_type_get(&self, class_id: impl Into<Id>) -> ApiResult<ProductType> {
        let response = self
            .get(CLASS_PATH)
            .path_id("classId", class_id)
            .send()
            .await?;
        decode(&response)
    }

    /// Create a product type and return its id.
    pub async fn product_type_add(&self, product_type: &ProductType) -> ApiResult<u64> {
        let response = self.post(CLASSES_PATH).json(product_type).send().await?;
        interpret_create(&response)
    }

    /// Update a product type.
    ///
    /// Attributes missing from `product_type` are removed from the type.
    pub async fn product_type_update(
        &self,
        class_id: impl Into<Id>,
        product_type: &ProductType,
    ) -> ApiResult<()> {
        let response = self
            .put(CLASS_PATH)
            .path_id("classId", class_id)
            .json(product_type)
            .send()
            .await?;
        interpret_update(&response)
    }

    /// Delete a product type. Its products move to the General type.
    pub async fn product_type_delete(&self, class_id: impl Into<Id>) -> ApiResult<()> {
        let response = self
            .delete(CLASS_PATH)
            .path_id("classId", class_id)
            .send()
            .await?;
        interpret_delete_one(&response)
    }
}
