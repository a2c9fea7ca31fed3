//! Product image and gallery endpoints.

use std::path::Path;

use crate::api::client::{ApiRequest, EcwidClient};
use crate::api::error::ApiResult;
use crate::api::response::{interpret_create, interpret_delete, interpret_delete_one};
use crate::api::types::Id;

const IMAGE_PATH: &str = "/products/{productId}/image";
const GALLERY_PATH: &str = "/products/{productId}/gallery";
const GALLERY_IMAGE_PATH: &str = "/products/{productId}/gallery/{imageId}";

/// Content type sent for uploaded image bytes.
pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

const EXTERNAL_URL_PARAM: &str = "externalUrl";
const FILE_NAME_PARAM: &str = "fileName";

fn with_title<'a>(request: ApiRequest<'a>, title: Option<&str>) -> ApiRequest<'a> {
    match title.filter(|t| !t.is_empty()) {
        Some(title) => request.query(FILE_NAME_PARAM, title),
        None => request,
    }
}

impl EcwidClient {
    // =========================================================================
    // Main image
    // =========================================================================

    /// Upload the main image of a product and return the image id.
    pub async fn product_image_upload(
        &self,
        product_id: impl Into<Id>,
        image: impl Into<Vec<u8>>,
    ) -> ApiResult<u64> {
        let response = self
            .post(IMAGE_PATH)
            .path_id("productId", product_id)
            .bytes(image, IMAGE_CONTENT_TYPE)
            .send()
            .await?;
        interpret_create(&response)
    }

    /// Upload the main image of a product from a local file.
    pub async fn product_image_upload_file(
        &self,
        product_id: impl Into<Id>,
        path: impl AsRef<Path>,
    ) -> ApiResult<u64> {
        let image = tokio::fs::read(path).await?;
        self.product_image_upload(product_id, image).await
    }

    /// Let Ecwid fetch the main image of a product from `image_url`.
    pub async fn product_image_upload_by_url(
        &self,
        product_id: impl Into<Id>,
        image_url: &str,
    ) -> ApiResult<u64> {
        let response = self
            .post(IMAGE_PATH)
            .path_id("productId", product_id)
            .query(EXTERNAL_URL_PARAM, image_url)
            .send()
            .await?;
        interpret_create(&response)
    }

    /// Remove the main image of a product.
    pub async fn product_image_delete(&self, product_id: impl Into<Id>) -> ApiResult<()> {
        let response = self
            .delete(IMAGE_PATH)
            .path_id("productId", product_id)
            .send()
            .await?;
        interpret_delete_one(&response)
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    /// Add an image to the product gallery and return its id.
    ///
    /// `title` is sent as `fileName` when non-empty.
    pub async fn product_gallery_upload(
        &self,
        product_id: impl Into<Id>,
        image: impl Into<Vec<u8>>,
        title: Option<&str>,
    ) -> ApiResult<u64> {
        let request = self
            .post(GALLERY_PATH)
            .path_id("productId", product_id)
            .bytes(image, IMAGE_CONTENT_TYPE);
        let response = with_title(request, title).send().await?;
        interpret_create(&response)
    }

    /// Add an image from a local file to the product gallery.
    pub async fn product_gallery_upload_file(
        &self,
        product_id: impl Into<Id>,
        path: impl AsRef<Path>,
        title: Option<&str>,
    ) -> ApiResult<u64> {
        let image = tokio::fs::read(path).await?;
        self.product_gallery_upload(product_id, image, title).await
    }

    /// Let Ecwid fetch a gallery image from `image_url`.
    pub async fn product_gallery_upload_by_url(
        &self,
        product_id: impl Into<Id>,
        image_url: &str,
        title: Option<&str>,
    ) -> ApiResult<u64> {
        let request = self
            .post(GALLERY_PATH)
            .path_id("productId", product_id)
            .query(EXTERNAL_URL_PARAM, image_url);
        let response = with_title(request, title).send().await?;
        interpret_create(&response)
    }

    /// Remove one gallery image.
    pub async fn product_gallery_delete(
        &self,
        product_id: impl Into<Id>,
        image_id: impl Into<Id>,
    ) -> ApiResult<()> {
        let response = self
            .delete(GALLERY_IMAGE_PATH)
            .path_id("productId", product_id)
            .path_id("imageId", image_id)
            .send()
            .await?;
        interpret_delete_one(&response)
    }

    /// Remove every gallery image and return how many were deleted.
    pub async fn product_gallery_delete_all(&self, product_id: impl Into<Id>) -> ApiResult<u64> {
        let response = self
            .delete(GALLERY_PATH)
            .path_id("productId", product_id)
            .send()
            .await?;
        interpret_delete(&response)
    }
}
