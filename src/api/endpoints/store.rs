//! Store profile endpoint.

use crate::api::client::EcwidClient;
use crate::api::error::ApiResult;
use crate::api::response::decode;
use crate::api::types::StoreProfile;

const PROFILE_PATH: &str = "/profile";

impl EcwidClient {
    /// Get basic information about the store: settings, location, owner account.
    pub async fn store_profile_get(&self) -> ApiResult<StoreProfile> {
        let response = self.get(PROFILE_PATH).send().await?;
        decode(&response)
    }
}
