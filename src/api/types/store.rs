//! Store profile types.

use serde::{Deserialize, Serialize};

/// Basic information about an Ecwid store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreProfile {
    #[serde(default)]
    pub general_info: GeneralInfo,
    #[serde(default)]
    pub account: Account,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralInfo {
    #[serde(default)]
    pub store_id: u64,
    #[serde(default)]
    pub store_url: String,
    #[serde(default)]
    pub starter_site: InstantSiteInfo,
}

/// Instant site of the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstantSiteInfo {
    #[serde(default)]
    pub ecwid_subdomain: String,
    #[serde(default)]
    pub custom_domain: String,
    #[serde(default)]
    pub generated_url: String,
    #[serde(default)]
    pub store_logo_url: String,
}

/// Store owner's account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub account_nick_name: String,
    #[serde(default)]
    pub account_email: String,
    #[serde(default)]
    pub available_features: Vec<String>,
    #[serde(default)]
    pub white_label: bool,
}
