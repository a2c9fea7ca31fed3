//! Order types for the Ecwid REST API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::{EcwidDateTime, Id, ProductDimensions};

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    AwaitingPayment,
    Paid,
    Cancelled,
    Refunded,
    PartiallyRefunded,
    Incomplete,
    #[serde(other)]
    Unknown,
}

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentStatus {
    AwaitingProcessing,
    Processing,
    Shipped,
    Delivered,
    WillNotDeliver,
    Returned,
    ReadyForPickup,
    #[serde(other)]
    Unknown,
}

/// Coupon discount type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountCouponType {
    Abs,
    Percent,
    Shipping,
    AbsAndShipping,
    PercentAndShipping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountCouponStatus {
    Active,
    Paused,
    Expired,
    Usedup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountCouponUseLimit {
    Unlimited,
    Oncepercustomer,
    Single,
}

/// Products and categories a coupon applies to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountCouponCatalogLimit {
    #[serde(default)]
    pub products: Vec<Id>,
    #[serde(default)]
    pub categories: Vec<Id>,
}

/// Coupon applied to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCouponInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountCouponType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DiscountCouponStatus>,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub launch_date: EcwidDateTime,
    #[serde(default)]
    pub expiration_date: EcwidDateTime,
    #[serde(default)]
    pub total_limit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses_limit: Option<DiscountCouponUseLimit>,
    #[serde(default)]
    pub application_limit: String,
    #[serde(default)]
    pub creation_date: EcwidDateTime,
    #[serde(default)]
    pub order_count: u64,
    #[serde(default)]
    pub catalog_limit: DiscountCouponCatalogLimit,
}

/// Name and address of a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company_name: String,
    /// Address lines separated by `\n`
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub state_or_province_code: String,
    #[serde(default)]
    pub state_or_province_name: String,
    #[serde(default)]
    pub phone: String,
}

/// Shipping option selected by the customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOptionInfo {
    #[serde(default)]
    pub shipping_carrier_name: String,
    #[serde(default)]
    pub shipping_method_name: String,
    #[serde(default)]
    pub shipping_rate: f64,
    /// Either a number of days ("5") or a range ("4-9")
    #[serde(default)]
    pub estimated_transit_time: String,
    #[serde(default)]
    pub is_pickup: bool,
    #[serde(default)]
    pub pickup_instruction: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandlingFeeInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub description: String,
}

/// Discount applied to an order, coupons excluded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountInfo {
    #[serde(default)]
    pub value: f64,
    /// ABS or PERCENT
    #[serde(rename = "type", default)]
    pub kind: String,
    /// ON_TOTAL, ON_MEMBERSHIP, ON_TOTAL_AND_MEMBERSHIP or CUSTOM
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub order_total: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardStatus {
    #[serde(default)]
    pub avs_message: String,
    #[serde(default)]
    pub cvv_message: String,
}

/// File attached to a FILES option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderItemOptionFile {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub url: String,
}

/// Details of a selected option value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionInfo {
    #[serde(default)]
    pub selection_title: String,
    #[serde(default)]
    pub selection_modifier: f64,
    /// PERCENT or ABSOLUTE
    #[serde(default)]
    pub selection_modifier_type: String,
}

/// Product option value chosen by the customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderItemOption {
    #[serde(default)]
    pub name: String,
    /// CHOICE, CHOICES, TEXT, DATE or FILES
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub files: Vec<OrderItemOptionFile>,
    #[serde(default)]
    pub selections: Vec<SelectionInfo>,
}

/// Tax applied to one order item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemTax {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub tax_on_discounted_subtotal: f64,
    #[serde(default)]
    pub tax_on_shipping: f64,
    #[serde(default)]
    pub include_in_price: bool,
}

/// One line of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub product_id: Id,
    #[serde(default)]
    pub category_id: Id,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub product_price: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub shipping: f64,
    #[serde(default)]
    pub quantity_in_stock: u32,
    #[serde(default)]
    pub is_shipping_required: bool,
    #[serde(default)]
    pub track_quantity: bool,
    #[serde(default)]
    pub fixed_shipping_rate_only: bool,
    #[serde(default)]
    pub fixed_shipping_rate: f64,
    #[serde(default)]
    pub digital: bool,
    #[serde(default)]
    pub coupon_applied: bool,
    #[serde(default)]
    pub selected_options: Vec<OrderItemOption>,
    #[serde(default)]
    pub taxes: Vec<OrderItemTax>,
    #[serde(default)]
    pub dimensions: ProductDimensions,
}

/// Package the items are predicted to ship in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictedPackage {
    #[serde(flatten)]
    pub dimensions: ProductDimensions,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub declared_value: f64,
}

/// A refund made to an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundsInfo {
    #[serde(default)]
    pub date: EcwidDateTime,
    /// CP, API or External
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub amount: f64,
}

/// Tax applied to shipping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxOnShipping {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub total: f64,
}

/// Writable order fields, used by `order_update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_tax_exempt: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_tax_id_valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reversed_tax_applied: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referer_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_based_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_and_membership_based_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_referer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<EcwidDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_coupon: Option<DiscountCouponInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_person: Option<PersonInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_person: Option<PersonInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_option: Option<ShippingOptionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handling_fee: Option<HandlingFeeInfo>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub additional_info: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub payment_params: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discount_info: Vec<DiscountInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card_status: Option<CreditCardStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_admin_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<EcwidDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_marketing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_all_customer_notifications: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_fulfillment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_order_id: Option<String>,
}

/// An order as returned by `order_get` and order searches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(flatten)]
    pub fields: NewOrder,
    #[serde(rename = "orderNumber")]
    pub order_id: Id,
    #[serde(default)]
    pub vendor_order_number: String,
    #[serde(default)]
    pub usd_total: f64,
    #[serde(default)]
    pub update_date: EcwidDateTime,
    #[serde(default)]
    pub create_timestamp: i64,
    #[serde(default)]
    pub update_timestamp: i64,
    #[serde(default)]
    pub customer_group_id: Id,
    #[serde(default)]
    pub predicted_packages: Vec<PredictedPackage>,
    /// Free-form extra fields, at most 8 KB in total
    #[serde(default)]
    pub extra_fields: HashMap<String, String>,
    #[serde(default)]
    pub refunded_amount: f64,
    #[serde(default)]
    pub refunds: Vec<RefundsInfo>,
    #[serde(default)]
    pub referer_id: String,
    #[serde(default)]
    pub taxes_on_shipping: Vec<TaxOnShipping>,
}

impl std::ops::Deref for Order {
    type Target = NewOrder;

    fn deref(&self) -> &NewOrder {
        &self.fields
    }
}

impl std::ops::DerefMut for Order {
    fn deref_mut(&mut self) -> &mut NewOrder {
        &mut self.fields
    }
}

impl From<Order> for NewOrder {
    fn from(order: Order) -> Self {
        order.fields
    }
}
