//! Domain types for the CHIP gateway API
//!
//! The same structs serve as request payloads and response models.
//! Server-assigned fields are `Option` and skipped during
//! serialization when unset, so a field the caller never touched does
//! not reach the wire, not even as `null`. Unknown response keys are
//! ignored everywhere, keeping the models forward-compatible with
//! server-side additions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Payment methods available for a brand and currency
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentMethods {
    /// Method identifiers the gateway accepts for the queried currency
    ///
    /// Sent under the `available` key; the `available_methods` and
    /// `available_payment_methods` spellings deserialize here as well.
    #[serde(
        default,
        alias = "available_methods",
        alias = "available_payment_methods"
    )]
    pub available: Vec<String>,
    /// Method identifiers grouped by ISO country code
    #[serde(default)]
    pub by_country: HashMap<String, Vec<String>>,
    /// Display names for the country codes in `by_country`
    #[serde(default)]
    pub country_names: HashMap<String, String>,
}

/// Lifecycle state of a purchase, as reported by the gateway
///
/// The state set is owned by the gateway. Values this library does not
/// know yet deserialize as [`PurchaseStatus::Unknown`] instead of
/// failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    Created,
    Sent,
    Viewed,
    Paid,
    Hold,
    Released,
    Preauthorized,
    PendingCapture,
    PendingRelease,
    PendingCharge,
    PendingRefund,
    Refunded,
    Cancelled,
    Expired,
    Overdue,
    Error,
    Cleared,
    Settled,
    Chargeback,
    /// A state this library does not know about yet
    #[serde(other)]
    Unknown,
}

/// A transaction against the gateway
///
/// Created with [`Purchase::new`] and posted via
/// [`ChipClient::create_purchase`](crate::ChipClient::create_purchase).
/// Every server-side state transition (cancel, release, capture,
/// charge, refund, token deletion) returns a fresh `Purchase`
/// reflecting the post-operation state; instances are never mutated in
/// place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    /// Server-assigned purchase identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Current lifecycle state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PurchaseStatus>,
    /// Brand the purchase belongs to
    pub brand_id: String,
    /// Payer identity
    pub client: ClientDetails,
    /// What is being purchased
    pub purchase: PurchaseDetails,
    /// Merchant-side reference, e.g. an order or invoice number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Token for charging this payer again without interaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_token: Option<String>,
    /// Whether this purchase stores a recurring token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recurring_token: Option<bool>,
    /// Authorize only; settle later with a capture call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_capture: Option<bool>,
    /// Email a receipt to the payer once paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_receipt: Option<bool>,
    /// Redirect target after a successful payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_redirect: Option<String>,
    /// Redirect target after a failed payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_redirect: Option<String>,
    /// URL the gateway calls back on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_callback: Option<String>,
    /// Hosted payment page for this purchase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_url: Option<String>,
    /// Whether the purchase was made against a test brand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_test: Option<bool>,
    /// Unix timestamp of creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,
    /// Unix timestamp of the last update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<i64>,
}

impl Purchase {
    /// Create a purchase request for `brand_id`
    pub fn new(
        brand_id: impl Into<String>,
        client: ClientDetails,
        purchase: PurchaseDetails,
    ) -> Self {
        Self {
            id: None,
            status: None,
            brand_id: brand_id.into(),
            client,
            purchase,
            reference: None,
            recurring_token: None,
            is_recurring_token: None,
            skip_capture: None,
            send_receipt: None,
            success_redirect: None,
            failure_redirect: None,
            success_callback: None,
            checkout_url: None,
            is_test: None,
            created_on: None,
            updated_on: None,
        }
    }
}

/// The goods side of a purchase: currency, products and totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseDetails {
    /// ISO 4217 currency code
    pub currency: String,
    /// Line items
    pub products: Vec<Product>,
    /// Total in minor units, computed by the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    /// Free-form notes shown on the invoice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Language code for the hosted checkout page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl PurchaseDetails {
    /// Create purchase details for `currency` with the given products
    pub fn new(currency: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            currency: currency.into(),
            products,
            total: None,
            notes: None,
            language: None,
        }
    }
}

/// One line item of a purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product name as shown to the payer
    pub name: String,
    /// Unit price in minor units of the purchase currency
    pub price: i64,
    /// Number of units
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Per-unit discount in minor units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<i64>,
    /// Tax percentage applied to this line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_percent: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

impl Product {
    /// Create a single-quantity product
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity: 1,
            discount: None,
            tax_percent: None,
        }
    }
}

/// A payer's identity and contact attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDetails {
    /// Payer email, the only attribute the gateway requires
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Registered company name, for business payers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
}

impl ClientDetails {
    /// Create client details with just an email address
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone: None,
            full_name: None,
            legal_name: None,
            street_address: None,
            country: None,
            city: None,
            zip_code: None,
            state: None,
            registration_number: None,
            tax_number: None,
            bank_account: None,
            bank_code: None,
        }
    }
}
