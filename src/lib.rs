//! # chip - CHIP payment gateway client
//!
//! A typed client for the CHIP payment gateway HTTP API: purchases and
//! their lifecycle (capture, release, charge, refund), payment method
//! discovery, client records, and webhook signature verification.
//!
//! ```no_run
//! use chip::{ChipClient, ClientDetails, Product, Purchase, PurchaseDetails};
//!
//! # async fn run() -> chip::Result<()> {
//! let client = ChipClient::new("my-brand-id", "my-api-key")?;
//!
//! let purchase = Purchase::new(
//!     "my-brand-id",
//!     ClientDetails::new("payer@example.com"),
//!     PurchaseDetails::new("EUR", vec![Product::new("Subscription", 1000)]),
//! );
//! let created = client.create_purchase(&purchase).await?;
//! println!("checkout at {:?}", created.checkout_url);
//! # Ok(())
//! # }
//! ```
//!
//! Webhook payloads are verified with [`webhook::verify`], which needs
//! no client instance:
//!
//! ```no_run
//! # let (body, signature_header, public_key_pem) = (Vec::new(), String::new(), String::new());
//! if !chip::webhook::verify(&body, &signature_header, &public_key_pem) {
//!     // reject the webhook before acting on its content
//! }
//! ```

pub mod client;
pub mod error;
pub mod map;
pub mod types;
pub mod webhook;

// Re-exports for convenience
pub use client::{ChipClient, ChipClientBuilder, DEFAULT_BASE_URL};
pub use error::{ChipError, Result};
pub use types::*;

/// Current version of the chip library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }
}
