//! Clients - HTTP Clients for External APIs
//!
//! Este módulo contém os clientes HTTP para comunicação com APIs externas.

pub mod stripe_client;

pub use stripe_client::{PaymentIntentData, StripeClient, TransferData};
