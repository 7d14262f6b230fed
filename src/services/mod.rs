//! Service layer for business logic
//!
//! This module provides the lookup logic shared between the HTTP API
//! and the one-shot CLI commands.

pub mod lookup;

pub use lookup::{GeoRecord, IfconfigProvider, LookupGateway, LookupProvider, RawProviderResponse};
