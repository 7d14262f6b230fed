pub mod lookup;
pub mod types;

pub use lookup::{LookupService, lookup_routes};
pub use types::{AllQuery, ErrorPayload, IpResponse, WelcomeResponse};
