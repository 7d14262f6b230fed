mod config_gen;
mod lookup;

pub use config_gen::config_generate;
pub use lookup::{print_all, print_geolocation, print_self_ip};
