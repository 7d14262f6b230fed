//! ipgeo - public IP and geolocation lookup gateway
//!
//! A small HTTP service that asks an upstream "what is my IP" provider
//! (ifconfig.co by default) for the server's public address and its
//! geolocation, and re-serves the result as JSON.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: One-shot lookups from the command line
//!
//! # Architecture
//! - `services`: Lookup gateway and upstream providers
//! - `api`: HTTP handlers and middleware
//! - `interfaces`: Command-line interface
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod system;
