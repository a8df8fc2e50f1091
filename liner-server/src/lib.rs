//! Ocean liner route discovery server.
//!
//! A service that answers: "which scheduled liner services, alone or
//! joined by one certified transshipment handoff, connect these two
//! ports, and how long does each option take?"

pub mod domain;
pub mod engine;
pub mod network;
pub mod web;
