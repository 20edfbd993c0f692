//! pd-notify: PagerDuty notification gateway
//!
//! A library that turns a provider-neutral "send a notification" request
//! into one call against the PagerDuty generic events API and reports the
//! outcome as a uniform success/failure response.

pub mod config;
pub mod gateway;
pub mod transport;
