//! Inbound adapters translating HTTP requests into donor use cases.

pub mod http;
