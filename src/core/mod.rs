//! Core business logic abstractions

pub mod codes;
pub mod config;
pub mod converter;
pub mod currency;
pub mod log;

// Re-export main types for cleaner imports
pub use converter::{ConversionResult, CurrencyConverter};
pub use currency::{ExchangeRateProvider, RateQuote};
