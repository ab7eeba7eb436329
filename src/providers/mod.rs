pub mod currencyapi;
