pub mod currencylayer;
