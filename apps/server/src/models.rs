use converter_core::fx::{Conversion, Currency};
use rust_decimal::Decimal;
use serde::Serialize;

/// Wire representation of a completed conversion. `Decimal` fields
/// serialize as JSON numbers (rust_decimal's `serde-float`).
#[derive(Serialize, Debug, Clone)]
pub struct ConversionResponse {
    pub amount: Decimal,
    #[serde(rename = "from")]
    pub from_currency: Currency,
    #[serde(rename = "to")]
    pub to_currency: Currency,
    pub rate: Decimal,
    pub result: Decimal,
}

impl From<Conversion> for ConversionResponse {
    fn from(conversion: Conversion) -> Self {
        Self {
            amount: conversion.amount,
            from_currency: conversion.from_currency,
            to_currency: conversion.to_currency,
            rate: conversion.rate,
            result: conversion.result,
        }
    }
}
