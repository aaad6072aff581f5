// Copyright (C) 2026 Shipflow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required property was missing or empty when constructing a value.
    MissingRequiredField(&'static str),
    /// A shipment item failed its construction rules.
    InvalidShipmentItem(String),
    /// An order reference was missing or invalid.
    InvalidOrder(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField(field) => {
                write!(f, "Missing required property \"{field}\"")
            }
            Self::InvalidShipmentItem(msg) => write!(f, "Invalid shipment item: {msg}"),
            Self::InvalidOrder(msg) => write!(f, "Invalid order: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
