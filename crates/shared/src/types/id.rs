//! Typed IDs for type-safe record references.
//!
//! Using typed IDs prevents accidentally passing a `StudentId` where an
//! `InvoiceId` is expected. All IDs are serial integers assigned by the
//! ledger store; they are never generated client-side.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Creates an ID from a raw integer.
            #[must_use]
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the inner integer.
            #[must_use]
            pub const fn into_inner(self) -> u64 {
                self.0
            }

            /// Returns the ID that follows this one in the store's sequence.
            #[must_use]
            pub const fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

typed_id!(InvoiceId, "Unique identifier for an invoice (tagihan).");
typed_id!(PaymentId, "Unique identifier for a payment (pembayaran).");
typed_id!(StudentId, "Unique identifier for a student (santri).");
typed_id!(ComponentId, "Unique identifier for a billing component.");
typed_id!(LevelId, "Unique identifier for an education level (jenjang).");
typed_id!(
    WalletEntryId,
    "Unique identifier for a student wallet ledger entry."
);
typed_id!(CashEntryId, "Unique identifier for a cash ledger entry.");
