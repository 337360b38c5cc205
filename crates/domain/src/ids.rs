use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::record::RecordId;

/// Store-assigned identities are positive integers. Zero is never a valid id,
/// so deserialization and `TryFrom<u64>` reject it.
macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(try_from = "u64", into = "u64")]
        pub struct $name(u64);

        impl $name {
            pub fn new(raw: u64) -> Result<Self, DomainError> {
                if raw == 0 {
                    return Err(DomainError::invalid_id(format!(
                        "0 is not a valid {} id",
                        $label
                    )));
                }
                Ok(Self(raw))
            }

            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl RecordId for $name {
            const FIRST: Self = Self(1);

            fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<u64> for $name {
            type Error = DomainError;

            fn try_from(value: u64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.trim().parse::<u64>().map_err(|_| {
                    DomainError::invalid_id(format!("'{}' is not a valid {} id", s, $label))
                })?;
                Self::new(raw)
            }
        }
    };
}

define_id!(ClientId, "client");
define_id!(MeetingId, "meeting");
