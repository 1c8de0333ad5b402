//! Module names and parameter types shared by several endpoint modules.

use chrono::{DateTime, Utc};
use etherscan_marshal::{Field, Request};

/// `account` module.
pub const ACCOUNTS_MODULE: &str = "account";
/// `block` module.
pub const BLOCKS_MODULE: &str = "block";
/// `contract` module.
pub const CONTRACTS_MODULE: &str = "contract";
/// `gastracker` module.
pub const GAS_MODULE: &str = "gastracker";
/// `logs` module.
pub const LOGS_MODULE: &str = "logs";
/// `proxy` module (Geth JSON-RPC passthrough).
pub const PROXY_MODULE: &str = "proxy";
/// `stats` module.
pub const STATS_MODULE: &str = "stats";
/// `token` module.
pub const TOKEN_MODULE: &str = "token";
/// `transaction` module.
pub const TRANSACTIONS_MODULE: &str = "transaction";

/// Implement `as_str`, `Display`, `Encode` and `Decode` for a fieldless enum
/// from a variant-to-wire-string table.
macro_rules! wire_enum {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// The wire string of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::etherscan_marshal::Encode for $name {
            fn encode(&self, _ann: &::etherscan_marshal::Annotation<'_>) -> String {
                self.as_str().to_string()
            }
        }

        impl ::etherscan_marshal::Decode for $name {
            fn decode(
                raw: &::serde_json::Value,
                _ann: &::etherscan_marshal::Annotation<'_>,
            ) -> Result<Self, ::etherscan_marshal::UnmarshalError> {
                match raw.as_str() {
                    $(Some($wire) => Ok($name::$variant),)+
                    Some(other) => Err(::etherscan_marshal::UnmarshalError::UnknownVariant {
                        type_name: stringify!($name),
                        value: other.to_string(),
                    }),
                    None => Err(::etherscan_marshal::UnmarshalError::Shape {
                        expected: "string",
                        found: raw.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use wire_enum;

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortingPreference {
    /// Oldest first.
    #[default]
    Asc,
    /// Newest first.
    Desc,
}

wire_enum!(SortingPreference {
    Asc => "asc",
    Desc => "desc",
});

/// Named block positions accepted by `tag` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockParameter {
    /// The most recent mined block.
    #[default]
    Latest,
    /// The genesis block.
    Earliest,
    /// The pending state.
    Pending,
}

wire_enum!(BlockParameter {
    Latest => "latest",
    Earliest => "earliest",
    Pending => "pending",
});

/// Request parameters of the daily statistics endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateRange {
    /// First day, inclusive.
    pub start_date: DateTime<Utc>,
    /// Last day, inclusive.
    pub end_date: DateTime<Utc>,
    /// Result ordering.
    pub sort: SortingPreference,
}

impl Request for DateRange {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("StartDate", "startdate,date", &self.start_date),
            Field::new("EndDate", "enddate,date", &self.end_date),
            Field::new("Sort", "", &self.sort),
        ]
    }
}
