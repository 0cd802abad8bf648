//! String identifiers for tracker entities
//!
//! Ids are opaque display strings (`p1`, `s42`, `pp1`). Each entity kind gets
//! its own newtype so a supplier id can never be passed where a project id is
//! expected. All of them borrow as `str`, which lets ordered maps keyed by an
//! id be queried with a plain string slice.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create id from any string-like value
            #[inline]
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw id
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Project identifier (`p1`..`p4` in the seed)
    ProjectId
);

string_id!(
    /// Supplier identifier (`s1`..`s250` in the seed)
    SupplierId
);

impl SupplierId {
    /// Numeric suffix of an `s<n>` id, if it has one
    #[must_use]
    pub fn ordinal(&self) -> Option<u64> {
        self.0.strip_prefix('s').and_then(|n| n.parse().ok())
    }
}

string_id!(
    /// Product passport identifier
    PassportId
);
