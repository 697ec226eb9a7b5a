use std::fmt::{Display, Formatter, Result as FmtResult};

use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::{Deserialize, Serialize};

/// Accepted serialized forms of a resource identifier: the raw integer, or
/// a resource name which is hashed the same way as `from_name`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum IdRepr {
    Raw(u64),
    Name(String),
}

macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize,
            Deserialize,
        )]
        #[serde(from = "IdRepr", into = "u64")]
        pub struct $name(u64);

        impl $name {
            /// The null identifier. It never names a resource.
            pub const NULL: Self = Self(0);

            /// Create an identifier from a resource name at compile time.
            pub const fn from_name(name: &str) -> Self {
                Self(fnv1a_hash_str_64(name))
            }

            /// Wrap a platform-assigned integer identifier.
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the raw 64-bit value.
            pub const fn as_u64(&self) -> u64 {
                self.0
            }

            /// Returns true for [`Self::NULL`].
            pub const fn is_null(&self) -> bool {
                self.0 == 0
            }
        }

        impl From<IdRepr> for $name {
            fn from(repr: IdRepr) -> Self {
                match repr {
                    IdRepr::Raw(raw) => Self::from_raw(raw),
                    IdRepr::Name(name) => Self::from_name(&name),
                }
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::from_name(name)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, concat!(stringify!($name), "({:016x})"), self.0)
            }
        }
    };
}

resource_id! {
    /// A compact, serializable identifier for a string resource.
    ///
    /// `ResourceId` wraps a 64-bit FNV-1a hash of the resource name, so the
    /// same name always produces the same id across processes and builds.
    /// Platforms with their own integer ids can use [`ResourceId::from_raw`].
    ///
    /// # Example
    ///
    /// ```
    /// use dtext::ResourceId;
    ///
    /// const GREETING: ResourceId = ResourceId::from_name("greeting");
    ///
    /// assert_eq!(GREETING, ResourceId::from("greeting"));
    /// assert!(!GREETING.is_null());
    /// assert!(ResourceId::NULL.is_null());
    /// ```
    ResourceId
}

resource_id! {
    /// A compact, serializable identifier for a plural resource.
    ///
    /// Plural ids live in their own namespace: a `PluralResourceId` never
    /// compares equal to a [`ResourceId`], even when built from the same name.
    PluralResourceId
}
