//! Non-empty string names.

/// Define a name type that wraps a non-empty `String`.
///
/// The wrapper derefs and borrows as `str`, so maps keyed by it can be
/// queried with plain string slices. Deserializing an empty string fails.
macro_rules! define_newtype_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl $Name {
            /// Wrap `name`, panicking if it is empty. Meant for literals in tests.
            pub fn new(name: impl Into<String>) -> Self {
                Self::try_new(name).expect(concat!(stringify!($Name), " must not be empty"))
            }

            /// Wrap `name`, or `None` if it is empty.
            pub fn try_new(name: impl Into<String>) -> Option<Self> {
                let s = name.into();
                (!s.is_empty()).then_some(Self(s))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> serde::Deserialize<'de> for $Name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $Name::try_new(String::deserialize(deserializer)?).ok_or_else(|| {
                    serde::de::Error::custom(concat!(stringify!($Name), " must not be empty"))
                })
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::ops::Deref for $Name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $Name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

pub(crate) use define_newtype_string;
