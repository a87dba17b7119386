//! Declaration macro for the named, fixed-length Balinese cycles.
//!
//! Every wara and the wuku share the same shape: a closed, ordered set of
//! names whose 0-based position wraps modulo the cycle length. Names match
//! exactly (case-sensitive) when parsed.

macro_rules! named_cycle {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                #[doc = $text]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in cycle order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Number of values in the cycle.
            pub const LEN: usize = Self::ALL.len();

            /// 0-based position within the cycle.
            pub fn index(self) -> usize {
                self as usize
            }

            /// Value at a 0-based position, wrapping modulo [`Self::LEN`].
            pub fn from_index(index: usize) -> Self {
                Self::ALL[index % Self::LEN]
            }

            /// The following value, wrapping at the end of the cycle.
            pub fn succ(self) -> Self {
                Self::from_index(self.index() + 1)
            }

            /// Canonical Balinese name.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = kb_core::Error;

            fn from_str(s: &str) -> kb_core::Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name() == s)
                    .ok_or_else(|| kb_core::Error::Parse(format!(
                        concat!("unknown ", stringify!($name), " {:?}"),
                        s
                    )))
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use named_cycle;
