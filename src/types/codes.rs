//! Enumerations carrying fixed wire codes
//!
//! The API reports outcomes as short snake_case strings. [`wire_codes!`] turns a
//! list of `Tag => "code"` pairs into a closed enum with a total tag-to-code
//! function ([`code`](crate::types::Status::code)) and a partial code-to-tag
//! function (`FromStr`, failing with [`ApiError::UnknownCode`]).

use crate::error::ApiError;
use std::str::FromStr;

/// Generates a closed enum whose tags map to fixed wire codes.
///
/// The generated type:
/// - Has an `ALL` constant listing every tag
/// - Has a `code()` method returning the wire string
/// - Implements `FromStr` (unknown codes fail with [`ApiError::UnknownCode`])
/// - Implements `Serialize` (as the code) and `Display` (outputs the code)
///
/// `Deserialize` is left to the caller so each type can choose between
/// strict and lenient parsing.
macro_rules! wire_codes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $code:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every tag, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire code of this tag
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ApiError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($code => Ok($name::$variant),)+
                    _ => Err($crate::error::ApiError::unknown_code($kind, s)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }
    };
}

pub(crate) use wire_codes;

/// Parse a server-reported code, falling back to `fallback` for codes this
/// version of the SDK does not know about.
pub(crate) fn parse_or<T>(code: &str, fallback: T) -> T
where
    T: FromStr<Err = ApiError>,
{
    match code.parse() {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("{}; treating it as unknown", err);
            fallback
        }
    }
}
