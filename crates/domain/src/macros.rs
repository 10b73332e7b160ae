//! Display/FromStr boilerplate for the string-valued status enums
//!
//! Job, estimate, and extraction enums travel as lowercase strings in
//! datastore rows, query parameters, and configuration. This macro gives each
//! of them one canonical rendering and a case-insensitive parser.
//!
//! # Example
//!
//! ```rust
//! use paneboard_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum CrewShift {
//!     Morning,
//!     Afternoon,
//! }
//!
//! impl_domain_status_conversions!(CrewShift {
//!     Morning => "morning",
//!     Afternoon => "afternoon",
//! });
//!
//! assert_eq!(CrewShift::Morning.to_string(), "morning");
//! assert_eq!("AFTERNOON".parse::<CrewShift>(), Ok(CrewShift::Afternoon));
//! ```

/// Implements `Display` and `FromStr` for a fieldless enum
///
/// * `$enum_name` - the enum type
/// * `$variant => $str` - variant to wire string; `$str` must be lowercase
///
/// Parsing lowercases the input first, so `"Completed"` and `"COMPLETED"`
/// both resolve. Unknown values produce `Invalid <Enum>: <input>`.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire representation of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!(
                        "Invalid {}: {}",
                        ::std::stringify!($enum_name),
                        s
                    )),
                }
            }
        }
    };
}
