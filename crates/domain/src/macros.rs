//! Macro for string conversions on outcome enums
//!
//! Outcome enums travel through logs, the CLI and config files as
//! snake_case strings. This macro keeps the mapping in one place.
//!
//! # Example
//!
//! ```rust
//! use daywindow_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum SlotState {
//!     Open,
//!     Booked,
//! }
//!
//! impl_domain_status_conversions!(SlotState {
//!     Open => "open",
//!     Booked => "booked",
//! });
//!
//! assert_eq!(SlotState::Booked.as_str(), "booked");
//! assert_eq!("OPEN".parse::<SlotState>().unwrap(), SlotState::Open);
//! assert_eq!(SlotState::ALL.len(), 2);
//! ```

/// Implements `as_str`, `ALL`, Display and FromStr for a fieldless enum
///
/// Parsing is case-insensitive and ignores surrounding whitespace. The
/// error is a human-readable `String` naming the enum and the rejected
/// input.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$(Self::$variant),+];

            /// Stable snake_case name of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
