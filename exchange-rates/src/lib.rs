//! Currency Menu with Macro-Based Currency Generation
//!
//! The converter forwards any currency code to the rate service, but the
//! front ends offer a small fixed menu. Currencies are defined declaratively
//! using a macro that generates the `CurrencyCode` enum, its lookups and
//! parsing.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation and, if it should be
//! offered as a source, to `SOURCE_MENU`:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     JPY => ("JPY", "¥", "Japanese yen"),
//! }
//! ```
//!
//! # Example
//! ```
//! use exchange_rates::{CurrencyCode, DEFAULT_SOURCE, DEFAULT_TARGET};
//!
//! let code: CurrencyCode = "kzt".parse().unwrap();
//! assert_eq!(code, DEFAULT_TARGET);
//! assert_eq!(DEFAULT_SOURCE.to_string(), "USD");
//! ```

/// Error returned when a string is not on the menu.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the CurrencyCode enum and its lookups
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define menu currencies with auto-generated lookups.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Variant => ("CODE", "SYMBOL", "display name"),
/// }
/// ```
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $symbol:literal, $display:literal)
        ),* $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $symbol),*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $display),*
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = $crate::UnknownCurrency;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err($crate::UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    USD => ("USD", "$", "US dollar"),
    EUR => ("EUR", "€", "Euro"),
    GBP => ("GBP", "£", "Pound sterling"),
    KZT => ("KZT", "₸", "Kazakhstani tenge"),
}

/// Currencies offered as the amount's currency.
pub const SOURCE_MENU: &[CurrencyCode] =
    &[CurrencyCode::USD, CurrencyCode::EUR, CurrencyCode::GBP];

/// Currencies offered as the conversion target.
pub const TARGET_MENU: &[CurrencyCode] = &[
    CurrencyCode::USD,
    CurrencyCode::EUR,
    CurrencyCode::GBP,
    CurrencyCode::KZT,
];

pub const DEFAULT_SOURCE: CurrencyCode = CurrencyCode::USD;
pub const DEFAULT_TARGET: CurrencyCode = CurrencyCode::KZT;

impl CurrencyCode {
    pub fn is_source(&self) -> bool {
        SOURCE_MENU.contains(self)
    }

    pub fn is_target(&self) -> bool {
        TARGET_MENU.contains(self)
    }
}

/// True if `code` names a menu currency (case-insensitive).
pub fn is_known(code: &str) -> bool {
    code.parse::<CurrencyCode>().is_ok()
}

/// Upper-cases a user-typed code without checking it against the menu.
pub fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
