//! Coded categorical values
//!
//! A code enum is a closed set of variants, each carrying a stable integer code
//! and a display label. Codes are what callers store and submit; labels are
//! opaque display strings and never take part in equality or lookup.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{define_code_enum, CodeEnum};
//!
//! define_code_enum! {
//!     /// Payment channel
//!     pub enum Channel {
//!         /// Bank transfer
//!         BankTransfer = 1 => "Bank transfer",
//!         /// Credit card
//!         CreditCard = 2 => "Credit card",
//!     }
//! }
//!
//! assert_eq!(Channel::from_code(2), Some(Channel::CreditCard));
//! assert_eq!(Channel::from_code(9), None);
//! assert_eq!(Channel::CreditCard.label(), "Credit card");
//! ```

/// A closed set of coded values
///
/// Implementors expose their variants in declaration order through
/// [`CodeEnum::variants`]; every lookup is a scan over that table.
pub trait CodeEnum: Copy + Eq + Sized + 'static {
    /// All variants in declaration order
    fn variants() -> &'static [Self];

    /// The stable integer code of this variant
    fn code(&self) -> i32;

    /// The display label of this variant
    fn label(&self) -> &'static str;

    /// Returns true if this variant carries the given code
    fn has_code(&self, code: i32) -> bool {
        self.code() == code
    }

    /// Looks up the variant carrying `code`
    ///
    /// Returns `None` for codes outside the set. Whether that is fatal is up
    /// to the caller.
    fn from_code(code: i32) -> Option<Self> {
        Self::variants().iter().copied().find(|v| v.has_code(code))
    }

    /// Looks up a variant from the textual form of its code
    ///
    /// Non-numeric input yields `None`, the same as an unknown code.
    fn from_code_str(code: &str) -> Option<Self> {
        code.trim().parse::<i32>().ok().and_then(Self::from_code)
    }

    /// Iterates over `(code, label)` pairs in declaration order
    fn entries() -> Box<dyn Iterator<Item = (i32, &'static str)>> {
        Box::new(Self::variants().iter().map(|v| (v.code(), v.label())))
    }
}

/// Declares a code enum and its [`CodeEnum`] implementation
///
/// Each variant is written as `Name = code => "label"`. The macro also derives
/// `Serialize`/`Deserialize` on the integer code and implements `Display` with
/// the label.
#[macro_export]
macro_rules! define_code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            const VARIANTS: &'static [$name] = &[$($name::$variant),+];
        }

        impl $crate::code::CodeEnum for $name {
            fn variants() -> &'static [Self] {
                Self::VARIANTS
            }

            fn code(&self) -> i32 {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::code::CodeEnum::label(self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_i32($crate::code::CodeEnum::code(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let code = <i32 as ::serde::Deserialize>::deserialize(deserializer)?;
                <$name as $crate::code::CodeEnum>::from_code(code).ok_or_else(|| {
                    ::serde::de::Error::custom(format!(
                        "Unknown {} code: {}",
                        stringify!($name),
                        code
                    ))
                })
            }
        }
    };
}
