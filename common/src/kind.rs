//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Defined enum is parsed from and displayed as `SCREAMING_SNAKE_CASE`
/// strings.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
/// define_kind! {
///     #[doc = "Way a booking is paid."]
///     enum Term {
///         #[doc = "Only a deposit is paid upfront."]
///         Deposit = 1,
///
///         #[doc = "The whole amount is paid upfront."]
///         Full = 2,
///     }
/// }
///
/// assert_eq!(Term::Deposit.to_string(), "DEPOSIT");
/// assert_eq!("FULL".parse::<Term>().unwrap(), Term::Full);
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            PartialEq,
        )]
        #[doc = $doc]
        #[repr(u8)]
        #[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant = $value,
            )*
        }

        impl $name {
            /// Converts this into its [`u8`] representation.
            #[must_use]
            pub const fn u8(self) -> u8 {
                self as u8
            }
        }
    };
}
