//! Macros for ergonomic identifier declarations.

/// Generate an enum usable as a state or event identifier.
///
/// The enum derives everything [`Id`](crate::core::Id) requires and each
/// variant is named after itself.
///
/// # Example
///
/// ```
/// use rewind::core::Id;
/// use rewind::id_enum;
///
/// id_enum! {
///     pub enum Step {
///         Draft,
///         Review,
///         Published,
///     }
/// }
///
/// assert_eq!(Step::Review.name(), "Review");
/// ```
#[macro_export]
macro_rules! id_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Id for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
