//! Error types for the brg core library.
//!
//! Defines the error enum exposed by the public API and a convenient result
//! alias. Generation itself cannot fail once the parameters are validated, so
//! every variant here is raised by [`crate::BrgBuilder::build`].

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running the generator.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BrgError {
    /// A size parameter was zero.
    #[error("{parameter} must be at least 1 (got {got})")]
    InvalidArgument {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// The value supplied by the caller.
        got: usize,
    },
    /// The attachment phase would need more nodes than `usize` can index.
    #[error("vertex_count {vertex_count} * block_size {block_size} overflows usize")]
    NodeCountOverflow {
        /// Requested number of super-nodes.
        vertex_count: usize,
        /// Requested block size.
        block_size: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`BrgError`] variants.
    enum BrgErrorCode for BrgError {
        /// A size parameter was zero.
        InvalidArgument => InvalidArgument { .. } => "BRG_INVALID_ARGUMENT",
        /// The attachment node count overflowed.
        NodeCountOverflow => NodeCountOverflow { .. } => "BRG_NODE_COUNT_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, BrgError>;
