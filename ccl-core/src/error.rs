//! Error types for the ccl core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::geometry::Point;

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

/// An error produced by [`crate::DisjointSet`] lookups.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The element was never registered with `make_set` or `union`.
    #[error("element is not registered in the disjoint-set forest")]
    UnknownElement,
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element was never registered with `make_set` or `union`.
        UnknownElement => UnknownElement => "DISJOINT_SET_UNKNOWN_ELEMENT",
    }
}

/// Error type produced when building a grid or labelling its components.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LabelError {
    /// The value buffer does not hold exactly `width * height` cells.
    #[error("grid of {width}x{height} requires {expected} values but {actual} were given")]
    DimensionMismatch {
        /// Declared grid width.
        width: usize,
        /// Declared grid height.
        height: usize,
        /// Number of cells implied by the dimensions.
        expected: usize,
        /// Number of values supplied by the caller.
        actual: usize,
    },
    /// `width * height` does not fit in `usize`.
    #[error("grid dimensions {width}x{height} overflow the addressable cell count")]
    DimensionOverflow {
        /// Declared grid width.
        width: usize,
        /// Declared grid height.
        height: usize,
    },
    /// A foreground pixel lost its provisional label between passes.
    #[error("labelling invariant violated at {point}: {invariant}")]
    InvariantViolation {
        /// Description of the broken invariant.
        invariant: &'static str,
        /// Pixel at which the violation was detected.
        point: Point,
    },
    /// The disjoint-set forest rejected a lookup while resolving labels.
    #[error("label resolution failed at {point}: {error}")]
    Forest {
        /// Pixel whose equivalence class could not be resolved.
        point: Point,
        #[source]
        /// Underlying forest error.
        error: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`LabelError`] variants.
    enum LabelErrorCode for LabelError {
        /// The value buffer does not hold exactly `width * height` cells.
        DimensionMismatch => DimensionMismatch { .. } => "CCL_DIMENSION_MISMATCH",
        /// `width * height` does not fit in `usize`.
        DimensionOverflow => DimensionOverflow { .. } => "CCL_DIMENSION_OVERFLOW",
        /// A foreground pixel lost its provisional label between passes.
        InvariantViolation => InvariantViolation { .. } => "CCL_INVARIANT_VIOLATION",
        /// The disjoint-set forest rejected a lookup while resolving labels.
        ForestFailure => Forest { .. } => "CCL_FOREST_FAILURE",
    }
}

impl LabelError {
    /// Retrieve the inner [`DisjointSetErrorCode`] when the error originated in the forest.
    #[must_use]
    pub const fn forest_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::Forest { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, LabelError>;
