// ============================================================================
// Composite Numerics Library
// Wrapped integers, elastic fixed-point numbers and exact fractions
// ============================================================================

//! # Composite Numerics
//!
//! Value types that carry their own precision and range so that client code
//! can do arithmetic without manual scaling or overflow bookkeeping.
//!
//! ## Features
//!
//! - **Construction protocol**: every shape is built from a raw integer
//!   representation through one generic [`protocol::FromRep`] entry point
//! - **Result-type deduction**: each operator decides the representation of
//!   its result before any raw arithmetic runs
//! - **Elastic fixed-point**: digit budgets grow with every operation, so
//!   sums, products and quotients never wrap
//! - **Exact fractions** with cross-multiplying arithmetic and reduction
//!
//! ## Example
//!
//! ```rust
//! use composite_numerics::prelude::*;
//!
//! // Wrapped integers promote like the host arithmetic
//! let sum = Integer::from_rep(200u8) + Integer::from_rep(100u8);
//! assert_eq!(sum.to_rep(), 300i32);
//!
//! // Elastic numbers widen instead of overflowing
//! let x = ElasticNumber::<i64>::from_f64(1.5, ElasticFormat::FFT_DEFAULT).unwrap();
//! let square = x * x;
//! assert_eq!(square.format().digits(), 60);
//! assert_eq!(square.to_f64(), 2.25);
//!
//! // Fractions are exact
//! let f = make_fraction(1i32, 3i32) + make_fraction(1i32, 6i32);
//! assert_eq!(reduce(f), Fraction::new(1i32, 2i32));
//! ```

pub mod deduction;
pub mod numeric;
pub mod protocol;
pub mod shapes;

// Re-exports for convenience
pub mod prelude {
    pub use crate::deduction::{ElasticFormat, Promote, Promoted, RepDescriptor};
    pub use crate::numeric::{NumericError, NumericResult, Rep, SignedRep};
    pub use crate::protocol::{from_rep, to_rep, Composite, FromRep, Shape, ShapeKind};
    pub use crate::shapes::{
        make_fraction, reduce, ElasticNumber, ElasticShape, Fraction, FractionShape, Integer,
        IntegerShape,
    };
}

/// Install a `tracing` subscriber that prints to stderr.
///
/// The filter is read from `RUST_LOG` and defaults to `composite_numerics=debug`.
/// Calling it more than once is harmless; only the first call installs.
#[cfg(feature = "logging")]
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "composite_numerics=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
