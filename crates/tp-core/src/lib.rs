//! tp-core: shared foundation for tait-props.
//!
//! Contains:
//! - units (uom SI types + constructors, density scale conversions)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
