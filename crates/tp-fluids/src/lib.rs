//! tp-fluids: liquid property facade for tait-props.
//!
//! Provides:
//! - Supported species (acetone, decafluoropentane) and name parsing
//! - A small catalog describing each fluid and its vapor-pressure source
//! - Built-in critical constants and boiling-curve data
//! - [`Fluid`], which binds a species to its curve and answers density,
//!   pressure, sound-speed and vapor-pressure queries
//!
//! # Example
//!
//! ```
//! use tp_fluids::Fluid;
//!
//! let acetone = Fluid::new("Acetone").unwrap();
//! let rho = acetone.density(298.15, 101_325.0).unwrap();
//! assert!((rho - 783.79).abs() < 0.01);
//!
//! let p = acetone.pressure(298.15, rho).unwrap();
//! assert!((p - 101_325.0).abs() < 1.0);
//! ```

pub mod catalog;
pub mod data;
pub mod error;
pub mod fluid;
pub mod model;
pub mod species;

pub use catalog::{
    FluidCatalogEntry, VaporPressureModel, catalog_entry, filter_liquid_catalog, liquid_catalog,
};
pub use error::{FluidError, FluidResult};
pub use fluid::Fluid;
pub use model::LiquidPropertyPack;
pub use species::Species;
