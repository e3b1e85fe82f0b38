//! *A framework for map projections*.
//!
//! Carto converts geographical coordinates (longitude, latitude) to planar
//! coordinates (easting, northing) under a projection selected by name at
//! run time, and back again.
//!
//! The work is split in two layers:
//!
//! - The individual projection families implement the
//!   [`Projection`](crate::authoring::Projection) trait: A pair of "raw"
//!   functions, working on the unit sphere (or ellipsoid), with no
//!   knowledge of scaling, offsets, central meridians, or units.
//! - The [`Op`](crate::prelude::Op) envelope does everything else: Domain
//!   validation, longitude normalization, sphere/ellipsoid dispatch,
//!   scaling, false easting/northing, and unit conversion. Identically
//!   for every family.
//!
//! Families are found by name through a [`Registry`](crate::authoring::Registry)
//! of constructors. The builtin registry is process wide, and populated once.
//! User defined families are registered with a [`Context`](crate::prelude::Context).
//!
//! ```rust
//! use carto::prelude::*;
//! # fn main() -> Result<(), Error> {
//! let ctx = Minimal::new();
//! let op = Op::new("proj=bipc ellps=GRS80", &ctx)?;
//! let (x, y) = op.forward((-100_f64).to_radians(), 40_f64.to_radians())?;
//! let (lon, lat) = op.inverse(x, y)?;
//! assert!((lon.to_degrees() + 100.).abs() < 1e-9);
//! assert!((lat.to_degrees() - 40.).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

mod context;
mod coordinate;
mod ellipsoid;
pub mod math;
mod op;
mod projection;
mod token;

/// The bread-and-butter, shrink-wrapped for external use
pub mod prelude {
    pub use crate::context::Context;
    pub use crate::context::Minimal;
    pub use crate::coordinate::Coor2D;
    pub use crate::coordinate::CoordinateSet;
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::op::Op;
    pub use crate::op::OpHandle;
    pub use crate::Direction;
    pub use crate::Direction::Fwd;
    pub use crate::Direction::Inv;
    pub use crate::Error;
}

/// Preamble for projection implementations, built-in or user defined
pub mod authoring {
    pub use crate::prelude::*;

    pub use crate::math::checked_acos;
    pub use crate::math::checked_asin;
    pub use crate::op::OpDescriptor;
    pub use crate::op::OpParameter;
    pub use crate::op::ParsedParameters;
    pub use crate::op::ProjectionParameters;
    pub use crate::op::RawParameters;
    pub use crate::op::COMMON_GAMUT;
    pub use crate::op::units::LINEAR_UNITS;
    pub use crate::projection::builtin_registry;
    pub use crate::projection::OpConstructor;
    pub use crate::projection::Projection;
    pub use crate::projection::Registry;
    pub use crate::token::Tokenize;

    pub use log::debug;
    pub use log::error;
    pub use log::trace;
    pub use log::warn;

    pub use std::collections::BTreeMap;
    pub use std::collections::BTreeSet;
    pub use std::f64::consts::FRAC_PI_2;
    pub use std::f64::consts::FRAC_PI_4;
    pub use std::f64::consts::PI;
}

/// The single error type of the crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error: {0}")]
    General(&'static str),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("projection {0} not found{1}")]
    NotFound(String, String),

    #[error("missing required parameter {0}")]
    MissingParam(String),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),

    #[error("argument outside the domain of {0}")]
    OutOfDomain(&'static str),

    #[error("no convergence in {0}")]
    NoConvergence(&'static str),
}

/// `Fwd`: Indicate that a two-way operator, function, or method,
/// should run in the *forward* direction.
/// `Inv`: Indicate that a two-way operator, function, or method,
/// should run in the *inverse* direction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Fwd,
    Inv,
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// John P. Snyder (1987): *Map Projections - A Working Manual*.
    /// U.S. Geological Survey Professional Paper 1395.
    /// [DOI](https://doi.org/10.3133/pp1395).
    /// The bipolar oblique conic conformal projection is described on pp. 116-123.
    Sny87,

    /// Gerald I. Evenden (1995): *Cartographic Projection Procedures for the
    /// UNIX Environment - A User's Manual*. The origin of the PROJ
    /// parameter conventions (`+proj=... +lon_0=... +bns`).
    Eve95,

    /// Charles F.F. Karney (2011): *Transverse Mercator with an accuracy of a few nanometers*.
    /// J. Geodesy. 85(8): 475–485.
    /// [DOI](https://doi.org/10.1007/s00190-011-0445-3).
    Kar11,
}

// ----- Ancillary functions for testing -----------------------------------------------

/// Some coordinates in the western hemisphere, in radians: Kansas and Peru
#[cfg(test)]
pub(crate) fn some_basic_coor2dinates() -> [coordinate::Coor2D; 2] {
    let kansas = coordinate::Coor2D::gis(-100., 40.);
    let peru = coordinate::Coor2D::gis(-75., -10.);
    [kansas, peru]
}
