//! Miscellaneous math functions for general use

/// Free functions used in more than one module of the crate.
pub mod ancillary;
pub use ancillary::checked_acos;
pub use ancillary::checked_asin;
pub use ancillary::gudermannian;
pub use ancillary::sinhpsi_to_tanphi;
pub use ancillary::CLAMP_EPS;

/// Free functions for handling and converting between
/// different representations of angles.
pub mod angular;
pub use angular::normalize_symmetric;
