//! Mercator
use crate::authoring::*;
use crate::math::ancillary::{gudermannian, sinhpsi_to_tanphi};

// Latitudes closer to the poles than this are refused
const POLE_EPS: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merc {
    e: f64,
}

impl Merc {
    fn refuse_poles(phi: f64) -> Result<(), Error> {
        if (phi.abs() - FRAC_PI_2).abs() <= POLE_EPS {
            return Err(Error::OutOfDomain("merc"));
        }
        Ok(())
    }
}

impl Projection for Merc {
    // ----- F O R W A R D -------------------------------------------------------------

    fn fwd(&self, lam: f64, phi: f64) -> Result<(f64, f64), Error> {
        Merc::refuse_poles(phi)?;
        Ok((lam, gudermannian::inv(phi)))
    }

    fn e_fwd(&self, lam: f64, phi: f64) -> Result<(f64, f64), Error> {
        Merc::refuse_poles(phi)?;
        let e = self.e;
        let isometric = phi.tan().asinh() - e * (e * phi.sin()).atanh();
        Ok((lam, isometric))
    }

    // ----- I N V E R S E -------------------------------------------------------------

    fn inv(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        Ok((x, gudermannian::fwd(y)))
    }

    fn e_inv(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        Ok((x, sinhpsi_to_tanphi(y.sinh(), self.e).atan()))
    }
}

// ----- C O N S T R U C T O R ---------------------------------------------------------

#[rustfmt::skip]
pub const GAMUT: [OpParameter; 1] = [
    OpParameter::Real { key: "lat_ts", default: Some(0_f64) },
];

pub fn new(params: &mut ProjectionParameters) -> Result<Box<dyn Projection>, Error> {
    let parsed = ParsedParameters::new(&params.raw, &GAMUT)?;

    let lat_ts = parsed.real("lat_ts")?;
    if !(lat_ts.is_finite() && lat_ts.abs() <= 90.) {
        warn!("merc: invalid value for lat_ts: |lat_ts| should be <= 90°");
        return Err(Error::BadParam("lat_ts".to_string(), lat_ts.to_string()));
    }

    // lat_ts trumps k_0
    if lat_ts != 0.0 {
        let (s, c) = lat_ts.to_radians().sin_cos();
        params.k_0 = c / (1. - params.eccentricity_squared() * s * s).sqrt();
    }

    Ok(Box::new(Merc {
        e: params.eccentricity(),
    }))
}

// ----- T E S T S ---------------------------------------------------------------------
