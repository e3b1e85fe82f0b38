//! Bipolar oblique conic conformal.
//!
//! Two oblique conformal conics, tangent along the great circle through
//! their poles, A (20°S, 110°W) and B (45°N, 19°59'36"W). Designed for
//! maps of North and South America. Defined on the sphere only.
//! See [Snyder, 1987](crate::Bibliography::Sny87), pp. 116-123.
//!
//! The flag `bns` ("bipolar, no skew") rotates the output into the
//! natural orientation of the map.
use crate::authoring::*;

const EPS: f64 = 1e-10;
const NITER: usize = 10;

// Fixed geometry of the two poles and their conics
#[rustfmt::skip]
mod constants {
    pub const LAM_B: f64 = -0.348_949_767_262_506_815_39;
    pub const N:     f64 =  0.630_558_448_812_746_871_80;
    pub const F:     f64 =  1.897_247_425_674_610_305_82;
    pub const AZAB:  f64 =  0.816_500_436_746_863_631_66;
    pub const AZBA:  f64 =  1.822_618_438_561_859_251_33;
    pub const T:     f64 =  1.272_465_782_670_890_122_70;
    pub const RHOC:  f64 =  1.207_091_215_215_689_219_27;
    pub const CAZC:  f64 =  0.696_915_230_386_783_755_19;
    pub const SAZC:  f64 =  0.717_153_513_311_436_075_55;
    pub const C45:   f64 =  0.707_106_781_186_547_524_69;
    pub const S45:   f64 =  0.707_106_781_186_547_524_10;
    pub const C20:   f64 =  0.939_692_620_785_908_384_11;
    pub const S20:   f64 = -0.342_020_143_325_668_732_87;
    pub const R110:  f64 =  1.919_862_177_193_762_533_60;
    pub const R104:  f64 =  1.815_142_422_074_102_759_04;
}
use constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bipc {
    noskew: bool,
}

// ----- F O R W A R D -----------------------------------------------------------------

impl Projection for Bipc {
    fn fwd(&self, lam: f64, phi: f64) -> Result<(f64, f64), Error> {
        let (sphi, cphi) = phi.sin_cos();
        let (sdlam, cdlam) = (LAM_B - lam).sin_cos();

        // At the poles, the azimuth is fixed, and the tangent undefined
        let tphi = if (phi.abs() - FRAC_PI_2).abs() < EPS {
            None
        } else {
            Some(sphi / cphi)
        };
        let mut az = match tphi {
            Some(tphi) => sdlam.atan2(C45 * (tphi - cdlam)),
            None if phi < 0. => PI,
            None => 0.,
        };

        // Points beyond the azimuth of pole A seen from pole B, belong to the conic of A
        let near_a = az > AZBA;
        let (z, av, y_0) = if near_a {
            let (sdlam, cdlam) = (lam + R110).sin_cos();
            let z = checked_acos(S20 * sphi + C20 * cphi * cdlam)?;
            if let Some(tphi) = tphi {
                az = sdlam.atan2(C20 * tphi - S20 * cdlam);
            }
            (z, AZAB, RHOC)
        } else {
            let z = checked_acos(S45 * (sphi + cphi * cdlam))?;
            (z, AZBA, -RHOC)
        };

        let t = (0.5 * z).tan().powf(N);
        let mut r = F * t;
        let half_complement = 0.5 * (R104 - z);
        if half_complement < 0. {
            return Err(Error::OutOfDomain("bipc"));
        }
        let al = checked_acos((t + half_complement.tan().powf(N)) / T)?;

        // Correction in the band where the two conics meet
        let t = N * (av - az);
        if t.abs() < al {
            let angle = if near_a { al + t } else { al - t };
            r /= angle.cos();
        }

        let x = r * t.sin();
        let y = if near_a {
            y_0 - r * t.cos()
        } else {
            y_0 + r * t.cos()
        };

        if self.noskew {
            return Ok((-x * CAZC - y * SAZC, -y * CAZC + x * SAZC));
        }
        Ok((x, y))
    }

    // ----- I N V E R S E -------------------------------------------------------------

    fn inv(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        let (x, y) = if self.noskew {
            (-x * CAZC + y * SAZC, -y * CAZC - x * SAZC)
        } else {
            (x, y)
        };

        let near_a = x < 0.;
        let (y, s, c, av) = if near_a {
            (RHOC - y, S20, C20, AZAB)
        } else {
            (y + RHOC, S45, C45, AZBA)
        };

        let rp = x.hypot(y);
        let az = x.atan2(y);
        let faz = az.abs();

        // Fixed point iteration for the angular distance to the pole
        let mut r = rp;
        let mut rl = rp;
        let mut converged = None;
        for _ in 0..NITER {
            let z = 2. * (r / F).powf(1. / N).atan();
            let half_complement = 0.5 * (R104 - z);
            if half_complement < 0. {
                return Err(Error::OutOfDomain("bipc"));
            }
            let al = checked_acos(((0.5 * z).tan().powf(N) + half_complement.tan().powf(N)) / T)?;
            if faz < al {
                let angle = if near_a { al + az } else { al - az };
                r = rp * angle.cos();
            }
            if (rl - r).abs() < EPS {
                converged = Some(z);
                break;
            }
            rl = r;
        }
        let Some(z) = converged else {
            return Err(Error::NoConvergence("bipc"));
        };

        let az = av - az / N;
        let phi = checked_asin(s * z.cos() + c * z.sin() * az.cos())?;
        let lam = az.sin().atan2(c / z.tan() - s * az.cos());
        let lam = if near_a { lam - R110 } else { LAM_B - lam };
        Ok((lam, phi))
    }
}

// ----- C O N S T R U C T O R ---------------------------------------------------------

#[rustfmt::skip]
pub const GAMUT: [OpParameter; 1] = [
    OpParameter::Flag { key: "bns" },
];

impl Bipc {
    fn configure(params: &ProjectionParameters) -> Result<Bipc, Error> {
        let parsed = ParsedParameters::new(&params.raw, &GAMUT)?;
        Ok(Bipc {
            noskew: parsed.boolean("bns"),
        })
    }
}

pub fn new(params: &mut ProjectionParameters) -> Result<Box<dyn Projection>, Error> {
    let bipc = Bipc::configure(params)?;
    if !params.is_spherical() {
        debug!("bipc: using the sphere of radius a={}", params.semimajor_axis());
    }
    params.make_spherical();
    Ok(Box::new(bipc))
}

// ----- T E S T S ---------------------------------------------------------------------
