use crate::Error;

/// Maximum overshoot of an inverse trigonometric argument beyond [-1, 1],
/// still accepted as rounding noise, and clamped to the nearest boundary
pub const CLAMP_EPS: f64 = 1e-9;
const ONE_PLUS_EPS: f64 = 1.0 + CLAMP_EPS;

/// The Gudermannian function (often written as gd), is the work horse for computations involving
/// the isometric latitude (i.e. the vertical coordinate of the Mercator projection)
pub mod gudermannian {
    pub fn fwd(arg: f64) -> f64 {
        arg.sinh().atan()
    }

    pub fn inv(arg: f64) -> f64 {
        arg.tan().asinh()
    }
}

/// `acos`, tolerating arguments exceeding the interval [-1, 1] by no more
/// than [`CLAMP_EPS`]. Such arguments are clamped to ±1. Larger overshoots,
/// and NaN, are reported as `Error::OutOfDomain`.
pub fn checked_acos(arg: f64) -> Result<f64, Error> {
    Ok(clamp_unit(arg, "acos")?.acos())
}

/// `asin`, with the same domain policy as [`checked_acos`].
pub fn checked_asin(arg: f64) -> Result<f64, Error> {
    Ok(clamp_unit(arg, "asin")?.asin())
}

fn clamp_unit(arg: f64, what: &'static str) -> Result<f64, Error> {
    // Negated comparison, in order to also catch NaN
    if !(arg.abs() <= ONE_PLUS_EPS) {
        return Err(Error::OutOfDomain(what));
    }
    Ok(arg.clamp(-1., 1.))
}

/// Ancillary function for computing the inverse isometric latitude. Follows
/// [Karney, 2011](crate::Bibliography::Kar11), and the PROJ implementation
/// in proj/src/phi2.cpp.
pub fn sinhpsi_to_tanphi(taup: f64, e: f64) -> f64 {
    // min iterations = 1, max iterations = 2; mean = 1.954
    const MAX_ITER: usize = 5;

    // If this shows unbearable, we can just also assume IEEE-64 bit
    // arithmetic, and set rooteps = 0.000000014901161193847656
    let rooteps: f64 = f64::EPSILON.sqrt();
    let tol: f64 = rooteps / 10.; // the criterion for Newton's method
    let tmax: f64 = 2. / rooteps; // threshold for large arg limit exact

    let e2m = 1. - e * e;
    let stol = tol * taup.abs().max(1.0);

    // The initial guess.  70 corresponds to chi = 89.18 deg
    let mut tau = if taup.abs() > 70. {
        taup * (e * e.atanh()).exp()
    } else {
        taup / e2m
    };

    // Handle +/-inf, nan, and e = 1
    if (tau.abs() >= tmax) || tau.is_nan() {
        return tau;
    }

    for _ in 0..MAX_ITER {
        let tau1 = (1. + tau * tau).sqrt();
        let sig = (e * (e * tau / tau1).atanh()).sinh();
        let taupa = (1. + sig * sig).sqrt() * tau - sig * tau1;
        let dtau =
            (taup - taupa) * (1. + e2m * (tau * tau)) / (e2m * tau1 * (1. + taupa * taupa).sqrt());
        tau += dtau;

        if (dtau.abs() < stol) || tau.is_nan() {
            return tau;
        }
    }
    f64::NAN
}

// ----- Tests ---------------------------------------------------------------------
