use super::*;

/// The parameters read by the envelope, common to all projection families.
/// Angular values are given in degrees.
#[rustfmt::skip]
pub const COMMON_GAMUT: [OpParameter; 13] = [
    OpParameter::Flag { key: "inv" },
    OpParameter::Text { key: "ellps",    default: Some("GRS80") },
    OpParameter::Real { key: "R",        default: None },
    OpParameter::Real { key: "a",        default: None },
    OpParameter::Real { key: "rf",       default: None },
    OpParameter::Real { key: "k_0",      default: Some(1.) },
    OpParameter::Real { key: "k",        default: Some(1.) },
    OpParameter::Real { key: "x_0",      default: Some(0.) },
    OpParameter::Real { key: "y_0",      default: Some(0.) },
    OpParameter::Real { key: "lon_0",    default: Some(0.) },
    OpParameter::Real { key: "lat_0",    default: Some(0.) },
    OpParameter::Text { key: "units",    default: Some("m") },
    OpParameter::Real { key: "to_meter", default: Some(1.) },
];

/// The setup shared by all projection families: The figure of the earth,
/// the affine post processing, and the linear unit. Plus the parameter store,
/// from which each family derives its own configuration.
///
/// Angular elements are stored in radians.
#[derive(Debug, Clone)]
pub struct ProjectionParameters {
    pub name: String,
    pub ellps: Ellipsoid,
    pub k_0: f64,
    pub x_0: f64,
    pub y_0: f64,
    pub lon_0: f64,
    /// Latitude of origin. Not handled by the envelope: Left to the
    /// families whose setup depends on it
    pub lat_0: f64,
    pub to_meter: f64,
    pub inverted: bool,
    pub raw: RawParameters,
}

impl ProjectionParameters {
    pub fn new(raw: RawParameters) -> Result<ProjectionParameters, Error> {
        let name = raw.name();
        let ellps = figure_of_the_earth(&raw)?;

        // `k` is the traditional alias of `k_0`, only consulted in its absence
        let k_0 = if raw.flag("k_0") {
            raw.real("k_0", 1.)?
        } else {
            raw.real("k", 1.)?
        };
        let x_0 = raw.real("x_0", 0.)?;
        let y_0 = raw.real("y_0", 0.)?;
        let lon_0 = raw.real("lon_0", 0.)?.to_radians();
        let lat_0 = raw.real("lat_0", 0.)?.to_radians();
        let inverted = raw.flag("inv");

        // An explicit conversion factor trumps a named unit
        let to_meter = if raw.flag("to_meter") {
            raw.real("to_meter", 1.)?
        } else {
            let units = raw.text("units", "m");
            let Some(unit) = units::linear_unit(&units) else {
                warn!("{name}: unknown linear unit '{units}'");
                return Err(Error::BadParam("units".to_string(), units));
            };
            debug!("{name}: linear unit {} = {} m", unit.name(), unit.definition());
            unit.multiplier()
        };

        for (key, value) in [("k_0", k_0), ("to_meter", to_meter)] {
            if !(value.is_finite() && value > 0.) {
                return Err(Error::BadParam(key.to_string(), value.to_string()));
            }
        }
        for (key, value) in [("x_0", x_0), ("y_0", y_0), ("lon_0", lon_0), ("lat_0", lat_0)] {
            if !value.is_finite() {
                return Err(Error::BadParam(key.to_string(), value.to_string()));
            }
        }

        Ok(ProjectionParameters {
            name,
            ellps,
            k_0,
            x_0,
            y_0,
            lon_0,
            lat_0,
            to_meter,
            inverted,
            raw,
        })
    }

    pub fn semimajor_axis(&self) -> f64 {
        self.ellps.semimajor_axis()
    }

    pub fn eccentricity_squared(&self) -> f64 {
        self.ellps.eccentricity_squared()
    }

    pub fn eccentricity(&self) -> f64 {
        self.ellps.eccentricity()
    }

    /// Selects the spherical or the ellipsoidal branch of the projection
    pub fn is_spherical(&self) -> bool {
        self.ellps.is_sphere()
    }

    /// For families defined on the sphere only: Keep the size, drop the shape
    pub fn make_spherical(&mut self) {
        self.ellps = Ellipsoid::sphere(self.ellps.semimajor_axis());
    }
}

// In order of precedence: `R`, then `ellps` modified by `a` and/or `rf`
fn figure_of_the_earth(raw: &RawParameters) -> Result<Ellipsoid, Error> {
    if raw.flag("R") {
        let r = raw.real("R", 0.)?;
        if !(r.is_finite() && r > 0.) {
            return Err(Error::BadParam("R".to_string(), r.to_string()));
        }
        return Ok(Ellipsoid::sphere(r));
    }

    let ellps = Ellipsoid::named(&raw.text("ellps", "GRS80"))?;
    let a = raw.real("a", ellps.semimajor_axis())?;
    if !(a.is_finite() && a > 0.) {
        return Err(Error::BadParam("a".to_string(), a.to_string()));
    }

    let f = if raw.flag("rf") {
        let rf = raw.real("rf", 0.)?;
        if !rf.is_finite() || rf < 0. || (rf > 0. && rf <= 1.) {
            return Err(Error::BadParam("rf".to_string(), rf.to_string()));
        }
        if rf == 0. {
            0.
        } else {
            1. / rf
        }
    } else {
        ellps.flattening()
    };

    Ok(Ellipsoid::new(a, f))
}

// ----- T E S T S ---------------------------------------------------------------------
