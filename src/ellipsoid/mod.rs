use crate::Error;

/// Representation of a biaxial ellipsoid of revolution. A sphere is an
/// ellipsoid with zero flattening.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::new(6_378_137.0, 1. / 298.257_222_100_882_7)
    }
}

impl Ellipsoid {
    /// User defined ellipsoid
    #[must_use]
    pub fn new(semimajor_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        }
    }

    /// A sphere of radius `radius`
    #[must_use]
    pub fn sphere(radius: f64) -> Ellipsoid {
        Ellipsoid::new(radius, 0.)
    }

    /// Predefined ellipsoid; built-in, or given as "semimajor_axis, reciprocal_flattening"
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        // Is it one of the few builtins?
        match name {
            "GRS80" => return Ok(Ellipsoid::new(6_378_137.0, 1. / 298.257_222_100_882_7)),
            "WGS84" => return Ok(Ellipsoid::new(6_378_137.0, 1. / 298.257_223_563)),
            "intl" => return Ok(Ellipsoid::new(6_378_388.0, 1. / 297.0)),
            "Helmert" => return Ok(Ellipsoid::new(6_378_200.0, 1. / 298.3)),
            "clrk66" => return Ok(Ellipsoid::new(6_378_206.4, 1. / 294.978_698_2)),
            "clrk80" => return Ok(Ellipsoid::new(6_378_249.145, 1. / 293.465)),
            "bessel" => return Ok(Ellipsoid::new(6_377_397.155, 1. / 299.152_812_8)),
            _ => {}
        }

        // Ad hoc definition: "a, rf", where rf = 0 indicates a sphere
        let parts: Vec<&str> = name.split(',').map(|x| x.trim()).collect();
        if parts.len() == 2 {
            let bad = || Error::BadParam("ellps".to_string(), name.to_string());
            let a = parts[0].parse::<f64>().map_err(|_| bad())?;
            let rf = parts[1].parse::<f64>().map_err(|_| bad())?;
            let finite = a.is_finite() && rf.is_finite();
            if !finite || a <= 0. || rf < 0. || (rf > 0. && rf <= 1.) {
                return Err(bad());
            }
            let f = if rf == 0. { 0. } else { 1. / rf };
            return Ok(Ellipsoid::new(a, f));
        }

        Err(Error::NotFound(
            String::from(name),
            ": unknown ellipsoid".to_string(),
        ))
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2_f64 - self.f)
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    // ----- Axes ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    // ----- Flattenings -----------------------------------------------------------

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// True if this is a sphere
    #[must_use]
    pub fn is_sphere(&self) -> bool {
        self.f == 0.
    }
}

// ----- Tests ---------------------------------------------------------------------
