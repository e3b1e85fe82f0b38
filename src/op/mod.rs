use crate::authoring::*;
use crate::math::angular::normalize_symmetric;

mod op_descriptor;
mod parameter;
mod parsed_parameters;
mod projection_parameters;
mod raw_parameters;
pub mod units;

pub use op_descriptor::OpDescriptor;
pub use parameter::OpParameter;
pub use parsed_parameters::ParsedParameters;
pub use projection_parameters::ProjectionParameters;
pub use projection_parameters::COMMON_GAMUT;
pub use raw_parameters::RawParameters;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct OpHandle(uuid::Uuid);
impl OpHandle {
    pub fn new() -> Self {
        OpHandle(uuid::Uuid::new_v4())
    }
}
impl Default for OpHandle {
    fn default() -> Self {
        OpHandle(uuid::Uuid::new_v4())
    }
}

/// Tolerated excess of an input latitude beyond ±π/2, or of an input
/// longitude beyond ±π, before it is refused as out of domain
const ANGULAR_SLACK: f64 = 1e-12;

/// A projection, ready for use: The forward/inverse envelope, wrapping
/// the family specific [Projection] with the processing shared by all
/// families.
///
/// Forward, the envelope
///
/// 1. refuses non-finite input, latitudes beyond ±π/2, and longitudes beyond
///    ±π (in both cases up to a slack of 1e-12 rad, within which the
///    latitude is clamped),
/// 2. reduces the longitude to the central meridian, normalized to [-π, π),
/// 3. dispatches to the spherical or ellipsoidal branch of the projection,
/// 4. scales by the semimajor axis and the scale factor, adds the false
///    easting and northing, and converts to the linear unit given.
///
/// The inverse reverses the steps, and normalizes the output longitude.
/// Non-finite output from the projection is reported as out of domain.
///
/// An `Op` is immutable after construction, so one instance may serve any
/// number of threads concurrently.
#[derive(Debug)]
pub struct Op {
    pub descriptor: OpDescriptor,
    pub params: ProjectionParameters,
    pub id: OpHandle,
    projection: Box<dyn Projection>,
}

impl Op {
    /// Instantiate the projection given by `definition`, looking up the
    /// family in the registries available to `ctx`
    pub fn new(definition: &str, ctx: &dyn Context) -> Result<Op, Error> {
        let globals = ctx.globals();
        let raw = RawParameters::new(definition, &globals);
        let name = raw.name();
        if name.is_empty() {
            return Err(Error::Syntax(format!(
                "No projection name given in '{definition}'"
            )));
        }
        let constructor = ctx.get_op(&name)?;
        Op::with_constructor(constructor, ProjectionParameters::new(raw)?)
    }

    /// Let `constructor` complete `params` with its family specific
    /// configuration, and wrap the result in the envelope
    pub fn with_constructor(
        constructor: OpConstructor,
        mut params: ProjectionParameters,
    ) -> Result<Op, Error> {
        let projection = constructor.0(&mut params)?;
        let descriptor = OpDescriptor::new(&params);
        debug!(
            "instantiated {} as {:?} on a={} es={}",
            descriptor.instantiated_as,
            projection,
            params.semimajor_axis(),
            params.eccentricity_squared()
        );
        Ok(Op {
            descriptor,
            params,
            id: OpHandle::new(),
            projection,
        })
    }

    /// Geographic to planar. Radians in, linear units out.
    /// Disregards the `inv` flag.
    pub fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64), Error> {
        if !(lon.is_finite() && lat.is_finite()) {
            return Err(Error::OutOfDomain("forward projection"));
        }
        if lat.abs() > FRAC_PI_2 + ANGULAR_SLACK {
            return Err(Error::OutOfDomain("latitude"));
        }
        if lon.abs() > PI + ANGULAR_SLACK {
            return Err(Error::OutOfDomain("longitude"));
        }
        let phi = lat.clamp(-FRAC_PI_2, FRAC_PI_2);
        let lam = normalize_symmetric(lon - self.params.lon_0);

        let (x, y) = if self.params.is_spherical() {
            self.projection.fwd(lam, phi)?
        } else {
            self.projection.e_fwd(lam, phi)?
        };

        let p = &self.params;
        let ak_0 = p.semimajor_axis() * p.k_0;
        let x = (ak_0 * x + p.x_0) / p.to_meter;
        let y = (ak_0 * y + p.y_0) / p.to_meter;
        if !(x.is_finite() && y.is_finite()) {
            return Err(Error::OutOfDomain("forward projection"));
        }
        Ok((x, y))
    }

    /// Planar to geographic. Linear units in, radians out.
    /// Disregards the `inv` flag.
    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(Error::OutOfDomain("inverse projection"));
        }

        let p = &self.params;
        let ak_0 = p.semimajor_axis() * p.k_0;
        let x = (x * p.to_meter - p.x_0) / ak_0;
        let y = (y * p.to_meter - p.y_0) / ak_0;

        let (lam, phi) = if p.is_spherical() {
            self.projection.inv(x, y)?
        } else {
            self.projection.e_inv(x, y)?
        };
        if !(lam.is_finite() && phi.is_finite()) {
            return Err(Error::OutOfDomain("inverse projection"));
        }
        Ok((normalize_symmetric(lam + p.lon_0), phi))
    }

    /// Operate on a set of coordinates, in the given direction, taking the
    /// `inv` flag into account. Points failing are set to NaN.
    /// Returns the number of successes.
    pub fn apply(&self, operands: &mut dyn CoordinateSet, direction: Direction) -> usize {
        // Short form of (inverted && !forward) || (forward && !inverted)
        let forward = self.descriptor.inverted != (direction == Direction::Fwd);

        let mut successes = 0_usize;
        for i in 0..operands.len() {
            let (a, b) = operands.xy(i);
            let result = if forward {
                self.forward(a, b)
            } else {
                self.inverse(a, b)
            };
            match result {
                Ok((x, y)) => {
                    operands.set_xy(i, x, y);
                    successes += 1;
                }
                Err(e) => {
                    trace!("{}: point #{i} ({a}, {b}): {e}", self.descriptor.name);
                    operands.set_xy(i, f64::NAN, f64::NAN);
                }
            }
        }
        successes
    }
}

// ----- T E S T S ------------------------------------------------------------------
