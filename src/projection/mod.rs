use crate::authoring::*;
use once_cell::sync::Lazy;

// ----- B U I L T I N   P R O J E C T I O N S -----------------------------------------

// Install new builtin projection families by adding them in the `mod` and
// `BUILTIN_PROJECTIONS` blocks below

mod bipc;
mod merc;

#[rustfmt::skip]
const BUILTIN_PROJECTIONS: [(&str, OpConstructor); 2] = [
    ("bipc",  OpConstructor(bipc::new)),
    ("merc",  OpConstructor(merc::new)),
];
// A BTreeMap would have been a better choice for BUILTIN_PROJECTIONS, except
// for the annoying fact that it cannot be compile-time const-constructed.
// Hence the lazily built registry below.

static BUILTIN: Lazy<Registry> = Lazy::new(Registry::builtin);

/// The process wide registry of builtin projection families. Populated
/// on first use, read-only thereafter.
pub fn builtin_registry() -> &'static Registry {
    &BUILTIN
}

// ----- T R A I T   P R O J E C T I O N -----------------------------------------------

/// The numerical core of a projection family.
///
/// Implementations work on the unit sphere (or the ellipsoid with unit
/// semimajor axis), with the longitude already reduced to the central
/// meridian. Everything else is handled by the [Op] envelope. Angles are
/// in radians.
///
/// The ellipsoidal variants default to the spherical ones, so families
/// defined on the sphere only need not implement them.
pub trait Projection: core::fmt::Debug + Send + Sync {
    fn fwd(&self, lam: f64, phi: f64) -> Result<(f64, f64), Error>;
    fn inv(&self, x: f64, y: f64) -> Result<(f64, f64), Error>;

    fn e_fwd(&self, lam: f64, phi: f64) -> Result<(f64, f64), Error> {
        self.fwd(lam, phi)
    }
    fn e_inv(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        self.inv(x, y)
    }
}

// ----- S T R U C T   O P C O N S T R U C T O R ---------------------------------------

/// Blueprint for the instantiation of a projection family.
///
/// The constructor reads its family specific configuration from the
/// parameter store in `params.raw`, and may adjust the shared setup
/// (e.g. by making it spherical).
///
/// OpConstructor needs to be a newtype, rather than a type alias,
/// since we must implement the Debug-trait for OpConstructor (to
/// make auto derive of the Debug-trait work for any derived type).
#[derive(Clone, Copy)]
pub struct OpConstructor(
    pub fn(params: &mut ProjectionParameters) -> Result<Box<dyn Projection>, Error>,
);

// Cannot autoderive the Debug trait
impl core::fmt::Debug for OpConstructor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "OpConstructor")
    }
}

// ----- S T R U C T   R E G I S T R Y -------------------------------------------------

/// Mapping from projection family names to their constructors
#[derive(Debug, Default, Clone)]
pub struct Registry {
    constructors: BTreeMap<String, OpConstructor>,
}

impl Registry {
    /// An empty registry
    pub fn new() -> Registry {
        Registry::default()
    }

    /// A registry holding the builtin projection families
    pub fn builtin() -> Registry {
        let mut registry = Registry::new();
        for (name, constructor) in BUILTIN_PROJECTIONS {
            registry.register(name, constructor);
        }
        registry
    }

    /// Register `constructor` under `name`, replacing any earlier registration
    pub fn register(&mut self, name: &str, constructor: OpConstructor) {
        if self
            .constructors
            .insert(name.to_string(), constructor)
            .is_some()
        {
            warn!("Registry: replacing the constructor for '{name}'");
        }
    }

    pub fn get(&self, name: &str) -> Result<OpConstructor, Error> {
        self.constructors
            .get(name)
            .copied()
            .ok_or_else(|| Error::NotFound(name.to_string(), String::default()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// The names registered, in alphabetical order
    pub fn names(&self) -> Vec<&str> {
        self.constructors.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Instantiate the family registered as `name`, with the setup `params`
    pub fn create(&self, name: &str, params: ProjectionParameters) -> Result<Op, Error> {
        Op::with_constructor(self.get(name)?, params)
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn params(definition: &str) -> Result<ProjectionParameters, Error> {
        let raw = RawParameters::new(definition, &Minimal::new().globals());
        ProjectionParameters::new(raw)
    }

    #[test]
    fn builtin() -> Result<(), Error> {
        let registry = builtin_registry();
        assert_eq!(registry.names(), ["bipc", "merc"]);
        assert!(registry.contains("bipc"));
        assert!(!registry.is_empty());

        let op = registry.create("bipc", params("bipc bns")?)?;
        assert_eq!(op.descriptor.name, "bipc");
        assert!(op.params.is_spherical());

        // Same instance every time
        assert!(std::ptr::eq(registry, builtin_registry()));
        Ok(())
    }

    #[test]
    fn miss() -> Result<(), Error> {
        let registry = builtin_registry();
        let before = registry.names();
        assert!(matches!(
            registry.create("doesnotexist", params("doesnotexist")?),
            Err(Error::NotFound(_, _))
        ));
        assert!(matches!(registry.get("doesnotexist"), Err(Error::NotFound(_, _))));
        assert_eq!(before, registry.names());
        Ok(())
    }

    #[test]
    fn register() -> Result<(), Error> {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        registry.register("mercator", builtin_registry().get("merc")?);
        assert_eq!(registry.len(), 1);

        let op = registry.create("mercator", params("mercator R=1")?)?;
        let (x, y) = op.forward(0.5, 0.)?;
        assert_eq!((x, y), (0.5, 0.));
        Ok(())
    }
}
