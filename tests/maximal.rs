use carto::authoring::*;
use float_eq::assert_float_eq;

// ----- U S E R   P R O V I D E D   C O N T E X T ----------------------------------

/// A user provided context provider: Essentially the Minimal context, renamed
/// as Maximal, but with its own policy for lookup of projection families:
/// The builtins take precedence, and user defined families may only add to
/// them.
///
/// Since the integration tests in the "tests" directory of a crate are handled as
/// independent crates, this provider could just as well have been built entirely
/// outside of the Carto source tree.
#[derive(Debug, Default)]
pub struct Maximal {
    /// Constructors for user defined projection families
    registry: Registry,
    /// Instantiations of operators
    operators: BTreeMap<OpHandle, Op>,
}

const BAD_ID_MESSAGE: Error = Error::General("Maximal: Unknown operator id");

impl Context for Maximal {
    fn new() -> Maximal {
        Maximal::default()
    }

    fn op(&mut self, definition: &str) -> Result<OpHandle, Error> {
        let op = Op::new(definition, self)?;
        let id = op.id;
        self.operators.insert(id, op);
        Ok(id)
    }

    fn apply(
        &self,
        op: OpHandle,
        direction: Direction,
        operands: &mut dyn CoordinateSet,
    ) -> Result<usize, Error> {
        let op = self.operators.get(&op).ok_or(BAD_ID_MESSAGE)?;
        Ok(op.apply(operands, direction))
    }

    fn globals(&self) -> BTreeMap<String, String> {
        BTreeMap::from([("ellps".to_string(), "GRS80".to_string())])
    }

    fn register_op(&mut self, name: &str, constructor: OpConstructor) {
        if builtin_registry().contains(name) {
            warn!("Maximal: not overriding builtin '{name}'");
            return;
        }
        self.registry.register(name, constructor);
    }

    fn get_op(&self, name: &str) -> Result<OpConstructor, Error> {
        if let Ok(constructor) = builtin_registry().get(name) {
            return Ok(constructor);
        }
        self.registry.get(name)
    }

    fn params(&self, op: OpHandle) -> Result<&ProjectionParameters, Error> {
        let op = self.operators.get(&op).ok_or(BAD_ID_MESSAGE)?;
        Ok(&op.params)
    }
}

// ----- U S E R   P R O V I D E D   P R O J E C T I O N ----------------------------

/// Equidistant cylindrical (plate carrée), with the standard parallel
/// `lat_ts` and the latitude of origin `lat_0`, on the sphere
#[derive(Debug)]
struct Eqc {
    cos_lat_ts: f64,
    lat_0: f64,
}

impl Projection for Eqc {
    fn fwd(&self, lam: f64, phi: f64) -> Result<(f64, f64), Error> {
        Ok((lam * self.cos_lat_ts, phi - self.lat_0))
    }

    fn inv(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
        let phi = y + self.lat_0;
        if phi.abs() > FRAC_PI_2 {
            return Err(Error::OutOfDomain("eqc"));
        }
        Ok((x / self.cos_lat_ts, phi))
    }
}

#[rustfmt::skip]
const GAMUT: [OpParameter; 1] = [
    OpParameter::Real { key: "lat_ts", default: Some(0.) },
];

fn eqc(params: &mut ProjectionParameters) -> Result<Box<dyn Projection>, Error> {
    let parsed = ParsedParameters::new(&params.raw, &GAMUT)?;
    let lat_ts = parsed.real("lat_ts")?;
    if lat_ts.abs() >= 90. {
        return Err(Error::BadParam("lat_ts".to_string(), lat_ts.to_string()));
    }
    params.make_spherical();
    Ok(Box::new(Eqc {
        cos_lat_ts: lat_ts.to_radians().cos(),
        lat_0: params.lat_0,
    }))
}

// ----- T E S T S ------------------------------------------------------------------

#[test]
fn user_defined_projection() -> Result<(), Error> {
    let mut ctx = Maximal::new();
    assert!(matches!(ctx.op("eqc"), Err(Error::NotFound(_, _))));

    ctx.register_op("eqc", OpConstructor(eqc));
    let op = ctx.op("eqc lat_ts=60 R=1000 x_0=10")?;
    assert!(ctx.params(op)?.is_spherical());

    let mut data = [Coor2D::gis(90., 45.), Coor2D::gis(-90., -45.)];
    assert_eq!(ctx.apply(op, Fwd, &mut data)?, 2);
    assert_float_eq!(data[0].0, [1000. * FRAC_PI_4 + 10., 1000. * FRAC_PI_4], abs_all <= 1e-9);
    assert_float_eq!(data[1].0, [-1000. * FRAC_PI_4 + 10., -1000. * FRAC_PI_4], abs_all <= 1e-9);

    assert_eq!(ctx.apply(op, Inv, &mut data)?, 2);
    assert_float_eq!(data[0].to_degrees().0, [90., 45.], abs_all <= 1e-12);

    // The latitude of origin is left to the family
    let op = ctx.op("eqc R=1000 lat_0=45")?;
    let mut data = [Coor2D::gis(0., 45.), Coor2D::gis(0., 0.)];
    assert_eq!(ctx.apply(op, Fwd, &mut data)?, 2);
    assert_float_eq!(data[0].0, [0., 0.], abs_all <= 1e-9);
    assert_float_eq!(data[1].0, [0., -1000. * FRAC_PI_4], abs_all <= 1e-9);
    assert_eq!(ctx.apply(op, Inv, &mut data)?, 2);
    assert_float_eq!(data[1].to_degrees().0, [0., 0.], abs_all <= 1e-12);

    // Malformed and invalid parameters are reported at instantiation
    assert!(matches!(ctx.op("eqc lat_ts=north"), Err(Error::BadParam(_, _))));
    assert!(matches!(ctx.op("eqc lat_ts=90"), Err(Error::BadParam(_, _))));

    // Builtins are not overridden in this context
    ctx.register_op("bipc", OpConstructor(eqc));
    let op = ctx.op("bipc")?;
    let mut data = [Coor2D::gis(-100., 40.)];
    ctx.apply(op, Fwd, &mut data)?;
    assert_float_eq!(data[0].0, [3_493_814.182_519_992, -275_491.616_573_893], abs_all <= 1e-5);
    Ok(())
}

#[test]
fn user_defined_registry() -> Result<(), Error> {
    // A free standing registry, extending the builtins
    let mut registry = Registry::builtin();
    registry.register("eqc", OpConstructor(eqc));
    assert_eq!(registry.names(), ["bipc", "eqc", "merc"]);

    let raw = RawParameters::new("proj=eqc units=km", &Minimal::new().globals());
    let op = registry.create("eqc", ProjectionParameters::new(raw)?)?;
    let (x, y) = op.forward(1., 0.5)?;
    assert_float_eq!(x, 6378.137, abs <= 1e-9);
    assert_float_eq!(y, 6378.137 * 0.5, abs <= 1e-9);

    // The builtin registry is unaffected
    assert!(!builtin_registry().contains("eqc"));
    Ok(())
}

#[test]
fn concurrent_use_of_one_instance() -> Result<(), Error> {
    let op = Op::new("proj=bipc ellps=GRS80", &Minimal::new())?;

    // Known input/output pairs: Each thread must see its own
    let pairs = [
        ((-100., 40.), (3_493_814.182_519_992, -275_491.616_573_893)),
        ((-80., 10.), (-35_505.554_581_208, 1_071_089.284_990_323)),
        ((2., 1.), (2_452_160.217_725_756, -14_548_450.759_654_747)),
        ((-2., -1.), (2_018_090.503_004_699, -14_755_620.651_414_108)),
    ];

    std::thread::scope(|s| {
        let op = &op;
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let ((lon, lat), expected) = pairs[i % pairs.len()];
                s.spawn(move || {
                    for _ in 0..1000 {
                        let (x, y) = op.forward(f64::to_radians(lon), f64::to_radians(lat))?;
                        assert_float_eq!(x, expected.0, abs <= 1e-5);
                        assert_float_eq!(y, expected.1, abs <= 1e-5);
                        let (l, p) = op.inverse(x, y)?;
                        assert_float_eq!(l.to_degrees(), lon, abs <= 1e-7);
                        assert_float_eq!(p.to_degrees(), lat, abs <= 1e-7);
                    }
                    Ok::<(), Error>(())
                })
            })
            .collect();
        for handle in handles {
            assert!(matches!(handle.join(), Ok(Ok(()))));
        }
    });

    // Failures leave the instance reusable
    assert!(op.inverse(f64::NAN, 0.).is_err());
    assert!(op.forward(0., 0.).is_ok());
    Ok(())
}
