use crate::authoring::*;

// ----- T H E   M I N I M A L   P R O V I D E R ---------------------------------------

/// A minimalistic context provider, supporting only built in and run-time
/// defined projection families. Usually sufficient for cartographic uses,
/// and for internal test authoring.
#[derive(Debug, Default)]
pub struct Minimal {
    /// Constructors for user defined projection families
    registry: Registry,
    /// Instantiations of operators
    operators: BTreeMap<OpHandle, Op>,
}

const BAD_ID_MESSAGE: Error = Error::General("Minimal: Unknown operator id");

impl Context for Minimal {
    fn new() -> Minimal {
        Minimal::default()
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
        self.registry.register(name, constructor);
    }

    // User defined families trump the builtins
    fn get_op(&self, name: &str) -> Result<OpConstructor, Error> {
        if let Ok(constructor) = self.registry.get(name) {
            return Ok(constructor);
        }
        builtin_registry().get(name)
    }

    fn params(&self, op: OpHandle) -> Result<&ProjectionParameters, Error> {
        let op = self.operators.get(&op).ok_or(BAD_ID_MESSAGE)?;
        Ok(&op.params)
    }
}

// ----- T E S T S ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn basic() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        let op = ctx.op("bipc")?;

        let mut data = crate::some_basic_coor2dinates();
        assert_eq!(ctx.apply(op, Fwd, &mut data)?, 2);
        assert_float_eq!(data[0].0, [3_493_814.182_519_992, -275_491.616_573_893], abs_all <= 1e-5);

        assert_eq!(ctx.apply(op, Inv, &mut data)?, 2);
        let expected = crate::some_basic_coor2dinates();
        assert_float_eq!(data[0].0, expected[0].0, abs_all <= 1e-9);
        assert_float_eq!(data[1].0, expected[1].0, abs_all <= 1e-9);

        // The common setup is available for introspection
        let params = ctx.params(op)?;
        assert_eq!(params.name, "bipc");
        assert_eq!(params.semimajor_axis(), 6378137.);
        assert!(params.is_spherical());
        Ok(())
    }

    #[test]
    fn unknown() -> Result<(), Error> {
        let mut ctx = Minimal::new();
        assert!(matches!(ctx.op("doesnotexist"), Err(Error::NotFound(_, _))));

        let other = Minimal::new();
        let mut data = crate::some_basic_coor2dinates();
        let op = ctx.op("merc")?;
        assert!(matches!(other.apply(op, Fwd, &mut data), Err(Error::General(_))));
        assert!(other.params(op).is_err());
        Ok(())
    }

    #[test]
    fn user_defined_trumps_builtin() -> Result<(), Error> {
        #[derive(Debug)]
        struct Swap;
        impl Projection for Swap {
            fn fwd(&self, lam: f64, phi: f64) -> Result<(f64, f64), Error> {
                Ok((phi, lam))
            }
            fn inv(&self, x: f64, y: f64) -> Result<(f64, f64), Error> {
                Ok((y, x))
            }
        }
        fn swap(_params: &mut ProjectionParameters) -> Result<Box<dyn Projection>, Error> {
            Ok(Box::new(Swap))
        }

        let mut ctx = Minimal::new();
        ctx.register_op("merc", OpConstructor(swap));
        let op = ctx.op("merc R=1")?;
        let mut data = [Coor2D::raw(0.25, 0.5)];
        ctx.apply(op, Fwd, &mut data)?;
        assert_eq!(data[0], Coor2D::raw(0.5, 0.25));

        // Other contexts still see the builtin
        let mut other = Minimal::new();
        let op = other.op("merc R=1")?;
        let mut data = [Coor2D::raw(0.25, 0.)];
        other.apply(op, Fwd, &mut data)?;
        assert_eq!(data[0], Coor2D::raw(0.25, 0.));
        Ok(())
    }
}
