use super::*;

/// The lexical parameter store.
///
/// `RawParameters` is the vehicle used by `Op::new(...)` to ferry the
/// definition from the invocator into the `ProjectionParameters`, and from
/// there into the constructors of the individual projection families.
///
/// Building it never fails: Unknown keys are legal, and left for whoever
/// needs them. Typing happens on access, through the `real`, `integer`,
/// `flag` and `text` accessors, or in bulk by converting into an instance of
/// [ParsedParameters](super::ParsedParameters).
#[derive(Debug, Default, Clone)]
pub struct RawParameters {
    /// The definition, as given
    pub invocation: String,
    /// The definition, syntactically normalized
    pub definition: String,
    /// Lower precedence defaults, typically from the `Context`
    pub globals: BTreeMap<String, String>,
    /// The key/value pairs of the definition itself
    pub locals: BTreeMap<String, String>,
}

impl RawParameters {
    pub fn new(invocation: &str, globals: &BTreeMap<String, String>) -> RawParameters {
        let definition = invocation.normalize();
        let locals = definition.split_into_parameters();
        RawParameters {
            invocation: invocation.to_string(),
            definition,
            globals: globals.clone(),
            locals,
        }
    }

    /// The name of the projection family, or the empty string if none was given
    pub fn name(&self) -> String {
        self.definition.operator_name("")
    }

    /// The textual value of `key`. Locals trump globals
    pub fn get(&self, key: &str) -> Option<&str> {
        self.locals
            .get(key)
            .or_else(|| self.globals.get(key))
            .map(|v| v.as_str())
    }

    /// True if `key` is given, irrespective of its value
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn real(&self, key: &str, default: f64) -> Result<f64, Error> {
        let Some(value) = self.get(key) else {
            return Ok(default);
        };
        value.parse::<f64>().map_err(|_| {
            warn!("Cannot parse {key}:{value} as a real number");
            Error::BadParam(key.to_string(), value.to_string())
        })
    }

    pub fn integer(&self, key: &str, default: i64) -> Result<i64, Error> {
        let Some(value) = self.get(key) else {
            return Ok(default);
        };
        value.parse::<i64>().map_err(|_| {
            warn!("Cannot parse {key}:{value} as an integer");
            Error::BadParam(key.to_string(), value.to_string())
        })
    }

    pub fn text(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() -> Result<(), Error> {
        let globals = BTreeMap::from([
            ("ellps".to_string(), "GRS80".to_string()),
            ("x_0".to_string(), "100".to_string()),
        ]);
        let raw = RawParameters::new("+proj=bipc +bns +x_0=500 +n=3 +foo=bar", &globals);

        assert_eq!(raw.name(), "bipc");
        assert_eq!(raw.invocation, "+proj=bipc +bns +x_0=500 +n=3 +foo=bar");
        assert_eq!(raw.definition, "proj=bipc bns x_0=500 n=3 foo=bar");

        // Flags are true when present, whatever their value, and false otherwise
        assert!(raw.flag("bns"));
        assert!(!raw.flag("inv"));

        // Locals trump globals, and globals fill in the gaps
        assert_eq!(raw.real("x_0", 0.)?, 500.);
        assert_eq!(raw.text("ellps", "intl"), "GRS80");
        assert_eq!(raw.real("y_0", 42.)?, 42.);
        assert_eq!(raw.integer("n", 1)?, 3);
        assert_eq!(raw.text("foo", ""), "bar");

        // Malformed values are reported as such
        assert!(matches!(raw.real("foo", 0.), Err(Error::BadParam(_, _))));
        assert!(matches!(raw.integer("ellps", 0), Err(Error::BadParam(_, _))));
        Ok(())
    }

    #[test]
    fn no_name() {
        let raw = RawParameters::new("x_0=1 y_0=2", &BTreeMap::new());
        assert_eq!(raw.name(), "");
        assert!(raw.locals.contains_key("x_0"));
    }
}
