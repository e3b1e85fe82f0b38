use super::*;

/// The typed parameter store of a projection family: The result of checking
/// a [RawParameters] instance against the *gamut* of the family.
#[derive(Debug)]
pub struct ParsedParameters {
    pub name: String,

    // Family specific options are stored in B-Trees
    pub boolean: BTreeSet<&'static str>,
    pub integer: BTreeMap<&'static str, i64>,
    pub real: BTreeMap<&'static str, f64>,
    pub text: BTreeMap<&'static str, String>,
    pub ignored: Vec<String>,
    pub given: BTreeMap<String, String>,
}

// Accessors
impl ParsedParameters {
    pub fn boolean(&self, key: &str) -> bool {
        self.boolean.contains(key)
    }
    pub fn integer(&self, key: &str) -> Result<i64, Error> {
        if let Some(value) = self.integer.get(key) {
            return Ok(*value);
        }
        Err(Error::MissingParam(key.to_string()))
    }
    pub fn real(&self, key: &str) -> Result<f64, Error> {
        if let Some(value) = self.real.get(key) {
            return Ok(*value);
        }
        Err(Error::MissingParam(key.to_string()))
    }
    pub fn text(&self, key: &str) -> Result<String, Error> {
        if let Some(value) = self.text.get(key) {
            return Ok(value.to_string());
        }
        Err(Error::MissingParam(key.to_string()))
    }
    pub fn ignored(&self) -> Vec<String> {
        self.ignored.clone()
    }
}

impl ParsedParameters {
    pub fn new(
        parameters: &RawParameters,
        gamut: &[OpParameter],
    ) -> Result<ParsedParameters, Error> {
        let mut boolean = BTreeSet::<&'static str>::new();
        let mut integer = BTreeMap::<&'static str, i64>::new();
        let mut real = BTreeMap::<&'static str, f64>::new();
        let mut text = BTreeMap::<&'static str, String>::new();

        // Try to locate all accepted parameters, type check, and place them into
        // their proper bins
        for p in gamut {
            match *p {
                OpParameter::Flag { key } => {
                    // Flags are always optional (i.e. implicitly false when not
                    // given), and true when given, whatever the value
                    if parameters.flag(key) {
                        boolean.insert(key);
                    }
                }

                OpParameter::Integer { key, default } => {
                    if let Some(value) = parameters.get(key) {
                        if let Ok(v) = value.parse::<i64>() {
                            integer.insert(key, v);
                            continue;
                        }
                        warn!("Cannot parse {key}:{value} as an integer!");
                        return Err(Error::BadParam(key.to_string(), value.to_string()));
                    }

                    // If we're here, the key was not found

                    // Default given?
                    if let Some(value) = default {
                        integer.insert(key, value);
                        continue;
                    }

                    // Missing a required parameter
                    error!("Missing required parameter '{key}'");
                    return Err(Error::MissingParam(key.to_string()));
                }

                OpParameter::Real { key, default } => {
                    if let Some(value) = parameters.get(key) {
                        if let Ok(v) = value.parse::<f64>() {
                            real.insert(key, v);
                            continue;
                        }
                        warn!("Cannot parse {key}:{value} as a real number");
                        return Err(Error::BadParam(key.to_string(), value.to_string()));
                    }

                    if let Some(value) = default {
                        real.insert(key, value);
                        continue;
                    }

                    error!("Missing required parameter '{key}'");
                    return Err(Error::MissingParam(key.to_string()));
                }

                OpParameter::Text { key, default } => {
                    if let Some(value) = parameters.get(key) {
                        text.insert(key, value.to_string());
                        continue;
                    }

                    if let Some(value) = default {
                        text.insert(key, value.to_string());
                        continue;
                    }

                    error!("Missing required parameter '{key}'");
                    return Err(Error::MissingParam(key.to_string()));
                }
            };
        }

        let name = parameters.name();

        // Params specified, but used neither by the family, nor by the envelope
        let given = parameters.locals.clone();
        let ignored: Vec<String> = given
            .keys()
            .filter(|&key| key != "name")
            .filter(|&key| !gamut.iter().any(|p| p.key() == key))
            .filter(|&key| !COMMON_GAMUT.iter().any(|p| p.key() == key))
            .cloned()
            .collect();
        for key in &ignored {
            warn!("{name}: ignoring unknown parameter '{key}'");
        }

        Ok(ParsedParameters {
            name,
            boolean,
            integer,
            real,
            text,
            ignored,
            given,
        })
    }
}

// ----- T E S T S ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const GAMUT: [OpParameter; 5] = [
        OpParameter::Flag    { key: "flag" },
        OpParameter::Integer { key: "integer",  default: Some(-1)},
        OpParameter::Real    { key: "real",     default: Some(1.25) },
        OpParameter::Real    { key: "lat_ts",   default: Some(0.) },
        OpParameter::Text    { key: "text",     default: Some("text") },
    ];

    #[test]
    fn basic() -> Result<(), Error> {
        let invocation = String::from("cucumber flag lat_ts=55 x_0=3 banana=split");
        let globals = BTreeMap::<String, String>::new();
        let raw = RawParameters::new(&invocation, &globals);
        let p = ParsedParameters::new(&raw, &GAMUT)?;

        // Booleans correctly parsed?
        assert!(p.boolean("flag"), "`flag` not in registered booleans: {:#?}", p.boolean);
        assert!(!p.boolean("galf"), "`galf` in registered booleans: {:?}", p.boolean);

        // Defaults and given values
        assert_eq!(p.name, "cucumber");
        assert_eq!(p.integer("integer")?, -1);
        assert_eq!(p.real("real")?, 1.25);
        assert_eq!(p.real("lat_ts")?, 55.);
        assert_eq!(p.text("text")?, "text");
        assert!(matches!(p.real("galf"), Err(Error::MissingParam(_))));

        // `x_0` belongs to the common gamut, so only the banana is ignored
        assert_eq!(p.ignored(), ["banana"]);
        assert_eq!(p.given["x_0"], "3");
        Ok(())
    }

    #[test]
    fn malformed_and_missing() {
        let globals = BTreeMap::<String, String>::new();
        let raw = RawParameters::new("cucumber integer=1.5", &globals);
        assert!(matches!(
            ParsedParameters::new(&raw, &GAMUT),
            Err(Error::BadParam(_, _))
        ));

        let raw = RawParameters::new("cucumber real=pi", &globals);
        assert!(matches!(
            ParsedParameters::new(&raw, &GAMUT),
            Err(Error::BadParam(_, _))
        ));

        const REQUIRED: [OpParameter; 1] = [OpParameter::Real { key: "zone", default: None }];
        let raw = RawParameters::new("cucumber", &globals);
        assert!(matches!(
            ParsedParameters::new(&raw, &REQUIRED),
            Err(Error::MissingParam(_))
        ));
    }
}
