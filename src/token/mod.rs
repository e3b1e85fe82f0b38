use std::collections::BTreeMap;

/// Convenience methods for lexical analysis of projection definitions.
/// - For syntactical normalization by eliminating non-significant whitespace
///   and PROJ style `+` separators
/// - For splitting a definition into parameters (i.e. key=value-pairs)
/// - For accessing the name of the projection given
pub trait Tokenize {
    /// Split a definition into parameters. Give special treatment
    /// to names and flags:
    /// ```txt
    /// 'foo bar=baz bonk=blue flag'  -> ('name=foo', 'bar=baz', 'bonk=blue', 'flag=true')
    /// '+proj=foo +bar=baz +flag'    -> ('name=foo', 'bar=baz', 'flag=true')
    /// ```
    /// Later occurrences of a key overwrite earlier ones.
    fn split_into_parameters(&self) -> BTreeMap<String, String>;

    /// Helper function for 'split_into_parameters': Glue syntactical
    /// elements together, and separate them from each other by a single space:
    ///
    /// 1. Glue key-value pairs together by omitting whitespace around '=':
    ///    ```txt
    ///    key1= value1            key2    =value2  ->  key1=value1 key2=value2
    ///    ```
    /// 2. Trim whitespace around the sequence separator ',':
    ///    ```txt
    ///    ellps = 6400000 ,  300  ->  ellps=6400000,300
    ///    ```
    /// 3. Turn PROJ style `+` separators into spaces, while keeping signs
    ///    and exponents:
    ///    ```txt
    ///    +proj=bipc+x_0=+1e+5  ->  proj=bipc x_0=+1e+5
    ///    ```
    fn normalize(&self) -> String;

    /// The name of the projection given, i.e. either the value of the `proj`
    /// key, or the leading bare word
    fn operator_name(&self, default: &str) -> String;
}

/// Tokenize implementation for string-like objects
impl<T> Tokenize for T
where
    T: AsRef<str>,
{
    fn split_into_parameters(&self) -> BTreeMap<String, String> {
        // Remove non-significant whitespace
        let definition = self.normalize();
        let elements: Vec<_> = definition.split_whitespace().collect();

        // With an explicit `proj=...` element, all bare words are flags
        let explicit_name = elements.iter().any(|e| e.starts_with("proj="));

        let mut params = BTreeMap::new();
        for (index, element) in elements.iter().enumerate() {
            // Split a key=value-pair into key and value parts. Add a boolean
            // true part for flags (flags are booleans that are true when
            // specified, false when not)
            let (key, value) = element.split_once('=').unwrap_or((*element, "true"));

            if key == "proj" {
                params.insert(String::from("name"), String::from(value));
                continue;
            }

            // If the first arg is a key-without-value, it is the name of the operator
            if index == 0 && !explicit_name && !element.contains('=') {
                params.insert(String::from("name"), String::from(key));
                continue;
            }

            params.insert(String::from(key), String::from(value));
        }

        params
    }

    fn normalize(&self) -> String {
        let glued = collapse(self.as_ref());

        // A '+' is a separator, unless it is the sign of a value, or the sign
        // of the exponent of a number
        let chars: Vec<char> = glued.chars().collect();
        let mut separated = String::with_capacity(glued.len());
        for (i, c) in chars.iter().enumerate() {
            if *c != '+' {
                separated.push(*c);
                continue;
            }
            let prev = if i > 0 { chars[i - 1] } else { ' ' };
            let prevprev = if i > 1 { chars[i - 2] } else { ' ' };
            let is_sign = prev == '=' || prev == ',';
            let is_exponent =
                (prev == 'e' || prev == 'E') && (prevprev.is_ascii_digit() || prevprev == '.');
            if is_sign || is_exponent {
                separated.push('+');
            } else {
                separated.push(' ');
            }
        }

        collapse(&separated)
    }

    fn operator_name(&self, default: &str) -> String {
        self.split_into_parameters()
            .get("name")
            .unwrap_or(&default.to_string())
            .to_string()
    }
}

// Conflate contiguous whitespace, then remove whitespace around {"=", ","}
fn collapse(text: &str) -> String {
    let elements: Vec<_> = text.split_whitespace().collect();
    elements
        .join(" ")
        .replace("= ", "=")
        .replace(", ", ",")
        .replace(" =", "=")
        .replace(" ,", ",")
}

// ----- T E S T S ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // Test the fundamental tokenization functionality
    #[test]
    fn token() {
        assert_eq!("foo bar  baz = bonk".normalize(), "foo bar baz=bonk");
        assert_eq!("foo  ellps =  1 , 2".normalize(), "foo ellps=1,2");
        assert_eq!("foo bar baz=bonk".split_into_parameters()["name"], "foo");
        assert_eq!("foo bar baz=bonk".split_into_parameters()["bar"], "true");
        assert_eq!("foo bar baz=bonk".split_into_parameters()["baz"], "bonk");
        assert_eq!("foo bar baz=bonk".operator_name(""), "foo");
        assert_eq!("bar=baz".operator_name("none"), "none");
    }

    #[test]
    fn proj_style() {
        assert_eq!("+proj=bipc +bns".normalize(), "proj=bipc bns");
        assert_eq!("+proj=bipc+bns".normalize(), "proj=bipc bns");
        assert_eq!("+proj = bipc   +x_0=+1e+5".normalize(), "proj=bipc x_0=+1e+5");
        assert_eq!("x_0=1.E+5 y_0=-2".normalize(), "x_0=1.E+5 y_0=-2");

        let params = "+proj=bipc +bns".split_into_parameters();
        assert_eq!(params["name"], "bipc");
        assert_eq!(params["bns"], "true");
        assert!(!params.contains_key("proj"));

        // With an explicit proj=..., a leading bare word is a flag
        let params = "bns proj=bipc".split_into_parameters();
        assert_eq!(params["name"], "bipc");
        assert_eq!(params["bns"], "true");
    }

    #[test]
    fn last_one_wins() {
        let params = "merc x_0=1 x_0=2 +x_0=3".split_into_parameters();
        assert_eq!(params["x_0"], "3");
        let params = "proj=merc proj=bipc".split_into_parameters();
        assert_eq!(params["name"], "bipc");
    }
}
