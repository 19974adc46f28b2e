use crate::{error::RuntimeError, interpreter::variables::VariableTable};

/// Session settings chosen on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Print the `> ` prompt before each statement.
    pub prompt:      bool,
    /// Extra variables declared after `pi` and `e`, in order.
    pub definitions: Vec<(String, f64)>,
}

impl Default for Config {
    fn default() -> Self {
        Self { prompt:      true,
               definitions: Vec::new(), }
    }
}

impl Config {
    /// Builds the variable table a session starts with: the constants `pi`
    /// and `e`, then every entry of [`Config::definitions`].
    ///
    /// # Errors
    /// `RuntimeError::DuplicateDeclaration` if a definition repeats a name.
    pub fn variables(&self) -> Result<VariableTable, RuntimeError> {
        let mut table = VariableTable::with_constants()?;
        for (name, value) in &self.definitions {
            table.define(name, *value, 0)?;
        }
        Ok(table)
    }
}

/// Parses a `NAME=VALUE` pair as given to `--define`.
///
/// The name must be a valid variable name: an ASCII letter other than a
/// lowercase `q`, followed by ASCII letters and digits, and not `let`.
///
/// # Errors
/// A message describing what is wrong with `arg`.
///
/// # Example
/// ```
/// use deskcalc::config::parse_definition;
///
/// assert_eq!(parse_definition("rate=0.25").unwrap(), ("rate".to_string(), 0.25));
/// assert!(parse_definition("2x=1").is_err());
/// assert!(parse_definition("x").is_err());
/// ```
pub fn parse_definition(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{arg}'"))?;
    let name = name.trim();

    let mut chars = name.chars();
    let valid = chars.next()
                     .is_some_and(|c| c.is_ascii_alphabetic() && c != 'q')
                && chars.all(|c| c.is_ascii_alphanumeric())
                && name != "let";
    if !valid {
        return Err(format!("'{name}' is not a valid variable name"));
    }

    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;

    Ok((name.to_string(), value))
}
