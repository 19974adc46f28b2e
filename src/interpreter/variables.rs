use crate::error::RuntimeError;

/// A named value created by a `let` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name:  String,
    pub value: f64,
}

/// The session's variables, in declaration order.
///
/// Names are unique: [`VariableTable::define`] refuses to declare a name
/// twice. Variables live until the table is dropped.
///
/// ## Example
/// ```
/// use deskcalc::interpreter::variables::VariableTable;
///
/// let mut table = VariableTable::new();
/// table.define("x", 2.0, 1).unwrap();
/// table.assign("x", 3.0, 1).unwrap();
/// assert_eq!(table.lookup("x", 1).unwrap(), 3.0);
/// assert!(table.define("x", 4.0, 1).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    variables: Vec<Variable>,
}

impl VariableTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: Vec::new() }
    }

    /// Creates a table holding the constants every session starts with:
    /// `pi` and `e`.
    ///
    /// # Errors
    /// Cannot fail for an empty table, but declaring goes through
    /// [`VariableTable::define`] all the same.
    pub fn with_constants() -> Result<Self, RuntimeError> {
        let mut table = Self::new();
        table.define("pi", 3.141_592_653_5, 0)?;
        table.define("e", 2.718_281_828_4, 0)?;
        Ok(table)
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if `name` was never declared.
    pub fn lookup(&self, name: &str, line: usize) -> Result<f64, RuntimeError> {
        self.variables
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Overwrites the value of an existing variable. Assignment never
    /// declares.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if `name` was never declared.
    pub fn assign(&mut self, name: &str, value: f64, line: usize) -> Result<(), RuntimeError> {
        match self.variables.iter_mut().find(|v| v.name == name) {
            Some(variable) => {
                variable.value = value;
                Ok(())
            },
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v.name == name)
    }

    /// Declares `name` with an initial `value`.
    ///
    /// # Returns
    /// The value, so a declaration can be printed like any other result.
    ///
    /// # Errors
    /// `RuntimeError::DuplicateDeclaration` if `name` already exists; the
    /// existing binding is left untouched.
    pub fn define(&mut self, name: &str, value: f64, line: usize) -> Result<f64, RuntimeError> {
        if self.is_declared(name) {
            return Err(RuntimeError::DuplicateDeclaration { name: name.to_string(),
                                                            line });
        }
        self.variables.push(Variable { name: name.to_string(),
                                       value });
        Ok(value)
    }

    /// Iterates over the variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }
}
