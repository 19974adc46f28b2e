#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Read or assigned a variable that was never declared.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a variable with `let` that already exists.
    DuplicateDeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The right operand of `/` or `%` was zero.
    DivisionByZero {
        /// The operator, `'/'` or `'%'`.
        op:   char,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::DuplicateDeclaration { name, line } => {
                write!(f, "Error on line {line}: '{name}' declared twice.")
            },
            Self::DivisionByZero { op, line } => {
                write!(f, "Error on line {line}: '{op}': division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
