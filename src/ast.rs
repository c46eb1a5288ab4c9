use std::{fmt, rc::Rc};

/// The root of a parsed source: a sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A binding introduced with `let`, e.g. `let x = 5;`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound value.
        value: Expr,
    },
    /// An explicit `return`, e.g. `return x;`.
    Return {
        /// The returned value.
        value: Expr,
    },
    /// A bare expression evaluated for its result.
    Expression {
        /// The expression.
        expr: Expr,
    },
}

/// A brace-delimited sequence of statements, the body of functions and `if`
/// branches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockStatement {
    /// The statements inside the braces.
    pub statements: Vec<Statement>,
}

/// An expression node.
///
/// Every expression prints in a fully parenthesized canonical form through
/// its `Display` implementation, which is what parser tests compare against.
///
/// # Example
/// ```
/// use lainoa::ast::{Expr, InfixOperator};
///
/// let expr = Expr::Infix { left:     Box::new(Expr::Identifier { name: "a".to_string() }),
///                          operator: InfixOperator::Add,
///                          right:    Box::new(Expr::IntegerLiteral(1)), };
///
/// assert_eq!(expr.to_string(), "(a + 1)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
    },
    /// An integer literal.
    IntegerLiteral(i64),
    /// A string literal, without its quotes.
    StringLiteral(String),
    /// `true` or `false`.
    BooleanLiteral(bool),
    /// `nil`
    NilLiteral,
    /// An array literal, e.g. `[1, 2, 3]`.
    ArrayLiteral {
        /// The element expressions.
        elements: Vec<Self>,
    },
    /// A prefix operation, e.g. `-x` or `!ok`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        operand:  Box<Self>,
    },
    /// A binary operation, e.g. `a + b`.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// `if (condition) { ... } else { ... }`
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
    },
    /// A function literal, e.g. `fun(a, b) { a + b }`.
    ///
    /// Parameters and body are reference counted so that function values
    /// created at runtime share them with the tree instead of copying.
    Function {
        /// The parameter names.
        parameters: Rc<[String]>,
        /// The function body.
        body:       Rc<BlockStatement>,
    },
    /// A call, e.g. `add(1, 2)`.
    Call {
        /// The expression producing the called value.
        callee:    Box<Self>,
        /// The argument expressions.
        arguments: Vec<Self>,
    },
    /// An index operation, e.g. `items[0]`.
    Index {
        /// The indexed collection.
        collection: Box<Self>,
        /// The index.
        index:      Box<Self>,
    },
    /// Rebinding of an existing name, e.g. `x = 10`.
    Assign {
        /// The name being rebound.
        name:  String,
        /// The new value.
        value: Box<Self>,
    },
}

/// A prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`), based on truthiness.
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Unary plus (`+x`).
    Plus,
}

/// A binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Integer division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
            Self::Plus => "+",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Writes `items` separated by `, `.
pub(crate) fn write_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>,
                                               items: &[T])
                                               -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::StringLiteral(value) => write!(f, "\"{value}\""),
            Self::BooleanLiteral(value) => write!(f, "{value}"),
            Self::NilLiteral => write!(f, "nil"),
            Self::ArrayLiteral { elements } => {
                write!(f, "[")?;
                write_separated(f, elements)?;
                write!(f, "]")
            },
            Self::Prefix { operator, operand } => write!(f, "({operator}{operand})"),
            Self::Infix { left, operator, right } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Function { parameters, body } => {
                write!(f, "fun(")?;
                write_separated(f, parameters)?;
                write!(f, ") {body}")
            },
            Self::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_separated(f, arguments)?;
                write!(f, ")")
            },
            Self::Index { collection, index } => write!(f, "{collection}[{index}]"),
            Self::Assign { name, value } => write!(f, "{name} = {value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Expr {
        Expr::Identifier { name: name.to_string() }
    }

    #[test]
    fn let_statement_text() {
        let program = Program { statements: vec![Statement::Let { name:  "my_var".to_string(),
                                                                   value: ident("another_var"), }], };

        assert_eq!(program.to_string(), "let my_var = another_var;");
    }

    #[test]
    fn if_else_text() {
        let branch = |name| BlockStatement { statements: vec![Statement::Expression { expr: ident(name) }] };
        let expr = Expr::If { condition:   Box::new(Expr::Infix { left:     Box::new(ident("x")),
                                                                  operator: InfixOperator::Less,
                                                                  right:    Box::new(ident("y")), }),
                              consequence: branch("x"),
                              alternative: Some(branch("y")), };

        assert_eq!(expr.to_string(), "if(x < y) x else y");
    }

    #[test]
    fn function_and_call_text() {
        let body = BlockStatement { statements: vec![Statement::Return { value: ident("a") }] };
        let function = Expr::Function { parameters: Rc::from(vec!["a".to_string(), "b".to_string()]),
                                        body:       Rc::new(body), };
        let call = Expr::Call { callee:    Box::new(function),
                                arguments: vec![Expr::StringLiteral("s".to_string()),
                                                Expr::NilLiteral], };

        assert_eq!(call.to_string(), "fun(a, b) return a;(\"s\", nil)");
    }
}
