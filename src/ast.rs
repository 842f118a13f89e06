/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code: integers, booleans and quoted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A quoted text literal with escapes already resolved.
    Text(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all expression forms, from literals and variables to calls,
/// special forms, indexing and blocks. Each variant carries the source line it
/// started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value (integer, boolean or text).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable or function by name.
    Variable {
        /// Name being referenced.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// The accumulator `_` of the innermost active block.
    Accumulator {
        /// Line number in the source code.
        line: usize,
    },
    /// The 2-D `input` grid.
    Input {
        /// Line number in the source code.
        line: usize,
    },
    /// List literal expression, e.g. `[1, 2, 3]`.
    List {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Inclusive range literal, e.g. `[1..5]` or `[5..1]`.
    Range {
        /// First element of the range.
        start: Box<Self>,
        /// Last element of the range.
        end:   Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation such as `~x`, `!x` or `-x`.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation, including the lazy logical operators and pipe.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Call of a named function, e.g. `addOne(x)`.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Call of a computed callee, e.g. `(f |> g)(5)`.
    Apply {
        /// Expression producing the function value.
        callee:    Box<Self>,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// One of `if`, `for` or `len`, written with call syntax.
    ///
    /// Arguments are kept unevaluated; the evaluator decides which of them to
    /// evaluate and validates their count.
    SpecialCall {
        /// Which special form is being invoked.
        form:      SpecialForm,
        /// Arguments following the form's own header.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Index or slice access, e.g. `a[0]`, `a[1..3]` or `input[.., 2]`.
    Index {
        /// The value being indexed.
        target:  Box<Self>,
        /// One or two index items.
        indices: Vec<IndexItem>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Method call, e.g. `input.rows()`.
    MethodCall {
        /// The receiver.
        target: Box<Self>,
        /// The method being called.
        method: Method,
        /// Line number in the source code.
        line:   usize,
    },
    /// A block of statements evaluating to its accumulator.
    Block {
        /// Statements inside the block.
        statements: Vec<Statement>,
        /// Line number in the source code.
        line:       usize,
    },
}

/// The three forms that look like calls but evaluate their arguments lazily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialForm {
    /// `if(cond, then, else?)`
    If,
    /// `for(var of seq, body, init?)`; the `var of seq` header lives here.
    For(LoopBinding),
    /// `len(x)`
    Len,
}

/// The `var of sequence` header of a `for` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopBinding {
    /// Name bound to each element in turn.
    pub var:      String,
    /// Expression producing the list or text to iterate.
    pub sequence: Box<Expr>,
}

/// A single item inside an index bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexItem {
    /// A single position, e.g. `a[2]`.
    Single(Expr),
    /// A half-open slice with optional bounds, e.g. `a[1..]` or `a[..]`.
    Range {
        /// Inclusive lower bound; `0` when omitted.
        start: Option<Expr>,
        /// Exclusive upper bound; the length when omitted.
        end:   Option<Expr>,
    },
}

/// Methods callable with `.name()` syntax.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    /// `.rows()` materializes a grid into a list of row lists.
    Rows,
}

/// Represents a user-defined function definition.
///
/// A function binds its parameter names to an expression or block body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names (e.g. `x`).
    pub params: Vec<String>,
    /// The body evaluated when the function is called.
    pub body:   Expr,
    /// Line number in the source code.
    pub line:   usize,
}

/// The left-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignTarget {
    /// A named global variable.
    Variable(String),
    /// The accumulator `_`.
    Accumulator,
}

impl std::fmt::Display for AssignTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "{name}"),
            Self::Accumulator => write!(f, "_"),
        }
    }
}

/// Represents a statement.
///
/// Statements are the units a program and every block are made of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A user-defined function declaration.
    Function(FunctionDef),
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// An assignment binding a name to an expression.
    Assignment {
        /// The variable or accumulator being written.
        target: AssignTarget,
        /// The value which is being assigned.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// A compound assignment such as `x += 1` or `_ *= 2`.
    CompoundAssignment {
        /// The variable or accumulator being updated.
        target: AssignTarget,
        /// The arithmetic operation applied to the old value.
        op:     BinaryOperator,
        /// The value to be combined with the current value.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, the short-circuiting
/// logical operators and function composition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating division (`/`)
    Div,
    /// Remainder with the sign of the dividend (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Structural equality (`==`)
    Equal,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Left-to-right function composition (`|>`)
    Pipe,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
    /// Conversion to integer (e.g. `~"12"`).
    ToInteger,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, Or, Pipe, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            And => "&&",
            Or => "||",
            Pipe => "|>",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
            Self::ToInteger => "~",
        };
        write!(f, "{operator}")
    }
}
