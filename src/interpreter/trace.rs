use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::value::core::Value,
};

/// One step of a traced evaluation.
///
/// Each event carries the nesting `depth` it happened at: `0` at top level,
/// one more inside every `if` branch, loop body and function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A name or `_` was bound by `=`.
    Assign {
        /// The assigned name, `_` for the accumulator.
        name:  String,
        /// The previous value, `None` if the name was unbound.
        old:   Option<Value>,
        /// The new value.
        new:   Value,
        /// Nesting depth.
        depth: usize,
    },
    /// A name or `_` was updated by a compound operator such as `+=`.
    CompoundAssign {
        /// The updated name, `_` for the accumulator.
        name:  String,
        /// The operator applied.
        op:    BinaryOperator,
        /// The previous value.
        old:   Value,
        /// The new value.
        new:   Value,
        /// Nesting depth.
        depth: usize,
    },
    /// A binary operator produced a result from both operands.
    ///
    /// A short-circuited `&&` or `||` never evaluates its right operand and
    /// records no event.
    Binary {
        /// The operator.
        op:     BinaryOperator,
        /// Left operand.
        left:   Value,
        /// Right operand.
        right:  Value,
        /// The result.
        result: Value,
        /// Nesting depth.
        depth:  usize,
    },
    /// A unary operator (`-`, `!` or `~`) produced a result.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Value,
        /// The result.
        result:  Value,
        /// Nesting depth.
        depth:   usize,
    },
    /// An `if` condition was decided.
    Condition {
        /// The condition's value.
        value: bool,
        /// Nesting depth.
        depth: usize,
    },
    /// A `for` loop bound its variable to the next element.
    Iteration {
        /// The loop variable.
        var:     String,
        /// The element bound for this iteration.
        element: Value,
        /// Nesting depth.
        depth:   usize,
    },
}

impl TraceEvent {
    /// Nesting depth of the event.
    #[must_use]
    pub const fn depth(&self) -> usize {
        match self {
            Self::Assign { depth, .. }
            | Self::CompoundAssign { depth, .. }
            | Self::Binary { depth, .. }
            | Self::Unary { depth, .. }
            | Self::Condition { depth, .. }
            | Self::Iteration { depth, .. } => *depth,
        }
    }
}

impl std::fmt::Display for TraceEvent {
    /// Formats the event on one line, indented two spaces per depth level.
    ///
    /// # Example
    /// ```
    /// use xmas::{TraceEvent, Value};
    ///
    /// let event = TraceEvent::Assign { name:  "x".to_string(),
    ///                                  old:   Some(Value::Integer(1)),
    ///                                  new:   Value::Integer(2),
    ///                                  depth: 1, };
    ///
    /// assert_eq!(event.to_string(), "  x: 1 → 2");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:indent$}", "", indent = self.depth() * 2)?;
        match self {
            Self::Assign { name, old, new, .. } => {
                let old = old.as_ref().map_or_else(|| "undefined".to_string(), Value::repr);
                write!(f, "{name}: {old} → {}", new.repr())
            },
            Self::CompoundAssign { name, op, old, new, .. } => {
                write!(f, "{name} {op}=: {} → {}", old.repr(), new.repr())
            },
            Self::Binary { op,
                           left,
                           right,
                           result,
                           .. } => {
                write!(f, "{} {op} {} = {}", left.repr(), right.repr(), result.repr())
            },
            Self::Unary { op,
                          operand,
                          result,
                          .. } => write!(f, "{op}{} = {}", operand.repr(), result.repr()),
            Self::Condition { value, .. } => write!(f, "if: {value}"),
            Self::Iteration { var, element, .. } => write!(f, "for {var}: {}", element.repr()),
        }
    }
}

/// Receives trace events as evaluation proceeds.
///
/// Attach a sink with [`Context::traced`](crate::Context::traced). Sinks
/// only observe; they cannot alter evaluation.
pub trait TraceSink {
    /// Records one event.
    fn record(&mut self, event: TraceEvent);
}

impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}
