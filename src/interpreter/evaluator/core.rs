use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{AssignTarget, Expr, FunctionDef, Statement},
    error::RuntimeError,
    interpreter::{
        trace::{TraceEvent, TraceSink},
        value::{core::Value, grid::Grid},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: one global variable table, the
/// user-defined functions, the stack of accumulator slots and the input grid.
/// There are no per-call environments; calls and loops overwrite globals and
/// restore them afterwards.
///
/// ## Usage
///
/// A `Context` is created once per program run. [`Context::run`] executes a
/// parsed program and returns its final value.
pub struct Context<'t> {
    /// Global variables, by name.
    variables:    HashMap<String, Value>,
    /// User-defined functions, by name.
    functions:    HashMap<String, Rc<FunctionDef>>,
    /// Accumulator slots; the last one is what `_` refers to.
    accumulators: Vec<Value>,
    /// The grid built from the input text.
    input:        Rc<Grid>,
    /// Receives trace events when attached.
    trace:        Option<&'t mut dyn TraceSink>,
    /// Current nesting depth, used to indent trace events.
    depth:        usize,
}

impl Default for Context<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Context<'t> {
    /// Creates a new evaluation context with no variables, no user-defined
    /// functions and an empty input grid.
    ///
    /// One accumulator slot is always present, so `_` can be used at top
    /// level.
    #[must_use]
    pub fn new() -> Self {
        Self::with_input("")
    }

    /// Creates a context whose `input` is the grid built from `text`.
    ///
    /// # Example
    /// ```
    /// use xmas::{Context, Value, parse, tokenize};
    ///
    /// let program = parse(&tokenize("input[1, 1]").unwrap()).unwrap();
    /// let mut context = Context::with_input("abc\ndef");
    ///
    /// assert_eq!(context.run(&program).unwrap(), Value::from("e"));
    /// ```
    #[must_use]
    pub fn with_input(text: &str) -> Self {
        Self { variables:    HashMap::new(),
               functions:    HashMap::new(),
               accumulators: vec![Value::Nothing],
               input:        Rc::new(Grid::parse(text)),
               trace:        None,
               depth:        0, }
    }

    /// Attaches a sink that receives every trace event.
    #[must_use]
    pub fn traced(mut self, sink: &'t mut dyn TraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Returns the current value of a global variable.
    ///
    /// # Example
    /// ```
    /// use xmas::{Context, Value, parse, tokenize};
    ///
    /// let program = parse(&tokenize("x = 4\ny = x * x").unwrap()).unwrap();
    /// let mut context = Context::new();
    /// context.run(&program).unwrap();
    ///
    /// assert_eq!(context.variable("y"), Some(&Value::Integer(16)));
    /// assert_eq!(context.variable("z"), None);
    /// ```
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Executes a program and returns its final value.
    ///
    /// Statements run in order. The result is the value of the last
    /// expression statement; if the program ends with an assignment, the
    /// assigned value is the result instead. A program with neither yields
    /// [`Value::Nothing`].
    ///
    /// # Errors
    /// Stops at the first runtime error.
    pub fn run(&mut self, program: &[Statement]) -> EvalResult<Value> {
        let mut result = Value::Nothing;

        for (index, statement) in program.iter().enumerate() {
            let value = self.eval_statement(statement)?;
            let is_last = index + 1 == program.len();

            match statement {
                Statement::Expression { .. } => result = value,
                Statement::Assignment { .. } | Statement::CompoundAssignment { .. } if is_last => {
                    result = value;
                },
                _ => {},
            }
        }

        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; the special forms receive their
    /// arguments unevaluated.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression, possibly [`Value::Nothing`].
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::Accumulator { .. } => Ok(self.accumulator().clone()),
            Expr::Input { .. } => Ok(Value::Grid(Rc::clone(&self.input))),
            Expr::List { elements, .. } => Ok(Value::from(self.eval_arguments(elements)?)),
            Expr::Range { start, end, line } => self.eval_range(start, end, *line),
            Expr::UnaryOp { op, expr, line } => {
                let operand = self.eval(expr)?;
                let result = Self::eval_unary(*op, &operand, *line)?;
                self.record(|depth| TraceEvent::Unary { op: *op,
                                                        operand,
                                                        result: result.clone(),
                                                        depth });
                Ok(result)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
            Expr::Apply { callee,
                          arguments,
                          line, } => {
                let callee = self.eval(callee)?;
                let args = self.eval_arguments(arguments)?;
                self.apply(&callee, args, *line)
            },
            Expr::SpecialCall { form,
                                arguments,
                                line, } => self.eval_special(form, arguments, *line),
            Expr::Index { target,
                          indices,
                          line, } => {
                let target = self.eval(target)?;
                self.eval_index(&target, indices, *line)
            },
            Expr::MethodCall { target,
                               method,
                               line, } => {
                let target = self.eval(target)?;
                Self::eval_method(&target, *method, *line)
            },
            Expr::Block { statements, .. } => self.eval_block(statements, Value::Nothing),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Function definitions insert into the function table and yield
    /// [`Value::Nothing`]. Assignments yield the value they bound, and
    /// expression statements yield their value.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Function(def) => {
                self.functions.insert(def.name.clone(), Rc::new(def.clone()));
                Ok(Value::Nothing)
            },
            Statement::Expression { expr, .. } => self.eval(expr),
            Statement::Assignment { target, value, .. } => {
                let value = self.eval(value)?;
                let old = self.assign(target, value.clone());
                self.record(|depth| TraceEvent::Assign { name: target.to_string(),
                                                         old,
                                                         new: value.clone(),
                                                         depth });
                Ok(value)
            },
            Statement::CompoundAssignment { target,
                                            op,
                                            value,
                                            line, } => {
                let old = match target {
                    AssignTarget::Accumulator => self.accumulator().clone(),
                    AssignTarget::Variable(name) => {
                        self.variables
                            .get(name)
                            .cloned()
                            .ok_or_else(|| RuntimeError::UndefinedName { name: name.clone(),
                                                                         line: *line, })?
                    },
                };
                let rhs = self.eval(value)?;
                let new = Self::eval_binary(*op, &old, &rhs, *line)?;

                self.assign(target, new.clone());
                self.record(|depth| TraceEvent::CompoundAssign { name: target.to_string(),
                                                                 op: *op,
                                                                 old,
                                                                 new: new.clone(),
                                                                 depth });
                Ok(new)
            },
        }
    }

    /// Evaluates an expression the way a block body is evaluated.
    ///
    /// A block gets a fresh accumulator slot seeded with `initial` and
    /// evaluates to the slot's final value; any other expression is simply
    /// evaluated. Used for `if` branches and function bodies.
    pub(crate) fn eval_as_block(&mut self, expr: &Expr, initial: Value) -> EvalResult<Value> {
        match expr {
            Expr::Block { statements, .. } => self.eval_block(statements, initial),
            other => self.eval(other),
        }
    }

    /// Runs `statements` in a new accumulator slot and returns the slot.
    pub(crate) fn eval_block(&mut self,
                             statements: &[Statement],
                             initial: Value)
                             -> EvalResult<Value> {
        self.with_accumulator(initial, |ctx| ctx.eval_statements(statements))
    }

    /// Pushes an accumulator slot seeded with `initial`, runs `f`, and
    /// returns the slot's final value.
    ///
    /// The slot is popped even when `f` fails.
    pub(crate) fn with_accumulator(&mut self,
                                   initial: Value,
                                   f: impl FnOnce(&mut Self) -> EvalResult<()>)
                                   -> EvalResult<Value> {
        self.accumulators.push(initial);
        let outcome = f(self);
        let slot = self.accumulators.pop().unwrap_or(Value::Nothing);

        outcome.map(|()| slot)
    }

    /// Runs statements in the current accumulator slot.
    pub(crate) fn eval_statements(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// The innermost accumulator slot.
    fn accumulator(&self) -> &Value {
        self.accumulators.last().unwrap_or(&Value::Nothing)
    }

    /// Binds `value` to `target` and returns what it replaced.
    fn assign(&mut self, target: &AssignTarget, value: Value) -> Option<Value> {
        match target {
            AssignTarget::Variable(name) => self.variables.insert(name.clone(), value),
            AssignTarget::Accumulator => {
                self.accumulators
                    .last_mut()
                    .map(|slot| std::mem::replace(slot, value))
            },
        }
    }

    /// Binds a global and returns the binding it shadowed.
    ///
    /// Pair every call with [`Context::restore`] to give the binding a
    /// call-local lifetime.
    pub(crate) fn bind(&mut self, name: &str, value: Value) -> Option<Value> {
        self.variables.insert(name.to_string(), value)
    }

    /// Undoes a [`Context::bind`]: reinstates the shadowed value, or removes
    /// the name if it had none.
    pub(crate) fn restore(&mut self, name: &str, shadowed: Option<Value>) {
        match shadowed {
            Some(value) => {
                self.variables.insert(name.to_string(), value);
            },
            None => {
                self.variables.remove(name);
            },
        }
    }

    /// Looks up a user-defined function.
    pub(crate) fn user_function(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.functions.get(name).cloned()
    }

    /// Looks up a global variable.
    pub(crate) fn global(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Runs `f` one nesting level deeper, for trace indentation.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> EvalResult<T>) -> EvalResult<T> {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Sends an event to the attached sink, if any.
    ///
    /// The event is only built when a sink is attached.
    pub(crate) fn record(&mut self, event: impl FnOnce(usize) -> TraceEvent) {
        let depth = self.depth;
        if let Some(sink) = self.trace.as_deref_mut() {
            sink.record(event(depth));
        }
    }
}
