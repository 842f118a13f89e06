use crate::{
    ast::{Expr, LoopBinding, SpecialForm},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        trace::TraceEvent,
        value::core::Value,
    },
    util::num::usize_to_i64_checked,
};

impl Context<'_> {
    /// Evaluates one of the special forms `if`, `for` or `len`.
    ///
    /// The arguments arrive unevaluated; each form decides which of them to
    /// evaluate. Argument counts are checked here rather than by the parser.
    pub(crate) fn eval_special(&mut self,
                               form: &SpecialForm,
                               arguments: &[Expr],
                               line: usize)
                               -> EvalResult<Value> {
        match form {
            SpecialForm::If => self.eval_if(arguments, line),
            SpecialForm::For(binding) => self.eval_for(binding, arguments, line),
            SpecialForm::Len => self.eval_len(arguments, line),
        }
    }

    /// Evaluates `if(cond, then, else?)`.
    ///
    /// The condition must be a boolean. Only the selected branch is
    /// evaluated, as a block. A false condition without an else branch yields
    /// [`Value::Nothing`].
    ///
    /// # Example
    /// ```
    /// use xmas::{Value, run};
    ///
    /// assert_eq!(run("if(2 > 1, \"yes\", \"no\")", None).unwrap(), Value::from("yes"));
    /// assert_eq!(run("if(false, 1)", None).unwrap(), Value::Nothing);
    /// assert!(run("if(1, 2, 3)", None).is_err());
    /// ```
    fn eval_if(&mut self, arguments: &[Expr], line: usize) -> EvalResult<Value> {
        let (condition, then_branch, else_branch) = match arguments {
            [condition, then_branch] => (condition, then_branch, None),
            [condition, then_branch, else_branch] => (condition, then_branch, Some(else_branch)),
            _ => {
                return Err(RuntimeError::ArityMismatch { name: "if".to_string(),
                                                         expected: "2 or 3".to_string(),
                                                         found: arguments.len(),
                                                         line });
            },
        };

        let value = self.eval(condition)?.as_bool("if condition", line)?;
        self.record(|depth| TraceEvent::Condition { value, depth });

        self.nested(|ctx| {
                match (value, else_branch) {
                    (true, _) => ctx.eval_as_block(then_branch, Value::Nothing),
                    (false, Some(else_branch)) => ctx.eval_as_block(else_branch, Value::Nothing),
                    (false, None) => Ok(Value::Nothing),
                }
            })
    }

    /// Evaluates `for(var of seq, body, init?)`.
    ///
    /// `seq` must be a list, or text (iterated by character). One accumulator
    /// slot, seeded with `init`, is shared by every iteration: a block body
    /// runs its statements directly in that slot, so `_` carries over from
    /// one element to the next. A body that is not a block is evaluated for
    /// its effects only.
    ///
    /// For each element, `var` is bound in the global table and the binding
    /// it shadowed is restored after the iteration.
    ///
    /// The loop yields the final accumulator when `init` is given and
    /// [`Value::Nothing`] otherwise.
    ///
    /// # Example
    /// ```
    /// use xmas::{Value, run};
    ///
    /// let sum = run("for(n of [1, 2, 3], { _ = _ + n }, 0)", None).unwrap();
    /// assert_eq!(sum, Value::Integer(6));
    ///
    /// let text = run("for(c of \"abc\", { _ = c + _ }, \"\")", None).unwrap();
    /// assert_eq!(text, Value::from("cba"));
    /// ```
    fn eval_for(&mut self,
                binding: &LoopBinding,
                arguments: &[Expr],
                line: usize)
                -> EvalResult<Value> {
        let (body, init) = match arguments {
            [body] => (body, None),
            [body, init] => (body, Some(init)),
            _ => {
                return Err(RuntimeError::ArityMismatch { name: "for".to_string(),
                                                         expected: "2 or 3".to_string(),
                                                         found: arguments.len() + 1,
                                                         line });
            },
        };

        let elements: Vec<Value> = match self.eval(&binding.sequence)? {
            Value::List(items) => items.iter().cloned().collect(),
            Value::Text(text) => text.chars().map(Value::from).collect(),
            other => return Err(other.mismatch("for", "list or text", line)),
        };

        let initial = match init {
            Some(init) => self.eval(init)?,
            None => Value::Nothing,
        };

        let slot =
            self.with_accumulator(initial, |ctx| ctx.run_iterations(&binding.var, &elements, body))?;

        Ok(if init.is_some() { slot } else { Value::Nothing })
    }

    /// Runs the loop body once per element in the current accumulator slot.
    fn run_iterations(&mut self, var: &str, elements: &[Value], body: &Expr) -> EvalResult<()> {
        for element in elements {
            self.record(|depth| TraceEvent::Iteration { var:     var.to_string(),
                                                        element: element.clone(),
                                                        depth });

            let shadowed = self.bind(var, element.clone());
            let outcome = self.nested(|ctx| match body {
                                  Expr::Block { statements, .. } => ctx.eval_statements(statements),
                                  other => ctx.eval(other).map(|_| ()),
                              });
            self.restore(var, shadowed);
            outcome?;
        }
        Ok(())
    }

    /// Evaluates `len(x)`.
    ///
    /// Lists count their elements and text counts its characters. The input
    /// grid yields `[rows, columns]`, with the column count taken from the
    /// first row.
    ///
    /// # Example
    /// ```
    /// use xmas::{Value, run};
    ///
    /// assert_eq!(run("len([4, 5, 6])", None).unwrap(), Value::Integer(3));
    /// assert_eq!(run("len(\"héllo\")", None).unwrap(), Value::Integer(5));
    /// assert_eq!(run("len(input)", Some("ab\ncd\nef")).unwrap().to_string(), "[3, 2]");
    /// ```
    fn eval_len(&mut self, arguments: &[Expr], line: usize) -> EvalResult<Value> {
        let [argument] = arguments else {
            return Err(RuntimeError::ArityMismatch { name: "len".to_string(),
                                                     expected: "1".to_string(),
                                                     found: arguments.len(),
                                                     line });
        };

        match self.eval(argument)? {
            Value::List(items) => Ok(Value::Integer(usize_to_i64_checked(items.len(), line)?)),
            Value::Text(text) => {
                Ok(Value::Integer(usize_to_i64_checked(text.chars().count(), line)?))
            },
            Value::Grid(grid) => {
                Ok(Value::from(vec![Value::Integer(usize_to_i64_checked(grid.height(), line)?),
                                    Value::Integer(usize_to_i64_checked(grid.width(), line)?)]))
            },
            other => Err(other.mismatch("len", "list, text or grid", line)),
        }
    }
}
