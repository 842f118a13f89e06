use std::rc::Rc;

use crate::{
    ast::{Expr, IndexItem, Method},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, grid::Grid},
    },
    util::num::{element_position, slice_bound},
};

/// An index item after its bound expressions have been evaluated.
#[derive(Debug, Clone, Copy)]
enum Selector {
    Position(i64),
    Slice(Option<i64>, Option<i64>),
}

impl Context<'_> {
    /// Evaluates `target[items]`.
    ///
    /// Index expressions are evaluated once, left to right, before any
    /// selection happens. With two items, the first selects from `target`:
    /// - a position selects one element, and the second item then selects
    ///   from that element;
    /// - a slice selects a run of elements, and the second item is applied to
    ///   each of them, yielding a list.
    ///
    /// # Example
    /// ```
    /// use xmas::{Value, run};
    ///
    /// assert_eq!(run("[10, 20, 30][1]", None).unwrap(), Value::Integer(20));
    /// assert_eq!(run("\"hello\"[1..3]", None).unwrap(), Value::from("el"));
    /// assert_eq!(run("input[1, 2]", Some("abc\ndef")).unwrap(), Value::from("f"));
    /// assert_eq!(run("input[.., 0]", Some("abc\ndef")).unwrap().to_string(), "[a, d]");
    /// ```
    pub(crate) fn eval_index(&mut self,
                             target: &Value,
                             indices: &[IndexItem],
                             line: usize)
                             -> EvalResult<Value> {
        let selectors = indices.iter()
                               .map(|item| self.eval_selector(item, line))
                               .collect::<EvalResult<Vec<_>>>()?;

        match selectors.as_slice() {
            [only] => select(target, *only, line),
            [Selector::Position(index), inner] => {
                let element = select(target, Selector::Position(*index), line)?;
                select(&element, *inner, line)
            },
            [outer @ Selector::Slice(..), inner] => {
                let run = select(target, *outer, line)?;
                let selected = elements(&run, line)?.iter()
                                                    .map(|element| select(element, *inner, line))
                                                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(selected))
            },
            _ => Err(RuntimeError::ArityMismatch { name: "index".to_string(),
                                                   expected: "1 or 2".to_string(),
                                                   found: selectors.len(),
                                                   line }),
        }
    }

    /// Evaluates the bounds of one index item; every bound must be an integer.
    fn eval_selector(&mut self, item: &IndexItem, line: usize) -> EvalResult<Selector> {
        match item {
            IndexItem::Single(expr) => {
                Ok(Selector::Position(self.eval(expr)?.as_integer("index", line)?))
            },
            IndexItem::Range { start, end } => {
                let mut bound = |expr: &Option<Expr>| -> EvalResult<Option<i64>> {
                    match expr {
                        Some(expr) => Ok(Some(self.eval(expr)?.as_integer("slice bound", line)?)),
                        None => Ok(None),
                    }
                };
                let start = bound(start)?;
                let end = bound(end)?;
                Ok(Selector::Slice(start, end))
            },
        }
    }

    /// Evaluates a method call on an already evaluated receiver.
    ///
    /// # Example
    /// ```
    /// use xmas::{Value, run};
    ///
    /// let rows = run("input.rows()", Some("ab\ncd")).unwrap();
    /// assert_eq!(rows.to_string(), "[[a, b], [c, d]]");
    ///
    /// assert!(run("[1, 2].rows()", None).is_err());
    /// ```
    pub fn eval_method(target: &Value, method: Method, line: usize) -> EvalResult<Value> {
        match (method, target) {
            (Method::Rows, Value::Grid(grid)) => Ok(grid.to_rows()),
            (Method::Rows, other) => Err(other.mismatch("'.rows()'", "the input grid", line)),
        }
    }
}

/// Number of elements of an indexable value, or `None` if it has none.
fn sequence_length(target: &Value) -> Option<usize> {
    match target {
        Value::List(items) => Some(items.len()),
        Value::Text(text) => Some(text.chars().count()),
        Value::Grid(grid) => Some(grid.height()),
        _ => None,
    }
}

/// The elements of an indexable value: list items, characters or grid rows.
fn elements(target: &Value, line: usize) -> EvalResult<Vec<Value>> {
    match target {
        Value::List(items) => Ok(items.to_vec()),
        Value::Text(text) => Ok(text.chars().map(Value::from).collect()),
        Value::Grid(grid) => Ok(grid.iter().map(Grid::row_value).collect()),
        other => Err(other.mismatch("indexing", "list, text or grid", line)),
    }
}

/// Applies one selector to a list, text or grid.
fn select(target: &Value, selector: Selector, line: usize) -> EvalResult<Value> {
    let length = sequence_length(target)
        .ok_or_else(|| target.mismatch("indexing", "list, text or grid", line))?;

    match selector {
        Selector::Position(index) => {
            let position = element_position(index, length, line)?;
            Ok(match target {
                Value::List(items) => items[position].clone(),
                Value::Text(text) => text.chars().nth(position).map_or(Value::Nothing, Value::from),
                Value::Grid(grid) => grid.row(position).map_or(Value::Nothing, Grid::row_value),
                _ => Value::Nothing,
            })
        },
        Selector::Slice(start, end) => {
            let from = start.map_or(Ok(0), |bound| slice_bound(bound, length, line))?;
            let to = end.map_or(Ok(length), |bound| slice_bound(bound, length, line))?;

            if from > to {
                return Err(RuntimeError::IndexOutOfRange { index: start.unwrap_or(0),
                                                           length,
                                                           line });
            }

            Ok(match target {
                Value::List(items) => Value::from(items[from..to].to_vec()),
                Value::Text(text) => Value::from(text.chars()
                                                     .skip(from)
                                                     .take(to - from)
                                                     .collect::<String>()),
                Value::Grid(grid) => Value::Grid(Rc::new(grid.slice_rows(from, to))),
                _ => Value::Nothing,
            })
        },
    }
}
