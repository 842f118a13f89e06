use std::rc::Rc;

use crate::ast::FunctionDef;

/// Something that can be applied to arguments.
///
/// Function values are immutable; composing two callables creates a new one
/// and leaves both stages untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callable {
    /// A function defined in the program, e.g. `addOne(x) = x + 1`.
    User(Rc<FunctionDef>),
    /// A built-in function, identified by its name in the builtin table.
    Builtin(&'static str),
    /// `first |> second`: applies `first`, then passes its result to
    /// `second`.
    Composed(Rc<Self>, Rc<Self>),
}

impl Callable {
    /// Composes two callables left to right.
    ///
    /// # Example
    /// ```
    /// use xmas::interpreter::value::callable::Callable;
    ///
    /// let piped = Callable::Builtin("min").then(Callable::Builtin("max"));
    ///
    /// assert_eq!(piped.name(), "min |> max");
    /// ```
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self::Composed(Rc::new(self), Rc::new(next))
    }

    /// A readable name, used in error messages.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::User(def) => def.name.clone(),
            Self::Builtin(name) => (*name).to_string(),
            Self::Composed(first, second) => format!("{} |> {}", first.name(), second.name()),
        }
    }
}
