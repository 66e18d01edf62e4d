use std::io::Write;

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{evaluator::prompt::assignment_prompt, oracle::Oracle, scope::Scope},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Outcome of executing a statement or a list of statements.
///
/// `Returned` is the return signal: it stops the remaining statements of every
/// enclosing block until it reaches the `run` that invoked the function, or
/// the top level. A bare `return;` is `Returned` with no values, which is
/// distinct from running to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Every statement ran; nothing was returned.
    Executed,
    /// A `return` produced these values.
    Returned(Vec<String>),
}

/// Settings that bound a program run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Maximum number of body executions per `while` statement. `None` leaves
    /// loops unbounded.
    pub max_loop_iterations: Option<usize>,
}

/// Stores the runtime state of a program run.
///
/// The interpreter owns nothing but borrows the oracle, the output sink and
/// the invocation arguments for the length of the run. Variable and function
/// state lives in the [`Scope`] passed to each call.
pub struct Interpreter<'a> {
    pub(crate) oracle:  &'a mut dyn Oracle,
    output:             &'a mut dyn Write,
    args:               &'a [String],
    pub(crate) options: RunOptions,
}

impl<'a> Interpreter<'a> {
    /// Creates an interpreter with default [`RunOptions`].
    pub fn new(oracle: &'a mut dyn Oracle, output: &'a mut dyn Write, args: &'a [String]) -> Self {
        Self { oracle,
               output,
               args,
               options: RunOptions::default() }
    }

    /// Replaces the run options.
    #[must_use]
    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs a whole program in a new root scope.
    ///
    /// A `return` at the top level ends the program early; its values are
    /// discarded.
    ///
    /// # Errors
    /// Returns the first runtime error raised by any statement.
    pub fn run(&mut self, program: &[Statement]) -> EvalResult<()> {
        self.execute(program, &Scope::new())?;
        Ok(())
    }

    /// Executes statements in order.
    ///
    /// Stops at the first statement that produces the return signal and
    /// passes that signal on unchanged.
    ///
    /// # Errors
    /// Returns the first runtime error raised by any statement.
    pub fn execute(&mut self, statements: &[Statement], scope: &Scope) -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Returned(values) = self.execute_statement(statement, scope)? {
                return Ok(Flow::Returned(values));
            }
        }
        Ok(Flow::Executed)
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// Returns any runtime error the statement raises.
    pub fn execute_statement(&mut self, statement: &Statement, scope: &Scope) -> EvalResult<Flow> {
        match statement {
            Statement::Let { ident, value } => self.eval_let(ident, value, scope)?,
            Statement::Use { ident, arg_index } => self.eval_use(ident, *arg_index, scope)?,
            Statement::If { condition,
                            then_body,
                            else_body, } => {
                return self.eval_if(condition, then_body, else_body, scope);
            },
            Statement::While { condition, body } => return self.eval_while(condition, body, scope),
            Statement::Print { ident } => self.eval_print(ident, scope)?,
            Statement::Comment { .. } => {},
            Statement::Del { ident } => {
                scope.remove(ident)
                     .ok_or_else(|| RuntimeError::UndefinedVariable { name: ident.clone() })?;
            },
            Statement::FunctionDef(def) => scope.set_function(def.clone()),
            Statement::Run { outputs,
                             function,
                             inputs, } => self.eval_run(outputs, function, inputs, scope)?,
            Statement::Return { idents } => return Self::eval_return(idents, scope),
        }

        Ok(Flow::Executed)
    }

    /// Asks the oracle for a variable's value and binds the trimmed reply.
    fn eval_let(&mut self, ident: &str, value: &str, scope: &Scope) -> EvalResult<()> {
        let reply = self.oracle
                        .respond(&assignment_prompt(scope), value)
                        .map_err(|source| RuntimeError::OracleCall { statement: "let",
                                                                     source })?;

        scope.set(ident, reply.trim());
        Ok(())
    }

    /// Binds a variable to one of the invocation arguments.
    fn eval_use(&self, ident: &str, arg_index: usize, scope: &Scope) -> EvalResult<()> {
        let value = self.args
                        .get(arg_index)
                        .ok_or(RuntimeError::ArgumentOutOfRange { index: arg_index,
                                                                  count: self.args.len(), })?;

        scope.set(ident, value.as_str());
        Ok(())
    }

    /// Writes a variable's value and a newline to the output sink.
    fn eval_print(&mut self, ident: &str, scope: &Scope) -> EvalResult<()> {
        let value = lookup(ident, scope)?;
        writeln!(self.output, "{value}").map_err(|source| RuntimeError::Output { source })
    }
}

/// Resolves a variable or reports it as undefined.
pub(crate) fn lookup(name: &str, scope: &Scope) -> EvalResult<String> {
    scope.get(name)
         .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
}

/// Runs a program against an oracle, writing `print` output to `output`.
///
/// This is the evaluator's entry point with default options; use
/// [`Interpreter`] directly to bound loops.
///
/// # Errors
/// Returns the first runtime error raised by the program.
///
/// # Example
/// ```
/// use hellm::{
///     ast::Statement,
///     interpreter::{evaluator::core::run, oracle::OracleError},
/// };
///
/// let program = vec![Statement::Use { ident:     "a".into(),
///                                     arg_index: 0, },
///                    Statement::Print { ident: "a".into() }];
///
/// let mut oracle = |_: &str, _: &str| -> Result<String, OracleError> { unreachable!() };
/// let mut output = Vec::new();
///
/// run(&program, &["foo".to_string()], &mut output, &mut oracle).unwrap();
/// assert_eq!(output, b"foo\n");
/// ```
pub fn run(program: &[Statement],
           args: &[String],
           output: &mut dyn Write,
           oracle: &mut dyn Oracle)
           -> EvalResult<()> {
    Interpreter::new(oracle, output, args).run(program)
}
