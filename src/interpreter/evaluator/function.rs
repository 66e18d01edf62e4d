use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter, lookup},
        scope::Scope,
    },
};

impl Interpreter<'_> {
    /// Evaluates a `run` statement.
    ///
    /// The function body runs in a fresh scope that holds only the parameters
    /// and a copy of every function visible to the caller, so the body cannot
    /// see caller variables it was not given. Returned values are bound in the
    /// caller's scope under the output names, in order.
    ///
    /// `run z = add x y;` against `fn add a b { return a b; }` binds `z` to
    /// the value of `a`.
    ///
    /// # Errors
    /// - `UndefinedFunction` if no function has the given name.
    /// - `ArityMismatch` if the input count differs from the parameter count.
    /// - `UndefinedVariable` if an input is not in the caller's scope.
    /// - `OutputArityMismatch` if the body returned fewer values than there
    ///   are outputs. A body that never returns yields no values; values
    ///   beyond the last output are dropped.
    /// - Any error raised by the function body.
    pub(crate) fn eval_run(&mut self,
                           outputs: &[String],
                           function: &str,
                           inputs: &[String],
                           scope: &Scope)
                           -> EvalResult<()> {
        let def =
            scope.get_function(function)
                 .ok_or_else(|| RuntimeError::UndefinedFunction { name: function.to_string() })?;

        if inputs.len() != def.params.len() {
            return Err(RuntimeError::ArityMismatch { function: function.to_string(),
                                                     expected: def.params.len(),
                                                     found:    inputs.len(), });
        }

        let call_scope = scope.for_call();
        for (param, input) in def.params.iter().zip(inputs) {
            call_scope.set(param, lookup(input, scope)?);
        }

        let values = match self.execute(&def.body, &call_scope)? {
            Flow::Executed => Vec::new(),
            Flow::Returned(values) => values,
        };

        if values.len() < outputs.len() {
            return Err(RuntimeError::OutputArityMismatch { function: function.to_string(),
                                                           expected: outputs.len(),
                                                           found:    values.len(), });
        }

        for (output, value) in outputs.iter().zip(values) {
            scope.set(output, value);
        }
        Ok(())
    }

    /// Evaluates a `return` statement, producing the return signal.
    pub(crate) fn eval_return(idents: &[String], scope: &Scope) -> EvalResult<Flow> {
        let values = idents.iter()
                           .map(|ident| lookup(ident, scope))
                           .collect::<EvalResult<Vec<_>>>()?;

        Ok(Flow::Returned(values))
    }
}
