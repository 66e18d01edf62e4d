use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Flow, Interpreter},
            prompt::{condition_prompt, parse_decision},
        },
        scope::Scope,
    },
};

impl Interpreter<'_> {
    /// Asks the oracle whether `condition` holds in `scope`.
    ///
    /// # Errors
    /// - `OracleCall` if the call fails.
    /// - `IndecisiveOracle` if the reply contains neither marker.
    fn decide(&mut self,
              statement: &'static str,
              condition: &str,
              scope: &Scope)
              -> EvalResult<bool> {
        let reply = self.oracle
                        .respond(&condition_prompt(scope), condition)
                        .map_err(|source| RuntimeError::OracleCall { statement, source })?;

        parse_decision(&reply).ok_or_else(|| RuntimeError::IndecisiveOracle { condition:
                                                                                  condition.to_string(),
                                                                              reply })
    }

    /// Evaluates an `if` statement.
    ///
    /// The chosen branch runs in a child scope: variables it creates vanish
    /// afterwards, while updates to variables that already existed outside
    /// remain. A `return` inside the branch is passed on.
    pub(crate) fn eval_if(&mut self,
                          condition: &str,
                          then_body: &[Statement],
                          else_body: &[Statement],
                          scope: &Scope)
                          -> EvalResult<Flow> {
        let branch = if self.decide("if", condition, scope)? {
            then_body
        } else {
            else_body
        };

        self.execute(branch, &scope.sub_scope())
    }

    /// Evaluates a `while` statement.
    ///
    /// The condition is judged before every iteration and each iteration gets
    /// a fresh child scope. The loop ends when the oracle answers false or the
    /// body returns.
    ///
    /// # Errors
    /// Besides the errors of [`Self::execute`] and the condition check, fails
    /// with `LoopLimitExceeded` once the body would run more often than
    /// [`RunOptions::max_loop_iterations`](super::core::RunOptions) allows.
    pub(crate) fn eval_while(&mut self,
                             condition: &str,
                             body: &[Statement],
                             scope: &Scope)
                             -> EvalResult<Flow> {
        let mut iterations = 0;

        while self.decide("while", condition, scope)? {
            if let Some(limit) = self.options.max_loop_iterations
               && iterations >= limit
            {
                return Err(RuntimeError::LoopLimitExceeded { condition: condition.to_string(),
                                                             limit });
            }
            iterations += 1;

            if let Flow::Returned(values) = self.execute(body, &scope.sub_scope())? {
                return Ok(Flow::Returned(values));
            }
        }

        Ok(Flow::Executed)
    }
}
