use crate::interpreter::scope::Scope;

/// Marker a condition reply contains when the condition holds.
pub const TRUE_MARKER: &str = "EVALUATE_TRUE";
/// Marker a condition reply contains when the condition does not hold.
pub const FALSE_MARKER: &str = "EVALUATE_FALSE";

/// Renders every visible variable as a `## VARIABLE <name>` block followed by
/// its value, blocks separated by blank lines.
///
/// ```
/// use hellm::interpreter::{evaluator::prompt::render_scope, scope::Scope};
///
/// let scope = Scope::new();
/// scope.set("a", "1");
/// scope.set("b", "two\nlines");
///
/// assert_eq!(render_scope(&scope), "## VARIABLE a\n1\n\n## VARIABLE b\ntwo\nlines");
/// ```
#[must_use]
pub fn render_scope(scope: &Scope) -> String {
    scope.variables()
         .iter()
         .map(|(name, value)| format!("## VARIABLE {name}\n{value}"))
         .collect::<Vec<_>>()
         .join("\n\n")
}

/// System prompt for `let`: the whole reply becomes the variable's value.
#[must_use]
pub fn assignment_prompt(scope: &Scope) -> String {
    format!("You have been asked to set the value of a variable in an LLM-based programming \
             language. The user will tell you what the value should be. Your entire response \
             will be copied verbatim into the variable, so reply with the value only: no code, \
             no quotes, no formatting.\nThe other variables currently in scope are:\n{}",
            render_scope(scope))
}

/// System prompt for `if` and `while`: the reply must contain a marker.
#[must_use]
pub fn condition_prompt(scope: &Scope) -> String {
    format!("You have been asked to evaluate the truthiness of a statement in an LLM-based \
             programming language. The user will give you the statement. You can use the \
             variables in scope to give your answer context. Your response MUST eventually \
             contain either '{TRUE_MARKER}' or '{FALSE_MARKER}'.\nThe other variables currently \
             in scope are:\n{}",
            render_scope(scope))
}

/// Decodes a condition reply.
///
/// The markers may appear anywhere in the reply. The true marker is checked
/// first, so a reply containing both is true.
///
/// ```
/// use hellm::interpreter::evaluator::prompt::parse_decision;
///
/// assert_eq!(parse_decision("Clearly EVALUATE_TRUE."), Some(true));
/// assert_eq!(parse_decision("EVALUATE_FALSE"), Some(false));
/// assert_eq!(parse_decision("EVALUATE_FALSE or EVALUATE_TRUE"), Some(true));
/// assert_eq!(parse_decision("no idea"), None);
/// ```
#[must_use]
pub fn parse_decision(reply: &str) -> Option<bool> {
    if reply.contains(TRUE_MARKER) {
        Some(true)
    } else if reply.contains(FALSE_MARKER) {
        Some(false)
    } else {
        None
    }
}
