/// Number of spaces emitted per indentation level when formatting.
pub const INDENT_WIDTH: usize = 4;

/// A parsed program: the top-level statements in source order.
pub type Program = Vec<Statement>;

/// A named procedure declared with `fn`.
///
/// Function definitions are stored in the scope by value and invoked with
/// `run`. Parameters are bound positionally from the caller's input
/// identifiers; results flow back through `return`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// Name the function is registered under.
    pub name:   String,
    /// Parameter names, in declaration order.
    pub params: Vec<String>,
    /// Statements executed on every invocation.
    pub body:   Vec<Statement>,
}

/// A single statement node.
///
/// Nodes carry plain data only. They are produced by the parser, executed by
/// the evaluator and rendered back to source by [`Statement::format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <ident> = "<value>";`
    ///
    /// The value text is handed to the oracle and its reply becomes the
    /// variable's value.
    Let {
        /// Variable to bind.
        ident: String,
        /// Free-text request sent to the oracle.
        value: String,
    },
    /// `use <ident> = <index>;`
    Use {
        /// Variable to bind.
        ident:     String,
        /// Zero-based index into the invocation arguments.
        arg_index: usize,
    },
    /// `if "<condition>" { ... } else { ... }`
    If {
        /// Condition text judged by the oracle.
        condition: String,
        /// Statements executed when the condition holds.
        then_body: Vec<Statement>,
        /// Statements executed otherwise; empty when there is no `else`.
        else_body: Vec<Statement>,
    },
    /// `while "<condition>" { ... }`
    While {
        /// Condition text judged by the oracle before every iteration.
        condition: String,
        /// Loop body.
        body:      Vec<Statement>,
    },
    /// `print <ident>;`
    Print {
        /// Variable whose value is written to the output.
        ident: String,
    },
    /// `com "<text>";`
    Comment {
        /// Free text, kept for formatting.
        text: String,
    },
    /// `del <ident>;`
    Del {
        /// Variable to remove.
        ident: String,
    },
    /// `fn <name> <params>* { ... }`
    FunctionDef(FunctionDef),
    /// `run <outputs>* = <name> <inputs>*;` or `run <name> <inputs>*;`
    Run {
        /// Caller variables receiving the returned values.
        outputs:  Vec<String>,
        /// Function to invoke.
        function: String,
        /// Caller variables passed as arguments.
        inputs:   Vec<String>,
    },
    /// `return <idents>*;`
    Return {
        /// Variables whose values are returned, in order.
        idents: Vec<String>,
    },
}

impl Statement {
    /// Renders the statement back to source syntax.
    ///
    /// The output is indented by `depth` levels of [`INDENT_WIDTH`] spaces;
    /// nested blocks are indented one level deeper. Re-tokenizing and parsing
    /// the result yields an equal statement.
    ///
    /// # Example
    /// ```
    /// use hellm::ast::Statement;
    ///
    /// let statement = Statement::Print { ident: "x".into() };
    /// assert_eq!(statement.format(1), "    print x;");
    /// ```
    #[must_use]
    pub fn format(&self, depth: usize) -> String {
        let indent = " ".repeat(depth * INDENT_WIDTH);

        match self {
            Self::Let { ident, value } => format!("{indent}let {ident} = \"{value}\";"),
            Self::Use { ident, arg_index } => format!("{indent}use {ident} = {arg_index};"),
            Self::If { condition,
                       then_body,
                       else_body, } => {
                let mut out = format!("{indent}if \"{condition}\" {{\n");
                push_body(&mut out, then_body, depth);
                out.push_str(&indent);
                out.push('}');
                if !else_body.is_empty() {
                    out.push_str(" else {\n");
                    push_body(&mut out, else_body, depth);
                    out.push_str(&indent);
                    out.push('}');
                }
                out
            },
            Self::While { condition, body } => {
                let mut out = format!("{indent}while \"{condition}\" {{\n");
                push_body(&mut out, body, depth);
                out.push_str(&indent);
                out.push('}');
                out
            },
            Self::Print { ident } => format!("{indent}print {ident};"),
            Self::Comment { text } => format!("{indent}com \"{text}\";"),
            Self::Del { ident } => format!("{indent}del {ident};"),
            Self::FunctionDef(def) => {
                let signature = std::iter::once(&def.name).chain(&def.params)
                                                          .map(String::as_str)
                                                          .collect::<Vec<_>>()
                                                          .join(" ");
                let mut out = format!("{indent}fn {signature} {{\n");
                push_body(&mut out, &def.body, depth);
                out.push_str(&indent);
                out.push('}');
                out
            },
            Self::Run { outputs,
                        function,
                        inputs, } => {
                let call = std::iter::once(function).chain(inputs)
                                                    .map(String::as_str)
                                                    .collect::<Vec<_>>()
                                                    .join(" ");
                if outputs.is_empty() {
                    format!("{indent}run {call};")
                } else {
                    format!("{indent}run {} = {call};", outputs.join(" "))
                }
            },
            Self::Return { idents } if idents.is_empty() => format!("{indent}return;"),
            Self::Return { idents } => format!("{indent}return {};", idents.join(" ")),
        }
    }
}

/// Appends each statement of a block body on its own line, one level deeper.
fn push_body(out: &mut String, body: &[Statement], depth: usize) {
    push_lines(out, body, depth + 1);
}

/// Appends statements one per line, separating comments and function
/// definitions from their neighbours with a blank line.
fn push_lines(out: &mut String, statements: &[Statement], depth: usize) {
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 && needs_blank_line(&statements[i - 1], statement) {
            out.push('\n');
        }
        out.push_str(&statement.format(depth));
        out.push('\n');
    }
}

const fn needs_blank_line(previous: &Statement, next: &Statement) -> bool {
    matches!(next, Statement::Comment { .. } | Statement::FunctionDef(_))
    || matches!(previous, Statement::FunctionDef(_))
}

/// Renders a whole program in canonical form.
///
/// Statements are written one per line at depth zero, with a blank line
/// before comments and around function definitions. The result ends with a
/// newline unless the program is empty.
///
/// # Example
/// ```
/// use hellm::ast::{Statement, format_program};
///
/// let program = vec![Statement::Let { ident: "x".into(),
///                                     value: "hi".into(), },
///                    Statement::Comment { text: "show it".into() },
///                    Statement::Print { ident: "x".into() }];
///
/// assert_eq!(format_program(&program),
///            "let x = \"hi\";\n\ncom \"show it\";\nprint x;\n");
/// ```
#[must_use]
pub fn format_program(program: &[Statement]) -> String {
    let mut out = String::new();
    push_lines(&mut out, program, 0);
    out
}
