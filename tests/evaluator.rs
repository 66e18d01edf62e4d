mod common;

use std::io::{self, Write};

use common::{ScriptedOracle, run, run_with};
use hellm::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Flow, Interpreter, RunOptions},
        oracle::OracleError,
        scope::Scope,
    },
    parse_source,
};

const TRUE: &str = "EVALUATE_TRUE";
const FALSE: &str = "EVALUATE_FALSE";

/// A sink that rejects every write.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn while_runs_until_the_oracle_says_false() {
    let mut oracle = ScriptedOracle::new(&[TRUE, TRUE, FALSE]);
    let outcome = run("use n = 0;\nwhile \"keep going\" {\n    print n;\n}\nprint n;",
                      &["tick"],
                      &mut oracle);

    assert!(outcome.result.is_ok());
    assert_eq!(outcome.output, "tick\ntick\ntick\n");
    assert_eq!(oracle.calls.len(), 3);
    assert!(oracle.calls.iter().all(|(_, user)| user == "keep going"));
}

#[test]
fn while_that_starts_false_never_runs() {
    let mut oracle = ScriptedOracle::new(&[FALSE]);
    let outcome = run("while \"never\" {\n    print missing;\n}", &[], &mut oracle);

    assert!(outcome.result.is_ok());
    assert!(outcome.output.is_empty());
}

#[test]
fn reply_without_a_marker_is_indecisive() {
    let mut oracle = ScriptedOracle::new(&["I would rather not say."]);
    let outcome = run("if \"is it late\" {\n}", &[], &mut oracle);

    match outcome.runtime_error() {
        Some(RuntimeError::IndecisiveOracle { condition, reply }) => {
            assert_eq!(condition, "is it late");
            assert_eq!(reply, "I would rather not say.");
        },
        other => panic!("expected an indecisive oracle, got {other:?}"),
    }
}

#[test]
fn reply_with_both_markers_is_true() {
    let mut oracle = ScriptedOracle::new(&["EVALUATE_FALSE? No: EVALUATE_TRUE."]);
    let outcome = run("use a = 0;\nuse b = 1;\nif \"pick a\" {\n    print a;\n} else {\n    print b;\n}",
                      &["a", "b"],
                      &mut oracle);

    assert!(outcome.result.is_ok());
    assert_eq!(outcome.output, "a\n");
}

#[test]
fn failed_oracle_call_names_the_statement() {
    let mut oracle = ScriptedOracle::default();
    let outcome = run("let x = \"anything\";", &[], &mut oracle);
    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::OracleCall { statement: "let",
                                                     source:    OracleError::Transport { .. }, })));

    let mut failing = |_: &str, _: &str| -> Result<String, OracleError> {
        Err(OracleError::Status { code: 429,
                                  body: "slow down".into(), })
    };
    let outcome = run("while \"x\" {\n}", &[], &mut failing);
    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::OracleCall { statement: "while",
                                                     source:    OracleError::Status { code: 429, .. }, })));
}

#[test]
fn prompts_list_the_variables_in_scope() {
    let mut oracle = ScriptedOracle::new(&["red", TRUE]);
    let outcome = run("use name = 0;\nlet colour = \"a colour\";\nif \"name likes colour\" {\n}",
                      &["ada"],
                      &mut oracle);
    assert!(outcome.result.is_ok());

    let (let_prompt, _) = &oracle.calls[0];
    assert!(let_prompt.contains("## VARIABLE name\nada"));
    assert!(!let_prompt.contains("## VARIABLE colour"));

    let (if_prompt, user) = &oracle.calls[1];
    assert!(if_prompt.contains("## VARIABLE colour\nred\n\n## VARIABLE name\nada"));
    assert!(if_prompt.contains(TRUE) && if_prompt.contains(FALSE));
    assert_eq!(user, "name likes colour");
}

#[test]
fn block_locals_do_not_leak_but_updates_persist() {
    let mut oracle = ScriptedOracle::new(&[TRUE]);
    let outcome = run("use a = 0;\nif \"c\" {\n    use a = 1;\n    use b = 1;\n}\nprint a;\nprint b;",
                      &["before", "after"],
                      &mut oracle);

    assert_eq!(outcome.output, "after\n");
    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::UndefinedVariable { name }) if name == "b"));
}

#[test]
fn each_loop_iteration_gets_a_fresh_scope() {
    let mut oracle = ScriptedOracle::new(&[TRUE, "first", TRUE, "second", FALSE]);
    let outcome = run("while \"again\" {\n    let seen = \"x\";\n}", &[], &mut oracle);

    assert!(outcome.result.is_ok());
    assert_eq!(oracle.calls.len(), 5);
    assert!(!oracle.calls[3].0.contains("## VARIABLE seen"));
}

#[test]
fn del_removes_and_rejects_unknown_names() {
    let mut oracle = ScriptedOracle::default();
    let outcome = run("use a = 0;\ndel a;\nprint a;", &["v"], &mut oracle);
    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::UndefinedVariable { name }) if name == "a"));

    let outcome = run("del ghost;", &[], &mut oracle);
    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::UndefinedVariable { name }) if name == "ghost"));
}

#[test]
fn undefined_function_is_error() {
    let mut oracle = ScriptedOracle::default();
    let outcome = run("run nowhere;", &[], &mut oracle);

    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::UndefinedFunction { name }) if name == "nowhere"));
}

#[test]
fn wrong_input_count_is_arity_error() {
    let mut oracle = ScriptedOracle::default();
    let outcome = run("fn f a b {\n}\nuse x = 0;\nrun f x;", &["1"], &mut oracle);

    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::ArityMismatch { expected: 2, found: 1, .. })));
}

#[test]
fn missing_return_value_is_output_arity_error() {
    let mut oracle = ScriptedOracle::default();
    let outcome = run("fn f {\n}\nrun y = f;", &[], &mut oracle);
    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::OutputArityMismatch { expected: 1, found: 0, .. })));

    let outcome = run("fn f {\n    return;\n}\nrun y = f;", &[], &mut oracle);
    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::OutputArityMismatch { expected: 1, found: 0, .. })));
}

#[test]
fn function_body_cannot_see_caller_variables() {
    let mut oracle = ScriptedOracle::default();
    let outcome = run("fn peek {\n    print secret;\n}\nuse secret = 0;\nrun peek;",
                      &["hidden"],
                      &mut oracle);

    assert!(outcome.output.is_empty());
    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::UndefinedVariable { name }) if name == "secret"));
}

#[test]
fn unbound_input_is_reported_in_the_caller() {
    let mut oracle = ScriptedOracle::default();
    let outcome = run("fn f a {\n}\nrun f nothing;", &[], &mut oracle);

    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::UndefinedVariable { name }) if name == "nothing"));
}

#[test]
fn function_variables_stay_inside_the_call() {
    let mut oracle = ScriptedOracle::default();
    let outcome = run("fn f a {\n    use inner = 0;\n}\nuse x = 0;\nrun f x;\nprint inner;",
                      &["v"],
                      &mut oracle);

    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::UndefinedVariable { name }) if name == "inner"));
}

#[test]
fn outputs_update_existing_caller_variables() {
    let mut oracle = ScriptedOracle::new(&[TRUE]);
    let src = "fn id a {\n    return a;\n}\nuse x = 0;\nuse y = 1;\nif \"c\" {\n    run x = id y;\n}\nprint x;";
    let outcome = run(src, &["old", "new"], &mut oracle);

    assert!(outcome.result.is_ok());
    assert_eq!(outcome.output, "new\n");
}

#[test]
fn return_escapes_nested_loops_and_branches() {
    let mut oracle = ScriptedOracle::new(&[TRUE, TRUE]);
    let src = "fn first {\n    while \"forever\" {\n        if \"found it\" {\n            use v = 0;\n            \
               return v;\n        }\n    }\n    use v = 1;\n    return v;\n}\n\nrun r = first;\nprint r;";
    let outcome = run(src, &["early", "late"], &mut oracle);

    assert!(outcome.result.is_ok());
    assert_eq!(outcome.output, "early\n");
    assert_eq!(oracle.calls.len(), 2);
}

#[test]
fn bare_return_stops_the_function() {
    let mut oracle = ScriptedOracle::default();
    let src = "fn quiet a {\n    return;\n    print a;\n}\nuse x = 0;\nrun quiet x;\nprint x;";
    let outcome = run(src, &["shown once"], &mut oracle);

    assert!(outcome.result.is_ok());
    assert_eq!(outcome.output, "shown once\n");
}

#[test]
fn functions_can_recurse_and_call_siblings() {
    let mut oracle = ScriptedOracle::new(&[FALSE, "0", TRUE]);
    let src = "fn finish n {\n    return n;\n}\n\nfn countdown n {\n    if \"n is zero\" {\n        run r = \
               finish n;\n        return r;\n    } else {\n        let m = \"n minus one\";\n        run r = \
               countdown m;\n        return r;\n    }\n}\n\nuse start = 0;\nrun result = countdown start;\nprint result;";
    let outcome = run(src, &["1"], &mut oracle);

    if let Err(e) = &outcome.result {
        panic!("Script failed: {e}");
    }
    assert_eq!(outcome.output, "0\n");
    assert_eq!(oracle.calls.len(), 3);
}

#[test]
fn functions_defined_in_a_call_do_not_escape() {
    let mut oracle = ScriptedOracle::default();
    let outcome = run("fn outer {\n    fn inner {\n    }\n}\n\nrun outer;\nrun inner;", &[], &mut oracle);

    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::UndefinedFunction { name }) if name == "inner"));
}

#[test]
fn loop_limit_stops_runaway_loops() {
    let mut oracle = ScriptedOracle::new(&[TRUE, TRUE, TRUE]);
    let options = RunOptions { max_loop_iterations: Some(2) };
    let outcome = run_with("use a = 0;\nwhile \"forever\" {\n    print a;\n}", &["x"], &mut oracle, options);

    assert_eq!(outcome.output, "x\nx\n");
    assert!(matches!(outcome.runtime_error(),
                     Some(RuntimeError::LoopLimitExceeded { limit: 2, .. })));
}

#[test]
fn loop_limit_allows_loops_that_finish_in_time() {
    let mut oracle = ScriptedOracle::new(&[TRUE, TRUE, FALSE]);
    let options = RunOptions { max_loop_iterations: Some(2) };
    let outcome = run_with("use a = 0;\nwhile \"twice\" {\n    print a;\n}", &["x"], &mut oracle, options);

    assert!(outcome.result.is_ok());
    assert_eq!(outcome.output, "x\nx\n");
}

#[test]
fn print_failure_is_an_output_error() {
    let program = parse_source("use a = 0;\nprint a;").unwrap();
    let args = vec!["v".to_string()];
    let mut oracle = ScriptedOracle::default();
    let mut sink = BrokenPipe;

    let err = Interpreter::new(&mut oracle, &mut sink, &args).run(&program)
                                                            .unwrap_err();
    assert!(matches!(err, RuntimeError::Output { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn execute_reports_the_return_signal() {
    let program = parse_source("use a = 0;\nreturn a a;\nprint a;").unwrap();
    let args = vec!["v".to_string()];
    let mut oracle = ScriptedOracle::default();
    let mut output = Vec::new();

    let flow = Interpreter::new(&mut oracle, &mut output, &args).execute(&program, &Scope::new())
                                                                .unwrap();
    assert_eq!(flow, Flow::Returned(vec!["v".into(), "v".into()]));
    assert!(output.is_empty());

    let program = parse_source("com \"nothing\";").unwrap();
    let flow = Interpreter::new(&mut oracle, &mut output, &args).execute(&program, &Scope::new())
                                                                .unwrap();
    assert_eq!(flow, Flow::Executed);
}
