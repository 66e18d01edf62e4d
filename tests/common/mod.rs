#![allow(dead_code)]

use std::collections::VecDeque;

use hellm::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::RunOptions,
        oracle::{Oracle, OracleError},
    },
    run_source,
};

/// An oracle that replays canned replies in order and records every call.
#[derive(Default)]
pub struct ScriptedOracle {
    replies:   VecDeque<String>,
    /// `(system prompt, user message)` for every call, in order.
    pub calls: Vec<(String, String)>,
}

impl ScriptedOracle {
    pub fn new(replies: &[&str]) -> Self {
        Self { replies: replies.iter().map(ToString::to_string).collect(),
               calls:   Vec::new(), }
    }
}

impl Oracle for ScriptedOracle {
    fn respond(&mut self, system_prompt: &str, user_message: &str) -> Result<String, OracleError> {
        self.calls
            .push((system_prompt.to_string(), user_message.to_string()));
        self.replies
            .pop_front()
            .ok_or_else(|| OracleError::Transport { message: "script exhausted".to_string() })
    }
}

/// Output and outcome of one program run.
pub struct Outcome {
    pub output: String,
    pub result: Result<(), Box<dyn std::error::Error>>,
}

impl Outcome {
    pub fn runtime_error(&self) -> Option<&RuntimeError> {
        self.result
            .as_ref()
            .err()
            .and_then(|e| e.downcast_ref::<RuntimeError>())
    }
}

pub fn run_with(src: &str, args: &[&str], oracle: &mut dyn Oracle, options: RunOptions) -> Outcome {
    let args = args.iter().map(ToString::to_string).collect::<Vec<_>>();
    let mut output = Vec::new();
    let result = run_source(src, &args, oracle, &mut output, options);

    Outcome { output: String::from_utf8(output).expect("output is UTF-8"),
              result }
}

pub fn run(src: &str, args: &[&str], oracle: &mut dyn Oracle) -> Outcome {
    run_with(src, args, oracle, RunOptions::default())
}

pub fn assert_output(src: &str, args: &[&str], replies: &[&str], expected: &str) {
    let mut oracle = ScriptedOracle::new(replies);
    let outcome = run(src, args, &mut oracle);
    if let Err(e) = &outcome.result {
        panic!("Script failed: {e}");
    }
    assert_eq!(outcome.output, expected);
}

/// Replies to every call with the user message, so `let x = "1";` binds `1`.
pub fn echo(_: &str, user: &str) -> Result<String, OracleError> {
    Ok(user.to_string())
}
