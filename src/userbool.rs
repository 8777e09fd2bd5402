use colored::Colorize;
use log::warn;
use read_input::prelude::*;
use std::{
    io::{self, IsTerminal},
    str::FromStr,
};

const INVALID_ANSWER: &str = "Invalid answer, please try again.";

/// A strict yes/no answer: `y` or `n`, in either case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserBool {
    pub value: bool,
}

impl From<bool> for UserBool {
    fn from(value: bool) -> Self {
        UserBool { value }
    }
}

impl From<UserBool> for bool {
    fn from(val: UserBool) -> Self {
        val.value
    }
}

impl FromStr for UserBool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "y" | "Y" => Ok(true.into()),
            "n" | "N" => Ok(false.into()),
            other => Err(format!("Cannot understand {}", other)),
        }
    }
}

/// Asks `question` on the terminal until a valid yes/no answer is given.
///
/// An empty answer picks `default`, which is shown capitalized in the hint.
/// `read_input` reads end of input as an empty answer, so this must only be
/// called with a terminal on stdin.
pub fn ask_question_yn(question: &str, default: bool) -> bool {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    input::<UserBool>()
        .repeat_msg(format!("{} {} ", question, hint.dimmed()))
        .default(default.into())
        .err(INVALID_ANSWER.red())
        .get()
        .into()
}

/// Something that can answer an overwrite question.
pub trait Confirm {
    fn confirm(&mut self, question: &str, default: bool) -> bool;
}

/// Asks the user on stdin. Answers no when stdin is not a terminal.
pub struct Terminal;

impl Confirm for Terminal {
    fn confirm(&mut self, question: &str, default: bool) -> bool {
        if !io::stdin().is_terminal() {
            warn!("stdin is not a terminal, answering no to: {}", question);
            return false;
        }
        ask_question_yn(question, default)
    }
}

impl<F> Confirm for F
where
    F: FnMut(&str, bool) -> bool,
{
    fn confirm(&mut self, question: &str, default: bool) -> bool {
        self(question, default)
    }
}
