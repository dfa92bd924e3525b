// File: ./src/repl.rs
// The read-eval-print shell around the task list
use crate::model::{Command, TaskList, parse};
use crate::storage::LocalStorage;
use std::io::{self, BufRead, Write};

const HORIZONTAL_RULE: &str = "____________________________________________________________";

const LOGO: &str = r"  _
 | |_ __ _ ___  __ _ _   _  ___
 | __/ _` / __|/ _` | | | |/ _ \
 | || (_| \__ \ (_| | |_| |  __/
  \__\__,_|___/\__, |\__,_|\___|
                  |_|
";

/// One rendered response, and whether the session ends after it.
#[derive(Debug)]
pub struct Response {
    pub message: String,
    pub quit: bool,
}

impl Response {
    fn message(message: String) -> Self {
        Self {
            message,
            quit: false,
        }
    }
}

/// Owns the task list for the duration of a session and applies parsed
/// commands to it, persisting after every successful mutation.
pub struct Repl {
    tasks: TaskList,
    storage: LocalStorage,
}

impl Repl {
    pub fn new(tasks: TaskList, storage: LocalStorage) -> Self {
        Self { tasks, storage }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn greeting() -> String {
        format!("{LOGO}\nWelcome! I'm Tasque\nWhat can I do for you?")
    }

    /// Blocks on the input source one line at a time until `bye` or end
    /// of input, framing every response between horizontal rules.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        print_message(&mut output, &Self::greeting())?;
        for line in input.lines() {
            let response = self.handle_line(&line?);
            print_message(&mut output, &response.message)?;
            if response.quit {
                break;
            }
        }
        Ok(())
    }

    /// Interprets one raw input line against the current task list.
    ///
    /// Parse failures and bad indices are recovered locally: the
    /// message is the error text and the session continues. A failed
    /// save is reported with the response it belongs to, and the
    /// session continues as well.
    pub fn handle_line(&mut self, line: &str) -> Response {
        let command = match parse(line) {
            Ok(command) => command,
            Err(e) => return Response::message(e.to_string()),
        };

        match command {
            Command::List => Response::message(self.render_list()),

            Command::Add(task) => {
                let rendered = self.tasks.push(task).to_string();
                let count = self.tasks.len();
                Response::message(self.saving(format!(
                    "Got it. I've added this task:\n\t{rendered}\nNow you have {count} tasks in the list."
                )))
            }

            Command::MarkDone(n) => {
                let done = checked_index(n)
                    .and_then(|i| self.tasks.mark_done(i))
                    .map(ToString::to_string);
                Response::message(match done {
                    Some(task) => {
                        self.saving(format!("Nice! I've marked this task as done:\n\t{task}"))
                    }
                    None => missing_task(n),
                })
            }

            Command::Delete(n) => {
                let removed = checked_index(n).and_then(|i| self.tasks.remove(i));
                Response::message(match removed {
                    Some(task) => self.saving(format!("Noted. I've removed this task:\n\t{task}")),
                    None => missing_task(n),
                })
            }

            Command::Bye => Response {
                message: self.saving("Bye. See you next time!".to_string()),
                quit: true,
            },
        }
    }

    /// Persists the current list; a storage failure is appended to the
    /// response instead of crashing the loop.
    fn saving(&self, message: String) -> String {
        match self.storage.save(&self.tasks) {
            Ok(()) => message,
            Err(e) => {
                log::error!("save failed: {e:#}");
                format!("{message}\nWarning: your tasks could not be saved: {e:#}")
            }
        }
    }

    fn render_list(&self) -> String {
        if self.tasks.is_empty() {
            return "There are no tasks yet. Try adding a task first.".to_string();
        }
        let mut out = String::from("Here are the tasks in your list:");
        for (i, task) in self.tasks.iter().enumerate() {
            out.push_str(&format!("\n{}. {task}", i + 1));
        }
        out
    }
}

fn checked_index(n: i64) -> Option<usize> {
    usize::try_from(n).ok()
}

fn missing_task(n: i64) -> String {
    format!("Task {n} does not exist. Please check your task list!")
}

fn print_message(mut out: impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{HORIZONTAL_RULE}\n{message}\n{HORIZONTAL_RULE}")
}
