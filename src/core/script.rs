//! Line-oriented command language for driving a [`Session`]
//!
//! One command per line, tokens separated by whitespace. Blank lines and
//! lines starting with `#` are ignored.
//!
//! ```text
//! init
//! add_student Alice 1
//! add_grade 1 Math 80
//! avg 1
//! print 1
//! print_all
//! destroy
//! ```

use crate::core::error::GradebookError;
use crate::core::session::Session;
use crate::{debug, info};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Default number of decimals used when printing averages
pub const DEFAULT_AVERAGE_PRECISION: usize = 2;

/// A single parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new gradebook
    Init,
    /// Destroy the current gradebook
    Destroy,
    /// Enroll a student
    AddStudent {
        /// Student name
        name: String,
        /// Student id
        id: i32,
    },
    /// Record a course grade
    AddGrade {
        /// Student id
        id: i32,
        /// Course name
        course: String,
        /// Grade, validated by the gradebook
        grade: i32,
    },
    /// Print a student's average
    Average {
        /// Student id
        id: i32,
    },
    /// Print one student
    Print {
        /// Student id
        id: i32,
    },
    /// Print every student
    PrintAll,
}

/// Why a line could not be parsed
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The first token is not a known command
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// Wrong number of arguments
    #[error("'{command}' expects {expected} argument(s), got {found}")]
    Arity {
        /// Command keyword
        command: &'static str,
        /// Number of arguments the command takes
        expected: usize,
        /// Number of arguments given
        found: usize,
    },

    /// An argument that must be an integer is not one
    #[error("'{0}' is not a valid integer")]
    InvalidInteger(String),

    /// The line holds no command
    #[error("empty command")]
    Empty,

    /// The raw line is not valid UTF-8
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

impl Command {
    /// The keyword that introduces this command
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Destroy => "destroy",
            Self::AddStudent { .. } => "add_student",
            Self::AddGrade { .. } => "add_grade",
            Self::Average { .. } => "avg",
            Self::Print { .. } => "print",
            Self::PrintAll => "print_all",
        }
    }
}

fn expect_args(command: &'static str, args: &[&str], expected: usize) -> Result<(), ParseError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ParseError::Arity {
            command,
            expected,
            found: args.len(),
        })
    }
}

fn parse_int(token: &str) -> Result<i32, ParseError> {
    token
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidInteger(token.to_string()))
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let keyword = tokens.next().ok_or(ParseError::Empty)?;
        let args: Vec<&str> = tokens.collect();

        match keyword {
            "init" => {
                expect_args("init", &args, 0)?;
                Ok(Self::Init)
            }
            "destroy" => {
                expect_args("destroy", &args, 0)?;
                Ok(Self::Destroy)
            }
            "add_student" => {
                expect_args("add_student", &args, 2)?;
                Ok(Self::AddStudent {
                    name: args[0].to_string(),
                    id: parse_int(args[1])?,
                })
            }
            "add_grade" => {
                expect_args("add_grade", &args, 3)?;
                Ok(Self::AddGrade {
                    id: parse_int(args[0])?,
                    course: args[1].to_string(),
                    grade: parse_int(args[2])?,
                })
            }
            "avg" => {
                expect_args("avg", &args, 1)?;
                Ok(Self::Average {
                    id: parse_int(args[0])?,
                })
            }
            "print" => {
                expect_args("print", &args, 1)?;
                Ok(Self::Print {
                    id: parse_int(args[0])?,
                })
            }
            "print_all" => {
                expect_args("print_all", &args, 0)?;
                Ok(Self::PrintAll)
            }
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init | Self::Destroy | Self::PrintAll => write!(f, "{}", self.keyword()),
            Self::AddStudent { name, id } => write!(f, "add_student {name} {id}"),
            Self::AddGrade { id, course, grade } => write!(f, "add_grade {id} {course} {grade}"),
            Self::Average { id } => write!(f, "avg {id}"),
            Self::Print { id } => write!(f, "print {id}"),
        }
    }
}

/// What went wrong on a line
#[derive(thiserror::Error, Debug)]
pub enum ScriptError {
    /// The line is not a valid command
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The gradebook rejected the command
    #[error(transparent)]
    Gradebook(#[from] GradebookError),
}

/// A failed line and its cause
#[derive(Debug)]
pub struct ScriptFailure {
    /// 1-based line number
    pub line: usize,
    /// Cause of the failure
    pub error: ScriptError,
}

impl fmt::Display for ScriptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

/// Outcome of running a whole script
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Commands that succeeded
    pub executed: usize,
    /// Commands that failed, in order
    pub failures: Vec<ScriptFailure>,
    /// Whether the run stopped early because of `fail_fast`
    pub aborted: bool,
    /// Reading input or writing output failed; lines after it were not run
    pub io_error: Option<io::Error>,
}

impl RunSummary {
    /// Whether every command succeeded and all I/O completed
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.io_error.is_none()
    }

    fn record(&mut self, line: usize, error: ScriptError) {
        self.failures.push(ScriptFailure { line, error });
    }
}

/// Executes commands against a session, writing results to an output
#[derive(Debug)]
pub struct Runner {
    session: Session,
    precision: usize,
    fail_fast: bool,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    /// Create a runner with a live gradebook and default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            precision: DEFAULT_AVERAGE_PRECISION,
            fail_fast: false,
        }
    }

    /// Set the number of decimals printed for averages
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Stop at the first failing command
    #[must_use]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// The session commands run against
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Execute one command, writing any output it produces
    ///
    /// # Errors
    /// Returns the gradebook error for rejected commands. Writer failures are
    /// returned as the outer `io::Error`.
    pub fn execute<W: Write>(
        &mut self,
        command: &Command,
        out: &mut W,
    ) -> io::Result<Result<(), GradebookError>> {
        debug!("Executing: {command}");
        let outcome = match command {
            Command::Init => {
                self.session.create();
                Ok(())
            }
            Command::Destroy => {
                self.session.destroy();
                Ok(())
            }
            Command::AddStudent { name, id } => self.session.add_student(name, *id),
            Command::AddGrade { id, course, grade } => {
                self.session.add_grade(*id, course, *grade)
            }
            Command::Average { id } => match self.session.average_for(*id) {
                Ok((average, name)) => {
                    writeln!(out, "{name} {average:.prec$}", prec = self.precision)?;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Command::Print { id } => match self.session.format_student(*id) {
                Ok(line) => {
                    out.write_all(line.as_bytes())?;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Command::PrintAll => match self.session.format_all() {
                Ok(text) => {
                    out.write_all(text.as_bytes())?;
                    Ok(())
                }
                Err(e) => Err(e),
            },
        };
        Ok(outcome)
    }

    /// Parse and execute a single command line
    ///
    /// # Errors
    /// Outer `io::Error` if the writer fails; inner [`ScriptError`] if the
    /// line is malformed or the command is rejected.
    pub fn execute_line<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> io::Result<Result<(), ScriptError>> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => return Ok(Err(e.into())),
        };
        Ok(self.execute(&command, out)?.map_err(ScriptError::from))
    }

    /// Run every line of `input`, writing results to `out`
    ///
    /// Blank lines and `#` comments are skipped. Lines that are not valid
    /// UTF-8 are reported as [`ParseError::InvalidUtf8`] and the run goes on.
    /// A read or write failure stops the run and is kept in
    /// [`RunSummary::io_error`] next to the failures collected so far.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> RunSummary {
        let mut summary = RunSummary::default();
        for (idx, raw) in input.split(b'\n').enumerate() {
            let line_no = idx + 1;
            let raw = match raw {
                Ok(raw) => raw,
                Err(e) => {
                    summary.io_error = Some(e);
                    break;
                }
            };
            let outcome = match String::from_utf8(raw) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        continue;
                    }
                    match self.execute_line(trimmed, out) {
                        Ok(outcome) => outcome,
                        Err(e) => {
                            summary.io_error = Some(e);
                            break;
                        }
                    }
                }
                Err(_) => Err(ParseError::InvalidUtf8.into()),
            };
            match outcome {
                Ok(()) => summary.executed += 1,
                Err(error) => {
                    summary.record(line_no, error);
                    if self.fail_fast {
                        summary.aborted = true;
                        break;
                    }
                }
            }
        }
        info!(
            "Script finished: {} succeeded, {} failed",
            summary.executed,
            summary.failures.len()
        );
        summary
    }
}
