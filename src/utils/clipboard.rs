use std::error::Error as StdError;
use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};

/// A shell command that reads clipboard contents from stdin.
#[derive(Debug, Clone, Copy)]
pub struct ClipboardCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const PLATFORM_COMMANDS: &[ClipboardCommand] = &[ClipboardCommand {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "windows")]
const PLATFORM_COMMANDS: &[ClipboardCommand] = &[ClipboardCommand {
    program: "cmd",
    args: &["/C", "clip"],
}];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const PLATFORM_COMMANDS: &[ClipboardCommand] = &[
    ClipboardCommand {
        program: "wl-copy",
        args: &[],
    },
    ClipboardCommand {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardCommand {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError {
    tried: Vec<&'static str>,
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tried.len() > 1 {
            write!(
                f,
                "No clipboard command worked (install one of: {})",
                self.tried.join(", ")
            )
        } else {
            write!(
                f,
                "Clipboard command `{}` failed",
                self.tried.first().copied().unwrap_or("<none>")
            )
        }
    }
}

impl StdError for ClipboardError {}

pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    copy_with(PLATFORM_COMMANDS, text)
}

/// Try each command in order until one accepts the text.
pub fn copy_with(commands: &[ClipboardCommand], text: &str) -> Result<(), ClipboardError> {
    for command in commands {
        if run_with_stdin(command, text) {
            return Ok(());
        }
    }
    Err(ClipboardError {
        tried: commands.iter().map(|command| command.program).collect(),
    })
}

fn run_with_stdin(command: &ClipboardCommand, input: &str) -> bool {
    let Ok(mut child) = Command::new(command.program)
        .args(command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    if let Some(mut stdin) = child.stdin.take() {
        if stdin.write_all(input.as_bytes()).is_err() {
            let _ = child.wait();
            return false;
        }
    }
    matches!(child.wait(), Ok(status) if status.success())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    const MISSING: ClipboardCommand = ClipboardCommand {
        program: "appspark-no-such-clipboard-tool",
        args: &[],
    };
    const FAILING: ClipboardCommand = ClipboardCommand {
        program: "false",
        args: &[],
    };
    const ACCEPTING: ClipboardCommand = ClipboardCommand {
        program: "cat",
        args: &[],
    };

    #[test]
    fn falls_through_to_first_working_command() {
        assert_eq!(copy_with(&[MISSING, FAILING, ACCEPTING], "idea"), Ok(()));
    }

    #[test]
    fn reports_every_command_tried() {
        let err = copy_with(&[MISSING, FAILING], "idea").expect_err("nothing works");
        assert_eq!(
            err.to_string(),
            "No clipboard command worked (install one of: appspark-no-such-clipboard-tool, false)"
        );
    }

    #[test]
    fn single_failure_names_the_command() {
        let err = copy_with(&[MISSING], "idea").expect_err("missing tool");
        assert_eq!(
            err.to_string(),
            "Clipboard command `appspark-no-such-clipboard-tool` failed"
        );
    }
}
