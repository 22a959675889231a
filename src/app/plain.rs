//! Line mode: submit each stdin line and print what it added to the scrollback.
use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use devconsole::{Console, ConsoleEvent, SessionAction};
use tracing::debug;

/// Reads lines from `input` until EOF or a command asks to exit, writing
/// newly appended scrollback lines to `output`.
pub fn run(console: &mut Console, input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut printed = console.scrollback().appended();

    for line in input.lines() {
        let line = line?;
        console.session_mut().set_input(line.trim_end_matches('\r'));
        let action = console.handle(ConsoleEvent::Submit);
        flush_new_lines(console, &mut printed, &mut output)?;

        if action == SessionAction::Exit {
            debug!("Exit requested, leaving line mode");
            break;
        }
    }

    output.flush()?;
    Ok(())
}

/// Prints lines appended since `printed`, and advances it.
fn flush_new_lines(console: &Console, printed: &mut u64, output: &mut impl Write) -> Result<()> {
    let log = console.scrollback();
    let fresh = (log.appended() - *printed).min(log.len() as u64) as usize;
    for line in log.lines().skip(log.len() - fresh) {
        writeln!(output, "{}", highlight(line))?;
    }
    *printed = log.appended();
    Ok(())
}

fn highlight(line: &str) -> String {
    if line.starts_with("> ") {
        line.bold().to_string()
    } else if line.starts_with("Error: ") || line.ends_with(" not found") {
        line.red().to_string()
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devconsole::CommandOutput;

    fn run_script(script: &str) -> String {
        colored::control::set_override(false);
        let mut console = Console::default();
        console.register("echo", |args: &[&str]| Ok(CommandOutput::text(args.join(" "))));
        console.register("quit", |_args: &[&str]| Ok(CommandOutput::Exit));

        let mut out = Vec::new();
        run(&mut console, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn each_line_is_echoed_and_answered() {
        let out = run_script("echo hi\nnope\n");
        assert_eq!(out, "> echo hi\nhi\n> nope\nCommand nope not found\n");
    }

    #[test]
    fn quit_stops_reading() {
        let out = run_script("quit\necho never\n");
        assert_eq!(out, "> quit\n");
    }

    #[test]
    fn lines_logged_before_start_are_skipped() {
        colored::control::set_override(false);
        let mut console = Console::default();
        console.log("[INFO] ready");
        let mut out = Vec::new();
        run(&mut console, "".as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "");
    }
}
