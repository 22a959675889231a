//! Commands the binary registers on top of the built-in `list`.
use chrono::Local;
use devconsole::{CommandOutput, Console};
use tracing::info;

/// Registers `echo`, `time`, `clear`, and `quit`.
pub fn register_demo_commands(console: &mut Console) {
    console.register("echo", |args: &[&str]| Ok(CommandOutput::text(args.join(" "))));

    console.register("time", |args: &[&str]| {
        let format = if args.first() == Some(&"--utc") {
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
        } else {
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
        };
        Ok(CommandOutput::Text(format))
    });

    console.register("clear", |_args: &[&str]| Ok(CommandOutput::Clear));

    console.register("quit", |_args: &[&str]| {
        info!("Quit requested from console");
        Ok(CommandOutput::Exit)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use devconsole::{ConsoleEvent, SessionAction};

    fn submit(console: &mut Console, line: &str) -> SessionAction {
        console.session_mut().set_input(line);
        console.handle(ConsoleEvent::Submit)
    }

    #[test]
    fn demo_commands_are_listed_after_list() {
        let mut console = Console::default();
        register_demo_commands(&mut console);
        let names: Vec<&str> = console.registry().names().collect();
        assert_eq!(names, vec!["list", "echo", "time", "clear", "quit"]);
    }

    #[test]
    fn echo_joins_arguments() {
        let mut console = Console::default();
        register_demo_commands(&mut console);
        submit(&mut console, "echo  a b");
        assert_eq!(console.scrollback().lines().last(), Some("a b"));
    }

    #[test]
    fn time_prints_a_date() {
        let mut console = Console::default();
        register_demo_commands(&mut console);
        submit(&mut console, "time --utc");
        let line = console.scrollback().lines().last().unwrap();
        assert!(line.ends_with(" UTC"));
    }

    #[test]
    fn quit_asks_to_exit() {
        let mut console = Console::default();
        register_demo_commands(&mut console);
        assert_eq!(submit(&mut console, "quit"), SessionAction::Exit);
    }
}
