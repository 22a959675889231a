//! Tab completion of command names.
use super::InputSession;
use crate::commands::CommandRegistry;
use crate::error::ConsoleError;
use crate::logging::ScrollbackLog;

impl InputSession {
    /// Completes the input against registered command names.
    ///
    /// * Empty input logs the command listing and leaves the input alone.
    /// * No match logs a notice and clears the input.
    /// * A single match replaces the input with the name plus a space.
    /// * Several matches are logged, and the input becomes their longest
    ///   common prefix.
    pub fn autocomplete(&mut self, registry: &CommandRegistry, log: &mut ScrollbackLog) {
        self.apply_cursor_fix();
        if self.input.is_empty() {
            log.log(&registry.command_listing());
            return;
        }

        let matches = registry.search_commands(&self.input);
        match matches.as_slice() {
            [] => {
                log.log(&ConsoleError::NoAutocompleteMatch(self.input.clone()).to_string());
                self.clear_input();
            }
            [only] => {
                self.input = format!("{} ", only);
                self.cursor_end();
            }
            several => {
                log.log(&format!("Commands starting with \"{}\":", self.input));
                for name in several {
                    log.log(name);
                }
                self.input = longest_common_prefix(several).to_string();
                self.cursor_end();
            }
        }
    }
}

/// The longest prefix shared by every candidate, compared char by char.
///
/// Returns an empty string for no candidates.
pub fn longest_common_prefix<'a>(candidates: &[&'a str]) -> &'a str {
    let Some((first, rest)) = candidates.split_first() else {
        return "";
    };

    let mut end = first.len();
    for other in rest {
        let shared: usize = first
            .chars()
            .zip(other.chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        end = end.min(shared);
    }
    &first[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandOutput;

    fn registry_with(names: &[&str]) -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        for name in names {
            registry.register(name, |_args: &[&str]| Ok(CommandOutput::None));
        }
        registry
    }

    #[test]
    fn prefix_of_several_matches() {
        assert_eq!(longest_common_prefix(&["foobar", "foo", "food"]), "foo");
        assert_eq!(longest_common_prefix(&["status", "stash"]), "sta");
        assert_eq!(longest_common_prefix(&["abc", "xyz"]), "");
        assert_eq!(longest_common_prefix(&["only"]), "only");
        assert_eq!(longest_common_prefix(&[]), "");
    }

    #[test]
    fn prefix_respects_char_boundaries() {
        assert_eq!(longest_common_prefix(&["héllo", "hélium"]), "hél");
        assert_eq!(longest_common_prefix(&["é", "è"]), "");
    }

    #[test]
    fn several_matches_are_listed_and_reduced() {
        let registry = registry_with(&["foo", "foobar", "food"]);
        let mut log = ScrollbackLog::new();
        let mut session = InputSession::new(10);
        session.set_input("foo");

        session.autocomplete(&registry, &mut log);

        assert_eq!(
            log.lines().collect::<Vec<_>>(),
            vec!["Commands starting with \"foo\":", "foo", "foobar", "food"]
        );
        assert_eq!(session.input(), "foo");
        assert_eq!(session.cursor(), 3);
    }

    #[test]
    fn reduction_is_not_anchored_to_typed_text() {
        let registry = registry_with(&["status", "stash"]);
        let mut log = ScrollbackLog::new();
        let mut session = InputSession::new(10);
        session.set_input("s");

        session.autocomplete(&registry, &mut log);
        assert_eq!(session.input(), "sta");
        assert_eq!(session.cursor(), 3);
    }

    #[test]
    fn single_match_completes_with_trailing_space() {
        let registry = registry_with(&["foo", "foobar", "food"]);
        let mut log = ScrollbackLog::new();
        let mut session = InputSession::new(10);
        session.set_input("foob");

        session.autocomplete(&registry, &mut log);

        assert_eq!(session.input(), "foobar ");
        assert_eq!(session.cursor(), 7);
        assert!(log.is_empty());
    }

    #[test]
    fn no_match_is_reported_and_input_cleared() {
        let registry = registry_with(&["foo"]);
        let mut log = ScrollbackLog::new();
        let mut session = InputSession::new(10);
        session.set_input("zz");

        session.autocomplete(&registry, &mut log);

        assert_eq!(log.text(), "No command start with \"zz\".");
        assert_eq!(session.input(), "");
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn empty_input_lists_commands() {
        let registry = registry_with(&["echo"]);
        let mut log = ScrollbackLog::new();
        let mut session = InputSession::new(10);

        session.autocomplete(&registry, &mut log);

        assert_eq!(log.text(), "Commands:\nlist\necho");
        assert_eq!(session.input(), "");
    }
}
