//! # Command Extractor
//!
//! Extracts typed filesystem commands from the free text of a model reply.
//! One regex rule per directive kind, held in a fixed-order table; all
//! non-overlapping matches of a kind are collected before the next kind runs,
//! so the batch is grouped by kind rather than by textual position. The table
//! is the single place that defines the emission order.

use crate::command::Command;
use regex::{Captures, Regex};

struct DirectiveRule {
    pattern: &'static str,
    build: fn(&Captures) -> Command,
}

/// One rule per directive, in emission order: create-file, create-directory,
/// modify, delete, move, copy, read, list. Content blocks run from the
/// directive to the next blank line or the end of the reply (non-greedy).
const RULES: &[DirectiveRule] = &[
    DirectiveRule {
        pattern: r"(?is)\bcreate\s+file\s+(\S+)\s+with\s+content:?\s*\n?(.*?)(?:\n\n|$)",
        build: build_create_file,
    },
    DirectiveRule {
        // `folder` accepted as a synonym
        pattern: r"(?i)\bcreate\s+(?:directory|folder)\s+(\S+)",
        build: build_create_directory,
    },
    DirectiveRule {
        pattern: r"(?is)\bmodify\s+(\S+)\s+with:?\s*\n?(.*?)(?:\n\n|$)",
        build: build_modify,
    },
    DirectiveRule {
        pattern: r"(?i)\bdelete\s+(\S+)",
        build: build_delete,
    },
    DirectiveRule {
        pattern: r"(?i)\bmove\s+(\S+)\s+to\s+(\S+)",
        build: build_move,
    },
    DirectiveRule {
        pattern: r"(?i)\bcopy\s+(\S+)\s+to\s+(\S+)",
        build: build_copy,
    },
    DirectiveRule {
        pattern: r"(?i)\bread\s+(\S+)",
        build: build_read,
    },
    DirectiveRule {
        // The path token is optional; a bare `list contents of` means the
        // workspace root.
        pattern: r"(?i)\blist\s+contents\s+of[ \t]*(\S*)",
        build: build_list,
    },
];

fn build_create_file(caps: &Captures) -> Command {
    Command::CreateFile(token(caps, 1), token(caps, 2))
}

fn build_create_directory(caps: &Captures) -> Command {
    Command::CreateDirectory(token(caps, 1))
}

fn build_modify(caps: &Captures) -> Command {
    Command::Modify(token(caps, 1), token(caps, 2))
}

fn build_delete(caps: &Captures) -> Command {
    Command::Delete(token(caps, 1))
}

fn build_move(caps: &Captures) -> Command {
    Command::Move(token(caps, 1), token(caps, 2))
}

fn build_copy(caps: &Captures) -> Command {
    Command::Copy(token(caps, 1), token(caps, 2))
}

fn build_read(caps: &Captures) -> Command {
    Command::Read(token(caps, 1))
}

fn build_list(caps: &Captures) -> Command {
    let path = token(caps, 1);
    Command::List(if path.is_empty() { ".".to_string() } else { path })
}

/// Returns the trimmed capture group, or empty when the group is absent.
fn token(caps: &Captures, index: usize) -> String {
    caps.get(index)
        .map(|m| m.as_str().trim())
        .unwrap_or_default()
        .to_string()
}

/// Scans `text` for directives and returns the extracted commands.
///
/// Deterministic and side-effect free. Text with no recognizable directive
/// yields an empty batch; that is not an error.
pub fn extract(text: &str) -> Vec<Command> {
    let mut commands = Vec::new();
    for rule in RULES {
        let regex = Regex::new(rule.pattern).unwrap();
        for caps in regex.captures_iter(text) {
            commands.push((rule.build)(&caps));
        }
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_delete_scenario() {
        let reply = "create file a.txt with content:\nhello\n\ndelete b.txt";
        let commands = extract(reply);
        assert_eq!(
            commands,
            vec![
                Command::CreateFile("a.txt".to_string(), "hello".to_string()),
                Command::Delete("b.txt".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_directives_yield_empty_batch() {
        assert!(extract("The weather is nice today.").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_kind_order_beats_textual_order() {
        let reply = "delete old.txt and then create file new.txt with content:\nfresh";
        let commands = extract(reply);
        assert_eq!(
            commands,
            vec![
                Command::CreateFile("new.txt".to_string(), "fresh".to_string()),
                Command::Delete("old.txt".to_string()),
            ]
        );
    }

    #[test]
    fn test_directory_and_folder_synonyms() {
        let commands = extract("create directory src and create folder docs");
        assert_eq!(
            commands,
            vec![
                Command::CreateDirectory("src".to_string()),
                Command::CreateDirectory("docs".to_string()),
            ]
        );
    }

    #[test]
    fn test_move_and_copy_pairs() {
        let commands = extract("move a.txt to sub/b.txt then copy sub/b.txt to c.txt");
        assert_eq!(
            commands,
            vec![
                Command::Move("a.txt".to_string(), "sub/b.txt".to_string()),
                Command::Copy("sub/b.txt".to_string(), "c.txt".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_defaults_to_current_directory() {
        assert_eq!(
            extract("list contents of"),
            vec![Command::List(".".to_string())]
        );
        assert_eq!(
            extract("list contents of src"),
            vec![Command::List("src".to_string())]
        );
    }

    #[test]
    fn test_modify_block_stops_at_blank_line() {
        let reply = "modify notes.txt with:\nline one\nline two\n\ntrailing prose";
        let commands = extract(reply);
        assert_eq!(
            commands,
            vec![Command::Modify(
                "notes.txt".to_string(),
                "line one\nline two".to_string()
            )]
        );
    }

    #[test]
    fn test_path_token_stops_at_whitespace() {
        assert_eq!(
            extract("read src/main.rs please"),
            vec![Command::Read("src/main.rs".to_string())]
        );
    }

    #[test]
    fn test_directive_not_matched_inside_words() {
        // "already", "removed" and "spread" must not register as directives
        assert!(extract("We already removed the spread operator.").is_empty());
    }

    #[test]
    fn test_content_block_may_be_empty() {
        let commands = extract("create file empty.txt with content:");
        assert_eq!(
            commands,
            vec![Command::CreateFile("empty.txt".to_string(), String::new())]
        );
    }
}
