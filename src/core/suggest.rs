//! Next-token suggestions
//!
//! Walks the command tree along the tokens the user has already committed
//! and reports what may be typed next. Unknown tokens simply lead to no
//! suggestions.

use crate::core::tree::{CommandNode, CommandTree};
use std::collections::BTreeSet;
use tracing::debug;

/// Valid next tokens after `committed`, starting at `node`
pub fn suggest(committed: &[&str], node: &CommandNode) -> BTreeSet<String> {
    let Some((next, rest)) = committed.split_first() else {
        return match node {
            CommandNode::Static(children) => children.keys().cloned().collect(),
            CommandNode::Dynamic(source) => source.values().into_iter().collect(),
            CommandNode::Terminal => BTreeSet::new(),
        };
    };

    match node {
        CommandNode::Static(_) => node
            .child(next)
            .map(|child| suggest(rest, child))
            .unwrap_or_default(),
        CommandNode::Dynamic(source) => {
            if source.values().iter().any(|value| value == next) {
                // No grammar continues past a runtime value
                suggest(rest, &CommandNode::Terminal)
            } else {
                BTreeSet::new()
            }
        }
        CommandNode::Terminal => BTreeSet::new(),
    }
}

/// A completion candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    /// Set for fixed words, live values have none
    pub description: Option<String>,
}

/// Completion candidates for a cursor position in a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Byte offset where the replacement starts
    pub start: usize,
    /// Candidates that extend the in-progress token, sorted
    pub candidates: Vec<Candidate>,
}

impl Completion {
    /// Candidate words without descriptions
    pub fn texts(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.text.as_str()).collect()
    }
}

/// Keep only the suggestions that start with `prefix`
pub fn filter_by_prefix(suggestions: BTreeSet<String>, prefix: &str) -> Vec<String> {
    suggestions
        .into_iter()
        .filter(|candidate| candidate.starts_with(prefix))
        .collect()
}

/// Complete `line` at byte offset `pos`
///
/// Only the text before the cursor is considered. When it ends in
/// whitespace every token is committed and the prefix is empty, otherwise
/// the last token is the prefix being typed.
pub fn complete(tree: &CommandTree, line: &str, pos: usize) -> Completion {
    let before_cursor = line.get(..pos).unwrap_or(line);
    let mut tokens: Vec<&str> = before_cursor.split_whitespace().collect();

    let prefix = if before_cursor.is_empty() || before_cursor.ends_with(char::is_whitespace) {
        ""
    } else {
        tokens.pop().unwrap_or("")
    };

    let node = tree.resolve(&tokens);
    let candidates: Vec<Candidate> = filter_by_prefix(suggest(&tokens, tree.root()), prefix)
        .into_iter()
        .map(|text| Candidate {
            description: node
                .and_then(|node| node.description(&text))
                .map(ToString::to_string),
            text,
        })
        .collect();
    debug!(?tokens, prefix, count = candidates.len(), "completion");

    Completion {
        start: before_cursor.len() - prefix.len(),
        candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::ValueSource;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    fn names(values: &[&str]) -> Arc<dyn ValueSource> {
        let values: Vec<String> = values.iter().map(ToString::to_string).collect();
        Arc::new(move || values.clone())
    }

    fn tree() -> CommandTree {
        CommandTree::standard(names(&["eth0", "lo", "wlan0"]))
    }

    fn set_of(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_path_gives_top_level_only() {
        let tree = tree();
        assert_eq!(suggest(&[], tree.root()), set_of(&["show", "set", "exit", "quit"]));
    }

    #[test]
    fn test_static_prefixes_offer_next_words() {
        let tree = tree();
        assert_eq!(suggest(&["show"], tree.root()), set_of(&["link", "address"]));
        assert_eq!(suggest(&["set"], tree.root()), set_of(&["interface"]));
    }

    #[test]
    fn test_dynamic_node_returns_live_values() {
        let tree = tree();
        assert_eq!(
            suggest(&["set", "interface"], tree.root()),
            set_of(&["eth0", "lo", "wlan0"])
        );
    }

    #[test]
    fn test_dynamic_duplicates_collapse() {
        let tree = CommandTree::standard(names(&["eth0", "eth0", "lo"]));
        assert_eq!(suggest(&["set", "interface"], tree.root()), set_of(&["eth0", "lo"]));
    }

    #[test]
    fn test_dynamic_source_queried_every_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let tree = CommandTree::standard(Arc::new(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            vec![format!("veth{n}")]
        }));

        assert_eq!(suggest(&["set", "interface"], tree.root()), set_of(&["veth0"]));
        assert_eq!(suggest(&["set", "interface"], tree.root()), set_of(&["veth1"]));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_nothing_after_dynamic_value() {
        let tree = tree();
        assert!(suggest(&["set", "interface", "eth0"], tree.root()).is_empty());
        assert!(suggest(&["set", "interface", "eth0", "mtu"], tree.root()).is_empty());
    }

    #[test]
    fn test_unknown_dynamic_value_is_empty() {
        let tree = tree();
        assert!(suggest(&["set", "interface", "eth9"], tree.root()).is_empty());
    }

    #[test]
    fn test_unknown_tokens_give_nothing() {
        let tree = tree();
        assert!(suggest(&["frobnicate"], tree.root()).is_empty());
        assert!(suggest(&["show", "routes"], tree.root()).is_empty());
        assert!(suggest(&["SHOW"], tree.root()).is_empty());
        assert!(suggest(&["exit", "now"], tree.root()).is_empty());
    }

    #[test]
    fn test_terminal_yields_nothing() {
        let tree = tree();
        assert!(suggest(&["show", "link"], tree.root()).is_empty());
        assert!(suggest(&["quit"], tree.root()).is_empty());
    }

    #[test]
    fn test_filter_by_prefix() {
        let filtered = filter_by_prefix(set_of(&["link", "address"]), "li");
        assert_eq!(filtered, vec!["link"]);
    }

    #[test]
    fn test_complete_partial_word() {
        let completion = complete(&tree(), "show li", 7);
        assert_eq!(completion.texts(), vec!["link"]);
        assert_eq!(completion.start, 5);
        assert_eq!(7 - completion.start, 2);
    }

    #[test]
    fn test_complete_empty_line() {
        let completion = complete(&tree(), "", 0);
        assert_eq!(completion.texts(), vec!["exit", "quit", "set", "show"]);
        assert_eq!(completion.start, 0);
    }

    #[test]
    fn test_complete_after_trailing_space() {
        let completion = complete(&tree(), "show ", 5);
        assert_eq!(completion.texts(), vec!["address", "link"]);
        assert_eq!(completion.start, 5);
    }

    #[test]
    fn test_complete_first_word_prefix() {
        let completion = complete(&tree(), "s", 1);
        assert_eq!(completion.texts(), vec!["set", "show"]);
        assert_eq!(completion.start, 0);
    }

    #[test]
    fn test_complete_interface_prefix() {
        let completion = complete(&tree(), "set interface e", 15);
        assert_eq!(completion.texts(), vec!["eth0"]);
        assert_eq!(completion.start, 14);
    }

    #[test]
    fn test_complete_ignores_text_after_cursor() {
        let completion = complete(&tree(), "show address", 6);
        assert_eq!(completion.texts(), vec!["address"]);
        assert_eq!(completion.start, 5);
    }

    #[test]
    fn test_complete_carries_descriptions() {
        let completion = complete(&tree(), "show ", 5);
        let described: Vec<(&str, Option<&str>)> = completion
            .candidates
            .iter()
            .map(|c| (c.text.as_str(), c.description.as_deref()))
            .collect();
        assert_eq!(
            described,
            vec![
                ("address", Some("Show IP addresses")),
                ("link", Some("Show interfaces")),
            ]
        );
    }

    #[test]
    fn test_live_values_have_no_description() {
        let completion = complete(&tree(), "set interface l", 15);
        assert_eq!(
            completion.candidates,
            vec![Candidate { text: "lo".to_string(), description: None }]
        );
    }

    #[test]
    fn test_complete_unknown_branch() {
        let completion = complete(&tree(), "frob ", 5);
        assert!(completion.candidates.is_empty());
    }
}
