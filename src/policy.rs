//! Per-run listing policy and the emit/descend/quote decision rules

use std::borrow::Cow;

use crate::entry::EntryKind;

/// Which entries are hidden from output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipRule {
    /// List every entry, including `.` and `..`.
    ShowAll,
    /// Skip `.` and `..` but show other dotfiles.
    AlmostAll,
    /// Skip every entry whose name starts with `.`.
    #[default]
    SkipHidden,
}

/// When an entry name is wrapped in quotation marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteRule {
    /// Print names unchanged.
    Never,
    /// Quote only names containing a space.
    #[default]
    WhenNeeded,
    /// Quote every name.
    Always,
}

/// Configuration for one listing run.
///
/// Built once from the command line and passed by shared reference into
/// every walk frame; never mutated after construction.
#[derive(Debug, Clone)]
pub struct Policy {
    pub recurse: bool,
    pub skip_rule: SkipRule,
    pub quote_rule: QuoteRule,
    pub annotate_types: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            recurse: true,
            skip_rule: SkipRule::default(),
            quote_rule: QuoteRule::default(),
            annotate_types: false,
        }
    }
}

fn is_dot_or_dotdot(name: &str) -> bool {
    name == "." || name == ".."
}

impl Policy {
    /// Should this entry appear in the listing?
    pub fn should_emit(&self, name: &str) -> bool {
        match self.skip_rule {
            SkipRule::ShowAll => true,
            SkipRule::AlmostAll => !is_dot_or_dotdot(name),
            SkipRule::SkipHidden => !name.starts_with('.'),
        }
    }

    /// Should the walk recurse into this entry?
    ///
    /// `.` and `..` are always refused, or the walk would never terminate.
    /// Hidden directories are refused only under [`SkipRule::SkipHidden`];
    /// under `AlmostAll`/`ShowAll` they are still descended into even when
    /// emission rules differ. This asymmetry matches the reference
    /// behavior and is deliberate.
    pub fn should_descend(&self, name: &str, kind: EntryKind) -> bool {
        self.recurse
            && kind == EntryKind::Directory
            && !is_dot_or_dotdot(name)
            && !(self.skip_rule == SkipRule::SkipHidden && name.starts_with('.'))
    }

    /// Apply the quoting rule to an entry name.
    pub fn quote<'n>(&self, name: &'n str) -> Cow<'n, str> {
        let quoted = match self.quote_rule {
            QuoteRule::Always => true,
            QuoteRule::WhenNeeded => name.contains(' '),
            QuoteRule::Never => false,
        };
        if quoted {
            Cow::Owned(format!("\"{}\"", name))
        } else {
            Cow::Borrowed(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(skip_rule: SkipRule) -> Policy {
        Policy {
            skip_rule,
            ..Policy::default()
        }
    }

    #[test]
    fn test_show_all_emits_everything() {
        let p = policy(SkipRule::ShowAll);
        for name in [".", "..", ".hidden", "plain.txt"] {
            assert!(p.should_emit(name), "ShowAll should emit {:?}", name);
        }
    }

    #[test]
    fn test_almost_all_skips_only_dot_and_dotdot() {
        let p = policy(SkipRule::AlmostAll);
        assert!(!p.should_emit("."));
        assert!(!p.should_emit(".."));
        assert!(p.should_emit(".hidden"), "other dotfiles are shown");
        assert!(p.should_emit("plain.txt"));
    }

    #[test]
    fn test_skip_hidden_hides_dotfiles() {
        let p = policy(SkipRule::SkipHidden);
        assert!(!p.should_emit("."));
        assert!(!p.should_emit(".."));
        assert!(!p.should_emit(".hidden"));
        assert!(p.should_emit("plain.txt"));
    }

    #[test]
    fn test_never_descends_into_dot_or_dotdot() {
        for skip_rule in [SkipRule::ShowAll, SkipRule::AlmostAll, SkipRule::SkipHidden] {
            let p = policy(skip_rule);
            assert!(!p.should_descend(".", EntryKind::Directory));
            assert!(!p.should_descend("..", EntryKind::Directory));
        }
    }

    #[test]
    fn test_descend_requires_directory_kind() {
        let p = policy(SkipRule::ShowAll);
        assert!(p.should_descend("sub", EntryKind::Directory));
        assert!(!p.should_descend("sub", EntryKind::RegularFile));
        assert!(!p.should_descend("sub", EntryKind::Symlink));
    }

    #[test]
    fn test_descend_disabled_without_recursion() {
        let p = Policy {
            recurse: false,
            ..Policy::default()
        };
        assert!(!p.should_descend("sub", EntryKind::Directory));
    }

    #[test]
    fn test_skip_hidden_blocks_hidden_descent() {
        let p = policy(SkipRule::SkipHidden);
        assert!(!p.should_emit(".git"));
        assert!(!p.should_descend(".git", EntryKind::Directory));
    }

    #[test]
    fn test_hidden_descent_allowed_under_almost_all_and_show_all() {
        // Emission and descent are decided independently; only SkipHidden
        // gates both.
        for skip_rule in [SkipRule::ShowAll, SkipRule::AlmostAll] {
            let p = policy(skip_rule);
            assert!(
                p.should_descend(".git", EntryKind::Directory),
                "{:?} should still descend into hidden dirs",
                skip_rule
            );
        }
    }

    #[test]
    fn test_quote_never_returns_input_unchanged() {
        let p = Policy {
            quote_rule: QuoteRule::Never,
            ..Policy::default()
        };
        assert_eq!(p.quote("has space.txt"), "has space.txt");
        assert_eq!(p.quote("plain"), "plain");
    }

    #[test]
    fn test_quote_when_needed_quotes_only_spaced_names() {
        let p = Policy {
            quote_rule: QuoteRule::WhenNeeded,
            ..Policy::default()
        };
        assert_eq!(p.quote("has space.txt"), "\"has space.txt\"");
        assert_eq!(p.quote("plain.txt"), "plain.txt");
    }

    #[test]
    fn test_quote_always_quotes_everything() {
        let p = Policy {
            quote_rule: QuoteRule::Always,
            ..Policy::default()
        };
        assert_eq!(p.quote("foo"), "\"foo\"");
        assert_eq!(p.quote("has space"), "\"has space\"");
    }

    #[test]
    fn test_quote_is_deterministic() {
        let p = Policy {
            quote_rule: QuoteRule::WhenNeeded,
            ..Policy::default()
        };
        assert_eq!(p.quote("a b"), p.quote("a b"));
    }
}
