//! Recursive traversal engine
//!
//! Walks a directory tree depth-first, opening every child directory
//! relative to its already-open parent (`openat`) rather than by
//! rebuilding path strings, so a rename of an ancestor mid-walk cannot
//! redirect the traversal. Output streams through an [`EntrySink`] as
//! entries are found; nothing is buffered or sorted.

use std::ffi::OsStr;
use std::io;
use std::os::fd::{AsFd, BorrowedFd};
use std::os::unix::ffi::OsStrExt;

use rustix::fs::{CWD, Dir, Mode, OFlags, openat};
use thiserror::Error;

use crate::entry::EntryKind;
use crate::output::EntrySink;
use crate::policy::Policy;

/// A traversal-level failure, local to one directory frame.
///
/// Reported on stderr where it occurs and folded into the frame's
/// [`Outcome`]; it never aborts sibling traversal.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot open directory '{name}': {source}")]
    Open { name: String, source: io::Error },
    #[error("cannot read directory '{name}': {source}")]
    Iteration { name: String, source: io::Error },
}

/// Overall result of walking a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// OR-of-failures: any failed frame makes the combined run a failure.
    pub fn combine(self, other: Outcome) -> Outcome {
        if self == Outcome::Failure || other == Outcome::Failure {
            Outcome::Failure
        } else {
            Outcome::Success
        }
    }

    pub fn is_failure(self) -> bool {
        self == Outcome::Failure
    }
}

/// Per-frame traversal state: the open parent directory (none at the
/// root, which resolves against the ambient working directory) and the
/// current depth below the root.
pub struct WalkState<'fd> {
    parent: Option<BorrowedFd<'fd>>,
    depth: usize,
}

impl WalkState<'static> {
    pub fn root() -> Self {
        Self {
            parent: None,
            depth: 0,
        }
    }
}

/// The traversal engine. Holds only the read-only policy; every call
/// frame owns its own directory fd and releases it on all exit paths
/// when the frame returns.
pub struct Walker<'p> {
    policy: &'p Policy,
}

fn report(err: &WalkError) {
    eprintln!("frond: {}", err);
}

impl<'p> Walker<'p> {
    pub fn new(policy: &'p Policy) -> Self {
        Self { policy }
    }

    /// Walk the directory `name`, resolved relative to the parent handle
    /// in `state` (or the working directory for the root frame).
    ///
    /// Traversal failures are diagnosed and folded into the returned
    /// [`Outcome`]; the `Err` arm is reserved for sink write errors,
    /// which abort the run.
    pub fn walk<S: EntrySink>(
        &self,
        name: &OsStr,
        state: WalkState<'_>,
        sink: &mut S,
    ) -> io::Result<Outcome> {
        let parent = state.parent.unwrap_or(CWD);
        let flags = OFlags::RDONLY | OFlags::DIRECTORY | OFlags::CLOEXEC;
        let dirfd = match openat(parent, name, flags, Mode::empty()) {
            Ok(fd) => fd,
            Err(errno) => {
                report(&WalkError::Open {
                    name: name.to_string_lossy().into_owned(),
                    source: errno.into(),
                });
                return Ok(Outcome::Failure);
            }
        };

        let dir = match Dir::read_from(&dirfd) {
            Ok(dir) => dir,
            Err(errno) => {
                report(&WalkError::Open {
                    name: name.to_string_lossy().into_owned(),
                    source: errno.into(),
                });
                return Ok(Outcome::Failure);
            }
        };

        let mut outcome = Outcome::Success;
        for entry in dir {
            let entry = match entry {
                Ok(entry) => entry,
                Err(errno) => {
                    // Already-printed entries stand; this directory just
                    // stops contributing.
                    report(&WalkError::Iteration {
                        name: name.to_string_lossy().into_owned(),
                        source: errno.into(),
                    });
                    outcome = Outcome::Failure;
                    break;
                }
            };

            let kind = EntryKind::from(entry.file_type());
            let raw_name = OsStr::from_bytes(entry.file_name().to_bytes());
            let display_name = raw_name.to_string_lossy();

            if self.policy.should_emit(&display_name) {
                let label = self.policy.annotate_types.then(|| kind.label());
                sink.entry(state.depth, self.policy.quote(&display_name).as_ref(), label)?;
            }

            if self.policy.should_descend(&display_name, kind) {
                let child = WalkState {
                    parent: Some(dirfd.as_fd()),
                    depth: state.depth + 1,
                };
                outcome = outcome.combine(self.walk(raw_name, child, sink)?);
            }
        }

        Ok(outcome)
    }
}
