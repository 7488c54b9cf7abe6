//! Ancestor identity stack used for cycle detection.

use crate::config::LOOP_GUARD_INITIAL_SIZE;
use crate::error::Result;

/// Identity of a filesystem object: (device id, inode id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId {
    pub dev: u64,
    pub ino: u64,
}

impl FileId {
    pub fn new(dev: u64, ino: u64) -> Self {
        Self { dev, ino }
    }
}

/// Stack of the directories currently open on the traversal path, from the
/// root (bottom) to the current directory (top).
#[derive(Debug)]
pub struct LoopGuard {
    stack: Vec<FileId>,
}

impl LoopGuard {
    /// Creates a guard seeded with the traversal root.
    pub fn new(root: FileId) -> Result<Self> {
        let mut stack = Vec::new();
        stack.try_reserve_exact(LOOP_GUARD_INITIAL_SIZE)?;
        stack.push(root);
        Ok(Self { stack })
    }

    /// Pushes a directory about to be descended into.
    pub fn push(&mut self, id: FileId) -> Result<()> {
        if self.stack.len() == self.stack.capacity() {
            self.stack.try_reserve_exact(self.stack.len())?;
        }
        self.stack.push(id);
        Ok(())
    }

    /// Pops the directory just returned from. The root is never popped.
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// `true` if `id` is one of the current ancestors.
    pub fn contains(&self, id: FileId) -> bool {
        self.stack.iter().any(|&a| a == id)
    }

    /// The traversal root's identity.
    pub fn root(&self) -> FileId {
        self.stack[0]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
