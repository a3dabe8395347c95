//! Frames grouped by their distance to the root.

use hashbrown::HashMap;
use smallvec::SmallVec;

/// Frame names at one depth, in registration order.
pub type DepthLevel = SmallVec<[String; 8]>;

/// Lookup of frame names by depth, and of depths by frame name.
///
/// The root sits at depth 0 and every other frame one level below its parent, so walking
/// the levels in order always visits a parent before its children. The index only grows:
/// frames are never removed nor moved to another parent.
#[derive(Debug, Clone, Default)]
pub struct DepthIndex {
    forward: Vec<DepthLevel>,
    reverse: HashMap<String, usize>,
}

impl DepthIndex {
    /// Records `name` at `depth`.
    ///
    /// Returns the depth the name was already recorded at, leaving the index untouched in
    /// that case.
    pub fn insert(&mut self, name: &str, depth: usize) -> Option<usize> {
        if let Some(&old) = self.reverse.get(name) {
            return Some(old);
        }

        if self.forward.len() <= depth {
            self.forward.resize_with(depth + 1, SmallVec::new);
        }
        self.forward[depth].push(name.to_owned());
        self.reverse.insert(name.to_owned(), depth);
        None
    }

    /// Depth of `name`, if it is recorded.
    #[inline]
    pub fn depth(&self, name: &str) -> Option<usize> {
        self.reverse.get(name).copied()
    }

    /// Names recorded at `depth`, in insertion order.
    pub fn frames_at(&self, depth: usize) -> impl Iterator<Item = &str> + '_ {
        self.forward
            .get(depth)
            .into_iter()
            .flat_map(|level| level.iter().map(String::as_str))
    }

    /// All levels, from the root down.
    #[inline]
    pub fn levels(&self) -> &[DepthLevel] {
        &self.forward
    }

    /// Deepest recorded depth, `None` when the index is empty.
    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.forward.len().checked_sub(1)
    }

    /// Number of recorded names.
    #[inline]
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    /// Returns `true` if no name is recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }
}
