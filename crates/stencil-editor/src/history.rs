//! Undo/Redo over whole-scene snapshots.
//!
//! Every committed change pushes a full `Snapshot` of the scene. The bottom
//! entry is the session baseline and can never be undone away. Undo moves
//! the top entry to the redo stack and restores the entry below it; redo
//! moves it back. Any new commit clears the redo stack.

use stencil_core::{Scene, SceneError, Snapshot};

/// Linear, single-branch history.
#[derive(Debug)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// Maximum undo depth including the baseline. `None` = unbounded.
    limit: Option<usize>,
}

impl History {
    /// Start a history whose baseline is `baseline`.
    pub fn new(baseline: &Scene, limit: Option<usize>) -> Result<Self, SceneError> {
        Ok(Self {
            undo_stack: vec![Snapshot::capture(baseline)?],
            redo_stack: Vec::new(),
            // A limit below 2 would leave nothing but the baseline.
            limit: limit.map(|l| l.max(2)),
        })
    }

    /// Capture `scene` as the newest entry and forget any redo history.
    pub fn commit(&mut self, scene: &Scene) -> Result<(), SceneError> {
        let snapshot = Snapshot::capture(scene)?;
        log::trace!("commit {snapshot:?}, depth {}", self.undo_stack.len() + 1);
        self.undo_stack.push(snapshot);

        if let Some(limit) = self.limit
            && self.undo_stack.len() > limit
        {
            // Trim the oldest entry above the baseline.
            self.undo_stack.remove(1);
        }

        self.redo_stack.clear();
        Ok(())
    }

    /// Step back one entry. Returns the scene to restore, or `None` at the
    /// baseline. The stacks are left untouched if decoding fails.
    pub fn undo(&mut self) -> Result<Option<Scene>, SceneError> {
        let len = self.undo_stack.len();
        if len <= 1 {
            return Ok(None);
        }
        let previous = self.undo_stack[len - 2].restore()?;
        if let Some(top) = self.undo_stack.pop() {
            self.redo_stack.push(top);
        }
        Ok(Some(previous))
    }

    /// Step forward one entry. Returns the scene to restore, or `None` when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> Result<Option<Scene>, SceneError> {
        let Some(next) = self.redo_stack.last() else {
            return Ok(None);
        };
        let scene = next.restore()?;
        if let Some(entry) = self.redo_stack.pop() {
            self.undo_stack.push(entry);
        }
        Ok(Some(scene))
    }

    /// Number of entries on the undo stack, baseline included.
    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// True once anything beyond the baseline has been committed.
    pub fn has_edits(&self) -> bool {
        self.undo_stack.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stencil_core::{Element, ElementType};

    fn with_shapes(n: usize) -> Scene {
        let mut scene = Scene::default();
        for _ in 0..n {
            let id = scene.mint_id(ElementType::Shape);
            scene.push(Element::with_defaults(id, ElementType::Shape));
        }
        scene
    }

    #[test]
    fn undo_redo_walks_the_stack() {
        let mut history = History::new(&with_shapes(0), None).unwrap();
        history.commit(&with_shapes(1)).unwrap();
        history.commit(&with_shapes(2)).unwrap();
        assert_eq!(history.depth(), 3);

        assert_eq!(history.undo().unwrap(), Some(with_shapes(1)));
        assert_eq!(history.undo().unwrap(), Some(with_shapes(0)));
        assert_eq!(history.depth(), 1);
        assert_eq!(history.redo_depth(), 2);

        assert_eq!(history.redo().unwrap(), Some(with_shapes(1)));
        assert_eq!(history.redo().unwrap(), Some(with_shapes(2)));
        assert_eq!(history.depth(), 3);
        assert!(!history.can_redo());
    }

    #[test]
    fn baseline_is_irreducible() {
        let mut history = History::new(&with_shapes(0), None).unwrap();
        assert_eq!(history.undo().unwrap(), None);
        assert_eq!(history.depth(), 1);

        history.commit(&with_shapes(1)).unwrap();
        history.undo().unwrap();
        assert_eq!(history.undo().unwrap(), None);
        assert_eq!(history.depth(), 1);
        assert!(!history.has_edits());
    }

    #[test]
    fn redo_cleared_on_new_commit() {
        let mut history = History::new(&with_shapes(0), None).unwrap();
        history.commit(&with_shapes(1)).unwrap();
        history.undo().unwrap();
        assert!(history.can_redo());

        history.commit(&with_shapes(3)).unwrap();
        assert!(!history.can_redo());
        assert_eq!(history.redo().unwrap(), None);
    }

    #[test]
    fn limit_trims_oldest_but_keeps_baseline() {
        let mut history = History::new(&with_shapes(0), Some(3)).unwrap();
        for n in 1..=5 {
            history.commit(&with_shapes(n)).unwrap();
        }
        assert_eq!(history.depth(), 3);

        assert_eq!(history.undo().unwrap(), Some(with_shapes(4)));
        assert_eq!(history.undo().unwrap(), Some(with_shapes(0)));
        assert_eq!(history.undo().unwrap(), None);
    }

    #[test]
    fn tiny_limit_still_allows_one_undo() {
        let mut history = History::new(&with_shapes(0), Some(0)).unwrap();
        history.commit(&with_shapes(1)).unwrap();
        history.commit(&with_shapes(2)).unwrap();
        assert_eq!(history.depth(), 2);
        assert_eq!(history.undo().unwrap(), Some(with_shapes(0)));
    }
}
