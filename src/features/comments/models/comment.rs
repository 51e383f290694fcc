use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;

use crate::shared::constants::MAX_COMMENT_DEPTH;

/// A single comment stored in the arena; children are referenced by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    pub id: u64,
    pub text: String,
    pub parent_id: Option<u64>,
    /// 0 for a thread root, parent depth + 1 for a reply
    pub depth: usize,
    /// Reply ids in submission order
    pub children: Vec<u64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    #[error("Comment {0} not found")]
    UnknownParent(u64),

    #[error("Replies cannot be nested more than {0} levels deep")]
    TooDeep(usize),
}

/// Arena of comment nodes forming a forest of reply trees.
///
/// Nodes are only ever appended: no edits, no deletes. Reply chains are
/// capped at `max_depth` levels below their root.
#[derive(Debug)]
pub struct CommentForest {
    nodes: HashMap<u64, CommentNode>,
    roots: Vec<u64>,
    next_id: u64,
    max_depth: usize,
}

impl Default for CommentForest {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentForest {
    pub fn new() -> Self {
        Self::with_max_depth(MAX_COMMENT_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
            next_id: 1,
            max_depth,
        }
    }

    /// Insert a comment as a new root, or as the last reply of `parent_id`.
    ///
    /// A rejected insert leaves the forest untouched and burns no id.
    pub fn insert(
        &mut self,
        text: String,
        parent_id: Option<u64>,
        created_at: DateTime<Utc>,
    ) -> Result<&CommentNode, InsertError> {
        let id = self.next_id;

        let depth = match parent_id {
            Some(pid) => {
                let parent = self
                    .nodes
                    .get_mut(&pid)
                    .ok_or(InsertError::UnknownParent(pid))?;
                if parent.depth >= self.max_depth {
                    return Err(InsertError::TooDeep(self.max_depth));
                }
                parent.children.push(id);
                parent.depth + 1
            }
            None => {
                self.roots.push(id);
                0
            }
        };

        self.next_id += 1;
        let node = self.nodes.entry(id).or_insert(CommentNode {
            id,
            text,
            parent_id,
            depth,
            children: Vec::new(),
            created_at,
        });

        Ok(&*node)
    }

    pub fn get(&self, id: u64) -> Option<&CommentNode> {
        self.nodes.get(&id)
    }

    pub fn roots(&self) -> impl Iterator<Item = &CommentNode> {
        self.roots.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn children<'a>(
        &'a self,
        node: &'a CommentNode,
    ) -> impl Iterator<Item = &'a CommentNode> + 'a {
        node.children.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(forest: &mut CommentForest, text: &str, parent: Option<u64>) -> Option<u64> {
        forest
            .insert(text.to_string(), parent, Utc::now())
            .map(|n| n.id)
            .ok()
    }

    #[test]
    fn test_root_insert_adds_exactly_one_root() {
        let mut forest = CommentForest::new();
        let first = add(&mut forest, "first", None).unwrap();
        let second = add(&mut forest, "second", None).unwrap();

        let roots: Vec<u64> = forest.roots().map(|n| n.id).collect();
        assert_eq!(roots, vec![first, second]);
        assert_eq!(forest.len(), 2);
    }

    #[test]
    fn test_reply_appends_one_child_and_leaves_siblings_alone() {
        let mut forest = CommentForest::new();
        let a = add(&mut forest, "a", None).unwrap();
        let b = add(&mut forest, "b", None).unwrap();
        let a1 = add(&mut forest, "a1", Some(a)).unwrap();
        let b1 = add(&mut forest, "b1", Some(b)).unwrap();
        let b_before = forest.get(b).cloned().unwrap();

        let a2 = add(&mut forest, "a2", Some(a)).unwrap();

        assert_eq!(forest.get(a).unwrap().children, vec![a1, a2]);
        assert_eq!(forest.get(b).unwrap(), &b_before);
        assert_eq!(forest.get(b1).unwrap().children, Vec::<u64>::new());
        assert_eq!(forest.roots().count(), 2);
    }

    #[test]
    fn test_reply_deep_in_tree_is_found() {
        let mut forest = CommentForest::new();
        let mut parent = add(&mut forest, "level 0", None).unwrap();
        for depth in 1..20 {
            parent = add(&mut forest, &format!("level {}", depth), Some(parent)).unwrap();
        }

        let leaf = add(&mut forest, "leaf", Some(parent)).unwrap();
        assert_eq!(forest.get(leaf).unwrap().parent_id, Some(parent));
        assert_eq!(forest.get(parent).unwrap().children, vec![leaf]);
        assert_eq!(forest.roots().count(), 1);
    }

    #[test]
    fn test_reply_to_unknown_parent_changes_nothing() {
        let mut forest = CommentForest::new();
        add(&mut forest, "root", None).unwrap();

        assert!(add(&mut forest, "orphan", Some(999)).is_none());
        assert_eq!(forest.len(), 1);

        // the rejected insert must not burn an id
        assert_eq!(add(&mut forest, "next", None), Some(2));
    }

    #[test]
    fn test_children_follow_submission_order() {
        let mut forest = CommentForest::new();
        let root = add(&mut forest, "root", None).unwrap();
        add(&mut forest, "first", Some(root)).unwrap();
        add(&mut forest, "second", Some(root)).unwrap();

        let root_node = forest.get(root).unwrap();
        let texts: Vec<&str> = forest
            .children(root_node)
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_reply_chain_is_capped() {
        let mut forest = CommentForest::with_max_depth(3);
        let mut parent = add(&mut forest, "root", None).unwrap();
        for _ in 0..3 {
            parent = add(&mut forest, "reply", Some(parent)).unwrap();
        }
        assert_eq!(forest.get(parent).unwrap().depth, 3);

        let err = forest
            .insert("too deep".to_string(), Some(parent), Utc::now())
            .unwrap_err();
        assert_eq!(err, InsertError::TooDeep(3));
        assert_eq!(forest.len(), 4);
        assert!(forest.get(parent).unwrap().children.is_empty());

        // a sibling at an allowed depth still fits, reusing the unburnt id
        let root = forest.roots().next().map(|n| n.id).unwrap();
        assert_eq!(add(&mut forest, "shallow", Some(root)), Some(5));
    }
}
