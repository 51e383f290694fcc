use chrono::Utc;
use std::sync::RwLock;
use tracing::info;

use crate::core::error::{AppError, Result};
use crate::features::comments::dtos::CommentDto;
use crate::features::comments::models::{CommentForest, CommentNode, InsertError};

/// Service owning the in-memory discussion forest
pub struct CommentService {
    forest: RwLock<CommentForest>,
}

impl Default for CommentService {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentService {
    pub fn new() -> Self {
        Self {
            forest: RwLock::new(CommentForest::new()),
        }
    }

    /// Whole discussion as nested DTOs, threads in submission order
    pub fn list(&self) -> Result<(Vec<CommentDto>, usize)> {
        let forest = self
            .forest
            .read()
            .map_err(|_| AppError::Internal("Comment store lock poisoned".to_string()))?;

        let threads = forest.roots().map(|root| to_dto(&forest, root)).collect();
        Ok((threads, forest.len()))
    }

    /// Add a new thread, or a reply when `parent_id` is given
    pub fn add(&self, text: &str, parent_id: Option<u64>) -> Result<CommentDto> {
        let mut forest = self
            .forest
            .write()
            .map_err(|_| AppError::Internal("Comment store lock poisoned".to_string()))?;

        let node = forest
            .insert(text.trim().to_string(), parent_id, Utc::now())
            .map_err(|e| match e {
                InsertError::UnknownParent(_) => AppError::NotFound(e.to_string()),
                InsertError::TooDeep(_) => AppError::Validation(e.to_string()),
            })?;

        info!("Comment added: id={}, parent={:?}", node.id, node.parent_id);

        Ok(CommentDto {
            id: node.id,
            text: node.text.clone(),
            created_at: node.created_at,
            replies: Vec::new(),
        })
    }
}

fn to_dto(forest: &CommentForest, node: &CommentNode) -> CommentDto {
    CommentDto {
        id: node.id,
        text: node.text.clone(),
        created_at: node.created_at,
        replies: forest
            .children(node)
            .map(|child| to_dto(forest, child))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::MAX_COMMENT_DEPTH;

    #[test]
    fn test_list_nests_replies_under_parent() {
        let service = CommentService::new();
        let root = service.add("Great post", None).unwrap();
        let reply = service.add("  Agreed  ", Some(root.id)).unwrap();
        service.add("Me too", Some(reply.id)).unwrap();
        service.add("Another thread", None).unwrap();

        let (threads, total) = service.list().unwrap();
        assert_eq!(total, 4);
        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].replies.len(), 1);
        assert_eq!(threads[0].replies[0].text, "Agreed");
        assert_eq!(threads[0].replies[0].replies[0].text, "Me too");
        assert!(threads[1].replies.is_empty());
    }

    #[test]
    fn test_reply_to_missing_parent_is_not_found() {
        let service = CommentService::new();
        let err = service.add("hello", Some(42)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_long_reply_chain_stops_at_depth_limit() {
        let service = CommentService::new();
        let mut parent = service.add("root", None).unwrap().id;
        for _ in 0..MAX_COMMENT_DEPTH {
            parent = service.add("reply", Some(parent)).unwrap().id;
        }

        let err = service.add("one too many", Some(parent)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let (threads, total) = service.list().unwrap();
        assert_eq!(total, MAX_COMMENT_DEPTH + 1);

        let mut levels = 0;
        let mut node = &threads[0];
        while let Some(reply) = node.replies.first() {
            levels += 1;
            node = reply;
        }
        assert_eq!(levels, MAX_COMMENT_DEPTH);
    }
}
