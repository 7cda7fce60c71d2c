//! Comment Thread Utilities
//!
//! Helper functions for rendering the server-shaped comment tree.

use crate::models::Comment;

/// Flatten a comment tree into (Comment, depth) rows using recursive DFS.
/// The server orders siblings; this walk preserves that order.
pub fn flatten_thread(comments: &[Comment]) -> Vec<(Comment, usize)> {
    fn collect(nodes: &[Comment], depth: usize, result: &mut Vec<(Comment, usize)>) {
        for node in nodes {
            result.push((node.clone(), depth));
            collect(&node.replies, depth + 1, result);
        }
    }

    let mut result = Vec::new();
    collect(comments, 0, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comment, User};

    fn make_comment(id: i64, solved: bool, replies: Vec<Comment>) -> Comment {
        Comment {
            id,
            task_id: 3,
            parent_id: None,
            author: User {
                id: 1,
                username: "alice".to_string(),
            },
            content: format!("Comment {}", id),
            solved,
            created_at: "2024-01-01T00:00:00".to_string(),
            replies,
        }
    }

    #[test]
    fn test_flatten_empty_thread() {
        assert!(flatten_thread(&[]).is_empty());
    }

    #[test]
    fn test_flatten_deep_nesting() {
        let thread = vec![
            make_comment(
                1,
                false,
                vec![make_comment(
                    3,
                    false,
                    vec![make_comment(5, false, vec![])],
                )],
            ),
            make_comment(2, false, vec![]),
        ];

        let rows = flatten_thread(&thread);

        // Should be: 1 (depth 0), 3 (depth 1), 5 (depth 2), 2 (depth 0)
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].0.id, 1);
        assert_eq!(rows[0].1, 0);
        assert_eq!(rows[1].0.id, 3);
        assert_eq!(rows[1].1, 1);
        assert_eq!(rows[2].0.id, 5);
        assert_eq!(rows[2].1, 2);
        assert_eq!(rows[3].0.id, 2);
        assert_eq!(rows[3].1, 0);
    }

    #[test]
    fn test_flatten_keeps_solved_state_mid_tree() {
        let thread = vec![make_comment(
            1,
            false,
            vec![make_comment(2, true, vec![make_comment(4, false, vec![])])],
        )];

        let rows = flatten_thread(&thread);

        assert_eq!(rows.len(), 3);
        assert!(!rows[0].0.solved);
        assert!(rows[1].0.solved);
        assert!(!rows[2].0.solved);
    }

    #[test]
    fn test_flatten_preserves_sibling_order() {
        let thread = vec![
            make_comment(10, false, vec![]),
            make_comment(7, false, vec![]),
            make_comment(9, false, vec![]),
        ];

        let ids: Vec<i64> = flatten_thread(&thread).into_iter().map(|(c, _)| c.id).collect();
        assert_eq!(ids, vec![10, 7, 9]);
    }
}
