//! Node assembly helpers used by the marker processor.

use undermark_core::Node;

/// Move any buffered text into a new `Text` node, leaving the buffer empty.
pub fn commit_text(buffer: &mut String, nodes: &mut Vec<Node>) {
    if buffer.is_empty() {
        return;
    }
    nodes.push(Node::Text(std::mem::take(buffer)));
}

/// Join runs of adjacent `Text` nodes and drop empty ones.
pub fn merge_text_nodes(nodes: Vec<Node>) -> Vec<Node> {
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());

    for node in nodes {
        if let Node::Text(text) = &node {
            if text.is_empty() {
                continue;
            }
            if let Some(Node::Text(prev)) = merged.last_mut() {
                prev.push_str(text);
                continue;
            }
        }
        merged.push(node);
    }

    merged
}

/// Insert literal markers into `buffer`, highest offset first so that
/// earlier offsets stay valid.
pub fn insert_from_end(buffer: &mut String, inserts: &mut [(usize, &str)]) {
    inserts.sort_by(|a, b| b.0.cmp(&a.0));
    for &(offset, text) in inserts.iter() {
        debug_assert!(buffer.is_char_boundary(offset), "marker offset {} out of range", offset);
        buffer.insert_str(offset, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_text() {
        let mut buffer = String::from("abc");
        let mut nodes = Vec::new();
        commit_text(&mut buffer, &mut nodes);
        assert!(buffer.is_empty());
        assert_eq!(nodes, vec![Node::Text("abc".into())]);
    }

    #[test]
    fn test_commit_empty_buffer_is_noop() {
        let mut buffer = String::new();
        let mut nodes = Vec::new();
        commit_text(&mut buffer, &mut nodes);
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_merge_adjacent_text() {
        let nodes = vec![
            Node::Text("a".into()),
            Node::Text("b".into()),
            Node::Strong("c".into()),
            Node::Text("d".into()),
            Node::Text(String::new()),
            Node::Text("e".into()),
        ];
        assert_eq!(
            merge_text_nodes(nodes),
            vec![
                Node::Text("ab".into()),
                Node::Strong("c".into()),
                Node::Text("de".into()),
            ]
        );
    }

    #[test]
    fn test_merge_keeps_adjacent_strong() {
        let nodes = vec![Node::Strong("a".into()), Node::Strong("b".into())];
        assert_eq!(merge_text_nodes(nodes.clone()), nodes);
    }

    #[test]
    fn test_insert_from_end() {
        let mut buffer = String::from("abcd");
        insert_from_end(&mut buffer, &mut [(1, "__"), (3, "_")]);
        assert_eq!(buffer, "a__bc_d");
    }

    #[test]
    fn test_insert_multibyte_offsets() {
        let mut buffer = String::from("жук");
        let offset = "ж".len();
        let end = buffer.len();
        insert_from_end(&mut buffer, &mut [(offset, "_"), (end, "_")]);
        assert_eq!(buffer, "ж_ук_");
    }
}
