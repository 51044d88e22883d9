//! Icon mapping for the tree visualization format

/// Get the Unicode icon for a given body node type
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Heading" => "§",
        "Paragraph" => "¶",
        "ListItem" => "•",
        "LineBreak" => "⎯",
        "Placeholder" => "…",
        _ => "○",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_mappings() {
        assert_eq!(get_icon("Document"), "⧉");
        assert_eq!(get_icon("Heading"), "§");
        assert_eq!(get_icon("Paragraph"), "¶");
        assert_eq!(get_icon("ListItem"), "•");
        assert_eq!(get_icon("LineBreak"), "⎯");
        assert_eq!(get_icon("Placeholder"), "…");
    }

    #[test]
    fn test_unknown_node_type() {
        assert_eq!(get_icon("UnknownType"), "○");
    }
}
