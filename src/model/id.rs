/// Derives the id of a sub-element from its container id and a role suffix.
///
/// Identical `(container, suffix)` pairs always produce identical ids, and as
/// long as container ids are unique within a model, derived ids are too.
pub fn element_id(container_id: &str, suffix: &str) -> String {
    format!("{}.{}", container_id, suffix)
}

/// Whether `id` is legal in the engine's id space: non-empty, printable, and
/// free of whitespace.
pub fn is_legal_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| !c.is_whitespace() && !c.is_control())
}
