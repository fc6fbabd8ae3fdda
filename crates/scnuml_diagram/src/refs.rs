//! Cross-reference field table
//!
//! The recognized reference fields and their edge semantics are a single
//! declarative table consumed generically by the renderer, instead of one
//! hand-written branch per field.

/// Which node-type index a reference resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    /// Resolves strictly against records of type `object`
    Object,
    /// Resolves against non-`object` records, falling back to objects
    Other,
}

/// Direction of the edge induced by a reference field.
///
/// `Incoming` draws the arrow from the referenced node to the record's
/// node (ownership flows down, e.g. `parent`); `Outgoing` draws it from
/// the record's node to the referenced node (usage, e.g. `texture`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// One recognized cross-reference field.
#[derive(Debug, Clone, Copy)]
pub struct RefSpec {
    pub field: &'static str,
    pub kind: RefKind,
    pub direction: Direction,
}

/// Recognized cross-reference fields, in edge-emission order.
pub const REFERENCE_FIELDS: [RefSpec; 12] = [
    RefSpec {
        field: "parent",
        kind: RefKind::Other,
        direction: Direction::Incoming,
    },
    RefSpec {
        field: "texture",
        kind: RefKind::Other,
        direction: Direction::Outgoing,
    },
    RefSpec {
        field: "texture_env",
        kind: RefKind::Other,
        direction: Direction::Outgoing,
    },
    RefSpec {
        field: "shader",
        kind: RefKind::Other,
        direction: Direction::Outgoing,
    },
    RefSpec {
        field: "shader_tex",
        kind: RefKind::Other,
        direction: Direction::Outgoing,
    },
    RefSpec {
        field: "shader_color",
        kind: RefKind::Other,
        direction: Direction::Outgoing,
    },
    RefSpec {
        field: "shader_color_tex",
        kind: RefKind::Other,
        direction: Direction::Outgoing,
    },
    RefSpec {
        field: "shader_skybox",
        kind: RefKind::Other,
        direction: Direction::Outgoing,
    },
    RefSpec {
        field: "shader_env",
        kind: RefKind::Other,
        direction: Direction::Outgoing,
    },
    RefSpec {
        field: "window",
        kind: RefKind::Other,
        direction: Direction::Incoming,
    },
    RefSpec {
        field: "cave",
        kind: RefKind::Other,
        direction: Direction::Outgoing,
    },
    RefSpec {
        field: "object",
        kind: RefKind::Object,
        direction: Direction::Outgoing,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_parent_and_window_are_incoming() {
        let incoming: Vec<&str> = REFERENCE_FIELDS
            .iter()
            .filter(|spec| spec.direction == Direction::Incoming)
            .map(|spec| spec.field)
            .collect();
        assert_eq!(incoming, vec!["parent", "window"]);
    }

    #[test]
    fn test_only_object_field_resolves_against_objects() {
        let object_kinds: Vec<&str> = REFERENCE_FIELDS
            .iter()
            .filter(|spec| spec.kind == RefKind::Object)
            .map(|spec| spec.field)
            .collect();
        assert_eq!(object_kinds, vec!["object"]);
    }
}
