//! Parent-hierarchy tree view
//!
//! Records without a `parent` field are roots; every other record hangs
//! beneath the node its `parent` id resolves to.

use crate::output_utils::TreeFormatter;
use scnuml_diagram::{NodeTypeIndex, RefKind, node_name};
use scnuml_errors::error::{DiagramErrorKind, Error, Result};
use scnuml_parser::Record;
use scnuml_parser::record::KEY_PARENT;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use text_trees::StringTreeNode;

pub fn cmd_tree(file_path: &Path, ascii: bool) -> Result<()> {
    let records = scnuml_parser::from_path(file_path)?;
    let forest = build_forest(&records)?;

    let formatter = TreeFormatter::new(ascii);
    for tree in &forest {
        println!("{}", formatter.format_tree(tree)?.trim_end());
    }
    Ok(())
}

/// Group records under their parents and return one tree per root
fn build_forest(records: &[Record]) -> Result<Vec<StringTreeNode>> {
    let index = NodeTypeIndex::build(records)?;

    let mut names = Vec::with_capacity(records.len());
    for record in records {
        names.push(node_name(record)?);
    }

    let mut children: HashMap<String, Vec<usize>> = HashMap::new();
    let mut roots = Vec::new();
    for (i, record) in records.iter().enumerate() {
        match record.get(KEY_PARENT) {
            Some(parent_id) => {
                let parent_type = index.resolve(RefKind::Other, parent_id).ok_or_else(|| {
                    Error::diagram(
                        format!("'parent' on {} points at unknown id '{parent_id}'", names[i]),
                        DiagramErrorKind::DanglingReference,
                    )
                    .with_field(KEY_PARENT)
                    .with_reference(parent_id)
                })?;
                children
                    .entry(format!("{parent_type}_{parent_id}"))
                    .or_default()
                    .push(i);
            }
            None => roots.push(i),
        }
    }

    let mut visited = HashSet::new();
    Ok(roots
        .into_iter()
        .map(|root| build_node(root, &names, &children, &mut visited))
        .collect())
}

fn build_node(
    index: usize,
    names: &[String],
    children: &HashMap<String, Vec<usize>>,
    visited: &mut HashSet<usize>,
) -> StringTreeNode {
    visited.insert(index);

    let mut child_nodes = Vec::new();
    if let Some(kids) = children.get(&names[index]) {
        for &kid in kids {
            // guards against parent cycles
            if visited.contains(&kid) {
                continue;
            }
            child_nodes.push(build_node(kid, names, children, visited));
        }
    }

    if child_nodes.is_empty() {
        StringTreeNode::new(names[index].clone())
    } else {
        StringTreeNode::with_child_nodes(names[index].clone(), child_nodes.into_iter())
    }
}
