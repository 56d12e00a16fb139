//! Graph document validation
//!
//! Report every problem in a document at once, instead of stopping at the
//! first one the way `parse` does.

use rustc_hash::FxHashSet;

use super::document::{scan, Declaration};

/// Validation result with detailed issues
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether `parse` would accept the document
    pub is_valid: bool,
    /// List of errors (each one makes `parse` fail)
    pub errors: Vec<String>,
    /// List of warnings (legal but worth a look)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error
    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
        self.is_valid = false;
    }

    /// Add a warning
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

/// Validate a graph document
///
/// Checks, in order:
/// - document structure (XML syntax, root element)
/// - every child element against the grammar
/// - duplicate vertex ids
/// - edges naming undeclared vertices, and duplicate edges
///
/// Self-loops and isolated vertices are reported as warnings.
pub fn validate_document(text: &str) -> ValidationResult {
    let mut result = ValidationResult::valid();

    let decls = match scan(text) {
        Ok(decls) => decls,
        Err(e) => {
            result.add_error(e.to_string());
            return result;
        }
    };

    let mut vertices: Vec<String> = Vec::new();
    let mut known: FxHashSet<String> = FxHashSet::default();
    let mut edges: Vec<(String, String)> = Vec::new();

    for decl in decls {
        match decl {
            Ok(Declaration::Vertex { id, .. }) => {
                if known.insert(id.clone()) {
                    vertices.push(id);
                } else {
                    result.add_error(format!("Vertex '{}' declared more than once", id));
                }
            }
            Ok(Declaration::Edge { id1, id2 }) => edges.push((id1, id2)),
            Err(e) => result.add_error(e.to_string()),
        }
    }

    let mut seen_pairs: FxHashSet<(String, String)> = FxHashSet::default();
    let mut touched: FxHashSet<String> = FxHashSet::default();

    for (id1, id2) in edges {
        let mut complete = true;
        for id in [&id1, &id2] {
            if !known.contains(id.as_str()) {
                result.add_error(format!(
                    "Edge ({}, {}) names undeclared vertex '{}'",
                    id1, id2, id
                ));
                complete = false;
            }
        }
        if !complete {
            continue;
        }

        let key = if id1 <= id2 {
            (id1.clone(), id2.clone())
        } else {
            (id2.clone(), id1.clone())
        };
        if !seen_pairs.insert(key) {
            result.add_error(format!("Edge ({}, {}) declared more than once", id1, id2));
            continue;
        }

        if id1 == id2 {
            result.add_warning(format!("Vertex '{}' has a self-loop", id1));
        }
        touched.insert(id1);
        touched.insert(id2);
    }

    for id in vertices.iter().filter(|id| !touched.contains(id.as_str())) {
        result.add_warning(format!("Vertex '{}' has no edges", id));
    }

    log::debug!(
        "Validated graph document: {} errors, {} warnings",
        result.errors.len(),
        result.warnings.len()
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse;

    #[test]
    fn test_valid_document() {
        let doc = r#"<graph><v id="1"/><v id="2"/><e id1="1" id2="2"/></graph>"#;
        let result = validate_document(doc);

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_collects_every_error() {
        let doc = r#"<graph>
            <v id="1"/>
            <v id="1"/>
            <v id="2" color="purple"/>
            <thing/>
            <e id1="1" id2="9"/>
            <e id1="1" id2="1"/>
            <e id1="1" id2="1"/>
        </graph>"#;
        let result = validate_document(doc);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 5);
        assert!(parse(doc).is_err());
    }

    #[test]
    fn test_warnings_do_not_invalidate() {
        let doc = r#"<graph><v id="a"/><v id="b"/><e id1="a" id2="a"/></graph>"#;
        let result = validate_document(doc);

        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);
        assert!(parse(doc).is_ok());
    }

    #[test]
    fn test_structural_error_stops_early() {
        let result = validate_document("<tree/>");

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_mirror_edge_is_duplicate() {
        let doc = r#"<graph><v id="a"/><v id="b"/><e id1="a" id2="b"/><e id1="b" id2="a"/></graph>"#;
        let result = validate_document(doc);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }
}
