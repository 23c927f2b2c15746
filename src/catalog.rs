//! Region catalog: centers, offices, and the sidebar tree built from them

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A top-level grouping of offices
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Center {
    pub code: String,
    pub name: String,
    pub children: Vec<String>,
}

/// A region with its own published forecast
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Office {
    pub name: String,
}

/// The area catalog as held in memory for the session.
///
/// `centers` keeps the order the service sent them in; `offices` is only
/// ever looked up by code.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RegionCatalog {
    pub centers: Vec<Center>,
    pub offices: BTreeMap<String, Office>,
}

impl RegionCatalog {
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty() && self.offices.is_empty()
    }

    pub fn office(&self, code: &str) -> Option<&Office> {
        self.offices.get(code)
    }

    /// Build the sidebar tree. Child codes missing from `offices` are skipped.
    pub fn build_tree(&self) -> Vec<CenterNode> {
        self.centers
            .iter()
            .map(|center| CenterNode {
                code: center.code.clone(),
                name: center.name.clone(),
                offices: center
                    .children
                    .iter()
                    .filter_map(|code| {
                        self.office(code).map(|office| OfficeLeaf {
                            code: code.clone(),
                            name: office.name.clone(),
                        })
                    })
                    .collect(),
                expanded: false,
            })
            .collect()
    }
}

// ============================================================================
// Wire format
// ============================================================================

/// `area.json` as served. Both sections are read as ordered maps so the
/// iteration order of the document is kept.
#[derive(Debug, Default, Deserialize)]
pub struct AreaDocument {
    #[serde(default)]
    centers: Map<String, Value>,
    #[serde(default)]
    offices: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct CenterEntry {
    name: String,
    #[serde(default)]
    children: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct OfficeEntry {
    name: String,
}

impl From<AreaDocument> for RegionCatalog {
    fn from(doc: AreaDocument) -> Self {
        let centers = doc
            .centers
            .into_iter()
            .filter_map(|(code, value)| match serde_json::from_value::<CenterEntry>(value) {
                Ok(entry) => Some(Center {
                    code,
                    name: entry.name,
                    children: entry.children,
                }),
                Err(e) => {
                    tracing::warn!(%code, error = %e, "skipping malformed center entry");
                    None
                }
            })
            .collect();

        let offices = doc
            .offices
            .into_iter()
            .filter_map(|(code, value)| match serde_json::from_value::<OfficeEntry>(value) {
                Ok(entry) => Some((code, Office { name: entry.name })),
                Err(e) => {
                    tracing::warn!(%code, error = %e, "skipping malformed office entry");
                    None
                }
            })
            .collect();

        RegionCatalog { centers, offices }
    }
}

// ============================================================================
// Sidebar tree
// ============================================================================

/// Selectable leaf. Owns its code and name so activating it always targets
/// the office it was built for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OfficeLeaf {
    pub code: String,
    pub name: String,
}

/// Collapsible node for one center
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CenterNode {
    pub code: String,
    pub name: String,
    pub offices: Vec<OfficeLeaf>,
    pub expanded: bool,
}

/// One visible line of the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeRow {
    Center(usize),
    Office { center: usize, office: usize },
}

/// Flatten the tree into the rows currently visible (children of collapsed
/// centers are hidden).
pub fn visible_rows(tree: &[CenterNode]) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    for (center_idx, node) in tree.iter().enumerate() {
        rows.push(TreeRow::Center(center_idx));
        if node.expanded {
            rows.extend((0..node.offices.len()).map(|office| TreeRow::Office {
                center: center_idx,
                office,
            }));
        }
    }
    rows
}

/// Row index of a center header in the visible rows.
pub fn center_row_index(tree: &[CenterNode], center: usize) -> usize {
    tree.iter()
        .take(center)
        .map(|node| 1 + if node.expanded { node.offices.len() } else { 0 })
        .sum()
}

pub fn leaf_at<'a>(tree: &'a [CenterNode], row: TreeRow) -> Option<&'a OfficeLeaf> {
    match row {
        TreeRow::Office { center, office } => tree.get(center)?.offices.get(office),
        TreeRow::Center(_) => None,
    }
}
