//! Hierarchical feature roadmap.

use blueprint_generation::{Field, FieldKind, OutputSchema};
use serde::{Deserialize, Serialize};

/// Priority or complexity rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    const NAMES: [&'static str; 3] = ["high", "medium", "low"];
}

/// Progress of a roadmap node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Deferred,
}

/// Development area a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevelopmentCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Testing,
    Documentation,
    Other,
}

impl DevelopmentCategory {
    const NAMES: [&'static str; 7] = [
        "frontend",
        "backend",
        "database",
        "devops",
        "testing",
        "documentation",
        "other",
    ];
}

/// A node as produced by the model, before ids and status are assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFeature {
    pub title: String,
    pub description: String,
    pub priority: Level,
    pub complexity: Level,
    pub estimated_hours: f64,
    pub category: DevelopmentCategory,
    #[serde(default)]
    pub children: Option<Vec<GeneratedFeature>>,
}

/// Raw roadmap as produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedFeatureTree {
    pub features: Vec<GeneratedFeature>,
}

/// A roadmap node with a hierarchical id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureNode {
    /// `feature-<i>[-<j>[-<k>]]`
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Level,
    pub complexity: Level,
    pub status: FeatureStatus,
    pub estimated_hours: f64,
    pub category: DevelopmentCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FeatureNode>>,
}

/// Three-level roadmap: category, feature, task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTree {
    pub features: Vec<FeatureNode>,
}

impl FeatureTree {
    /// Output schema sent to the model.
    pub fn output_schema() -> OutputSchema {
        let task = node_kind("task", None);
        let feature = node_kind(
            "feature",
            Some(Field::array("children", task).describe("Individual tasks within this feature")),
        );
        let category = node_kind(
            "feature category",
            Some(
                Field::array("children", feature)
                    .describe("Specific features within this category"),
            ),
        );

        OutputSchema::new(vec![Field::array("features", category)])
    }

    /// Assigns hierarchical ids and `planned` status to every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint_planning::{DevelopmentCategory, FeatureTree, GeneratedFeature, GeneratedFeatureTree, Level};
    ///
    /// let leaf = GeneratedFeature {
    ///     title: "Login form".into(),
    ///     description: "Build the form".into(),
    ///     priority: Level::High,
    ///     complexity: Level::Low,
    ///     estimated_hours: 4.0,
    ///     category: DevelopmentCategory::Frontend,
    ///     children: None,
    /// };
    /// let tree = FeatureTree::from_generated(GeneratedFeatureTree { features: vec![leaf] });
    /// assert_eq!(tree.features[0].id, "feature-0");
    /// ```
    pub fn from_generated(generated: GeneratedFeatureTree) -> Self {
        let features = generated
            .features
            .into_iter()
            .enumerate()
            .map(|(index, node)| FeatureNode::from_generated(node, "feature", index))
            .collect();
        Self { features }
    }

    /// Number of nodes at every depth.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[FeatureNode]) -> usize {
            nodes
                .iter()
                .map(|n| 1 + n.children.as_deref().map(count).unwrap_or(0))
                .sum()
        }
        count(&self.features)
    }

    /// Sum of estimated hours over leaf nodes.
    pub fn total_leaf_hours(&self) -> f64 {
        fn sum(nodes: &[FeatureNode]) -> f64 {
            nodes
                .iter()
                .map(|n| match n.children.as_deref() {
                    Some(children) if !children.is_empty() => sum(children),
                    _ => n.estimated_hours,
                })
                .sum()
        }
        sum(&self.features)
    }
}

impl FeatureNode {
    fn from_generated(node: GeneratedFeature, prefix: &str, index: usize) -> Self {
        let id = format!("{}-{}", prefix, index);
        let children = node.children.map(|children| {
            children
                .into_iter()
                .enumerate()
                .map(|(child_index, child)| FeatureNode::from_generated(child, &id, child_index))
                .collect()
        });

        Self {
            id,
            title: node.title,
            description: node.description,
            priority: node.priority,
            complexity: node.complexity,
            status: FeatureStatus::Planned,
            estimated_hours: node.estimated_hours,
            category: node.category,
            children,
        }
    }
}

fn node_kind(noun: &str, children: Option<Field>) -> FieldKind {
    let mut fields = vec![
        Field::string("title").describe(format!("The name of the {}", noun)),
        Field::string("description").describe(format!("A description of this {}", noun)),
        Field::one_of("priority", Level::NAMES)
            .describe(format!("The priority level of this {}", noun)),
        Field::one_of("complexity", Level::NAMES)
            .describe(format!("The complexity level of this {}", noun)),
        Field::number("estimatedHours")
            .describe(format!("Estimated hours to complete this {}", noun)),
        Field::one_of("category", DevelopmentCategory::NAMES)
            .describe(format!("The development category this {} belongs to", noun)),
    ];
    fields.extend(children);
    FieldKind::object(fields)
}
