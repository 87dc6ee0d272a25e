use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, Entity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
}

impl Category {
    pub fn root(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            name: name.into(),
            parent_id: None,
        }
    }

    pub fn child(id: u32, name: impl Into<String>, parent: u32) -> Self {
        Self {
            id: CategoryId(id),
            name: name.into(),
            parent_id: Some(CategoryId(parent)),
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Category lookup by id, with parent links.
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    categories: Vec<Category>,
    parents: HashMap<CategoryId, CategoryId>,
}

impl CategoryTree {
    pub fn new(categories: Vec<Category>) -> Self {
        let parents = categories
            .iter()
            .filter_map(|c| c.parent_id.map(|p| (c.id, p)))
            .collect();
        Self { categories, parents }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn parent_of(&self, id: CategoryId) -> Option<CategoryId> {
        self.parents.get(&id).copied()
    }

    /// Direct children only.
    pub fn children_of(&self, id: CategoryId) -> Vec<CategoryId> {
        self.categories
            .iter()
            .filter(|c| c.parent_id == Some(id))
            .map(|c| c.id)
            .collect()
    }

    /// `category` is `filter` itself or one of its direct children.
    ///
    /// Grandchildren do not match.
    pub fn is_within(&self, category: CategoryId, filter: CategoryId) -> bool {
        category == filter || self.parent_of(category) == Some(filter)
    }
}
