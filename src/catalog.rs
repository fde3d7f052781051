//! The bundled skills dataset and the aggregates derived from it

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::debug;

use crate::models::{Category, Skill};

const BUNDLED_SKILLS: &str = include_str!("../data/skills.json");

/// Number of tags shown in the quick filter row
pub const POPULAR_TAG_COUNT: usize = 6;

/// Smallest bar in the category chart, in percent
const MIN_CHART_PCT: u32 = 10;

/// Recent activity lines shown under the stats
pub const SOCIAL_PROOF: &[(&str, &str, &str)] = &[
    ("10:42:01", "anthropic", "claude code --import skillsmp"),
    ("10:42:05", "langchain", "pip install langchain-skills"),
    ("10:42:12", "autogen", "agent.load_skills(manifest)"),
    ("10:42:18", "openai", "import { plugin } from \"@skillsmp/gpt\""),
];

/// Errors loading a dataset
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid skills dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate skill id '{0}'")]
    DuplicateId(String),
}

/// A category with the number of skills in it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Bar height for one category in the stats chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartBar {
    pub category: Category,
    pub pct: u32,
}

/// Immutable list of skills, in dataset order
#[derive(Debug, Clone)]
pub struct Catalog {
    skills: Vec<Skill>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(skills: Vec<Skill>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for skill in &skills {
            if !seen.insert(skill.id.as_str()) {
                return Err(CatalogError::DuplicateId(skill.id.clone()));
            }
        }
        Ok(Self { skills })
    }

    /// Parse a JSON array of skills
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let skills: Vec<Skill> = serde_json::from_str(json)?;
        Self::new(skills)
    }

    /// The dataset compiled into the binary
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUNDLED_SKILLS)?;
        debug!(skills = catalog.len(), "loaded bundled catalog");
        Ok(catalog)
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// Every skill id, for pruning stored state
    pub fn ids(&self) -> HashSet<&str> {
        self.skills.iter().map(|s| s.id.as_str()).collect()
    }

    /// Categories that have at least one skill, in enumeration order
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        Category::all()
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: self.count_in(category),
            })
            .filter(|c| c.count > 0)
            .collect()
    }

    /// The `n` most used tags. Ties keep first-seen order.
    pub fn popular_tags(&self, n: usize) -> Vec<String> {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tag in self.skills.iter().flat_map(|s| s.tags.iter()) {
            let count = counts.entry(tag.as_str()).or_insert(0);
            if *count == 0 {
                order.push(tag.as_str());
            }
            *count += 1;
        }

        let mut ranked: Vec<(&str, usize)> = order.into_iter().map(|t| (t, counts[t])).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(t, _)| t.to_string())
            .collect()
    }

    /// Terms to offer as searches when `query` matched nothing
    pub fn search_suggestions(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        self.popular_tags(POPULAR_TAG_COUNT)
    }

    /// Relative size of every category, scaled to the largest one
    pub fn category_chart(&self) -> Vec<ChartBar> {
        let counts: Vec<(Category, usize)> = Category::all()
            .iter()
            .map(|&c| (c, self.count_in(c)))
            .collect();
        let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);

        counts
            .into_iter()
            .map(|(category, count)| {
                let pct = if max > 0 {
                    ((count * 100 / max) as u32).max(MIN_CHART_PCT)
                } else {
                    MIN_CHART_PCT
                };
                ChartBar { category, pct }
            })
            .collect()
    }

    fn count_in(&self, category: Category) -> usize {
        self.skills.iter().filter(|s| s.category == category).count()
    }
}
