//! Core data types for the skills catalog

use std::fmt;

use serde::{Deserialize, Serialize};

/// Skill category (closed set, matches the bundled dataset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Development,
    Design,
    Marketing,
    Productivity,
    Tools,
    Research,
    Mobile,
    Writing,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Development,
            Category::Design,
            Category::Marketing,
            Category::Productivity,
            Category::Tools,
            Category::Research,
            Category::Mobile,
            Category::Writing,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Development => "Development",
            Category::Design => "Design",
            Category::Marketing => "Marketing",
            Category::Productivity => "Productivity",
            Category::Tools => "Tools",
            Category::Research => "Research",
            Category::Mobile => "Mobile",
            Category::Writing => "Writing",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Development => "💻",
            Category::Design => "🎨",
            Category::Marketing => "📣",
            Category::Productivity => "⚡",
            Category::Tools => "🔧",
            Category::Research => "🔬",
            Category::Mobile => "📱",
            Category::Writing => "✍️",
        }
    }

    /// Accent color name used by the presentation layer
    pub fn color(&self) -> &'static str {
        match self {
            Category::Development => "blue",
            Category::Design => "pink",
            Category::Marketing => "orange",
            Category::Productivity => "emerald",
            Category::Tools => "violet",
            Category::Research => "cyan",
            Category::Mobile => "lime",
            Category::Writing => "yellow",
        }
    }

    /// Look up a category by its exact name
    pub fn from_name(name: &str) -> Option<Category> {
        Category::all().iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub popularity: u32,
    pub icon: String,
    /// GitHub `owner/name`
    pub repo: String,
    pub install_command: String,
}

impl Skill {
    /// Create a skill with empty metadata (used by tests and fixtures)
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        let id = id.into();
        Self {
            install_command: format!("skillsmp install {id}"),
            repo: format!("skillsmp/{id}"),
            id,
            name: name.into(),
            description: String::new(),
            category,
            tags: Vec::new(),
            popularity: 0,
            icon: category.icon().to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_popularity(mut self, popularity: u32) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}", self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_name_is_exact() {
        assert_eq!(Category::from_name("Design"), Some(Category::Design));
        assert_eq!(Category::from_name("design"), None);
        assert_eq!(Category::from_name("Cooking"), None);
    }

    #[test]
    fn test_skill_deserialize_defaults() {
        let json = r#"{
            "id": "pdf",
            "name": "PDF Toolkit",
            "description": "Read PDFs",
            "category": "Tools",
            "icon": "📄",
            "repo": "anthropics/skills",
            "installCommand": "claude skill add pdf"
        }"#;
        let skill: Skill = serde_json::from_str(json).unwrap();
        assert_eq!(skill.popularity, 0);
        assert!(skill.tags.is_empty());
        assert_eq!(skill.category, Category::Tools);
    }

    #[test]
    fn test_repo_url() {
        let skill = Skill::new("x", "X", Category::Tools);
        assert_eq!(skill.repo_url(), "https://github.com/skillsmp/x");
    }
}
