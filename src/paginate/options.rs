//! Pagination options and configuration.

use crate::model::TitleRule;

/// Tunables for the pagination engine.
///
/// Defaults reproduce the standard reflow rules.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginateOptions {
    /// Cost added per paragraph to approximate inter-paragraph spacing
    pub paragraph_spacing_cost: usize,

    /// Pages whose collapsed content has this many characters or fewer are dropped
    pub min_page_chars: usize,

    /// Title classification rule
    pub title_rule: TitleRule,

    /// Split points must lie beyond this fraction of the budget
    pub split_min_ratio: f32,
}

impl PaginateOptions {
    /// Create new pagination options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-paragraph spacing cost.
    pub fn with_spacing_cost(mut self, cost: usize) -> Self {
        self.paragraph_spacing_cost = cost;
        self
    }

    /// Set the degenerate page threshold.
    pub fn with_min_page_chars(mut self, chars: usize) -> Self {
        self.min_page_chars = chars;
        self
    }

    /// Set the title classification rule.
    pub fn with_title_rule(mut self, rule: TitleRule) -> Self {
        self.title_rule = rule;
        self
    }

    /// Set the minimum split ratio, clamped to `[0, 1)`.
    pub fn with_split_min_ratio(mut self, ratio: f32) -> Self {
        self.split_min_ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 0.99)
        } else {
            0.5
        };
        self
    }
}

impl Default for PaginateOptions {
    fn default() -> Self {
        Self {
            paragraph_spacing_cost: 50,
            min_page_chars: 5,
            title_rule: TitleRule::default(),
            split_min_ratio: 0.5,
        }
    }
}
