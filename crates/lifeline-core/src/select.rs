//! Budget-constrained mitigation-action selection.

use crate::error::ParseTagError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Lifecycle phase of a mitigation action. Descriptive only; selection never
/// reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Design,
    Expansion,
    Response,
    Recovery,
}

/// Candidate mitigation with a cost and an impact score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    /// Must be positive.
    pub cost: f64,
    /// Non-negative.
    pub impact_score: f64,
    pub phase: Phase,
}

impl Action {
    pub fn new(name: impl Into<String>, cost: f64, impact_score: f64, phase: Phase) -> Self {
        Self {
            name: name.into(),
            cost,
            impact_score,
            phase,
        }
    }

    /// Impact per unit cost; zero-cost actions rank as 0 (effectively last).
    fn ratio(&self) -> f64 {
        if self.cost > 0.0 {
            self.impact_score / self.cost
        } else {
            0.0
        }
    }
}

/// Selection strategy.
///
/// `Exact` is exponential in catalog size; it is meant for small catalogs
/// (the reference catalog has five actions). For larger catalogs the same
/// optimality contract could be met by 0/1-knapsack dynamic programming over
/// integer-scaled costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionStrategy {
    #[default]
    Greedy,
    Exact,
}

impl FromStr for SelectionStrategy {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(SelectionStrategy::Greedy),
            "exact" => Ok(SelectionStrategy::Exact),
            other => Err(ParseTagError::new("selection strategy", other)),
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionStrategy::Greedy => write!(f, "greedy"),
            SelectionStrategy::Exact => write!(f, "exact"),
        }
    }
}

/// Pick a subset of `actions` whose total cost fits in `budget`.
///
/// An empty catalog or a non-positive budget yields an empty selection under
/// either strategy.
#[must_use]
pub fn prioritize_actions(
    actions: &[Action],
    budget: f64,
    strategy: SelectionStrategy,
) -> Vec<Action> {
    if actions.is_empty() || budget <= 0.0 {
        return Vec::new();
    }
    match strategy {
        SelectionStrategy::Greedy => greedy_select(actions, budget),
        SelectionStrategy::Exact => exact_select(actions, budget),
    }
}

/// Rank by impact-per-cost ratio descending and accept while the budget
/// lasts. Deterministic: the sort is stable, so equal ratios keep catalog
/// order. Not globally optimal.
fn greedy_select(actions: &[Action], budget: f64) -> Vec<Action> {
    let mut ranked: Vec<&Action> = actions.iter().collect();
    ranked.sort_by(|a, b| {
        b.ratio()
            .partial_cmp(&a.ratio())
            .unwrap_or(Ordering::Equal)
    });

    let mut remaining = budget;
    let mut selected = Vec::new();
    for action in ranked {
        if action.cost <= remaining {
            remaining -= action.cost;
            selected.push(action.clone());
        }
    }
    selected
}

/// Exhaustive search over non-empty subsets, enumerated by size ascending
/// and then lexicographic catalog-index order. Only a strictly greater total
/// impact replaces the incumbent, so among equally good subsets the
/// first-found (smallest, then lexicographically earliest) wins.
fn exact_select(actions: &[Action], budget: f64) -> Vec<Action> {
    let mut best_indices: Vec<usize> = Vec::new();
    let mut best_impact = -1.0_f64;

    let mut current: Vec<usize> = Vec::new();
    for size in 1..=actions.len() {
        visit_combinations(actions.len(), size, 0, &mut current, &mut |combo| {
            let total_cost: f64 = combo.iter().map(|&i| actions[i].cost).sum();
            if total_cost > budget {
                return;
            }
            let total_impact: f64 = combo.iter().map(|&i| actions[i].impact_score).sum();
            if total_impact > best_impact {
                best_impact = total_impact;
                best_indices = combo.to_vec();
            }
        });
    }

    best_indices.iter().map(|&i| actions[i].clone()).collect()
}

/// Visit all `size`-element index combinations of `0..n` in lexicographic
/// order.
fn visit_combinations(
    n: usize,
    size: usize,
    start: usize,
    current: &mut Vec<usize>,
    visit: &mut impl FnMut(&[usize]),
) {
    if current.len() == size {
        visit(current);
        return;
    }
    for i in start..n {
        current.push(i);
        visit_combinations(n, size, i + 1, current, visit);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[(&str, f64, f64)]) -> Vec<Action> {
        entries
            .iter()
            .map(|(name, cost, impact)| Action::new(*name, *cost, *impact, Phase::Response))
            .collect()
    }

    fn names(actions: &[Action]) -> Vec<&str> {
        actions.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn exact_finds_the_optimal_pair() {
        let actions = catalog(&[("A", 40.0, 40.0), ("B", 50.0, 60.0), ("C", 60.0, 90.0)]);
        let selected = prioritize_actions(&actions, 100.0, SelectionStrategy::Exact);

        assert_eq!(names(&selected), vec!["A", "C"]);
        let cost: f64 = selected.iter().map(|a| a.cost).sum();
        let impact: f64 = selected.iter().map(|a| a.impact_score).sum();
        assert_eq!(cost, 100.0);
        assert_eq!(impact, 130.0);
    }

    #[test]
    fn greedy_takes_best_ratio_first() {
        let actions = catalog(&[("A", 40.0, 40.0), ("B", 50.0, 60.0), ("C", 60.0, 90.0)]);
        // Ratios: C 1.5, B 1.2, A 1.0. C then B exhausts the budget's room
        // for A.
        let selected = prioritize_actions(&actions, 110.0, SelectionStrategy::Greedy);
        assert_eq!(names(&selected), vec!["C", "B"]);
    }

    #[test]
    fn greedy_ties_keep_catalog_order() {
        let actions = catalog(&[("first", 10.0, 10.0), ("second", 10.0, 10.0)]);
        let selected = prioritize_actions(&actions, 10.0, SelectionStrategy::Greedy);
        assert_eq!(names(&selected), vec!["first"]);
    }

    #[test]
    fn exact_ties_prefer_first_found_smallest_subset() {
        // Both {A} and {B} score 10; A is enumerated first. {A, B} costs too
        // much to beat them within budget.
        let actions = catalog(&[("A", 10.0, 10.0), ("B", 10.0, 10.0)]);
        let selected = prioritize_actions(&actions, 10.0, SelectionStrategy::Exact);
        assert_eq!(names(&selected), vec!["A"]);
    }

    #[test]
    fn empty_catalog_and_zero_budget_select_nothing() {
        let actions = catalog(&[("A", 10.0, 10.0)]);
        for strategy in [SelectionStrategy::Greedy, SelectionStrategy::Exact] {
            assert!(prioritize_actions(&[], 100.0, strategy).is_empty());
            assert!(prioritize_actions(&actions, 0.0, strategy).is_empty());
        }
    }

    #[test]
    fn zero_cost_action_ranks_last_in_greedy() {
        let actions = catalog(&[("free", 0.0, 5.0), ("paid", 10.0, 10.0)]);
        let selected = prioritize_actions(&actions, 10.0, SelectionStrategy::Greedy);
        // "paid" is ranked first; "free" still fits afterwards.
        assert_eq!(names(&selected), vec!["paid", "free"]);
    }

    #[test]
    fn unknown_strategy_tag_is_rejected() {
        assert!("simulated-annealing".parse::<SelectionStrategy>().is_err());
        assert_eq!(
            "exact".parse::<SelectionStrategy>().unwrap(),
            SelectionStrategy::Exact
        );
    }
}
