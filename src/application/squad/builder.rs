//! Translate a player dataset into a 0/1 integer program.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::SquadRequest;
use crate::domain::constraint::{Constraint, ConstraintSense, VariableBounds};
use crate::domain::dataset::PlayerDataset;
use crate::domain::error::DomainError;
use crate::domain::formation::Formation;
use crate::domain::id::PlayerId;
use crate::domain::player::{CostBasis, PlayerRecord, Position};
use crate::port::solver::{IlpProblem, LpProblem, ObjectiveSense};

/// An integer program for one squad selection, plus the mapping back to players.
///
/// Variable `i` decides whether the `i`-th player of the dataset is selected.
/// The model borrows the dataset it was built from, so it cannot outlive it.
#[derive(Debug, Clone)]
pub struct SquadModel<'a> {
    dataset: &'a PlayerDataset,
    problem: IlpProblem,
    variables: HashMap<PlayerId, usize>,
    scores: Vec<Decimal>,
    costs: Vec<Decimal>,
    formation: Formation,
    budget: Decimal,
    metric: String,
    cost_basis: CostBasis,
    team_cap: u32,
}

impl<'a> SquadModel<'a> {
    /// The integer program handed to the solver.
    #[must_use]
    pub fn problem(&self) -> &IlpProblem {
        &self.problem
    }

    /// Decision variable index of a player.
    #[must_use]
    pub fn variable(&self, id: &PlayerId) -> Option<usize> {
        self.variables.get(id).copied()
    }

    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.problem.lp.num_vars()
    }

    /// The player a decision variable stands for.
    #[must_use]
    pub fn player(&self, var: usize) -> Option<&'a PlayerRecord> {
        self.dataset.players().get(var)
    }

    /// Score coefficient of a variable.
    #[must_use]
    pub fn score(&self, var: usize) -> Decimal {
        self.scores[var]
    }

    /// Cost coefficient of a variable.
    #[must_use]
    pub fn cost(&self, var: usize) -> Decimal {
        self.costs[var]
    }

    #[must_use]
    pub fn formation(&self) -> Formation {
        self.formation
    }

    #[must_use]
    pub fn budget(&self) -> Decimal {
        self.budget
    }

    #[must_use]
    pub fn metric(&self) -> &str {
        &self.metric
    }

    #[must_use]
    pub fn cost_basis(&self) -> CostBasis {
        self.cost_basis
    }

    #[must_use]
    pub fn team_cap(&self) -> u32 {
        self.team_cap
    }
}

/// Builds [`SquadModel`]s.
///
/// One builder covers every metric and cost basis; both are parameters of
/// the [`SquadRequest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintModelBuilder;

impl ConstraintModelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate the request against the dataset and construct the model.
    ///
    /// The model has:
    /// 1. objective: maximise the sum of the chosen metric over selected players
    /// 2. one budget row: total cost at most the budget
    /// 3. one equality row per position: exactly the formation's count
    /// 4. one row per distinct team: at most `team_cap` players
    ///
    /// A position with too few players is not rejected here; the solver
    /// reports the model infeasible.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the dataset is empty, the formation is
    /// empty or larger than the squad or the dataset, a metric value or cost
    /// is missing, the budget is not positive, or the team cap is zero. Too
    /// few players at one position is not an error here; the solver reports
    /// it as infeasible.
    pub fn build<'a>(
        &self,
        dataset: &'a PlayerDataset,
        request: &SquadRequest,
    ) -> Result<SquadModel<'a>, DomainError> {
        if dataset.is_empty() {
            return Err(DomainError::EmptyDataset);
        }

        let formation = request.formation;
        validate_formation(&formation, request, dataset)?;

        let scores = collect_scores(dataset, &request.metric)?;
        let costs = collect_costs(dataset, request.cost_basis)?;

        let max_budget = request.budget_policy.max_budget(&formation);
        let budget = request.budget_policy.resolve(request.budget, &formation);
        if budget <= Decimal::ZERO {
            return Err(DomainError::InvalidBudget { budget });
        }
        if budget > max_budget {
            warn!(
                budget = %budget,
                max_budget = %max_budget,
                "Supplied budget exceeds expected maximum"
            );
        }

        if request.team_cap == 0 {
            return Err(DomainError::InvalidTeamCap {
                cap: request.team_cap,
            });
        }

        let n = dataset.len();
        let variables: HashMap<PlayerId, usize> = dataset
            .iter()
            .enumerate()
            .map(|(idx, player)| (player.id.clone(), idx))
            .collect();

        let mut lp = LpProblem {
            objective: scores.clone(),
            sense: ObjectiveSense::Maximize,
            constraints: Vec::new(),
            bounds: vec![VariableBounds::binary(); n],
        };

        lp.constraints.push(Constraint::leq(costs.clone(), budget));

        for position in Position::ALL {
            let members = dataset
                .iter()
                .enumerate()
                .filter(|(_, p)| p.position == position)
                .map(|(idx, _)| idx);
            lp.constraints.push(Constraint::counting(
                n,
                members,
                ConstraintSense::Equal,
                Decimal::from(formation.count(position)),
            ));
        }

        let teams = dataset.indices_by_team();
        for members in teams.values() {
            lp.constraints.push(Constraint::counting(
                n,
                members.iter().copied(),
                ConstraintSense::LessEqual,
                Decimal::from(request.team_cap),
            ));
        }

        debug!(
            players = n,
            teams = teams.len(),
            constraints = lp.constraints.len(),
            formation = %formation,
            budget = %budget,
            metric = %request.metric,
            cost_basis = %request.cost_basis,
            "Built squad model"
        );

        Ok(SquadModel {
            dataset,
            problem: IlpProblem::all_integer(lp),
            variables,
            scores,
            costs,
            formation,
            budget,
            metric: request.metric.clone(),
            cost_basis: request.cost_basis,
            team_cap: request.team_cap,
        })
    }
}

fn validate_formation(
    formation: &Formation,
    request: &SquadRequest,
    dataset: &PlayerDataset,
) -> Result<(), DomainError> {
    let invalid = |reason: String| DomainError::InvalidFormation {
        formation: formation.to_string(),
        reason,
    };

    let total = formation.total();
    if total == 0 {
        return Err(invalid("formation selects no players".to_string()));
    }
    if total > request.budget_policy.squad_size {
        return Err(invalid(format!(
            "{total} players exceeds squad size {}",
            request.budget_policy.squad_size
        )));
    }
    if total as usize > dataset.len() {
        return Err(invalid(format!(
            "{total} players exceeds the {} available",
            dataset.len()
        )));
    }
    Ok(())
}

fn collect_scores(dataset: &PlayerDataset, metric: &str) -> Result<Vec<Decimal>, DomainError> {
    if !dataset.iter().any(|p| p.metrics.contains_key(metric)) {
        return Err(DomainError::UnknownMetric {
            metric: metric.to_string(),
            reason: "no such numeric column".to_string(),
        });
    }

    dataset
        .iter()
        .map(|p| {
            p.metric(metric).ok_or_else(|| DomainError::UnknownMetric {
                metric: metric.to_string(),
                reason: format!("missing or non-numeric for player {} ({})", p.id, p.name),
            })
        })
        .collect()
}

fn collect_costs(dataset: &PlayerDataset, basis: CostBasis) -> Result<Vec<Decimal>, DomainError> {
    dataset
        .iter()
        .map(|p| {
            p.cost(basis).ok_or_else(|| DomainError::MissingCost {
                id: p.id.clone(),
                basis: basis.as_str(),
            })
        })
        .collect()
}
