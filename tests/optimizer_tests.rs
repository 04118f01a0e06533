//! End-to-end squad selection against HiGHS.

mod support;

use std::collections::BTreeSet;
use std::sync::Arc;

use rust_decimal_macros::dec;
use squadsolver::adapter::solver::HiGHSSolver;
use squadsolver::application::squad::{SquadOptimizer, SquadOutcome, SquadRequest};
use squadsolver::domain::{
    CostBasis, DomainError, Formation, PlayerDataset, PlayerId, Position,
};
use squadsolver::error::Error;
use squadsolver::testkit::dataset::{player, scenario_dataset};
use support::assertions::{assert_fills_formation, assert_summary_consistent, expect_optimal};

fn optimizer() -> SquadOptimizer {
    SquadOptimizer::new(Arc::new(HiGHSSolver::new()))
}

fn request_with_budget(budget: rust_decimal::Decimal) -> SquadRequest {
    SquadRequest {
        budget: Some(budget),
        ..SquadRequest::default()
    }
}

fn selected_ids(roster: &squadsolver::domain::Roster) -> BTreeSet<PlayerId> {
    roster.iter().map(|e| e.id.clone()).collect()
}

#[test]
fn scenario_selects_the_fifteen_strongest_players() {
    let dataset = scenario_dataset();
    let outcome = optimizer()
        .optimize(&dataset, &request_with_budget(dec!(100.0)))
        .unwrap();
    let (roster, summary) = expect_optimal(outcome);

    assert_fills_formation(&roster, &Formation::new(2, 5, 5, 3));
    assert_summary_consistent(&roster, &summary);
    assert_eq!(summary.total_score, dec!(1300));
    assert_eq!(summary.total_cost, dec!(73.5));
    assert!(roster.iter().all(|e| !e.id.as_str().starts_with("fill")));
}

#[test]
fn derived_budget_matches_full_squad_budget() {
    let dataset = scenario_dataset();
    let (_, summary) = expect_optimal(
        optimizer()
            .optimize(&dataset, &SquadRequest::default())
            .unwrap(),
    );

    assert_eq!(summary.budget, dec!(100.0));
    assert_eq!(summary.total_score, dec!(1300));
}

#[test]
fn tiny_budget_is_infeasible() {
    let outcome = optimizer()
        .optimize(&scenario_dataset(), &request_with_budget(dec!(10.0)))
        .unwrap();
    assert_eq!(outcome, SquadOutcome::Infeasible);
}

#[test]
fn missing_position_is_infeasible_not_an_error() {
    let records: Vec<_> = scenario_dataset()
        .iter()
        .filter(|p| p.position != Position::Midfielder)
        .cloned()
        .collect();
    let dataset = PlayerDataset::try_new(records).unwrap();

    let request = SquadRequest {
        formation: Formation::new(2, 5, 1, 3),
        ..SquadRequest::default()
    };
    let outcome = optimizer().optimize(&dataset, &request).unwrap();
    assert_eq!(outcome, SquadOutcome::Infeasible);
}

#[test]
fn formation_larger_than_dataset_is_rejected() {
    let records: Vec<_> = scenario_dataset().players()[..10].to_vec();
    let dataset = PlayerDataset::try_new(records).unwrap();

    let result = optimizer().optimize(&dataset, &SquadRequest::default());
    assert!(matches!(
        result,
        Err(Error::Domain(DomainError::InvalidFormation { .. }))
    ));
}

#[test]
fn binding_budget_trades_down_the_cheapest_loss() {
    let (roster, summary) = expect_optimal(
        optimizer()
            .optimize(&scenario_dataset(), &request_with_budget(dec!(72.0)))
            .unwrap(),
    );

    assert_fills_formation(&roster, &Formation::default());
    assert_summary_consistent(&roster, &summary);
    // One forward swapped for the filler forward saves 1.5 for 50 points.
    assert_eq!(summary.total_score, dec!(1250));
    assert!(roster.iter().any(|e| e.id.as_str() == "fill-fwd"));
}

#[test]
fn team_cap_limits_players_per_team() {
    let formation = Formation::new(1, 1, 1, 1);
    let dataset = PlayerDataset::try_new(vec![
        player("x-gk", Position::Goalkeeper, "x", dec!(4), dec!(10)),
        player("x-def", Position::Defender, "x", dec!(4), dec!(10)),
        player("x-mid", Position::Midfielder, "x", dec!(4), dec!(10)),
        player("x-fwd", Position::Forward, "x", dec!(4), dec!(10)),
        player("y-gk", Position::Goalkeeper, "y", dec!(4), dec!(5)),
        player("y-def", Position::Defender, "y", dec!(4), dec!(5)),
        player("y-mid", Position::Midfielder, "y", dec!(4), dec!(5)),
        player("y-fwd", Position::Forward, "y", dec!(4), dec!(5)),
    ])
    .unwrap();

    let uncapped = SquadRequest {
        formation,
        team_cap: 4,
        ..SquadRequest::default()
    };
    let (_, summary) = expect_optimal(optimizer().optimize(&dataset, &uncapped).unwrap());
    assert_eq!(summary.total_score, dec!(40));

    let capped = SquadRequest {
        team_cap: 2,
        ..uncapped
    };
    let (roster, summary) = expect_optimal(optimizer().optimize(&dataset, &capped).unwrap());
    assert_eq!(summary.total_score, dec!(30));
    assert!(roster.team_counts().values().all(|&n| n <= 2));
    assert_fills_formation(&roster, &formation);
}

#[test]
fn team_cap_can_make_selection_infeasible() {
    let request = SquadRequest {
        team_cap: 2,
        ..SquadRequest::default()
    };
    // Seven teams at two players each cannot field fifteen.
    let outcome = optimizer()
        .optimize(&scenario_dataset(), &request)
        .unwrap();
    assert_eq!(outcome, SquadOutcome::Infeasible);
}

#[test]
fn zero_count_positions_select_nobody_there() {
    let formation = Formation::new(1, 0, 2, 0);
    let request = SquadRequest {
        formation,
        ..SquadRequest::default()
    };
    let (roster, summary) =
        expect_optimal(optimizer().optimize(&scenario_dataset(), &request).unwrap());

    assert_fills_formation(&roster, &formation);
    assert_summary_consistent(&roster, &summary);
    assert_eq!(summary.total_score, dec!(270));
}

#[test]
fn solving_twice_gives_the_same_objective() {
    let dataset = scenario_dataset();
    let request = request_with_budget(dec!(72.0));
    let optimizer = optimizer();

    let (first_roster, first) = expect_optimal(optimizer.optimize(&dataset, &request).unwrap());
    let (second_roster, second) = expect_optimal(optimizer.optimize(&dataset, &request).unwrap());

    assert_eq!(first.total_score, second.total_score);
    assert_eq!(first.objective, second.objective);
    assert_eq!(first_roster.len(), second_roster.len());
}

#[test]
fn alternative_metric_changes_the_objective() {
    let records: Vec<_> = scenario_dataset()
        .iter()
        .map(|p| {
            let minutes = if p.id.as_str().starts_with("fill") {
                dec!(3000)
            } else {
                dec!(100)
            };
            p.clone().with_metric("minutes", minutes)
        })
        .collect();
    let dataset = PlayerDataset::try_new(records).unwrap();

    let request = SquadRequest {
        metric: "minutes".to_string(),
        ..SquadRequest::default()
    };
    let (roster, summary) = expect_optimal(optimizer().optimize(&dataset, &request).unwrap());

    assert_eq!(summary.metric, "minutes");
    assert!(roster.iter().any(|e| e.id.as_str() == "fill-fwd"));
    assert_summary_consistent(&roster, &summary);
}

#[test]
fn now_cost_basis_prices_with_current_cost() {
    let records: Vec<_> = scenario_dataset()
        .iter()
        .map(|p| {
            let now = if p.id.as_str() == "gk1" {
                dec!(60)
            } else {
                p.start_cost
            };
            p.clone().with_now_cost(now)
        })
        .collect();
    let dataset = PlayerDataset::try_new(records).unwrap();

    let request = SquadRequest {
        cost_basis: CostBasis::Now,
        ..SquadRequest::default()
    };
    let (roster, summary) = expect_optimal(optimizer().optimize(&dataset, &request).unwrap());

    assert_eq!(summary.cost_basis, CostBasis::Now);
    assert!(roster.iter().all(|e| e.id.as_str() != "gk1"));
    assert!(roster.iter().any(|e| e.id.as_str() == "fill-gk"));
}

#[test]
fn missing_now_cost_is_rejected_before_solving() {
    let request = SquadRequest {
        cost_basis: CostBasis::Now,
        ..SquadRequest::default()
    };
    let result = optimizer().optimize(&scenario_dataset(), &request);
    assert!(matches!(result, Err(Error::Domain(_))));
}

#[test]
fn excluded_players_are_never_selected() {
    let excluded = vec!["Player gk1".to_string(), "Player fwd1".to_string()];
    let dataset = PlayerDataset::select_season(
        scenario_dataset().players().to_vec(),
        Some("2016/17"),
        &excluded,
    )
    .unwrap();

    let (roster, _) = expect_optimal(
        optimizer()
            .optimize(&dataset, &SquadRequest::default())
            .unwrap(),
    );
    let ids = selected_ids(&roster);
    assert!(!ids.contains(&PlayerId::from("gk1")));
    assert!(!ids.contains(&PlayerId::from("fwd1")));
    assert!(ids.contains(&PlayerId::from("fill-gk")));
}
