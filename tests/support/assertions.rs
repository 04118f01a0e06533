use squadsolver::application::squad::SquadOutcome;
use squadsolver::domain::squad::{Roster, SolutionSummary};
use squadsolver::domain::{Formation, Position};

/// Unwrap an optimal outcome or fail with the actual outcome.
pub fn expect_optimal(outcome: SquadOutcome) -> (Roster, SolutionSummary) {
    match outcome {
        SquadOutcome::Optimal { roster, summary } => (roster, summary),
        SquadOutcome::Infeasible => panic!("expected an optimal squad, got Infeasible"),
    }
}

/// The roster fills `formation` exactly.
pub fn assert_fills_formation(roster: &Roster, formation: &Formation) {
    assert_eq!(roster.len(), formation.total() as usize);
    for position in Position::ALL {
        assert_eq!(
            roster.count_at(position),
            formation.count(position) as usize,
            "wrong number of {position}s"
        );
    }
}

/// Summary totals agree with the roster and respect the budget.
pub fn assert_summary_consistent(roster: &Roster, summary: &SolutionSummary) {
    assert_eq!(summary.total_score, roster.total_score());
    assert_eq!(summary.total_cost, roster.total_cost());
    assert!(
        summary.total_cost <= summary.budget,
        "total cost {} exceeds budget {}",
        summary.total_cost,
        summary.budget
    );
}
