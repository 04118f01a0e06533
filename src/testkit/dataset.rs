//! Builders for player records and canned datasets.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::dataset::PlayerDataset;
use crate::domain::player::{PlayerRecord, Position};

/// Season label used by every canned record.
pub const SEASON: &str = "2016/17";

/// A player named `Player {id}` scoring `points` under `total_points`.
pub fn player(
    id: &str,
    position: Position,
    team: &str,
    cost: Decimal,
    points: Decimal,
) -> PlayerRecord {
    PlayerRecord::new(id, format!("Player {id}"), position, team, cost)
        .with_season(SEASON)
        .with_metric("total_points", points)
}

/// Twenty players: fifteen strong ones that form the obvious `2-5-5-3` squad
/// and five weaker fillers.
///
/// The fifteen are spread three per team over teams `t1`..`t5`, so the team
/// cap never binds. Their total cost is 73.5 and total score 1300.
pub fn scenario_dataset() -> PlayerDataset {
    let mut players = vec![
        player("gk1", Position::Goalkeeper, "t1", dec!(4.0), dec!(100)),
        player("gk2", Position::Goalkeeper, "t2", dec!(4.0), dec!(90)),
    ];

    for i in 1..=5 {
        let team = format!("t{i}");
        players.push(player(
            &format!("def{i}"),
            Position::Defender,
            &team,
            dec!(4.5),
            dec!(80),
        ));
        players.push(player(
            &format!("mid{i}"),
            Position::Midfielder,
            &team,
            dec!(5.0),
            dec!(85),
        ));
    }

    for i in 1..=3 {
        players.push(player(
            &format!("fwd{i}"),
            Position::Forward,
            &format!("t{}", i + 2),
            dec!(6.0),
            dec!(95),
        ));
    }

    players.extend([
        player("fill-gk", Position::Goalkeeper, "t6", dec!(4.0), dec!(20)),
        player("fill-def", Position::Defender, "t6", dec!(4.0), dec!(30)),
        player("fill-mid1", Position::Midfielder, "t6", dec!(4.5), dec!(40)),
        player("fill-mid2", Position::Midfielder, "t7", dec!(4.5), dec!(35)),
        player("fill-fwd", Position::Forward, "t7", dec!(4.5), dec!(45)),
    ]);

    PlayerDataset::try_new(players).expect("scenario ids are unique")
}

/// Render records in the history CSV layout (costs in tenths).
pub fn to_history_csv(records: &[PlayerRecord]) -> String {
    let mut out = String::from(
        "player_id,full_name,team_id,position,start_cost,now_cost,total_points,season_name\n",
    );
    for r in records {
        let now = r
            .now_cost
            .map(|c| (c * dec!(10)).normalize().to_string())
            .unwrap_or_default();
        let points = r
            .metric("total_points")
            .map(|p| p.normalize().to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            r.id,
            r.name,
            r.team_id,
            r.position,
            (r.start_cost * dec!(10)).normalize(),
            now,
            points,
            r.season
        ));
    }
    out
}
