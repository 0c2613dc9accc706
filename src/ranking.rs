use crate::types::Team;

/// Order teams for display: descending by overall score, ties broken by the
/// earlier points update (the team that reached the score first ranks higher).
///
/// The underlying sort is stable, so teams equal on both keys keep their
/// snapshot order.
pub fn rank_teams(teams: &mut [Team]) {
    teams.sort_by(|a, b| {
        b.overall_score
            .total_cmp(&a.overall_score)
            .then(a.last_pts_update.total_cmp(&b.last_pts_update))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn team(name: &str, score: f64, last_update: f64) -> Team {
        Team {
            name: name.to_string(),
            ip_addr: String::new(),
            overall_score: score,
            last_pts_update: last_update,
            points: BTreeMap::new(),
            service_status: BTreeMap::new(),
        }
    }

    fn names(teams: &[Team]) -> Vec<&str> {
        teams.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn sorts_descending_by_score() {
        let mut teams = vec![team("low", 10.0, 1.0), team("high", 30.0, 1.0), team("mid", 20.0, 1.0)];
        rank_teams(&mut teams);
        assert_eq!(names(&teams), vec!["high", "mid", "low"]);
    }

    #[test]
    fn earlier_update_wins_ties() {
        let mut teams = vec![team("a", 100.0, 5.0), team("b", 100.0, 3.0)];
        rank_teams(&mut teams);
        assert_eq!(names(&teams), vec!["b", "a"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut teams = vec![
            team("a", 100.0, 5.0),
            team("b", 100.0, 3.0),
            team("c", 250.0, 9.0),
            team("d", 100.0, 3.0),
        ];
        rank_teams(&mut teams);
        let once = teams.clone();
        rank_teams(&mut teams);
        assert_eq!(names(&teams), names(&once));
    }

    #[test]
    fn fully_tied_teams_keep_input_order() {
        let mut teams = vec![team("first", 50.0, 7.0), team("second", 50.0, 7.0)];
        rank_teams(&mut teams);
        assert_eq!(names(&teams), vec!["first", "second"]);
    }
}
