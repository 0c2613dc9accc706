use std::collections::BTreeMap;

use scorewatch::ranking::rank_teams;
use scorewatch::types::Team;

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

#[test]
fn ranks_by_score_then_earlier_update() {
    let mut teams = vec![
        team("a", 100.0, 5.0),
        team("c", 90.0, 1.0),
        team("b", 100.0, 3.0),
    ];
    rank_teams(&mut teams);
    let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn ranking_a_ranked_list_changes_nothing() {
    let mut teams = vec![
        team("b", 100.0, 3.0),
        team("a", 100.0, 5.0),
        team("c", 90.0, 1.0),
    ];
    let before = teams.clone();
    rank_teams(&mut teams);
    assert_eq!(teams, before);
}
