use crate::model::Roster;
use std::collections::BTreeSet;

/// Liste des noms valides (staff + scouts), triée par nom de famille puis prénom.
///
/// Le nom de famille est le dernier mot ; la comparaison ignore la casse.
pub fn name_directory(roster: &Roster) -> Vec<String> {
    let unique: BTreeSet<&str> = roster
        .staff
        .iter()
        .map(|p| p.name.as_str())
        .chain(roster.patrol_members.values().flatten().map(String::as_str))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    let mut names: Vec<String> = unique.into_iter().map(str::to_owned).collect();
    names.sort_by_cached_key(|name| sort_key(name));
    names
}

fn sort_key(name: &str) -> (String, String, String) {
    let (first, last) = match name.rsplit_once(char::is_whitespace) {
        Some((first, last)) => (first.trim(), last),
        None => ("", name),
    };
    (last.to_lowercase(), first.to_lowercase(), name.to_owned())
}
