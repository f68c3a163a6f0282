use crate::model::Person;
use std::collections::{BTreeSet, HashMap};

/// Compteur de charge par personne pour une passe de builder.
///
/// Initialisé à zéro pour chaque membre du pool ; ne fait que croître.
#[derive(Debug, Clone, Default)]
pub struct LoadCounter {
    counts: HashMap<String, u32>,
}

impl LoadCounter {
    pub fn new(pool: &[&Person]) -> Self {
        Self {
            counts: pool.iter().map(|p| (p.name.clone(), 0)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn bump(&mut self, name: &str) {
        *self.counts.entry(name.to_owned()).or_insert(0) += 1;
    }

    /// Écart max - min sur l'ensemble des compteurs.
    pub fn spread(&self) -> u32 {
        let max = self.counts.values().max().copied().unwrap_or(0);
        let min = self.counts.values().min().copied().unwrap_or(0);
        max - min
    }

    /// Nombre de personnes suivies.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

/// Paires (non ordonnées) déjà attablées ensemble pendant un run repas.
#[derive(Debug, Clone, Default)]
pub struct PairHistory {
    pairs: Vec<(String, String)>,
}

impl PairHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    pub fn record(&mut self, a: &str, b: &str) {
        self.pairs.push((a.to_owned(), b.to_owned()));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Premier membre du pool (dans l'ordre courant) ayant la charge minimale.
pub fn pick_least_loaded_for_duty<'a>(
    pool: &[&'a Person],
    loads: &LoadCounter,
) -> Option<&'a Person> {
    let min = pool.iter().map(|p| loads.get(&p.name)).min()?;
    pool.iter().copied().find(|p| loads.get(&p.name) == min)
}

/// Choisit un convive pour un créneau repas.
///
/// Ne retourne personne si tous les candidats à charge minimale formeraient
/// avec `first_pick` une paire déjà vue : on préfère un créneau incomplet à
/// une paire répétée, sans remonter vers une charge supérieure.
pub fn pick_least_loaded_for_pair<'a>(
    pool: &[&'a Person],
    excluded: &BTreeSet<String>,
    loads: &LoadCounter,
    already_in_slot: &[&str],
    first_pick: Option<&str>,
    history: &PairHistory,
) -> Option<&'a Person> {
    let available: Vec<&'a Person> = pool
        .iter()
        .copied()
        .filter(|p| !excluded.contains(&p.name))
        .filter(|p| !already_in_slot.contains(&p.name.as_str()))
        .collect();

    let min = available.iter().map(|p| loads.get(&p.name)).min()?;

    available
        .into_iter()
        .filter(|p| loads.get(&p.name) == min)
        .find(|p| match first_pick {
            Some(first) => !history.contains(first, &p.name),
            None => true,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(names: &[&str]) -> Vec<Person> {
        names.iter().map(|n| Person::new(*n)).collect()
    }

    #[test]
    fn duty_pick_takes_first_at_minimum() {
        let staff = people(&["A", "B", "C"]);
        let pool: Vec<&Person> = staff.iter().collect();
        let mut loads = LoadCounter::new(&pool);
        loads.bump("A");

        let picked = pick_least_loaded_for_duty(&pool, &loads).unwrap();
        assert_eq!(picked.name, "B");
    }

    #[test]
    fn duty_pick_on_empty_pool_is_none() {
        let loads = LoadCounter::default();
        assert!(pick_least_loaded_for_duty(&[], &loads).is_none());
    }

    #[test]
    fn pair_pick_skips_excluded_and_present() {
        let staff = people(&["A", "B", "C"]);
        let pool: Vec<&Person> = staff.iter().collect();
        let loads = LoadCounter::new(&pool);
        let excluded: BTreeSet<String> = ["A".to_string()].into();

        let picked =
            pick_least_loaded_for_pair(&pool, &excluded, &loads, &["B"], Some("B"), &PairHistory::new())
                .unwrap();
        assert_eq!(picked.name, "C");
    }

    #[test]
    fn pair_pick_refuses_repeat_instead_of_higher_load() {
        let staff = people(&["A", "B", "C"]);
        let pool: Vec<&Person> = staff.iter().collect();
        let mut loads = LoadCounter::new(&pool);
        loads.bump("A");
        loads.bump("C");
        let mut history = PairHistory::new();
        history.record("B", "A");

        // seul B est au minimum mais (A, B) a déjà mangé ensemble ; C est plus chargé
        let picked = pick_least_loaded_for_pair(
            &pool,
            &BTreeSet::new(),
            &loads,
            &["A"],
            Some("A"),
            &history,
        );
        assert!(picked.is_none());
    }

    #[test]
    fn pair_pick_uses_next_tie_candidate_when_first_repeats() {
        let staff = people(&["A", "B", "C"]);
        let pool: Vec<&Person> = staff.iter().collect();
        let loads = LoadCounter::new(&pool);
        let mut history = PairHistory::new();
        history.record("A", "B");

        let picked = pick_least_loaded_for_pair(
            &pool,
            &BTreeSet::new(),
            &loads,
            &["A"],
            Some("A"),
            &history,
        )
        .unwrap();
        assert_eq!(picked.name, "C");
    }

    #[test]
    fn earlier_partners_of_candidate_are_not_consulted() {
        let staff = people(&["A", "B", "C"]);
        let pool: Vec<&Person> = staff.iter().collect();
        let loads = LoadCounter::new(&pool);
        let mut history = PairHistory::new();
        history.record("A", "B");
        history.record("B", "C");

        // C a déjà mangé avec B, qui a mangé avec A : seule la paire (A, C) compte
        let picked = pick_least_loaded_for_pair(
            &pool,
            &BTreeSet::new(),
            &loads,
            &["A"],
            Some("A"),
            &history,
        )
        .unwrap();
        assert_eq!(picked.name, "C");
    }

    #[test]
    fn counter_spread_and_total() {
        let staff = people(&["A", "B"]);
        let pool: Vec<&Person> = staff.iter().collect();
        let mut loads = LoadCounter::new(&pool);
        assert_eq!(loads.spread(), 0);
        loads.bump("B");
        loads.bump("B");
        assert_eq!(loads.spread(), 2);
        assert_eq!(loads.total(), 2);
        assert_eq!(loads.get("A"), 0);
    }
}
