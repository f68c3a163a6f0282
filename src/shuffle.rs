use rand::Rng;

/// Permutation uniforme en place (Fisher–Yates).
///
/// Pour `i` du dernier indice jusqu'à 1, tire `j` uniforme dans `[0, i]` et
/// échange `i` et `j`. Sans effet sur une séquence vide ou d'un élément.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_and_singleton_are_untouched() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec!["solo"];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec!["solo"]);
    }

    #[test]
    fn same_seed_same_permutation() {
        let base: Vec<u32> = (0..20).collect();

        let mut a = base.clone();
        shuffle(&mut a, &mut StdRng::seed_from_u64(42));
        let mut b = base.clone();
        shuffle(&mut b, &mut StdRng::seed_from_u64(42));

        assert_eq!(a, b);
        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, base);
    }

    #[test]
    fn positions_are_roughly_uniform() {
        const N: usize = 4;
        const RUNS: u64 = 8_000;
        let mut counts = [[0u32; N]; N];

        for seed in 0..RUNS {
            let mut items: Vec<usize> = (0..N).collect();
            shuffle(&mut items, &mut StdRng::seed_from_u64(seed));
            for (pos, item) in items.iter().enumerate() {
                counts[*item][pos] += 1;
            }
        }

        let expected = RUNS as f64 / N as f64;
        for row in counts.iter() {
            for &c in row.iter() {
                let ratio = f64::from(c) / expected;
                assert!((0.9..1.1).contains(&ratio), "ratio {ratio} out of bounds");
            }
        }
    }
}
