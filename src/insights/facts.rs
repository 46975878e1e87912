use rand::seq::SliceRandom;
use rand::Rng;

use crate::insights::constants::*;
use crate::models::NutritionReading;

/// Facts that speak to this particular reading, in fixed order.
pub fn relevant_facts(reading: &NutritionReading) -> Vec<&'static str> {
    let r = reading.sanitized();
    let mut facts = Vec::with_capacity(FACTS_PER_READING);

    if r.protein > GOOD_PROTEIN_G {
        facts.push(FACT_HIGH_PROTEIN);
    }
    if r.sodium > HIGH_SODIUM_MG {
        facts.push(FACT_HIGH_SODIUM);
    }
    if r.sugars < LOW_SUGAR_FACT_G {
        facts.push(FACT_LOW_SUGAR);
    }

    facts
}

/// Three distinct "Did you know?" facts for a reading, padded from the
/// generic pool with the thread-local RNG.
pub fn select_facts(reading: &NutritionReading) -> Vec<String> {
    select_facts_with(reading, &mut rand::thread_rng())
}

/// Same as [`select_facts`] with a caller-supplied random source.
///
/// Relevant facts come first; the remainder are uniform draws from
/// [`GENERIC_FACTS`], redrawn on duplicates.
pub fn select_facts_with<R: Rng + ?Sized>(reading: &NutritionReading, rng: &mut R) -> Vec<String> {
    let mut facts = relevant_facts(reading);

    while facts.len() < FACTS_PER_READING {
        let Some(&candidate) = GENERIC_FACTS.choose(rng) else {
            break;
        };
        if !facts.contains(&candidate) {
            facts.push(candidate);
        }
    }

    facts
        .into_iter()
        .take(FACTS_PER_READING)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_all_relevant_facts() {
        let reading = NutritionReading::new(0.0, 20.0, 0.0, 5.0, 0.0, 500.0);
        let mut rng = StdRng::seed_from_u64(7);
        let facts = select_facts_with(&reading, &mut rng);

        assert_eq!(facts, vec![FACT_HIGH_PROTEIN, FACT_HIGH_SODIUM, FACT_LOW_SUGAR]);
    }

    #[test]
    fn test_padding_is_distinct_and_from_pool() {
        // protein 10, sodium 200, sugars 30: no relevant facts
        let reading = NutritionReading::new(0.0, 10.0, 0.0, 30.0, 0.0, 200.0);
        assert!(relevant_facts(&reading).is_empty());

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let facts = select_facts_with(&reading, &mut rng);

            assert_eq!(facts.len(), 3);
            let unique: HashSet<&String> = facts.iter().collect();
            assert_eq!(unique.len(), 3);
            assert!(facts.iter().all(|f| GENERIC_FACTS.contains(&f.as_str())));
        }
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let reading = NutritionReading::new(0.0, 10.0, 0.0, 30.0, 0.0, 200.0);
        let a = select_facts_with(&reading, &mut StdRng::seed_from_u64(42));
        let b = select_facts_with(&reading, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_relevant_fact_thresholds_are_strict() {
        // protein 15, sodium 400, sugars 10: every threshold exactly met
        let at_limits = NutritionReading::new(0.0, 15.0, 0.0, 10.0, 0.0, 400.0);
        assert!(relevant_facts(&at_limits).is_empty());

        let just_past = NutritionReading::new(0.0, 15.5, 0.0, 9.9, 0.0, 400.5);
        assert_eq!(
            relevant_facts(&just_past),
            vec![FACT_HIGH_PROTEIN, FACT_HIGH_SODIUM, FACT_LOW_SUGAR]
        );
    }

    #[test]
    fn test_low_sugar_fact_alone() {
        let reading = NutritionReading::new(0.0, 10.0, 0.0, 9.9, 0.0, 200.0);
        let facts = select_facts_with(&reading, &mut StdRng::seed_from_u64(1));

        assert_eq!(facts[0], FACT_LOW_SUGAR);
        assert!(GENERIC_FACTS.contains(&facts[1].as_str()));
        assert!(GENERIC_FACTS.contains(&facts[2].as_str()));
    }
}
