use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a shuffled copy, leaving the input untouched
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

pub fn random_item<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// Inclusive on both ends
pub fn random_in_range<R: Rng + ?Sized>(min: u32, max: u32, rng: &mut R) -> u32 {
    rng.gen_range(min..=max.max(min))
}

/// `correct` plus up to `count - 1` distinct distractors from `pool`, shuffled.
///
/// Fewer options come back when the pool runs out of distinct values.
pub fn unique_options<T, R, F>(correct: T, pool: &[T], count: usize, eq: F, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
    F: Fn(&T, &T) -> bool,
{
    let mut options = vec![correct];
    for item in shuffle(pool, rng) {
        if options.len() >= count {
            break;
        }
        if !options.iter().any(|o| eq(o, &item)) {
            options.push(item);
        }
    }
    options.shuffle(rng);
    options
}

/// One to three stars for a finished quiz
pub fn quiz_stars(score: u32, total_rounds: u32) -> u8 {
    if score >= total_rounds {
        3
    } else if score as f64 >= total_rounds as f64 * 0.7 {
        2
    } else {
        1
    }
}

/// One to three stars for a finished matching deck, fewer moves is better
pub fn matching_stars(moves: u32, pairs: usize) -> u8 {
    let pairs = pairs as u32;
    if moves <= pairs + 2 {
        3
    } else if moves <= pairs + 5 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffle_keeps_items() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut out = shuffle(&[1, 2, 3, 4, 5], &mut rng);
        out.sort();
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_random_item_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        assert_eq!(random_item(&empty, &mut rng), None);
    }

    #[test]
    fn test_random_in_range_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let n = random_in_range(2, 4, &mut rng);
            assert!((2..=4).contains(&n));
        }
        assert_eq!(random_in_range(5, 5, &mut rng), 5);
    }

    #[test]
    fn test_unique_options_contains_correct_once() {
        let mut rng = StdRng::seed_from_u64(9);
        let pool = [1, 2, 3, 4, 5, 6];
        let options = unique_options(3, &pool, 4, |a, b| a == b, &mut rng);

        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().filter(|&&o| o == 3).count(), 1);
        let mut deduped = options.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 4);
    }

    #[test]
    fn test_unique_options_small_pool() {
        let mut rng = StdRng::seed_from_u64(9);
        let options = unique_options('a', &['a', 'b'], 4, |a, b| a == b, &mut rng);
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_quiz_stars() {
        assert_eq!(quiz_stars(10, 10), 3);
        assert_eq!(quiz_stars(7, 10), 2);
        assert_eq!(quiz_stars(6, 10), 1);
        assert_eq!(quiz_stars(0, 1), 1);
    }

    #[test]
    fn test_matching_stars() {
        assert_eq!(matching_stars(6, 6), 3);
        assert_eq!(matching_stars(8, 6), 3);
        assert_eq!(matching_stars(11, 6), 2);
        assert_eq!(matching_stars(12, 6), 1);
    }
}
