//! Intersection search: where could a word cross the current board?

use rand::seq::SliceRandom;
use rand::Rng;

use crate::words::Word;

use super::grid::Grid;
use super::types::Candidate;

/// Every (cell, letter index) pair where an occupied cell holds one of the word's letters.
///
/// Candidates come out in letter-then-occurrence order. Blank tiles never
/// produce candidates.
pub fn find_intersections(word: &Word, grid: &Grid) -> Vec<Candidate> {
    word.tiles()
        .iter()
        .enumerate()
        .flat_map(|(letter_index, tile)| {
            grid.all_occurrences(*tile).into_iter().map(move |index| {
                let (x, y) = grid.coords(index);
                Candidate::new(x, y, letter_index)
            })
        })
        .collect()
}

/// `find_intersections` followed by a uniform Fisher-Yates shuffle
pub fn shuffled_intersections<R: Rng + ?Sized>(
    word: &Word,
    grid: &Grid,
    rng: &mut R,
) -> Vec<Candidate> {
    let mut candidates = find_intersections(word, grid);
    candidates.shuffle(rng);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::Tile;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid_with_cat() -> Grid {
        let mut grid = Grid::new(7, 7);
        for (i, c) in "CAT".chars().enumerate() {
            grid.set(2 + i as isize, 3, Tile::Letter(c));
        }
        grid
    }

    #[test]
    fn test_candidates_in_letter_then_occurrence_order() {
        let grid = grid_with_cat();
        let word = Word::new("TACT").unwrap();
        let candidates = find_intersections(&word, &grid);
        assert_eq!(
            candidates,
            vec![
                Candidate::new(4, 3, 0),
                Candidate::new(3, 3, 1),
                Candidate::new(2, 3, 2),
                Candidate::new(4, 3, 3),
            ]
        );
    }

    #[test]
    fn test_no_shared_letters() {
        let grid = grid_with_cat();
        let word = Word::new("DOG").unwrap();
        assert!(find_intersections(&word, &grid).is_empty());
    }

    #[test]
    fn test_blank_never_intersects() {
        let mut grid = Grid::new(5, 5);
        grid.set(1, 1, Tile::Blank);
        let word = Word::new("A B").unwrap();
        assert!(find_intersections(&word, &grid).is_empty());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let grid = grid_with_cat();
        let word = Word::new("TACT").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut shuffled = shuffled_intersections(&word, &grid, &mut rng);
        let mut expected = find_intersections(&word, &grid);
        shuffled.sort_by_key(|c| (c.letter_index, c.x, c.y));
        expected.sort_by_key(|c| (c.letter_index, c.x, c.y));
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn test_shuffle_is_reproducible_with_seed() {
        let grid = grid_with_cat();
        let word = Word::new("TACT").unwrap();
        let a = shuffled_intersections(&word, &grid, &mut StdRng::seed_from_u64(42));
        let b = shuffled_intersections(&word, &grid, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_reaches_every_first_position() {
        let grid = grid_with_cat();
        let word = Word::new("CAT").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let candidates = shuffled_intersections(&word, &grid, &mut rng);
            seen.insert(candidates[0]);
        }
        assert_eq!(seen.len(), 3);
    }
}
