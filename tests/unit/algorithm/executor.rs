//! Tests for the generate-validate-retry driver

#[cfg(test)]
mod tests {
    use crate::ScriptedRandom;
    use streetmap::MapError;
    use streetmap::algorithm::executor::{GeneratorConfig, MapGenerator};
    use streetmap::algorithm::random::SeededRandom;

    fn config(width: usize, height: usize, max_attempts: Option<usize>) -> GeneratorConfig {
        GeneratorConfig {
            width,
            height,
            max_attempts,
        }
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();

        assert_eq!((config.width, config.height), (10, 5));
        assert_eq!(config.max_attempts, None);
    }

    // Tests the attempt cap stops a generator that never connects home
    // Verified by checking the cap after building the grid
    #[test]
    fn test_attempt_cap_is_reported() {
        // Exhausted scripts always close, so the start's east edge is cut
        let rng = ScriptedRandom::new(&[], &[]);
        let mut generator = MapGenerator::new(config(3, 1, Some(3)), rng);

        assert!(matches!(
            generator.generate(),
            Err(MapError::AttemptsExhausted { attempts: 3 })
        ));
    }

    // Tests an open collapse is accepted on the first attempt
    // Verified by discarding the first grid unconditionally
    #[test]
    fn test_first_valid_grid_is_accepted() {
        let rng = ScriptedRandom::new(&[true], &[]);
        let mut generator = MapGenerator::new(config(3, 1, Some(1)), rng);

        let map = generator.generate().expect("connected map");

        assert_eq!(map.attempts, 1);
        assert!(map.grid.cells().all(|cell| cell.is_on_path()));
    }

    // Tests the generator needs separate columns even though a grid does not
    // Verified by leaving the column check to grid construction
    #[test]
    fn test_invalid_dimensions_are_rejected() {
        let mut generator = MapGenerator::new(config(1, 5, None), SeededRandom::new(0));

        assert!(matches!(
            generator.generate(),
            Err(MapError::InvalidDimensions { width: 1, .. })
        ));

        let mut empty = MapGenerator::new(config(3, 0, None), SeededRandom::new(0));
        assert!(matches!(
            empty.generate(),
            Err(MapError::InvalidDimensions { height: 0, .. })
        ));
    }

    // Tests accepted maps are resolved, agree on every edge and connect home
    // Verified by returning the grid before validation
    #[test]
    fn test_generated_maps_are_valid() {
        let mut generator = MapGenerator::new(GeneratorConfig::default(), SeededRandom::new(11));

        for _ in 0..10 {
            let map = generator.generate().expect("unbounded attempts");
            let grid = &map.grid;

            assert!(map.attempts >= 1);
            assert!(grid.cells().all(|cell| cell.is_resolved()));
            assert!(grid.edge_conflicts().is_empty());
            assert!(grid.cell(grid.start()).expect("start").is_on_path());
            assert!(grid.cell(grid.home()).expect("home").is_on_path());
        }
    }

    // Tests one seed reproduces the same sequence of maps
    // Verified by reseeding between calls to generate
    #[test]
    fn test_seeded_sequence_is_reproducible() {
        let mut first = MapGenerator::new(GeneratorConfig::default(), SeededRandom::new(99));
        let mut second = MapGenerator::new(GeneratorConfig::default(), SeededRandom::new(99));

        for _ in 0..3 {
            let a = first.generate().expect("map");
            let b = second.generate().expect("map");
            assert_eq!(a.grid, b.grid);
            assert_eq!(a.attempts, b.attempts);
        }
        assert_eq!(first.rng().seed(), 99);
        assert_eq!(first.config(), &GeneratorConfig::default());
    }
}
