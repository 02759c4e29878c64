mod tests {
    use facet_light_composer::{
        ConfigurationError, PatternTable,
        fixture::deltohedron::{
            FIRST_LEVEL_PETALS, PIXELS_PER_PANEL, SECOND_LEVEL_PETALS, THIRD_LEVEL_PETALS,
        },
    };

    #[test]
    fn test_fixture_tables_are_valid() {
        for table in [FIRST_LEVEL_PETALS, SECOND_LEVEL_PETALS, THIRD_LEVEL_PETALS] {
            assert_eq!(table.validate(PIXELS_PER_PANEL), Ok(()));
        }
        assert_eq!(THIRD_LEVEL_PETALS.len(), 24);
        assert_eq!(THIRD_LEVEL_PETALS.segment_count(), 8);
        assert_eq!(FIRST_LEVEL_PETALS.segment_count(), 8);
    }

    #[test]
    fn test_segments() {
        assert_eq!(THIRD_LEVEL_PETALS.segment(0), Some(&[8, 3, 5][..]));
        assert_eq!(THIRD_LEVEL_PETALS.segment(7), Some(&[9, 1, 2][..]));
        assert_eq!(THIRD_LEVEL_PETALS.segment(8), None);
    }

    #[test]
    fn test_uneven_subsections_rejected() {
        let table = PatternTable::new(&[0; 26]).with_subsection_size(3);
        assert_eq!(
            table.validate_subsections(),
            Err(ConfigurationError::UnevenSubsections {
                len: 26,
                subsection_size: 3
            })
        );
        assert!(!table.is_valid_for(PIXELS_PER_PANEL));
    }

    #[test]
    fn test_zero_subsection_rejected() {
        let table = PatternTable::new(&[1, 2, 3]).with_subsection_size(0);
        assert_eq!(table.validate(27), Err(ConfigurationError::ZeroSubsection));
        assert_eq!(table.segment_count(), 0);
        assert_eq!(table.segment(0), None);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(
            PatternTable::new(&[]).validate(27),
            Err(ConfigurationError::EmptyTable)
        );
    }

    #[test]
    fn test_offset_out_of_range() {
        let table = PatternTable::new(&[0, 26, 27]);
        assert_eq!(
            table.validate(27),
            Err(ConfigurationError::OffsetOutOfRange {
                position: 2,
                offset: 27,
                region_size: 27
            })
        );
        assert_eq!(table.validate(28), Ok(()));
    }
}
