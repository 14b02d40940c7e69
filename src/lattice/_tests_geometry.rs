#[cfg(test)]
mod _tests_geometry {
    use super::super::geometry::PegasusGeometry;
    use crate::config::STANDARD_TILE_WIDTH;

    #[test]
    fn test_new_stores_parameters() {
        let geometry =
            PegasusGeometry::new(3, 2, vec![0.5, 1.5], vec![2.5, 3.5]).unwrap();

        assert_eq!(geometry.rows(), 3);
        assert_eq!(geometry.tile_width(), 2);
        assert_eq!(geometry.horizontal_offsets(), &[0.5, 1.5]);
        assert_eq!(geometry.vertical_offsets(), &[2.5, 3.5]);
    }

    #[test]
    fn test_new_rejects_zero_rows() {
        let result = PegasusGeometry::new(0, 2, vec![0.0, 1.0], vec![0.0, 1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_zero_tile_width() {
        let result = PegasusGeometry::new(2, 0, vec![], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_short_offset_tables() {
        // Horizontal table shorter than the tile width
        let result = PegasusGeometry::new(2, 3, vec![0.0, 1.0], vec![0.0, 1.0, 2.0]);
        assert!(result.is_err());

        // Vertical table shorter than the tile width
        let result = PegasusGeometry::new(2, 3, vec![0.0, 1.0, 2.0], vec![0.0, 1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_accepts_longer_offset_tables() {
        // Tables may cover more shifts than one tile uses
        let geometry = PegasusGeometry::new(1, 2, vec![0.0; 5], vec![0.0; 5]);
        assert!(geometry.is_ok());
    }

    #[test]
    fn test_standard_geometry() {
        let geometry = PegasusGeometry::standard(2).unwrap();

        assert_eq!(geometry.rows(), 2);
        assert_eq!(geometry.tile_width(), STANDARD_TILE_WIDTH);
        assert_eq!(geometry.horizontal_offsets().len(), STANDARD_TILE_WIDTH);
        assert_eq!(geometry.vertical_offsets().len(), STANDARD_TILE_WIDTH);

        // Offset tables of the standard family are staggered in opposite order
        assert_eq!(geometry.vertical_offsets()[0], 2.0);
        assert_eq!(geometry.vertical_offsets()[4], 6.0);
        assert_eq!(geometry.vertical_offsets()[8], 10.0);
        assert_eq!(geometry.horizontal_offsets()[0], 6.0);
        assert_eq!(geometry.horizontal_offsets()[4], 10.0);
        assert_eq!(geometry.horizontal_offsets()[8], 2.0);
    }
}
