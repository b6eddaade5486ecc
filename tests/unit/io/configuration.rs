//! Tests for compiled-in field parameters and process constants

#[cfg(test)]
mod tests {
    use escapefield::io::configuration::{
        ALLOCATION_EXIT_CODE, CHUNK_ROWS, CONFIGURATION_EXIT_CODE, ESCAPE_RADIUS_SQUARED,
        ITERATIONS, LINE_SEPARATOR, MAX_X, MAX_Y, MIN_X, MIN_Y, OUTPUT_EXIT_CODE, RESOLUTION,
        USAGE_EXIT_CODE, VALUE_SEPARATOR,
    };

    // Tests plane region covers the classic view of the set
    // Verified by swapping min and max bounds
    #[test]
    fn test_plane_bounds() {
        assert!(MIN_X < MAX_X);
        assert!(MIN_Y < MAX_Y);
        assert!((MAX_X - MIN_X - 3.0).abs() < f64::EPSILON);
        assert!((MAX_Y - MIN_Y - 2.0).abs() < f64::EPSILON);
    }

    // Tests resolution and iteration cap values
    // Verified by changing constant values
    #[test]
    fn test_resolution_and_iterations() {
        assert_eq!(RESOLUTION, 3000);
        assert_eq!(ITERATIONS, 3000);
    }

    // Tests chunk size stays coarse enough to amortize scheduling
    // Verified by reducing chunk size
    #[test]
    fn test_chunk_rows() {
        assert_eq!(CHUNK_ROWS, 128);
    }

    // Tests escape threshold corresponds to |z| >= 2
    // Verified by using the unsquared radius
    #[test]
    fn test_escape_radius() {
        assert!((ESCAPE_RADIUS_SQUARED - 4.0).abs() < f64::EPSILON);
    }

    // Tests exit codes are nonzero and distinct
    // Verified by reusing a code
    #[test]
    fn test_exit_codes_distinct() {
        let codes = [
            USAGE_EXIT_CODE,
            OUTPUT_EXIT_CODE,
            ALLOCATION_EXIT_CODE,
            CONFIGURATION_EXIT_CODE,
        ];
        for (index, code) in codes.iter().enumerate() {
            assert_ne!(*code, 0);
            assert!(!codes.iter().skip(index + 1).any(|other| other == code));
        }
    }

    // Tests matrix separators
    // Verified by switching to semicolons
    #[test]
    fn test_separators() {
        assert_eq!(VALUE_SEPARATOR, b',');
        assert_eq!(LINE_SEPARATOR, b'\n');
    }
}
