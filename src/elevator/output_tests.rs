/*
 * Unit tests for the output formatter
 *
 * Tests:
 * - test_format_output_valid
 * - test_format_output_empty_sequence
 * - test_format_output_unbounded_floors
 * - test_print_output_writes_single_line
 * - test_print_output_reports_write_failure
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod output_tests {
    use crate::elevator::output::{format_output, print_output};
    use crate::shared::{ElevatorError, Floor, TravelTime, ValidationError};
    use num::BigUint;
    use std::io::{self, Write};

    struct FullSink;

    impl Write for FullSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn floors(values: &[u64]) -> Vec<Floor> {
        values.iter().map(|&value| Floor::from(value)).collect()
    }

    #[test]
    fn test_format_output_valid() {
        let cases = vec![
            (1, floors(&[1, 2, 3]), "1 1,2,3\n"),
            (560, floors(&[12, 2, 9, 1, 32]), "560 12,2,9,1,32\n"),
            (0, floors(&[4]), "0 4\n"),
            (199_999_999_980, floors(&[1, 10_000_000_000, 1]), "199999999980 1,10000000000,1\n"),
        ];

        for (time, visited, expected) in cases {
            // Act
            let line = format_output(&TravelTime::from(time), &visited).unwrap();

            // Assert
            assert_eq!(line, expected);
        }
    }

    #[test]
    fn test_format_output_empty_sequence() {
        // Act
        let result = format_output(&TravelTime::from(20), &[]);

        // Assert
        assert_eq!(result, Err(ValidationError::EmptySequence));
    }

    #[test]
    fn test_print_output_writes_single_line() {
        // Arrange
        let mut out: Vec<u8> = Vec::new();

        // Act
        print_output(&mut out, &TravelTime::from(30), &floors(&[1, 2, 3, 4])).unwrap();
        let empty = print_output(&mut out, &TravelTime::from(30), &[]);

        // Assert
        assert_eq!(String::from_utf8(out).unwrap(), "30 1,2,3,4\n");
        assert!(matches!(
            empty,
            Err(ElevatorError::Validation(ValidationError::EmptySequence))
        ));
    }

    #[test]
    fn test_format_output_unbounded_floors() {
        // Arrange
        let huge = "100000000000000000000".parse::<BigUint>().unwrap();
        let visited = vec![Floor::from(0), Floor(huge.clone())];

        // Act
        let line = format_output(&TravelTime(huge * 10u32), &visited).unwrap();

        // Assert
        assert_eq!(line, "1000000000000000000000 0,100000000000000000000\n");
    }

    #[test]
    fn test_print_output_reports_write_failure() {
        // Act
        let result = print_output(&mut FullSink, &TravelTime::from(10), &floors(&[1, 2]));

        // Assert
        assert!(matches!(result, Err(ElevatorError::Io(_))));
    }
}
