use std::io::{BufRead, Write};

use crate::core::{
    ProjectError, ProjectResult,
    db::Hours,
};

/// Line-oriented prompt/answer exchange with the operator.
///
/// Blank answers come back as `None`. End of input reads as a blank answer,
/// which the menu treats as the request to quit.
pub struct InputCollector<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> InputCollector<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub fn read_line(&mut self, prompt: &str) -> ProjectResult<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        self.input.read_until(b'\n', &mut buf)?;

        // Invalid bytes are consumed along with the rest of the line.
        let line = String::from_utf8(buf).map_err(|e| {
            ProjectError::Validation(format!(
                "{} is not valid text.",
                String::from_utf8_lossy(e.as_bytes()).trim()
            ))
        })?;

        let trimmed = line.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }

    pub fn read_int(&mut self, prompt: &str) -> ProjectResult<Option<i64>> {
        self.read_line(prompt)?
            .map(|text| {
                text.parse::<i64>()
                    .map_err(|_| ProjectError::Validation(format!("{} is not a valid number.", text)))
            })
            .transpose()
    }

    pub fn read_decimal(&mut self, prompt: &str) -> ProjectResult<Option<Hours>> {
        self.read_line(prompt)?
            .map(|text| {
                text.parse::<Hours>().map_err(|_| {
                    ProjectError::Validation(format!("{} is not a valid decimal number.", text))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn collector(input: &str) -> InputCollector<Cursor<Vec<u8>>, Vec<u8>> {
        InputCollector::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(c: InputCollector<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(c.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_trims_and_prompts() {
        let mut c = collector("  Build shed  \n");
        assert_eq!(c.read_line("Enter the project name").unwrap().as_deref(), Some("Build shed"));
        assert_eq!(printed(c), "Enter the project name: ");
    }

    #[test]
    fn test_blank_input_is_absent() {
        let mut c = collector("\n   \n\t\n");
        assert_eq!(c.read_line("a").unwrap(), None);
        assert_eq!(c.read_int("b").unwrap(), None);
        assert_eq!(c.read_decimal("c").unwrap(), None);
    }

    #[test]
    fn test_end_of_input_is_absent() {
        let mut c = collector("");
        assert_eq!(c.read_line("a").unwrap(), None);
        assert_eq!(c.read_int("b").unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_a_validation_error() {
        let mut c = InputCollector::new(Cursor::new(b"ab\xff\nok\n".to_vec()), Vec::new());
        match c.read_line("a") {
            Err(ProjectError::Validation(msg)) => assert!(msg.ends_with("is not valid text."), "got {}", msg),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(c.read_line("b").unwrap().as_deref(), Some("ok"));
    }

    #[test]
    fn test_read_int_parses_numbers() {
        let mut c = collector("42\n -7 \n+3\n");
        assert_eq!(c.read_int("n").unwrap(), Some(42));
        assert_eq!(c.read_int("n").unwrap(), Some(-7));
        assert_eq!(c.read_int("n").unwrap(), Some(3));
    }

    #[test]
    fn test_read_int_reports_offending_text() {
        for text in ["abc", "4.5", "12x", "one two"] {
            let mut c = collector(&format!("{}\n", text));
            match c.read_int("n") {
                Err(ProjectError::Validation(msg)) => {
                    assert_eq!(msg, format!("{} is not a valid number.", text))
                }
                other => panic!("expected validation error for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_read_decimal_normalizes() {
        let mut c = collector("5.5\n10\n");
        assert_eq!(c.read_decimal("h").unwrap().unwrap().to_string(), "5.50");
        assert_eq!(c.read_decimal("h").unwrap().unwrap().to_string(), "10.00");
    }

    #[test]
    fn test_read_decimal_reports_offending_text() {
        let mut c = collector("lots\n");
        let err = c.read_decimal("h").unwrap_err();
        assert!(matches!(err, ProjectError::Validation(_)));
        assert_eq!(err.to_string(), "lots is not a valid decimal number.");
    }
}
