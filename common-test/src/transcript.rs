use std::{cell::RefCell, rc::Rc};

use common::output::SharedOutput;

/// In-memory sink standing in for stdout in tests.
#[derive(Clone, Default)]
pub struct Transcript {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> SharedOutput {
        self.buffer.clone()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }
}

#[cfg(test)]
mod tests {
    use common::output::write_line;

    use super::Transcript;

    #[test]
    fn test_transcript_collects_lines_from_every_handle() {
        // Given
        let transcript = Transcript::new();
        let first = transcript.output();
        let second = transcript.output();

        // When
        write_line(&first, "one").unwrap();
        write_line(&second, "two").unwrap();

        // Then
        assert_eq!(vec!["one", "two"], transcript.lines());
    }
}
