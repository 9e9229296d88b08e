use profile::DirectoryPrompt;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const MESSAGE: &str = "Plants vs Zombies GW2 folder not found! Please enter the folder manually:";

/// Asks for the game directory on a terminal. An empty answer declines.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> DirectoryPrompt for TerminalPrompt<R, W> {
    fn request_directory(&mut self) -> Option<PathBuf> {
        if let Err(e) = write!(self.output, "{} ", MESSAGE).and_then(|_| self.output.flush()) {
            tracing::warn!("Cannot write prompt: {}", e);
            return None;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => {
                let answer = answer.trim();
                (!answer.is_empty()).then(|| PathBuf::from(answer))
            }
            Err(e) => {
                tracing::warn!("Cannot read answer: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/games/gw2\n", Some("/games/gw2"))]
    #[case("  C:\\Games\\PvZ GW2  \r\n", Some("C:\\Games\\PvZ GW2"))]
    #[case("\n", None)]
    #[case("", None)]
    fn test_request_directory(#[case] input: &str, #[case] expected: Option<&str>) {
        let mut output = Vec::new();
        let mut prompt = TerminalPrompt::new(input.as_bytes(), &mut output);

        assert_eq!(prompt.request_directory(), expected.map(PathBuf::from));
        assert!(String::from_utf8(output).unwrap().starts_with(MESSAGE));
    }
}
