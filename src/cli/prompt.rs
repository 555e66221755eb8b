//! Interactive prompt for study goals

use crate::application::ConfigPrompt;
use crate::domain::StudyConfig;
use std::io::{self, BufRead, Write};

/// Asks for study goals on stdin
pub struct StdinPrompt;

impl ConfigPrompt for StdinPrompt {
    fn prompt(&self) -> Option<StudyConfig> {
        let stdin = io::stdin();
        let mut stderr = io::stderr();
        read_study_config(&mut stdin.lock(), &mut stderr)
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Option<String> {
    write!(output, "{}", question).ok()?;
    output.flush().ok()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Read target time and grade; `None` on end of input or unparsable answers
pub fn read_study_config<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Option<StudyConfig> {
    writeln!(output, "No study configuration found.").ok()?;
    let target_time = ask(input, output, "Target time in years: ")?.parse().ok()?;
    let target_grade = ask(input, output, "Target grade (1.0-5.0): ")?
        .replace(',', ".")
        .parse()
        .ok()?;
    Some(StudyConfig::new(target_time, target_grade))
}
