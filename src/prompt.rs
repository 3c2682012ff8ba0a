use std::io::{self, BufRead, Write};

/// Asks the operator before a destructive call goes out.
///
/// Handlers take this as a capability so tests can script the answer
/// instead of driving a console.
pub trait Confirmation {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Blocking y/N prompt reading one line from stdin. Anything but an
/// explicit yes declines, end-of-input included.
pub struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        print!("{} [y/N] ", question);
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Scripted answer that records every question it was asked.
#[cfg(test)]
pub struct ScriptedConfirmation {
    answer: bool,
    pub questions: Vec<String>,
}

#[cfg(test)]
impl ScriptedConfirmation {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            questions: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Confirmation for ScriptedConfirmation {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.questions.push(question.to_string());
        Ok(self.answer)
    }
}
