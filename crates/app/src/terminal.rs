//! Line-based presentation of the quiz for terminals.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use quiz_core::model::{Level, Score, SessionPhase};
use services::{QuizSessionController, TracingObserver, WordBankProvider};

/// What happened during a terminal run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayReport {
    pub completed: Vec<Score>,
}

enum AfterResult {
    PlayAgain,
    Menu,
    Quit,
}

pub struct TerminalPlayer<R, W> {
    word_banks: Arc<dyn WordBankProvider>,
    controller: QuizSessionController,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPlayer<R, W> {
    pub fn new(word_banks: Arc<dyn WordBankProvider>, input: R, output: W) -> Self {
        Self {
            word_banks,
            controller: QuizSessionController::new().with_observer(TracingObserver),
            input,
            output,
        }
    }

    /// Play until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(mut self, start_level: Option<Level>) -> Result<PlayReport> {
        let mut report = PlayReport::default();
        let mut next_level = start_level;

        loop {
            let level = match next_level.take() {
                Some(level) => level,
                None => match self.pick_level()? {
                    Some(level) => level,
                    None => return Ok(report),
                },
            };
            let bank = self
                .word_banks
                .bank(level)
                .with_context(|| format!("loading level {level}"))?;
            self.controller.select_level(bank);

            loop {
                if !self.play_round()? {
                    return Ok(report);
                }
                let score = self.controller.score();
                report.completed.push(score);
                writeln!(self.output, "\nTebrikler! Doğru Cevaplar: {score}")?;

                match self.ask_after_result()? {
                    AfterResult::PlayAgain => self.controller.play_again()?,
                    AfterResult::Menu => {
                        self.controller.return_to_menu();
                        break;
                    }
                    AfterResult::Quit => return Ok(report),
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn pick_level(&mut self) -> Result<Option<Level>> {
        let levels = self.word_banks.levels();
        writeln!(self.output, "Kelime Oyunu")?;
        writeln!(self.output, "Başlamak için bir seviye seçin:")?;
        for (i, level) in levels.iter().enumerate() {
            writeln!(self.output, "  {}) {level}", i + 1)?;
        }

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }

            let picked = match line.parse::<usize>() {
                Ok(n) if (1..=levels.len()).contains(&n) => Some(levels[n - 1]),
                _ => line
                    .parse::<Level>()
                    .ok()
                    .filter(|level| levels.contains(level)),
            };
            match picked {
                Some(level) => return Ok(Some(level)),
                None => writeln!(self.output, "Geçersiz seviye: {line}")?,
            }
        }
    }

    /// Ask every question once. Returns false if input ended mid-round.
    fn play_round(&mut self) -> Result<bool> {
        while self.controller.phase() == SessionPhase::InProgress {
            let progress = self.controller.progress();
            let (term, choices, answer) = {
                let question = self.controller.current_question()?;
                let answer = self
                    .controller
                    .active_bank()
                    .and_then(|bank| bank.answer(question.term))
                    .unwrap_or_default()
                    .to_string();
                (question.term.to_string(), question.choices.to_vec(), answer)
            };

            writeln!(self.output, "\n[{}/{}] {term}", progress.position, progress.total)?;
            for (i, choice) in choices.iter().enumerate() {
                writeln!(self.output, "  {}) {choice}", i + 1)?;
            }

            let choice = loop {
                write!(self.output, "> ")?;
                self.output.flush()?;
                let Some(line) = self.read_line()? else {
                    return Ok(false);
                };
                if line.is_empty() {
                    continue;
                }
                break match line.parse::<usize>() {
                    Ok(n) if (1..=choices.len()).contains(&n) => choices[n - 1].clone(),
                    _ => line,
                };
            };

            let outcome = self.controller.submit_answer(&choice)?;
            if outcome.is_correct {
                writeln!(self.output, "Doğru!")?;
            } else {
                writeln!(self.output, "Yanlış! Doğru cevap: {answer}")?;
            }
        }
        Ok(true)
    }

    fn ask_after_result(&mut self) -> Result<AfterResult> {
        loop {
            write!(self.output, "[t] Tekrar  [m] Menü  [q] Çıkış > ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(AfterResult::Quit);
            };
            match line.to_lowercase().as_str() {
                "t" | "tekrar" => return Ok(AfterResult::PlayAgain),
                "m" | "menü" | "menu" => return Ok(AfterResult::Menu),
                "q" => return Ok(AfterResult::Quit),
                _ => continue,
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
