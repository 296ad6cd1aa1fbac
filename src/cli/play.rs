//! Play command implementation
//!
//! Runs one quiz session on the terminal: each question gets its own
//! [`QuestionTimer`], the player's line of input races the timeout, and the
//! ledger scores whichever comes first.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::oneshot;

use cyberaware::config::Config;
use cyberaware::game::{GameLedger, MemoryXpStore, SessionSummary, XpStore};
use cyberaware::quiz::{Evaluation, Question, QuizDeck, QuizMode};
use cyberaware::timer::{progress_bar, QuestionTimer, TimerUrgency};

/// Options for `cyberaware play`
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub mode: QuizMode,
    pub limit: Option<usize>,
    /// Seconds per question, overriding the config
    pub duration: Option<u64>,
    /// Seed from the saved total but never write back
    pub ephemeral: bool,
}

/// How a question ended
#[derive(Debug, PartialEq)]
enum Outcome {
    Answered { choice: usize, elapsed: Duration },
    TimedOut,
    Quit,
}

pub async fn play_command(config_path: Option<&Path>, options: PlayOptions) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let duration = options
        .duration
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.question_duration());

    let deck = QuizDeck::new(options.mode, options.limit);
    if deck.is_empty() {
        bail!("No questions to play");
    }

    let file_store = config.xp_store();
    let mut ledger = if options.ephemeral {
        let seed = file_store.load().to_string();
        GameLedger::new(MemoryXpStore::with_raw(&seed))
    } else {
        GameLedger::new(file_store)
    };
    ledger.reset_session();

    tracing::debug!(
        "Starting {} session: {} questions, {:?} each",
        deck.mode().as_str(),
        deck.len(),
        duration
    );

    println!(
        "{} quiz: {} questions, {}s each. Rank: {} ({} XP)",
        deck.mode().as_str(),
        deck.len(),
        duration.as_secs(),
        ledger.rank(),
        ledger.total_xp()
    );
    println!("Answer with a number. Enter p to pause or resume, q to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    for (index, question) in deck.questions().iter().enumerate() {
        println!();
        print_question(index + 1, deck.len(), question);

        let outcome = ask(question, duration, &mut lines).await?;

        let (evaluation, elapsed) = match outcome {
            Outcome::Answered { choice, elapsed } => (question.evaluate(choice), elapsed),
            Outcome::TimedOut => {
                println!("Time's up!");
                (question.reveal(), duration)
            }
            Outcome::Quit => break,
        };

        let result = ledger.answer(
            evaluation.correct,
            elapsed.as_secs_f64(),
            question.difficulty(),
            config.game.base_points,
        );

        print_feedback(&evaluation, elapsed);
        for event in &result.events {
            println!("  {}", event);
        }
    }

    print_summary(&ledger.summary(config.game.pass_accuracy));
    Ok(())
}

/// Run the timer for one question and wait for an answer, a timeout, or quit
async fn ask<R>(
    question: &Question,
    duration: Duration,
    lines: &mut tokio::io::Lines<R>,
) -> Result<Outcome>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    let (timeout_tx, mut timeout_rx) = oneshot::channel();
    let timer = QuestionTimer::start(duration, move || {
        let _ = timeout_tx.send(());
    });
    let mut paused = false;

    loop {
        tokio::select! {
            fired = &mut timeout_rx => {
                // The sender is only dropped unsent if the timer task died
                fired.context("Question timer stopped without timing out")?;
                return Ok(Outcome::TimedOut);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    return Ok(Outcome::Quit);
                };
                let input = line.trim();

                if input.eq_ignore_ascii_case("q") {
                    return Ok(Outcome::Quit);
                }
                if input.eq_ignore_ascii_case("p") {
                    paused = !paused;
                    timer.set_paused(paused);
                    if paused {
                        println!("Paused. Enter p to resume.");
                    } else {
                        println!("Resumed. {}", remaining_hint(&timer, duration));
                    }
                    continue;
                }
                if paused {
                    println!("Paused. Enter p to resume.");
                    continue;
                }

                match question.parse_choice(input) {
                    Some(choice) => {
                        let elapsed = timer.elapsed();
                        timer.cancel();
                        return Ok(Outcome::Answered { choice, elapsed });
                    }
                    None => println!(
                        "Enter 1-{}. {}",
                        question.choices().len(),
                        remaining_hint(&timer, duration)
                    ),
                }
            }
        }
    }
}

fn remaining_hint(timer: &QuestionTimer, duration: Duration) -> String {
    let remaining = timer.remaining();
    let fraction = if duration.is_zero() {
        0.0
    } else {
        remaining.as_secs_f64() / duration.as_secs_f64()
    };
    let urgency = TimerUrgency::from_fraction(fraction);
    format!(
        "{} {}s left ({})",
        progress_bar(fraction, 10),
        remaining.as_secs_f64().ceil() as u64,
        urgency.as_str()
    )
}

fn print_question(number: usize, total: usize, question: &Question) {
    match question {
        Question::Scenario(s) => {
            println!("[{}/{}] {} - {} from {}", number, total, s.title, s.channel.label(), s.sender);
            for line in s.message.lines() {
                println!("  | {}", line);
            }
            println!("Is this message safe, suspicious, or a scam?");
        }
        Question::Legal(q) => {
            println!("[{}/{}] {}", number, total, q.question);
        }
    }

    for (i, choice) in question.choices().iter().enumerate() {
        println!("  {}) {}", i + 1, choice);
    }
}

fn print_feedback(evaluation: &Evaluation, elapsed: Duration) {
    if evaluation.correct {
        println!("Correct! ({:.1}s)", elapsed.as_secs_f64());
    } else {
        println!("Not quite. The answer was: {}", evaluation.expected);
    }

    println!("{}", evaluation.explanation);
    if !evaluation.red_flags.is_empty() {
        println!("Red flags:");
        for flag in evaluation.red_flags {
            println!("  - {}", flag);
        }
    }
    if let Some(advice) = evaluation.advice {
        println!("Tip: {}", advice);
    }
    if let Some(law) = evaluation.law {
        println!("Law: {}", law);
    }
}

fn print_summary(summary: &SessionSummary) {
    println!();
    println!("Session complete");
    println!(
        "  Score:       {}/{} ({}%)",
        summary.correct_answers, summary.total_answers, summary.accuracy
    );
    println!("  Best streak: {}", summary.best_streak);
    println!("  XP earned:   {}", summary.session_xp);
    println!("  Total XP:    {} ({})", summary.total_xp, summary.rank);
    if summary.passed {
        println!("  Result:      passed");
    } else {
        println!("  Result:      needs practice");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use cyberaware::content::LEGAL_QUESTIONS;

    fn first_legal() -> Question {
        Question::Legal(&LEGAL_QUESTIONS[0])
    }

    async fn ask_with_input(input: &str, duration: Duration) -> Outcome {
        let mut lines = Cursor::new(input.as_bytes().to_vec()).lines();
        tokio::time::timeout(Duration::from_secs(5), ask(&first_legal(), duration, &mut lines))
            .await
            .expect("ask should finish")
            .expect("ask should not fail")
    }

    #[tokio::test]
    async fn test_answer_is_parsed() {
        let outcome = ask_with_input("banana\n1\n", Duration::from_secs(30)).await;
        assert!(
            matches!(outcome, Outcome::Answered { choice: 0, .. }),
            "got {:?}",
            outcome
        );
    }

    #[tokio::test]
    async fn test_answers_rejected_while_paused() {
        // "1" arrives while paused and is ignored; then input ends
        let outcome = ask_with_input("p\n1\n", Duration::from_secs(30)).await;
        assert_eq!(outcome, Outcome::Quit);

        let outcome = ask_with_input("p\np\n2\n", Duration::from_secs(30)).await;
        assert!(
            matches!(outcome, Outcome::Answered { choice: 1, .. }),
            "got {:?}",
            outcome
        );
    }

    #[tokio::test]
    async fn test_quit_and_closed_input() {
        assert_eq!(ask_with_input("q\n", Duration::from_secs(30)).await, Outcome::Quit);
        assert_eq!(ask_with_input("", Duration::from_secs(30)).await, Outcome::Quit);
    }

    #[tokio::test]
    async fn test_timeout_without_input() {
        let (_writer, reader) = tokio::io::duplex(64);
        let mut lines = BufReader::new(reader).lines();

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            ask(&first_legal(), Duration::from_millis(50), &mut lines),
        )
        .await
        .expect("timer should fire")
        .expect("ask should not fail");

        assert_eq!(outcome, Outcome::TimedOut);
    }

    #[tokio::test]
    async fn test_huge_duration_does_not_time_out() {
        let (_writer, reader) = tokio::io::duplex(64);
        let mut lines = BufReader::new(reader).lines();

        let result = tokio::time::timeout(
            Duration::from_millis(300),
            ask(&first_legal(), Duration::from_secs(u64::MAX), &mut lines),
        )
        .await;

        assert!(result.is_err(), "expected no outcome, got {:?}", result);
    }
}
