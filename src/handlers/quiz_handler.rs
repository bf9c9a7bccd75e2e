use std::io::Write;

use crate::{
    app_state::AppState,
    auth::Route,
    errors::AppResult,
    handlers::console::{Console, LineInput},
    models::domain::quiz_attempt::PASS_THRESHOLD_PERCENT,
    services::{auth_service::landing_route, NavAction, QuizSession},
};

pub async fn user_dashboard<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
) -> AppResult<Option<Route>> {
    console.heading("Available quizzes")?;

    let quizzes = match state.quiz_service.list_quizzes().await {
        Ok(quizzes) => quizzes,
        Err(err) => {
            console.report(&err)?;
            Vec::new()
        }
    };
    if quizzes.is_empty() {
        console.say("No quizzes to show.")?;
    }
    for (idx, quiz) in quizzes.iter().enumerate() {
        console.say(format!(
            "{:>3}) {} [{}] {} - {} questions, {} min",
            idx + 1,
            quiz.title,
            quiz.difficulty,
            quiz.category,
            quiz.question_count,
            quiz.duration_minutes
        ))?;
    }

    let Some(choice) = console.prompt("Quiz number, s = stats, r = refresh, l = log out, q = quit:")? else {
        return Ok(None);
    };
    let route = match choice.as_str() {
        "q" => return Ok(None),
        "s" => Route::UserStats,
        "l" => log_out(console, state).await?,
        other => match other.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
            Some(idx) if idx < quizzes.len() => Route::TakeQuiz(quizzes[idx].id.clone()),
            _ => Route::UserDashboard,
        },
    };
    Ok(Some(route))
}

pub async fn take_quiz<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
    quiz_id: &str,
) -> AppResult<Option<Route>> {
    console.blank()?;
    console.say("Preparing your quiz...")?;

    let loaded = match state.quiz_service.load_quiz(quiz_id).await {
        Ok(loaded) => loaded,
        Err(err) => {
            console.say("Quiz not found")?;
            console.report(&err)?;
            return Ok(Some(Route::UserDashboard));
        }
    };
    let mut session = QuizSession::new(loaded)?;

    let quiz = session.quiz().clone();
    console.heading(&quiz.title)?;
    if !quiz.description.is_empty() {
        console.say(&quiz.description)?;
    }
    console.say(format!(
        "Difficulty: {} | Category: {}",
        quiz.difficulty, quiz.category
    ))?;

    loop {
        show_question(console, &session)?;

        let forward = match session.primary_action() {
            NavAction::Next => "n = next",
            NavAction::Submit => "s = submit",
        };
        let back = if session.can_go_previous() {
            ", p = previous"
        } else {
            ""
        };
        let Some(input) = console.prompt(&format!("Option 1-4, {}{}, x = leave:", forward, back))? else {
            return Ok(None);
        };

        let outcome = match input.as_str() {
            "x" => return Ok(Some(Route::UserDashboard)),
            "p" => session.previous(),
            "n" if session.primary_action() == NavAction::Next => session.next(),
            "s" if session.primary_action() == NavAction::Submit => {
                match state.attempt_service.submit(&session).await {
                    Ok(_) => return Ok(Some(Route::QuizResult(quiz.id.clone()))),
                    Err(err) => Err(err),
                }
            }
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 => session.select_option(n - 1),
                _ => {
                    console.say("Unknown command.")?;
                    Ok(())
                }
            },
        };
        if let Err(err) = outcome {
            console.report(&err)?;
        }
    }
}

fn show_question<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    session: &QuizSession,
) -> AppResult<()> {
    let question = session.current_question();
    let selected = session.current_answer();

    console.blank()?;
    console.say(format!(
        "Question {} of {}",
        session.current_index() + 1,
        session.total_questions()
    ))?;
    console.say(&question.text)?;
    for (idx, option) in question.options.iter().enumerate() {
        let marker = if selected == Some(option.as_str()) { "*" } else { " " };
        console.say(format!("  {}{}) {}", marker, idx + 1, option))?;
    }
    Ok(())
}

pub async fn result_screen<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
    quiz_id: &str,
) -> AppResult<Option<Route>> {
    console.blank()?;

    match state.attempt_service.view_result(quiz_id).await {
        Ok(None) => console.say("No result found for this quiz")?,
        Err(err) => {
            console.say("Could not record your result.")?;
            console.report(&err)?;
        }
        Ok(Some(view)) => {
            console.heading("Quiz completed!")?;
            console.say(format!("Total questions:   {}", view.result.total_questions))?;
            console.say(format!("Correct answers:   {}", view.result.correct_answers))?;
            console.say(format!("Incorrect answers: {}", view.result.incorrect_answers))?;
            console.say(format!("Score: {}%", view.score_percent))?;
            if view.passed {
                console.say("Great job!")?;
            }
        }
    }

    Ok(console
        .prompt("Press Enter to return to the dashboard")?
        .map(|_| Route::UserDashboard))
}

pub async fn stats_screen<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
) -> AppResult<Option<Route>> {
    console.blank()?;
    let stats = match state.history_service.stats().await {
        Ok(stats) => stats,
        Err(err) => {
            console.say("Could not load your quiz history.")?;
            console.report(&err)?;
            return Ok(console
                .prompt("Press Enter to return to the dashboard")?
                .map(|_| Route::UserDashboard));
        }
    };

    if stats.is_empty() {
        console.say("No quiz history yet. Take some quizzes to see your stats here!")?;
    } else {
        console.heading("Your quiz history")?;
        let verdict = if stats.average_score >= PASS_THRESHOLD_PERCENT {
            "good"
        } else {
            "needs work"
        };
        console.say(format!(
            "Total attempts: {} | Average score: {:.1}% ({})",
            stats.total_attempts, stats.average_score, verdict
        ))?;
        console.say(format!(
            "{:<17} {:<24} {:>6} {:>8} {:>10} {:>6}",
            "Date", "Quiz", "Score", "Correct", "Incorrect", "Total"
        ))?;
        for entry in &stats.entries {
            console.say(format!(
                "{:<17} {:<24} {:>5.0}% {:>8} {:>10} {:>6}",
                entry.date.format("%Y-%m-%d %H:%M"),
                entry.display_title(),
                entry.percentage(),
                entry.correct_answers,
                entry.incorrect_answers,
                entry.total_questions
            ))?;
        }
    }

    Ok(console
        .prompt("Press Enter to return to the dashboard")?
        .map(|_| Route::UserDashboard))
}

/// Ends the session; a failed logout is shown and the user stays where they are.
pub(crate) async fn log_out<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
) -> AppResult<Route> {
    match state.auth_service.logout().await {
        Ok(()) => Ok(Route::Login),
        Err(err) => {
            console.report(&err)?;
            let user = state.auth_service.current_user().await.ok().flatten();
            Ok(user.map_or(Route::Login, |u| landing_route(u.role)))
        }
    }
}
