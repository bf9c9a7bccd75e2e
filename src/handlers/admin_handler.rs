use std::io::Write;

use crate::{
    app_state::AppState,
    auth::Route,
    errors::{AppError, AppResult},
    handlers::{
        console::{Console, LineInput},
        quiz_handler,
    },
    models::{
        domain::{quiz_question::OPTION_COUNT, Difficulty, Quiz},
        dto::request::{NewQuestionRequest, QuestionPayload, QuizRequest},
    },
};

pub async fn admin_dashboard<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
) -> AppResult<Option<Route>> {
    console.heading("Admin dashboard")?;

    match state.quiz_service.list_quizzes().await {
        Ok(quizzes) => {
            let questions = quizzes
                .iter()
                .map(|q| q.question_count)
                .fold(0u32, u32::saturating_add);
            console.say(format!("Quizzes: {} | Planned questions: {}", quizzes.len(), questions))?;
        }
        Err(err) => console.report(&err)?,
    }

    let Some(choice) = console.prompt("m = manage quizzes, c = create quiz, l = log out, q = quit:")? else {
        return Ok(None);
    };
    let route = match choice.as_str() {
        "q" => return Ok(None),
        "m" => Route::ManageQuizzes,
        "c" => Route::CreateQuiz,
        "l" => quiz_handler::log_out(console, state).await?,
        _ => Route::AdminDashboard,
    };
    Ok(Some(route))
}

pub async fn manage_quizzes<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
) -> AppResult<Option<Route>> {
    console.heading("Manage quizzes")?;

    let quizzes = match state.quiz_service.list_quizzes().await {
        Ok(quizzes) => quizzes,
        Err(err) => {
            console.say("Error fetching quizzes. Please try again later.")?;
            console.report(&err)?;
            return Ok(console.prompt("Press Enter to go back")?.map(|_| Route::AdminDashboard));
        }
    };
    for quiz in &quizzes {
        console.say(format!(
            "  #{} {} [{}] {} - {} questions, {} min",
            quiz.id,
            quiz.title,
            quiz.difficulty,
            quiz.category,
            quiz.question_count,
            quiz.duration_minutes
        ))?;
    }

    let Some(input) = console.prompt("e <id> edit, d <id> delete, a <id> add questions, k <id> edit questions, b = back:")? else {
        return Ok(None);
    };
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let id = parts.next().map(str::to_string);

    let route = match (command, id) {
        ("b", _) => Route::AdminDashboard,
        ("e", Some(id)) => Route::EditQuiz(id),
        ("a", Some(id)) => Route::AddQuestions(id),
        ("k", Some(id)) => Route::EditQuestions(id),
        ("d", Some(id)) => {
            if console.confirm("Are you sure you want to delete this quiz?")? {
                match state.quiz_service.delete_quiz(&id).await {
                    Ok(()) => console.say("Quiz deleted successfully")?,
                    Err(err) => console.report(&err)?,
                }
            }
            Route::ManageQuizzes
        }
        _ => Route::ManageQuizzes,
    };
    Ok(Some(route))
}

/// Reads the quiz form, offering `current` values as defaults.
fn read_quiz_form<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    current: Option<&Quiz>,
) -> AppResult<Option<QuizRequest>> {
    let default = |f: fn(&Quiz) -> String| current.map(f).unwrap_or_default();

    let mut answers = Vec::with_capacity(6);
    let fields: [(&str, String); 6] = [
        ("Title", default(|q| q.title.clone())),
        ("Description", default(|q| q.description.clone())),
        ("Difficulty (Easy/Medium/Hard)", default(|q| q.difficulty.to_string())),
        ("Category", default(|q| q.category.clone())),
        ("Duration (minutes)", default(|q| q.duration_minutes.to_string())),
        ("Number of questions", default(|q| q.question_count.to_string())),
    ];
    for (label, value) in fields {
        let Some(answer) = console.prompt_with_default(label, &value)? else {
            return Ok(None);
        };
        answers.push(answer);
    }

    let difficulty = Difficulty::parse(&answers[2]).unwrap_or_default();
    Ok(Some(QuizRequest {
        title: answers[0].clone(),
        description: answers[1].clone(),
        difficulty,
        category: answers[3].clone(),
        duration_minutes: answers[4].trim().parse().unwrap_or(0),
        question_count: answers[5].trim().parse().unwrap_or(0),
    }))
}

pub async fn create_quiz<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
) -> AppResult<Option<Route>> {
    console.heading("Create new quiz")?;

    let Some(request) = read_quiz_form(console, None)? else {
        return Ok(None);
    };
    match state.quiz_service.create_quiz(request).await {
        Ok(quiz) => {
            console.say("Quiz created successfully!")?;
            Ok(Some(Route::AddQuestions(quiz.id)))
        }
        Err(err) => {
            console.say("Something went wrong while creating the quiz.")?;
            console.report(&err)?;
            Ok(Some(Route::AdminDashboard))
        }
    }
}

pub async fn edit_quiz<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
    quiz_id: &str,
) -> AppResult<Option<Route>> {
    console.heading("Edit quiz")?;

    let quiz = match state.quiz_service.get_quiz(quiz_id).await {
        Ok(quiz) => quiz,
        Err(err) => {
            console.say("Error fetching quiz")?;
            console.report(&err)?;
            return Ok(Some(Route::ManageQuizzes));
        }
    };
    let Some(request) = read_quiz_form(console, Some(&quiz))? else {
        return Ok(None);
    };

    match state.quiz_service.update_quiz(quiz_id, request).await {
        Ok(_) => console.say("Quiz updated successfully!")?,
        Err(err) => console.report(&err)?,
    }
    Ok(Some(Route::ManageQuizzes))
}

fn read_question<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    position: usize,
) -> AppResult<Option<NewQuestionRequest>> {
    let Some(text) = console.prompt(&format!("Question {}:", position))? else {
        return Ok(None);
    };

    let mut options = Vec::with_capacity(OPTION_COUNT);
    for n in 1..=OPTION_COUNT {
        let Some(option) = console.prompt(&format!("  Option {}:", n))? else {
            return Ok(None);
        };
        options.push(option);
    }

    let Some(correct) = console.prompt("  Correct option (1-4):")? else {
        return Ok(None);
    };
    let correct_index = correct
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|idx| *idx < OPTION_COUNT);

    Ok(Some(NewQuestionRequest {
        text,
        options,
        correct_index,
    }))
}

pub async fn add_questions<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
    quiz_id: &str,
) -> AppResult<Option<Route>> {
    console.heading(format!("Add questions to quiz #{}", quiz_id))?;

    let mut batch = Vec::new();
    loop {
        let Some(question) = read_question(console, batch.len() + 1)? else {
            return Ok(None);
        };
        batch.push(question);

        if !console.confirm("Add another question?")? {
            break;
        }
    }

    match state.question_service.add_questions(quiz_id, batch).await {
        Ok(created) => {
            console.say(format!("{} questions added successfully!", created.len()))?;
            Ok(Some(Route::AdminDashboard))
        }
        Err(err @ AppError::ValidationError(_)) => {
            console.report(&err)?;
            Ok(Some(Route::AddQuestions(quiz_id.to_string())))
        }
        Err(err) => {
            console.say("Something went wrong while saving questions.")?;
            console.report(&err)?;
            Ok(Some(Route::AdminDashboard))
        }
    }
}

pub async fn edit_questions<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
    quiz_id: &str,
) -> AppResult<Option<Route>> {
    console.heading(format!("Questions of quiz #{}", quiz_id))?;

    let questions = match state.question_service.list_for_quiz(quiz_id).await {
        Ok(questions) => questions,
        Err(err) => {
            console.say("Failed to load questions.")?;
            console.report(&err)?;
            return Ok(Some(Route::ManageQuizzes));
        }
    };
    if questions.is_empty() {
        console.say("No questions yet.")?;
    }
    for question in &questions {
        console.say(format!("  #{} {}", question.id, question.text))?;
        console.say(format!(
            "      options: {} | correct: {}",
            question.options.join(" / "),
            question.correct_answer
        ))?;
    }

    let Some(input) = console.prompt("e <id> edit, d <id> delete, b = back:")? else {
        return Ok(None);
    };
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let target = parts
        .next()
        .and_then(|id| questions.iter().find(|q| q.id == id));

    match (command, target) {
        ("b", _) => return Ok(Some(Route::ManageQuizzes)),
        ("d", Some(question)) => {
            if console.confirm("Are you sure you want to delete this question?")? {
                match state.question_service.delete_question(&question.id).await {
                    Ok(()) => console.say("Question deleted successfully")?,
                    Err(err) => console.report(&err)?,
                }
            }
        }
        ("e", Some(question)) => {
            let Some(text) = console.prompt_with_default("Question", &question.text)? else {
                return Ok(None);
            };
            let mut options = Vec::with_capacity(question.options.len());
            for (n, current) in question.options.iter().enumerate() {
                let Some(option) =
                    console.prompt_with_default(&format!("  Option {}", n + 1), current)?
                else {
                    return Ok(None);
                };
                options.push(option);
            }
            let Some(correct_answer) =
                console.prompt_with_default("  Correct answer", &question.correct_answer)?
            else {
                return Ok(None);
            };

            let payload = QuestionPayload {
                quiz_id: question.quiz_id.clone(),
                text,
                options,
                correct_answer,
            };
            match state.question_service.update_question(&question.id, payload).await {
                Ok(_) => console.say("Question updated successfully")?,
                Err(err) => console.report(&err)?,
            }
        }
        _ => console.say("Unknown command or question id.")?,
    }
    Ok(Some(Route::EditQuestions(quiz_id.to_string())))
}
