use std::io::Write;

use crate::{
    app_state::AppState,
    auth::Route,
    errors::AppResult,
    handlers::console::{Console, LineInput},
    models::{
        domain::User,
        dto::{
            request::{LoginRequest, SignUpRequest},
            response::UserDto,
        },
    },
    services::auth_service::landing_route,
};

pub async fn login_screen<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
) -> AppResult<Option<Route>> {
    console.heading("Log in")?;
    console.say("Demo accounts: admin@example.com / admin123, user@example.com / user123")?;
    console.say("Leave the email empty to create an account, or type q to quit.")?;

    let Some(email) = console.prompt("Email:")? else {
        return Ok(None);
    };
    match email.as_str() {
        "q" => return Ok(None),
        "" => return Ok(Some(Route::SignUp)),
        _ => {}
    }
    let Some(password) = console.prompt_secret("Password:")? else {
        return Ok(None);
    };

    match state.auth_service.login(LoginRequest { email, password }).await {
        Ok(user) => {
            let route = greet(console, "Welcome back", user)?;
            Ok(Some(route))
        }
        Err(err) => {
            console.report(&err)?;
            Ok(Some(Route::Login))
        }
    }
}

pub async fn sign_up_screen<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    state: &AppState,
) -> AppResult<Option<Route>> {
    console.heading("Create an account")?;

    let mut fields = Vec::with_capacity(4);
    for (label, secret) in [
        ("Name:", false),
        ("Email:", false),
        ("Password:", true),
        ("Confirm password:", true),
    ] {
        let value = if secret {
            console.prompt_secret(label)?
        } else {
            console.prompt(label)?
        };
        let Some(value) = value else {
            return Ok(None);
        };
        fields.push(value);
    }
    let [name, email, password, confirm_password]: [String; 4] = match fields.try_into() {
        Ok(fields) => fields,
        Err(_) => return Ok(Some(Route::SignUp)),
    };

    let request = SignUpRequest {
        name,
        email,
        password,
        confirm_password,
    };
    match state.auth_service.sign_up(request).await {
        Ok(user) => {
            let route = greet(console, "Account created. Welcome", user)?;
            Ok(Some(route))
        }
        Err(err) => {
            console.report(&err)?;
            Ok(Some(Route::Login))
        }
    }
}

/// Prints the signed-in profile and picks the landing screen for its role.
fn greet<I: LineInput, W: Write>(
    console: &mut Console<I, W>,
    greeting: &str,
    user: User,
) -> AppResult<Route> {
    let profile = UserDto::from(user);
    console.say(format!(
        "{}, {}! Signed in as {} ({}).",
        greeting, profile.name, profile.email, profile.role
    ))?;
    Ok(landing_route(profile.role))
}
