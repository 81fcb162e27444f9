pub mod appointments;
pub mod dashboard;
pub mod dentists;
pub mod login;
pub mod patients;
pub mod register;

use std::io::{self, Write};

use crate::app::{App, Outcome, Screen};

pub(crate) fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Failed submissions re-prompt with the previous value preserved; an empty
/// answer keeps it, so the operator never retypes a whole form.
pub(crate) fn prompt_with_default(label: &str, default: &str) -> io::Result<String> {
    if default.is_empty() {
        return prompt(label);
    }

    print!("{} [{}]: ", label, default);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let value = line.trim();
    Ok(if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    })
}

pub(crate) fn command(screen: &str) -> io::Result<String> {
    print!("{}> ", screen);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub(crate) fn confirm(question: &str) -> io::Result<bool> {
    let answer = prompt(&format!("{} (s/n)", question))?;
    Ok(matches!(answer.to_lowercase().as_str(), "s" | "si" | "sí"))
}

/// A 401 from the API means the credential died server-side; treated exactly
/// like local expiry detection.
pub(crate) fn force_logout(app: &App) -> Outcome {
    println!("La sesión expiró. Vuelva a iniciar sesión.");
    app.session.logout();
    Outcome::Navigate(Screen::Login)
}
