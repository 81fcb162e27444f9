use auth_cell::models::AuthError;

use crate::app::{App, Outcome, Screen};
use crate::screens::{prompt, prompt_with_default};

pub async fn show(app: &App) -> anyhow::Result<Outcome> {
    println!("\n--- Iniciar sesión ---");
    println!("(comandos: registro, salir)");

    let mut email = String::new();
    loop {
        let input = prompt_with_default("Correo electrónico", &email)?;
        match input.as_str() {
            "salir" => return Ok(Outcome::Quit),
            "registro" => return Ok(Outcome::Navigate(Screen::Register)),
            _ => email = input,
        }

        let password = prompt("Contraseña")?;

        match app.auth.login(&email, &password).await {
            Ok(token) => {
                app.session.login(&token)?;
                println!("Sesión iniciada.");
                return Ok(Outcome::Navigate(Screen::Patients));
            }
            Err(AuthError::InvalidCredentials) => {
                // The email stays loaded for the retry.
                println!("Credenciales inválidas");
            }
            Err(e) => println!("Error al iniciar sesión: {}", e),
        }
    }
}
