use auth_cell::models::RegisterRequest;

use crate::app::{App, Outcome, Screen};
use crate::screens::{confirm, prompt, prompt_with_default};

pub async fn show(app: &App) -> anyhow::Result<Outcome> {
    println!("\n--- Crear cuenta ---");

    let mut draft = RegisterRequest {
        firstname: String::new(),
        lastname: String::new(),
        email: String::new(),
        password: String::new(),
        role: "USER".to_string(),
    };

    loop {
        draft.firstname = prompt_with_default("Nombre", &draft.firstname)?;
        draft.lastname = prompt_with_default("Apellido", &draft.lastname)?;
        draft.email = prompt_with_default("Correo electrónico", &draft.email)?;
        draft.password = prompt("Contraseña")?;
        draft.role = prompt_with_default("Rol (USER/ADMIN)", &draft.role)?.to_uppercase();

        match app.auth.register(draft.clone()).await {
            Ok(()) => {
                println!("¡Registro exitoso! Inicie sesión para continuar.");
                return Ok(Outcome::Navigate(Screen::Login));
            }
            Err(e) => {
                println!("No se pudo registrar: {}", e);
                // The loaded fields survive the retry.
                if !confirm("¿Reintentar con los datos cargados?")? {
                    return Ok(Outcome::Navigate(Screen::Login));
                }
            }
        }
    }
}
