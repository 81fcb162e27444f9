use dentist_cell::{CreateDentistRequest, Dentist, DentistError, UpdateDentistRequest};
use shared_utils::search::filter_records;

use crate::app::{App, Outcome, Screen};
use crate::screens::{command, confirm, force_logout, prompt_with_default};

pub async fn show(app: &App) -> anyhow::Result<Outcome> {
    let mut term = String::new();

    loop {
        let Some(token) = app.session.token() else {
            return Ok(force_logout(app));
        };

        let dentists = match app.dentists.list(&token).await {
            Ok(list) => list,
            Err(e) if e.is_auth() => return Ok(force_logout(app)),
            Err(e) => {
                println!("Error al cargar odontólogos: {}", e);
                Vec::new()
            }
        };

        let visible = filter_records(&dentists, &term);
        println!("\n--- Odontólogos ({}) ---", visible.len());
        if !term.trim().is_empty() {
            println!("(filtro: \"{}\")", term);
        }
        for d in &visible {
            println!(
                "  #{:<4} {:<28} Matrícula {}",
                d.id,
                d.full_name(),
                d.registration
            );
        }
        if visible.is_empty() {
            if dentists.is_empty() {
                println!("  No hay odontólogos registrados aún.");
            } else {
                println!("  No se encontraron resultados.");
            }
        }

        let input = command("odontologos")?;
        if input.is_empty() {
            continue;
        }
        if input == "salir" {
            return Ok(Outcome::Quit);
        }
        if input == "logout" {
            app.session.logout();
            return Ok(Outcome::Navigate(Screen::Login));
        }
        if let Some(next) = Screen::parse(&input) {
            if next != Screen::Dentists {
                return Ok(Outcome::Navigate(next));
            }
            continue;
        }

        let (cmd, arg) = match input.split_once(' ') {
            Some((c, a)) => (c, a.trim().to_string()),
            None => (input.as_str(), String::new()),
        };

        match cmd {
            "buscar" => term = arg,
            "limpiar" => term.clear(),
            "nuevo" => {
                if let Some(outcome) = create_dentist(app, &token).await? {
                    return Ok(outcome);
                }
            }
            "editar" => match arg.parse::<i64>() {
                Ok(id) => {
                    if let Some(outcome) = edit_dentist(app, &token, &dentists, id).await? {
                        return Ok(outcome);
                    }
                }
                Err(_) => println!("Uso: editar <id>"),
            },
            "eliminar" => match arg.parse::<i64>() {
                Ok(id) => {
                    if !confirm("¿Eliminar este odontólogo?")? {
                        continue;
                    }
                    match app.dentists.delete(id, &token).await {
                        Ok(()) => println!("Odontólogo eliminado."),
                        Err(e) if e.is_auth() => return Ok(force_logout(app)),
                        Err(DentistError::NotFound) => {
                            println!("No se encontró el odontólogo con id: {}", id)
                        }
                        Err(e) => println!("Error al eliminar odontólogo: {}", e),
                    }
                }
                Err(_) => println!("Uso: eliminar <id>"),
            },
            _ => {
                println!("Comandos: buscar <texto>, limpiar, nuevo, editar <id>, eliminar <id>");
                println!("Navegación: pacientes, odontologos, turnos, dashboard, logout, salir");
            }
        }
    }
}

async fn create_dentist(app: &App, token: &str) -> anyhow::Result<Option<Outcome>> {
    let mut draft = CreateDentistRequest {
        registration: String::new(),
        name: String::new(),
        last_name: String::new(),
    };

    loop {
        draft.registration = prompt_with_default("Matrícula", &draft.registration)?;
        draft.name = prompt_with_default("Nombre", &draft.name)?;
        draft.last_name = prompt_with_default("Apellido", &draft.last_name)?;

        match app.dentists.create(draft.clone(), token).await {
            Ok(dentist) => {
                println!("Odontólogo #{} registrado.", dentist.id);
                return Ok(None);
            }
            Err(e) if e.is_auth() => return Ok(Some(force_logout(app))),
            Err(e) => {
                println!("Error al guardar odontólogo: {}", e);
                if !confirm("¿Reintentar con los datos cargados?")? {
                    return Ok(None);
                }
            }
        }
    }
}

async fn edit_dentist(
    app: &App,
    token: &str,
    dentists: &[Dentist],
    id: i64,
) -> anyhow::Result<Option<Outcome>> {
    let Some(existing) = dentists.iter().find(|d| d.id == id) else {
        println!("No se encontró el odontólogo con id: {}", id);
        return Ok(None);
    };

    let mut draft = UpdateDentistRequest {
        id,
        registration: existing.registration.clone(),
        name: existing.name.clone(),
        last_name: existing.last_name.clone(),
    };

    loop {
        draft.registration = prompt_with_default("Matrícula", &draft.registration)?;
        draft.name = prompt_with_default("Nombre", &draft.name)?;
        draft.last_name = prompt_with_default("Apellido", &draft.last_name)?;

        match app.dentists.update(draft.clone(), token).await {
            Ok(dentist) => {
                println!("Odontólogo #{} actualizado.", dentist.id);
                return Ok(None);
            }
            Err(e) if e.is_auth() => return Ok(Some(force_logout(app))),
            Err(e) => {
                println!("Error al guardar odontólogo: {}", e);
                if !confirm("¿Reintentar con los datos cargados?")? {
                    return Ok(None);
                }
            }
        }
    }
}
