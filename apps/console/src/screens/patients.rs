use patient_cell::{Address, CreatePatientRequest, Patient, PatientError, UpdatePatientRequest};
use shared_utils::search::filter_records;

use crate::app::{App, Outcome, Screen};
use crate::notice::Notice;
use crate::screens::{command, confirm, force_logout, prompt_with_default};

pub async fn show(app: &App) -> anyhow::Result<Outcome> {
    let mut term = String::new();
    let mut notice: Option<Notice> = None;

    loop {
        let Some(token) = app.session.token() else {
            return Ok(force_logout(app));
        };

        let patients = match app.patients.list(&token).await {
            Ok(list) => list,
            Err(e) if e.is_auth() => return Ok(force_logout(app)),
            Err(e) => {
                println!("Error al cargar pacientes: {}", e);
                Vec::new()
            }
        };

        let visible = filter_records(&patients, &term);
        println!("\n--- Pacientes ({}) ---", visible.len());
        if !term.trim().is_empty() {
            println!("(filtro: \"{}\")", term);
        }
        for p in &visible {
            println!(
                "  #{:<4} {:<28} DNI {:<12} {}",
                p.id,
                p.full_name(),
                p.card_identity,
                p.email
            );
        }
        if visible.is_empty() {
            if patients.is_empty() {
                println!("  No hay pacientes registrados aún.");
            } else {
                println!("  No se encontraron resultados.");
            }
        }
        if let Some(n) = notice.take() {
            if !n.is_expired() {
                println!("⚠ {}", n.message());
                notice = Some(n);
            }
        }

        let input = command("pacientes")?;
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
            if next != Screen::Patients {
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
                if let Some(outcome) = create_patient(app, &token, &mut notice).await? {
                    return Ok(outcome);
                }
            }
            "editar" => match arg.parse::<i64>() {
                Ok(id) => {
                    if let Some(outcome) = edit_patient(app, &token, &patients, id).await? {
                        return Ok(outcome);
                    }
                }
                Err(_) => println!("Uso: editar <id>"),
            },
            "eliminar" => match arg.parse::<i64>() {
                Ok(id) => {
                    if !confirm("¿Eliminar este paciente?")? {
                        continue;
                    }
                    match app.patients.delete(id, &token).await {
                        Ok(()) => println!("Paciente eliminado."),
                        Err(e) if e.is_auth() => return Ok(force_logout(app)),
                        Err(PatientError::NotFound) => {
                            println!("No se encontró el paciente con id: {}", id)
                        }
                        Err(e) => println!("Error al eliminar paciente: {}", e),
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

async fn create_patient(
    app: &App,
    token: &str,
    notice: &mut Option<Notice>,
) -> anyhow::Result<Option<Outcome>> {
    let mut draft = CreatePatientRequest {
        name: String::new(),
        last_name: String::new(),
        email: String::new(),
        card_identity: String::new(),
        address: Address::default(),
    };

    loop {
        draft.name = prompt_with_default("Nombre", &draft.name)?;
        draft.last_name = prompt_with_default("Apellido", &draft.last_name)?;
        draft.email = prompt_with_default("Correo electrónico", &draft.email)?;
        draft.card_identity = prompt_with_default("Documento", &draft.card_identity)?;
        draft.address.street = prompt_with_default("Calle", &draft.address.street)?;
        draft.address.number = prompt_with_default("Número", &draft.address.number)?;
        draft.address.location = prompt_with_default("Localidad", &draft.address.location)?;
        draft.address.province = prompt_with_default("Provincia", &draft.address.province)?;

        match app.patients.create(draft.clone(), token).await {
            Ok(patient) => {
                println!("Paciente #{} registrado.", patient.id);
                return Ok(None);
            }
            Err(PatientError::DuplicateIdentity(msg)) => {
                println!("⚠ {}", msg);
                *notice = Some(Notice::new(msg));
                // The loaded fields survive so only the document needs fixing.
                if !confirm("¿Corregir los datos cargados?")? {
                    return Ok(None);
                }
            }
            Err(e) if e.is_auth() => return Ok(Some(force_logout(app))),
            Err(e) => {
                println!("Error al guardar paciente: {}", e);
                if !confirm("¿Reintentar con los datos cargados?")? {
                    return Ok(None);
                }
            }
        }
    }
}

async fn edit_patient(
    app: &App,
    token: &str,
    patients: &[Patient],
    id: i64,
) -> anyhow::Result<Option<Outcome>> {
    let Some(existing) = patients.iter().find(|p| p.id == id) else {
        println!("No se encontró el paciente con id: {}", id);
        return Ok(None);
    };

    let mut draft = UpdatePatientRequest {
        id,
        name: existing.name.clone(),
        last_name: existing.last_name.clone(),
        email: existing.email.clone(),
        card_identity: existing.card_identity.clone(),
        address: existing.address.clone().unwrap_or_default(),
    };

    loop {
        draft.name = prompt_with_default("Nombre", &draft.name)?;
        draft.last_name = prompt_with_default("Apellido", &draft.last_name)?;
        draft.email = prompt_with_default("Correo electrónico", &draft.email)?;
        draft.card_identity = prompt_with_default("Documento", &draft.card_identity)?;
        draft.address.street = prompt_with_default("Calle", &draft.address.street)?;
        draft.address.number = prompt_with_default("Número", &draft.address.number)?;
        draft.address.location = prompt_with_default("Localidad", &draft.address.location)?;
        draft.address.province = prompt_with_default("Provincia", &draft.address.province)?;

        match app.patients.update(draft.clone(), token).await {
            Ok(()) => {
                println!("Paciente actualizado.");
                return Ok(None);
            }
            Err(e) if e.is_auth() => return Ok(Some(force_logout(app))),
            Err(e) => {
                println!("Error al guardar paciente: {}", e);
                if !confirm("¿Reintentar con los datos cargados?")? {
                    return Ok(None);
                }
            }
        }
    }
}
