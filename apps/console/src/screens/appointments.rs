use chrono::Local;

use appointment_cell::{
    Appointment, AppointmentError, ClinicRoster, CreateAppointmentRequest,
    UpdateAppointmentRequest, SLOT_MINUTES,
};
use shared_utils::datetime::{format_minutes, parse_flexible};
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

        // Appointments load together with both lookup collections so that
        // foreign keys resolve to names in the listing.
        let appointments = match app.appointments.list(&token).await {
            Ok(list) => list,
            Err(e) if e.is_auth() => return Ok(force_logout(app)),
            Err(e) => {
                println!("Error al cargar turnos: {}", e);
                Vec::new()
            }
        };
        let patients = match app.patients.list(&token).await {
            Ok(list) => list,
            Err(e) if e.is_auth() => return Ok(force_logout(app)),
            Err(e) => {
                println!("Error al cargar pacientes: {}", e);
                Vec::new()
            }
        };
        let dentists = match app.dentists.list(&token).await {
            Ok(list) => list,
            Err(e) if e.is_auth() => return Ok(force_logout(app)),
            Err(e) => {
                println!("Error al cargar odontólogos: {}", e);
                Vec::new()
            }
        };

        let roster = ClinicRoster::new(patients, dentists);
        let views = roster.views(&appointments);
        let visible = filter_records(&views, &term);

        println!("\n--- Turnos ({}) ---", visible.len());
        if !term.trim().is_empty() {
            println!("(filtro: \"{}\")", term);
        }
        for v in &visible {
            println!(
                "  #{:<4} {:<26} con {:<26} {}",
                v.appointment.id,
                v.patient_label,
                v.dentist_label,
                v.appointment.date.format("%d/%m/%Y %H:%M")
            );
        }
        if visible.is_empty() {
            if views.is_empty() {
                println!("  No hay turnos agendados aún.");
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

        let input = command("turnos")?;
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
            if next != Screen::Appointments {
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
                if let Some(outcome) = schedule_appointment(app, &roster, &token, &mut notice).await? {
                    return Ok(outcome);
                }
            }
            "editar" => match arg.parse::<i64>() {
                Ok(id) => {
                    if let Some(outcome) =
                        edit_appointment(app, &roster, &appointments, id, &token).await?
                    {
                        return Ok(outcome);
                    }
                }
                Err(_) => println!("Uso: editar <id>"),
            },
            "eliminar" => match arg.parse::<i64>() {
                Ok(id) => {
                    // Deletes demand interactive confirmation.
                    if !confirm("¿Eliminar este turno?")? {
                        continue;
                    }
                    match app.appointments.delete(id, &token).await {
                        Ok(()) => println!("Turno eliminado."),
                        Err(e) if e.is_auth() => return Ok(force_logout(app)),
                        Err(AppointmentError::NotFound) => {
                            println!("No se encontró el turno con id: {}", id)
                        }
                        Err(e) => println!("Error al eliminar turno: {}", e),
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

/// Booking a new appointment: advisory availability check first, create only
/// on a "free" answer. The conflict warning is transient and the loaded
/// fields survive, so only the slot needs changing.
async fn schedule_appointment(
    app: &App,
    roster: &ClinicRoster,
    token: &str,
    notice: &mut Option<Notice>,
) -> anyhow::Result<Option<Outcome>> {
    if roster.patients().is_empty() || roster.dentists().is_empty() {
        println!("Se necesita al menos un paciente y un odontólogo registrados.");
        return Ok(None);
    }

    println!("Pacientes:");
    for p in roster.patients() {
        println!("  #{:<4} {}", p.id, p.full_name());
    }
    println!("Odontólogos:");
    for d in roster.dentists() {
        println!("  #{:<4} {}", d.id, d.full_name());
    }

    let mut patient_field = String::new();
    let mut dentist_field = String::new();
    let mut date_field = String::new();

    loop {
        patient_field = prompt_with_default("Id del paciente", &patient_field)?;
        let Ok(patient_id) = patient_field.parse::<i64>() else {
            println!("Seleccione un paciente por id.");
            patient_field.clear();
            continue;
        };

        dentist_field = prompt_with_default("Id del odontólogo", &dentist_field)?;
        let Ok(dentist_id) = dentist_field.parse::<i64>() else {
            println!("Seleccione un odontólogo por id.");
            dentist_field.clear();
            continue;
        };

        date_field = prompt_with_default("Fecha y hora (AAAA-MM-DDTHH:MM)", &date_field)?;
        let Ok(date) = parse_flexible(&date_field) else {
            println!("Formato de fecha y hora inválido.");
            date_field.clear();
            continue;
        };

        // Advisory minimum-instant rule; the server stays the final arbiter.
        if date < Local::now().naive_local() {
            println!("Solo puede agendar turnos a partir de la fecha y hora actual.");
            date_field.clear();
            continue;
        }

        println!("Verificando disponibilidad...");
        let request = CreateAppointmentRequest {
            patient_id,
            dentist_id,
            date,
        };
        match app.appointments.schedule(request, token).await {
            Ok(appointment) => {
                println!(
                    "Turno #{} agendado para el {}.",
                    appointment.id,
                    appointment.date.format("%d/%m/%Y %H:%M")
                );
                return Ok(None);
            }
            Err(AppointmentError::SlotNotAvailable) => {
                let warning = format!(
                    "El horario seleccionado NO está disponible. Este odontólogo ya tiene una cita en ese horario (se consideran turnos de {} minutos).",
                    SLOT_MINUTES
                );
                println!("⚠ {}", warning);
                *notice = Some(Notice::new(warning));
                if !confirm("¿Probar con otro horario?")? {
                    return Ok(None);
                }
                date_field.clear();
            }
            Err(e) if e.is_auth() => return Ok(Some(force_logout(app))),
            Err(e) => {
                println!("Error al guardar turno: {}", e);
                if !confirm("¿Reintentar con los datos cargados?")? {
                    return Ok(None);
                }
            }
        }
    }
}

/// Editing goes straight to the update endpoint: no availability re-check.
async fn edit_appointment(
    app: &App,
    roster: &ClinicRoster,
    appointments: &[Appointment],
    id: i64,
    token: &str,
) -> anyhow::Result<Option<Outcome>> {
    let Some(existing) = appointments.iter().find(|a| a.id == id) else {
        println!("No se encontró el turno con id: {}", id);
        return Ok(None);
    };

    println!(
        "Editando turno #{} — {} con {}",
        id,
        roster.patient_label(existing.patient_id),
        roster.dentist_label(existing.dentist_id)
    );

    let mut patient_field = existing.patient_id.to_string();
    let mut dentist_field = existing.dentist_id.to_string();
    let mut date_field = format_minutes(&existing.date);

    loop {
        patient_field = prompt_with_default("Id del paciente", &patient_field)?;
        let Ok(patient_id) = patient_field.parse::<i64>() else {
            println!("Seleccione un paciente por id.");
            patient_field = existing.patient_id.to_string();
            continue;
        };

        dentist_field = prompt_with_default("Id del odontólogo", &dentist_field)?;
        let Ok(dentist_id) = dentist_field.parse::<i64>() else {
            println!("Seleccione un odontólogo por id.");
            dentist_field = existing.dentist_id.to_string();
            continue;
        };

        date_field = prompt_with_default("Fecha y hora (AAAA-MM-DDTHH:MM)", &date_field)?;
        let Ok(date) = parse_flexible(&date_field) else {
            println!("Formato de fecha y hora inválido.");
            date_field = format_minutes(&existing.date);
            continue;
        };

        if date < Local::now().naive_local() {
            println!("Solo puede agendar turnos a partir de la fecha y hora actual.");
            date_field = format_minutes(&existing.date);
            continue;
        }

        let request = UpdateAppointmentRequest {
            id,
            patient_id,
            dentist_id,
            date,
        };
        match app.appointments.update(request, token).await {
            Ok(updated) => {
                println!("Turno #{} actualizado.", updated.id);
                return Ok(None);
            }
            Err(e) if e.is_auth() => return Ok(Some(force_logout(app))),
            Err(AppointmentError::NotFound) => {
                println!("No se encontró el turno con id: {}", id);
                return Ok(None);
            }
            Err(e) => {
                println!("Error al guardar turno: {}", e);
                if !confirm("¿Reintentar con los datos cargados?")? {
                    return Ok(None);
                }
            }
        }
    }
}
