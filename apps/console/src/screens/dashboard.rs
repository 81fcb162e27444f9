use crate::app::{App, Outcome, Screen};
use crate::screens::{command, force_logout};
use crate::stats::ClinicStats;

pub async fn show(app: &App) -> anyhow::Result<Outcome> {
    loop {
        let Some(token) = app.session.token() else {
            return Ok(force_logout(app));
        };

        let patients = match app.patients.list(&token).await {
            Ok(list) => list,
            Err(e) if e.is_auth() => return Ok(force_logout(app)),
            Err(e) => {
                println!("Error al cargar estadísticas: {}", e);
                Vec::new()
            }
        };
        let dentists = match app.dentists.list(&token).await {
            Ok(list) => list,
            Err(e) if e.is_auth() => return Ok(force_logout(app)),
            Err(e) => {
                println!("Error al cargar estadísticas: {}", e);
                Vec::new()
            }
        };
        let appointments = match app.appointments.list(&token).await {
            Ok(list) => list,
            Err(e) if e.is_auth() => return Ok(force_logout(app)),
            Err(e) => {
                println!("Error al cargar estadísticas: {}", e);
                Vec::new()
            }
        };

        let stats = ClinicStats {
            patients: patients.len(),
            dentists: dentists.len(),
            appointments: appointments.len(),
        };

        println!("\n--- Dashboard Administrativo ---");
        println!("Pacientes registrados:             {:>6}", stats.patients);
        println!("Odontólogos:                       {:>6}", stats.dentists);
        println!("Turnos agendados:                  {:>6}", stats.appointments);
        println!(
            "Promedio de turnos por paciente:   {:>6.2}",
            stats.appointments_per_patient()
        );
        println!(
            "Promedio de turnos por odontólogo: {:>6.2}",
            stats.appointments_per_dentist()
        );

        let input = command("dashboard")?;
        if input.is_empty() || input == "actualizar" {
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
            if next != Screen::Dashboard {
                return Ok(Outcome::Navigate(next));
            }
            continue;
        }
        println!("Comandos: actualizar, pacientes, odontologos, turnos, logout, salir");
    }
}
