use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use appointment_cell::AppointmentService;
use auth_cell::{AuthService, GuardOutcome, RouteGuard, SessionStore};
use dentist_cell::DentistService;
use patient_cell::PatientService;
use shared_gateway::ApiClient;
use shared_models::auth::Session;

use crate::screens;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Patients,
    Dentists,
    Appointments,
    Dashboard,
}

impl Screen {
    pub fn guard(&self) -> RouteGuard {
        match self {
            Screen::Login | Screen::Register => RouteGuard::AnonymousOnly,
            Screen::Dashboard => RouteGuard::RequireAdmin,
            Screen::Patients | Screen::Dentists | Screen::Appointments => RouteGuard::RequireAuth,
        }
    }

    /// Navigation commands accepted from any screen.
    pub fn parse(input: &str) -> Option<Screen> {
        match input {
            "pacientes" => Some(Screen::Patients),
            "odontologos" | "odontólogos" => Some(Screen::Dentists),
            "turnos" => Some(Screen::Appointments),
            "dashboard" => Some(Screen::Dashboard),
            "login" => Some(Screen::Login),
            "registro" => Some(Screen::Register),
            _ => None,
        }
    }
}

/// What a screen asks the loop to do next.
pub enum Outcome {
    Navigate(Screen),
    Quit,
}

pub struct App {
    pub session: SessionStore,
    pub auth: AuthService,
    pub patients: PatientService,
    pub dentists: DentistService,
    pub appointments: AppointmentService,
    session_rx: watch::Receiver<Session>,
}

impl App {
    pub fn new(api: Arc<ApiClient>, session: SessionStore) -> Self {
        let session_rx = session.subscribe();
        Self {
            auth: AuthService::new(api.clone()),
            patients: PatientService::new(api.clone()),
            dentists: DentistService::new(api.clone()),
            appointments: AppointmentService::new(api),
            session,
            session_rx,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        // The landing screen; its guard bounces anonymous visitors to login.
        let mut target = Screen::Patients;

        loop {
            let screen = self.resolve(target);
            self.render_header();

            let outcome = match screen {
                Screen::Login => screens::login::show(self).await?,
                Screen::Register => screens::register::show(self).await?,
                Screen::Patients => screens::patients::show(self).await?,
                Screen::Dentists => screens::dentists::show(self).await?,
                Screen::Appointments => screens::appointments::show(self).await?,
                Screen::Dashboard => screens::dashboard::show(self).await?,
            };

            match outcome {
                Outcome::Navigate(next) => target = next,
                Outcome::Quit => break,
            }
        }

        Ok(())
    }

    /// Applies the target screen's guard to a fresh session read, following
    /// redirects until some screen admits the visitor. Converges in at most
    /// two hops: the login screen admits anonymous visitors and the landing
    /// screen admits any authenticated session.
    fn resolve(&self, target: Screen) -> Screen {
        let mut screen = target;
        loop {
            match screen.guard().evaluate(&self.session.current()) {
                GuardOutcome::Allow => return screen,
                GuardOutcome::RedirectToLogin => {
                    debug!("Guard redirected {:?} to login", screen);
                    screen = Screen::Login;
                }
                GuardOutcome::RedirectToLanding => {
                    debug!("Guard redirected {:?} to the landing screen", screen);
                    screen = Screen::Patients;
                }
            }
        }
    }

    /// Header line, fed by the session broadcast rather than a fresh read:
    /// observers resync on login/logout notifications.
    fn render_header(&mut self) {
        let session = self.session_rx.borrow_and_update().clone();
        if session.authenticated {
            let role = session
                .role
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("\n=== Clínica Dental — sesión activa [{}] ===", role);
        } else {
            println!("\n=== Clínica Dental ===");
        }
    }
}
