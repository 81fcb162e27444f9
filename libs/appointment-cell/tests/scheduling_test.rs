use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::{
    AppointmentError, AppointmentService, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use shared_config::AppConfig;
use shared_gateway::ApiClient;
use shared_utils::test_utils::MockApiResponses;

fn service_for(server: &MockServer) -> AppointmentService {
    let config = AppConfig {
        api_base_url: server.uri(),
        credentials_path: std::env::temp_dir().join("unused-credential"),
    };
    AppointmentService::new(Arc::new(ApiClient::new(&config)))
}

fn at(y: i32, m: u32, d: u32, hour: u32, min: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

#[tokio::test]
async fn check_availability_queries_dentist_and_timestamp() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/turnos/check-availability"))
        .and(query_param("dentistId", "7"))
        .and(query_param("dateTime", "2025-06-01T10:00"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let available = service
        .check_availability(7, at(2025, 6, 1, 10, 0), "tok")
        .await
        .unwrap();

    assert!(available);
}

#[tokio::test]
async fn schedule_creates_when_the_slot_is_free() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/turnos/check-availability"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/turnos"))
        .and(body_json(json!({
            "patient_id": 3,
            "dentist_id": 7,
            "date": "2025-06-01T10:00:00"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockApiResponses::appointment_json(12, 3, 7, "2025-06-01T10:00")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let appointment = service
        .schedule(
            CreateAppointmentRequest {
                patient_id: 3,
                dentist_id: 7,
                date: at(2025, 6, 1, 10, 0),
            },
            "tok",
        )
        .await
        .unwrap();

    assert_eq!(appointment.id, 12);
    assert_eq!(appointment.date, at(2025, 6, 1, 10, 0));
}

#[tokio::test]
async fn schedule_never_creates_into_a_taken_slot() {
    let server = MockServer::start().await;

    // Dentist 7 already has an appointment at 10:15; the server answers
    // "occupied" for 10:00, which falls inside the 30-minute slot.
    Mock::given(method("GET"))
        .and(path("/turnos/check-availability"))
        .and(query_param("dentistId", "7"))
        .and(query_param("dateTime", "2025-06-01T10:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(false)))
        .expect(1)
        .mount(&server)
        .await;

    // The create endpoint must not be touched.
    Mock::given(method("POST"))
        .and(path("/turnos"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .schedule(
            CreateAppointmentRequest {
                patient_id: 3,
                dentist_id: 7,
                date: at(2025, 6, 1, 10, 0),
            },
            "tok",
        )
        .await;

    assert_matches!(result.unwrap_err(), AppointmentError::SlotNotAvailable);
}

#[tokio::test]
async fn schedule_stops_when_the_check_itself_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/turnos/check-availability"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/turnos"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .schedule(
            CreateAppointmentRequest {
                patient_id: 3,
                dentist_id: 7,
                date: at(2025, 6, 1, 10, 0),
            },
            "tok",
        )
        .await;

    assert_matches!(result.unwrap_err(), AppointmentError::Api(_));
}

#[tokio::test]
async fn stale_precheck_surfaces_the_server_rejection() {
    let server = MockServer::start().await;

    // Another session raced us between check and create.
    Mock::given(method("GET"))
        .and(path("/turnos/check-availability"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/turnos"))
        .respond_with(ResponseTemplate::new(409).set_body_string("El horario ya está ocupado"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .schedule(
            CreateAppointmentRequest {
                patient_id: 3,
                dentist_id: 7,
                date: at(2025, 6, 1, 10, 0),
            },
            "tok",
        )
        .await;

    assert_matches!(
        result.unwrap_err(),
        AppointmentError::Api(shared_models::error::ApiError::Conflict(_))
    );
}

#[tokio::test]
async fn update_skips_the_availability_check() {
    let server = MockServer::start().await;

    // Editing must never consult the availability endpoint.
    Mock::given(method("GET"))
        .and(path("/turnos/check-availability"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(false)))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/turnos"))
        .and(body_json(json!({
            "id": 12,
            "patient_id": 3,
            "dentist_id": 7,
            "date": "2025-06-01T11:00:00"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockApiResponses::appointment_json(12, 3, 7, "2025-06-01T11:00")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let updated = service
        .update(
            UpdateAppointmentRequest {
                id: 12,
                patient_id: 3,
                dentist_id: 7,
                date: at(2025, 6, 1, 11, 0),
            },
            "tok",
        )
        .await
        .unwrap();

    assert_eq!(updated.date, at(2025, 6, 1, 11, 0));
}

#[tokio::test]
async fn list_parses_dates_with_and_without_seconds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/turnos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::appointment_json(1, 3, 7, "2025-06-01T10:15"),
            MockApiResponses::appointment_json(2, 4, 7, "2025-06-01T11:00:00"),
        ])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let appointments = service.list("tok").await.unwrap();

    assert_eq!(appointments.len(), 2);
    assert_eq!(appointments[0].date, at(2025, 6, 1, 10, 15));
    assert_eq!(appointments[1].date, at(2025, 6, 1, 11, 0));
}

#[tokio::test]
async fn delete_maps_missing_ids_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/turnos/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("No se encontró el turno con id: 99"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    assert_matches!(
        service.delete(99, "tok").await.unwrap_err(),
        AppointmentError::NotFound
    );
}

#[tokio::test]
async fn delete_succeeds_on_plain_text_confirmation() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/turnos/12"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Se eliminó el turno con id: 12"))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    service.delete(12, "tok").await.unwrap();
}
