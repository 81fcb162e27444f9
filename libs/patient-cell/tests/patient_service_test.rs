use std::sync::Arc;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use patient_cell::{Address, CreatePatientRequest, PatientError, PatientService, UpdatePatientRequest};
use shared_config::AppConfig;
use shared_gateway::ApiClient;
use shared_utils::search::filter_records;
use shared_utils::test_utils::MockApiResponses;

fn service_for(server: &MockServer) -> PatientService {
    let config = AppConfig {
        api_base_url: server.uri(),
        credentials_path: std::env::temp_dir().join("unused-credential"),
    };
    PatientService::new(Arc::new(ApiClient::new(&config)))
}

fn sample_address() -> Address {
    Address {
        street: "Av. Rivadavia".to_string(),
        number: "1234".to_string(),
        location: "CABA".to_string(),
        province: "Buenos Aires".to_string(),
    }
}

#[tokio::test]
async fn lists_patients_with_the_bearer_credential() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pacientes"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::patient_json(1, "Ana", "Pérez", "30111222"),
            MockApiResponses::patient_json(2, "Juan", "Gómez", "28999000"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let patients = service.list("tok").await.unwrap();

    assert_eq!(patients.len(), 2);
    assert_eq!(patients[0].full_name(), "Ana Pérez");
    assert_eq!(patients[1].card_identity, "28999000");
}

#[tokio::test]
async fn creates_a_patient() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pacientes"))
        .and(body_json(json!({
            "name": "Ana",
            "lastName": "Pérez",
            "email": "ana@example.com",
            "cardIdentity": "30111222",
            "address": {
                "street": "Av. Rivadavia",
                "number": "1234",
                "location": "CABA",
                "province": "Buenos Aires"
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockApiResponses::patient_json(7, "Ana", "Pérez", "30111222")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let created = service
        .create(
            CreatePatientRequest {
                name: "Ana".to_string(),
                last_name: "Pérez".to_string(),
                email: "ana@example.com".to_string(),
                card_identity: "30111222".to_string(),
                address: sample_address(),
            },
            "tok",
        )
        .await
        .unwrap();

    assert_eq!(created.id, 7);
}

#[tokio::test]
async fn duplicate_identity_is_distinguishable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pacientes"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string("Ya existe un paciente registrado con este documento: 30111222"),
        )
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .create(
            CreatePatientRequest {
                name: "Ana".to_string(),
                last_name: "Pérez".to_string(),
                email: "ana@example.com".to_string(),
                card_identity: "30111222".to_string(),
                address: sample_address(),
            },
            "tok",
        )
        .await;

    assert_matches!(
        result.unwrap_err(),
        PatientError::DuplicateIdentity(msg) if msg.contains("30111222")
    );
}

#[tokio::test]
async fn other_validation_failures_stay_generic() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pacientes"))
        .respond_with(ResponseTemplate::new(400).set_body_string("email is mandatory"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .create(
            CreatePatientRequest {
                name: "Ana".to_string(),
                last_name: "Pérez".to_string(),
                email: String::new(),
                card_identity: "30111222".to_string(),
                address: sample_address(),
            },
            "tok",
        )
        .await;

    assert_matches!(result.unwrap_err(), PatientError::Api(_));
}

#[tokio::test]
async fn update_sends_the_id_in_the_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/pacientes"))
        .and(body_json(json!({
            "id": 7,
            "name": "Ana María",
            "lastName": "Pérez",
            "email": "ana@example.com",
            "cardIdentity": "30111222",
            "address": {
                "street": "Av. Rivadavia",
                "number": "1234",
                "location": "CABA",
                "province": "Buenos Aires"
            }
        })))
        // The upstream update endpoint returns no body.
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    service
        .update(
            UpdatePatientRequest {
                id: 7,
                name: "Ana María".to_string(),
                last_name: "Pérez".to_string(),
                email: "ana@example.com".to_string(),
                card_identity: "30111222".to_string(),
                address: sample_address(),
            },
            "tok",
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_maps_missing_ids_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/pacientes/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("No se encontró el paciente"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    assert_matches!(
        service.delete(99, "tok").await.unwrap_err(),
        PatientError::NotFound
    );
}

#[tokio::test]
async fn loaded_patients_filter_by_name_identity_and_email() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pacientes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::patient_json(1, "Ana", "Pérez", "30111222"),
            MockApiResponses::patient_json(2, "Juan", "Gómez", "28999000"),
        ])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let patients = service.list("tok").await.unwrap();

    assert_eq!(filter_records(&patients, "pérez").len(), 1);
    assert_eq!(filter_records(&patients, "28999").len(), 1);
    assert_eq!(filter_records(&patients, "juan@example.com").len(), 1);
    assert_eq!(filter_records(&patients, "").len(), 2);
}
