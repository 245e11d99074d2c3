// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers for every salon endpoint.
//!
//! Each handler locks the shared salon for the whole call so operations never
//! interleave.

use crate::AppState;
use crate::error::HttpError;
use axum::{
    Json,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
};
use petgroom::{AppointmentFilter, Assignment, CoreError, GroomerFilter};
use petgroom_domain::formats::DATE_FORMAT;
use petgroom_domain::{
    Appointment, AppointmentId, AppointmentStatus, Client, ClientId, Commission, EntityKind,
    Groomer, GroomerId, Money, NewAppointment, NewClient, NewGroomer, NewPackage, NewPet,
    Package, PackageId, Pet, PetId, PointsRecord, ServiceType, TransportType, VaccineStatus,
    YearMonth,
};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::info;

type HandlerResult<T> = Result<Json<T>, HttpError>;
type CreatedResult<T> = Result<(StatusCode, Json<T>), HttpError>;

/// Optional month scope for ledger queries.
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    /// Month number, 1-12.
    month: Option<u8>,
    /// Calendar year.
    year: Option<i32>,
}

impl PeriodQuery {
    fn period(&self) -> Result<Option<YearMonth>, HttpError> {
        match (self.year, self.month) {
            (Some(year), Some(month)) => Ok(Some(YearMonth::from_numbers(year, month)?)),
            (None, None) => Ok(None),
            _ => Err(HttpError::bad_request(
                "month and year must be given together",
            )),
        }
    }
}

/// Query parameters for listing appointments.
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentQuery {
    /// Service day, `YYYY-MM-DD`.
    date: Option<String>,
    /// Lifecycle state.
    status: Option<AppointmentStatus>,
    /// Groomer identifier, or `unassigned`.
    groomer: Option<String>,
}

/// Query parameters for bulk auto-assignment.
#[derive(Debug, Default, Deserialize)]
pub struct AutoAssignQuery {
    /// Service day, `YYYY-MM-DD`. Defaults to today.
    date: Option<String>,
}

/// Query parameters for a price quote.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteQuery {
    /// Requested service.
    service_type: ServiceType,
    /// Package to price instead of the service.
    package_id: Option<String>,
    /// Transport arrangement.
    #[serde(default)]
    transport_type: TransportType,
}

/// Body for assigning a specific groomer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    /// The groomer to assign.
    pub groomer_id: String,
}

/// A pet's rabies vaccine standing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccineStatusResponse {
    /// The pet.
    pub pet_id: PetId,
    /// Vaccine standing today.
    pub status: VaccineStatus,
    /// Whether the vaccine is still valid.
    pub is_up_to_date: bool,
}

/// Open appointment count for a groomer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadResponse {
    /// The groomer.
    pub groomer_id: GroomerId,
    /// Waiting and in-progress appointments assigned.
    pub workload: usize,
}

/// Commission sum for a groomer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionTotalResponse {
    /// The groomer.
    pub groomer_id: GroomerId,
    /// Month scope, `YYYY-MM`, when one was requested.
    pub period: Option<String>,
    /// Sum of commission values in cents.
    pub total: Money,
}

/// Points records and their sum for a groomer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsResponse {
    /// The groomer.
    pub groomer_id: GroomerId,
    /// Month scope, `YYYY-MM`, when one was requested.
    pub period: Option<String>,
    /// Sum of points.
    pub total: u32,
    /// Matching records.
    pub records: Vec<PointsRecord>,
}

/// Price quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Resolved price in cents.
    pub price: Money,
}

fn parse_date(text: &str) -> Result<Date, HttpError> {
    Date::parse(text, DATE_FORMAT)
        .map_err(|_| HttpError::bad_request(format!("Invalid date '{text}': expected YYYY-MM-DD")))
}

fn require_groomer(groomer: Option<&Groomer>, groomer_id: &GroomerId) -> Result<(), HttpError> {
    if groomer.is_none() {
        return Err(CoreError::NotFound {
            entity: EntityKind::Groomer,
            id: groomer_id.to_string(),
        }
        .into());
    }
    Ok(())
}

// ----------------------------------------------------------------------
// Clients
// ----------------------------------------------------------------------

/// Handler for GET `/clients`.
pub async fn list_clients(AxumState(app_state): AxumState<AppState>) -> Json<Vec<Client>> {
    info!("Handling list_clients request");
    let salon = app_state.salon.lock().await;
    Json(salon.list_clients().to_vec())
}

/// Handler for POST `/clients`.
pub async fn create_client(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<NewClient>,
) -> CreatedResult<Client> {
    info!(tutor_name = %req.tutor_name, "Handling create_client request");
    let mut salon = app_state.salon.lock().await;
    let client: Client = salon.add_client(req)?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// Handler for PUT `/clients/{id}`.
pub async fn update_client(
    AxumState(app_state): AxumState<AppState>,
    Path(client_id): Path<String>,
    Json(req): Json<NewClient>,
) -> HandlerResult<Client> {
    info!(client_id = %client_id, "Handling update_client request");
    let mut salon = app_state.salon.lock().await;
    let client: Client = salon.update_client(req.with_id(ClientId::new(client_id)))?;
    Ok(Json(client))
}

/// Handler for DELETE `/clients/{id}`.
pub async fn delete_client(
    AxumState(app_state): AxumState<AppState>,
    Path(client_id): Path<String>,
) -> HandlerResult<Client> {
    info!(client_id = %client_id, "Handling delete_client request");
    let mut salon = app_state.salon.lock().await;
    let client: Client = salon.delete_client(&ClientId::new(client_id))?;
    Ok(Json(client))
}

/// Handler for GET `/clients/{id}/pets`.
pub async fn list_client_pets(
    AxumState(app_state): AxumState<AppState>,
    Path(client_id): Path<String>,
) -> HandlerResult<Vec<Pet>> {
    info!(client_id = %client_id, "Handling list_client_pets request");
    let salon = app_state.salon.lock().await;
    let pets: Vec<Pet> = salon
        .pets_for_client(&ClientId::new(client_id))?
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(pets))
}

// ----------------------------------------------------------------------
// Pets
// ----------------------------------------------------------------------

/// Handler for GET `/pets`.
pub async fn list_pets(AxumState(app_state): AxumState<AppState>) -> Json<Vec<Pet>> {
    info!("Handling list_pets request");
    let salon = app_state.salon.lock().await;
    Json(salon.list_pets().to_vec())
}

/// Handler for POST `/pets`.
pub async fn create_pet(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<NewPet>,
) -> CreatedResult<Pet> {
    info!(client_id = %req.client_id, name = %req.name, "Handling create_pet request");
    let mut salon = app_state.salon.lock().await;
    let pet: Pet = salon.add_pet(req)?;
    Ok((StatusCode::CREATED, Json(pet)))
}

/// Handler for PUT `/pets/{id}`.
pub async fn update_pet(
    AxumState(app_state): AxumState<AppState>,
    Path(pet_id): Path<String>,
    Json(req): Json<NewPet>,
) -> HandlerResult<Pet> {
    info!(pet_id = %pet_id, "Handling update_pet request");
    let mut salon = app_state.salon.lock().await;
    let pet: Pet = salon.update_pet(req.with_id(PetId::new(pet_id)))?;
    Ok(Json(pet))
}

/// Handler for DELETE `/pets/{id}`.
pub async fn delete_pet(
    AxumState(app_state): AxumState<AppState>,
    Path(pet_id): Path<String>,
) -> HandlerResult<Pet> {
    info!(pet_id = %pet_id, "Handling delete_pet request");
    let mut salon = app_state.salon.lock().await;
    let pet: Pet = salon.delete_pet(&PetId::new(pet_id))?;
    Ok(Json(pet))
}

/// Handler for GET `/pets/{id}/vaccine-status`.
pub async fn pet_vaccine_status(
    AxumState(app_state): AxumState<AppState>,
    Path(pet_id): Path<String>,
) -> HandlerResult<VaccineStatusResponse> {
    info!(pet_id = %pet_id, "Handling vaccine_status request");
    let salon = app_state.salon.lock().await;
    let pet_id: PetId = PetId::new(pet_id);
    let status: VaccineStatus = salon.vaccine_status(&pet_id)?;
    Ok(Json(VaccineStatusResponse {
        pet_id,
        status,
        is_up_to_date: status.is_up_to_date(),
    }))
}

// ----------------------------------------------------------------------
// Groomers
// ----------------------------------------------------------------------

/// Handler for GET `/groomers`.
pub async fn list_groomers(AxumState(app_state): AxumState<AppState>) -> Json<Vec<Groomer>> {
    info!("Handling list_groomers request");
    let salon = app_state.salon.lock().await;
    Json(salon.list_groomers().to_vec())
}

/// Handler for POST `/groomers`.
pub async fn create_groomer(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<NewGroomer>,
) -> CreatedResult<Groomer> {
    info!(name = %req.name, "Handling create_groomer request");
    let mut salon = app_state.salon.lock().await;
    let groomer: Groomer = salon.add_groomer(req)?;
    Ok((StatusCode::CREATED, Json(groomer)))
}

/// Handler for PUT `/groomers/{id}`.
pub async fn update_groomer(
    AxumState(app_state): AxumState<AppState>,
    Path(groomer_id): Path<String>,
    Json(req): Json<NewGroomer>,
) -> HandlerResult<Groomer> {
    info!(groomer_id = %groomer_id, "Handling update_groomer request");
    let mut salon = app_state.salon.lock().await;
    let groomer: Groomer = salon.update_groomer(req.with_id(GroomerId::new(groomer_id)))?;
    Ok(Json(groomer))
}

/// Handler for DELETE `/groomers/{id}`.
pub async fn delete_groomer(
    AxumState(app_state): AxumState<AppState>,
    Path(groomer_id): Path<String>,
) -> HandlerResult<Groomer> {
    info!(groomer_id = %groomer_id, "Handling delete_groomer request");
    let mut salon = app_state.salon.lock().await;
    let groomer: Groomer = salon.delete_groomer(&GroomerId::new(groomer_id))?;
    Ok(Json(groomer))
}

/// Handler for GET `/groomers/{id}/workload`.
pub async fn groomer_workload(
    AxumState(app_state): AxumState<AppState>,
    Path(groomer_id): Path<String>,
) -> HandlerResult<WorkloadResponse> {
    info!(groomer_id = %groomer_id, "Handling groomer_workload request");
    let salon = app_state.salon.lock().await;
    let groomer_id: GroomerId = GroomerId::new(groomer_id);
    let workload: usize = salon.groomer_workload(&groomer_id)?;
    Ok(Json(WorkloadResponse {
        groomer_id,
        workload,
    }))
}

/// Handler for GET `/groomers/{id}/commissions`.
pub async fn groomer_commissions(
    AxumState(app_state): AxumState<AppState>,
    Path(groomer_id): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> HandlerResult<Vec<Commission>> {
    info!(groomer_id = %groomer_id, "Handling groomer_commissions request");
    let period: Option<YearMonth> = query.period()?;
    let salon = app_state.salon.lock().await;
    let groomer_id: GroomerId = GroomerId::new(groomer_id);
    require_groomer(salon.get_groomer(&groomer_id), &groomer_id)?;
    let commissions: Vec<Commission> = salon
        .commissions_for_groomer(&groomer_id, period)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(commissions))
}

/// Handler for GET `/groomers/{id}/commissions/total`.
pub async fn groomer_commission_total(
    AxumState(app_state): AxumState<AppState>,
    Path(groomer_id): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> HandlerResult<CommissionTotalResponse> {
    info!(groomer_id = %groomer_id, "Handling groomer_commission_total request");
    let period: Option<YearMonth> = query.period()?;
    let salon = app_state.salon.lock().await;
    let groomer_id: GroomerId = GroomerId::new(groomer_id);
    require_groomer(salon.get_groomer(&groomer_id), &groomer_id)?;
    let total: Money = salon.commission_total(&groomer_id, period);
    Ok(Json(CommissionTotalResponse {
        groomer_id,
        period: period.map(|period| period.to_string()),
        total,
    }))
}

/// Handler for GET `/groomers/{id}/points`.
pub async fn groomer_points(
    AxumState(app_state): AxumState<AppState>,
    Path(groomer_id): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> HandlerResult<PointsResponse> {
    info!(groomer_id = %groomer_id, "Handling groomer_points request");
    let period: Option<YearMonth> = query.period()?;
    let salon = app_state.salon.lock().await;
    let groomer_id: GroomerId = GroomerId::new(groomer_id);
    require_groomer(salon.get_groomer(&groomer_id), &groomer_id)?;
    let records: Vec<PointsRecord> = salon
        .points_for_groomer(&groomer_id, period)
        .into_iter()
        .cloned()
        .collect();
    let total: u32 = salon.groomer_points(&groomer_id, period);
    Ok(Json(PointsResponse {
        groomer_id,
        period: period.map(|period| period.to_string()),
        total,
        records,
    }))
}

// ----------------------------------------------------------------------
// Packages
// ----------------------------------------------------------------------

/// Handler for GET `/packages`.
pub async fn list_packages(AxumState(app_state): AxumState<AppState>) -> Json<Vec<Package>> {
    info!("Handling list_packages request");
    let salon = app_state.salon.lock().await;
    Json(salon.list_packages().to_vec())
}

/// Handler for POST `/packages`.
pub async fn create_package(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<NewPackage>,
) -> CreatedResult<Package> {
    info!(name = %req.name, "Handling create_package request");
    let mut salon = app_state.salon.lock().await;
    let package: Package = salon.add_package(req)?;
    Ok((StatusCode::CREATED, Json(package)))
}

/// Handler for PUT `/packages/{id}`.
pub async fn update_package(
    AxumState(app_state): AxumState<AppState>,
    Path(package_id): Path<String>,
    Json(req): Json<NewPackage>,
) -> HandlerResult<Package> {
    info!(package_id = %package_id, "Handling update_package request");
    let mut salon = app_state.salon.lock().await;
    let package: Package = salon.update_package(req.with_id(PackageId::new(package_id)))?;
    Ok(Json(package))
}

/// Handler for DELETE `/packages/{id}`.
pub async fn delete_package(
    AxumState(app_state): AxumState<AppState>,
    Path(package_id): Path<String>,
) -> HandlerResult<Package> {
    info!(package_id = %package_id, "Handling delete_package request");
    let mut salon = app_state.salon.lock().await;
    let package: Package = salon.delete_package(&PackageId::new(package_id))?;
    Ok(Json(package))
}

// ----------------------------------------------------------------------
// Appointments
// ----------------------------------------------------------------------

/// Handler for GET `/appointments`.
pub async fn list_appointments(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<AppointmentQuery>,
) -> HandlerResult<Vec<Appointment>> {
    info!(
        date = ?query.date,
        status = ?query.status,
        groomer = ?query.groomer,
        "Handling list_appointments request"
    );
    let filter: AppointmentFilter = AppointmentFilter {
        date: query.date.as_deref().map(parse_date).transpose()?,
        status: query.status,
        groomer: match query.groomer.as_deref() {
            None | Some("") => GroomerFilter::Any,
            Some("unassigned") => GroomerFilter::Unassigned,
            Some(groomer_id) => GroomerFilter::Groomer(GroomerId::new(groomer_id)),
        },
    };
    let salon = app_state.salon.lock().await;
    let appointments: Vec<Appointment> = salon
        .filter_appointments(&filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(appointments))
}

/// Handler for POST `/appointments`.
pub async fn create_appointment(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<NewAppointment>,
) -> CreatedResult<Appointment> {
    info!(
        client_id = %req.client_id,
        pet_name = %req.pet_name,
        date = %req.date,
        "Handling create_appointment request"
    );
    let mut salon = app_state.salon.lock().await;
    let appointment: Appointment = salon.create_appointment(req)?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Handler for PUT `/appointments/{id}`.
///
/// An omitted `status` keeps the stored one.
pub async fn update_appointment(
    AxumState(app_state): AxumState<AppState>,
    Path(appointment_id): Path<String>,
    Json(req): Json<NewAppointment>,
) -> HandlerResult<Appointment> {
    info!(appointment_id = %appointment_id, "Handling update_appointment request");
    let mut salon = app_state.salon.lock().await;
    let appointment_id: AppointmentId = AppointmentId::new(appointment_id);
    let status: Option<AppointmentStatus> = req.status.or_else(|| {
        salon
            .get_appointment(&appointment_id)
            .map(|existing| existing.status)
    });
    let appointment: Appointment = salon.update_appointment(
        NewAppointment { status, ..req }.with_id(appointment_id),
    )?;
    Ok(Json(appointment))
}

/// Handler for DELETE `/appointments/{id}`.
pub async fn delete_appointment(
    AxumState(app_state): AxumState<AppState>,
    Path(appointment_id): Path<String>,
) -> HandlerResult<Appointment> {
    info!(appointment_id = %appointment_id, "Handling delete_appointment request");
    let mut salon = app_state.salon.lock().await;
    let appointment: Appointment = salon.delete_appointment(&AppointmentId::new(appointment_id))?;
    Ok(Json(appointment))
}

/// Handler for POST `/appointments/{id}/auto-assign`.
pub async fn auto_assign(
    AxumState(app_state): AxumState<AppState>,
    Path(appointment_id): Path<String>,
) -> HandlerResult<Assignment> {
    info!(appointment_id = %appointment_id, "Handling auto_assign request");
    let mut salon = app_state.salon.lock().await;
    let assignment: Assignment = salon.auto_assign(&AppointmentId::new(appointment_id))?;
    Ok(Json(assignment))
}

/// Handler for POST `/appointments/{id}/assign`.
pub async fn assign_groomer(
    AxumState(app_state): AxumState<AppState>,
    Path(appointment_id): Path<String>,
    Json(req): Json<AssignRequest>,
) -> HandlerResult<Appointment> {
    info!(
        appointment_id = %appointment_id,
        groomer_id = %req.groomer_id,
        "Handling assign_groomer request"
    );
    let mut salon = app_state.salon.lock().await;
    let appointment: Appointment = salon.assign_groomer(
        &AppointmentId::new(appointment_id),
        &GroomerId::new(req.groomer_id),
    )?;
    Ok(Json(appointment))
}

/// Handler for POST `/appointments/auto-assign`.
pub async fn auto_assign_day(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<AutoAssignQuery>,
) -> HandlerResult<Vec<Assignment>> {
    info!(date = ?query.date, "Handling auto_assign_day request");
    let requested: Option<Date> = query.date.as_deref().map(parse_date).transpose()?;
    let mut salon = app_state.salon.lock().await;
    let date: Date = requested.unwrap_or_else(|| salon.today());
    let assignments: Vec<Assignment> = salon.auto_assign_unassigned(date)?;
    Ok(Json(assignments))
}

// ----------------------------------------------------------------------
// Pricing
// ----------------------------------------------------------------------

/// Handler for GET `/pricing/quote`.
pub async fn quote(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<QuoteQuery>,
) -> HandlerResult<QuoteResponse> {
    info!(
        service_type = %query.service_type,
        package_id = ?query.package_id,
        "Handling quote request"
    );
    let package_id: Option<PackageId> = query.package_id.map(PackageId::new);
    let salon = app_state.salon.lock().await;
    let price: Money = salon.quote(
        query.service_type,
        package_id.as_ref(),
        query.transport_type,
    )?;
    Ok(Json(QuoteResponse { price }))
}
