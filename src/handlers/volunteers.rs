use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db;
use crate::models::volunteer::{NewVolunteer, Volunteer};
use crate::utils::error::AppError;
use crate::utils::response::{
    degraded, error as error_response, redirect_with_error, redirect_with_message, success,
};
use crate::utils::validation::{validate_email, validate_phone};

/// Raw form fields for the create-volunteer form. Everything arrives as a
/// string; validation happens in [`NewVolunteerForm::validate`].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NewVolunteerForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl NewVolunteerForm {
    fn trimmed(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            date_of_birth: self.date_of_birth.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
        }
    }

    /// Checks every field and collects all violations rather than stopping
    /// at the first.
    fn validate(&self, today: NaiveDate) -> Result<NewVolunteer, Vec<String>> {
        let mut errors = Vec::new();

        if self.first_name.is_empty() {
            errors.push("First name is required".to_string());
        }
        if self.last_name.is_empty() {
            errors.push("Last name is required".to_string());
        }

        let date_of_birth = if self.date_of_birth.is_empty() {
            errors.push("Date of birth is required".to_string());
            None
        } else {
            match NaiveDate::parse_from_str(&self.date_of_birth, "%Y-%m-%d") {
                Ok(dob) if dob >= today => {
                    errors.push("Date of birth must be in the past".to_string());
                    None
                }
                Ok(dob) => Some(dob),
                Err(_) => {
                    errors.push("Invalid date format".to_string());
                    None
                }
            }
        };

        if self.email.is_empty() || !validate_email(&self.email) {
            errors.push("Valid email address is required".to_string());
        }
        if self.phone.is_empty() || !validate_phone(&self.phone) {
            errors.push("Valid phone number is required".to_string());
        }
        if self.address.is_empty() {
            errors.push("Address is required".to_string());
        }

        match date_of_birth {
            Some(dob) if errors.is_empty() => Ok(NewVolunteer {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                date_of_birth: dob,
                email: self.email.clone(),
                phone: self.phone.clone(),
                address: self.address.clone(),
            }),
            _ => Err(errors),
        }
    }

    fn as_fields(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

pub async fn new_volunteer_form() -> Response {
    success(
        NewVolunteerForm::default(),
        "Provide the new volunteer's details",
    )
    .into_response()
}

pub async fn create_volunteer(
    State(pool): State<SqlitePool>,
    Form(form): Form<NewVolunteerForm>,
) -> Result<Response, AppError> {
    let form = form.trimmed();

    let new_volunteer = form
        .validate(Local::now().date_naive())
        .map_err(|messages| AppError::FormValidation {
            messages,
            fields: form.as_fields(),
        })?;

    match db::volunteers::create(&pool, &new_volunteer).await {
        Ok(volunteer_id) => {
            tracing::info!(volunteer_id, "Volunteer created");
            Ok(redirect_with_message(
                "/volunteers",
                format!(
                    "Volunteer {} {} created successfully!",
                    new_volunteer.first_name, new_volunteer.last_name
                ),
            ))
        }
        Err(e) => {
            tracing::error!(error = ?e, "Failed to create volunteer");
            Ok(error_response(
                "DATABASE_ERROR",
                "Error creating volunteer. Please check your input and try again.",
                Some(json!({ "form": form.as_fields() })),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

pub async fn list_volunteers(State(pool): State<SqlitePool>) -> Response {
    match db::volunteers::list(&pool).await {
        Ok(volunteers) => success(volunteers, "Volunteers retrieved").into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Failed to list volunteers");
            degraded(
                Vec::<Volunteer>::new(),
                "Error retrieving volunteers from database",
            )
            .into_response()
        }
    }
}

pub async fn get_volunteer(
    State(pool): State<SqlitePool>,
    Path(volunteer_id): Path<i64>,
) -> Result<Response, AppError> {
    let volunteer = db::volunteers::get(&pool, volunteer_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Volunteer with id '{volunteer_id}' was not found"))
        })?;

    Ok(success(volunteer, "Volunteer retrieved").into_response())
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdatePhoneForm {
    #[serde(default)]
    pub phone: String,
}

pub async fn update_phone_form(
    State(pool): State<SqlitePool>,
    Path(volunteer_id): Path<i64>,
) -> Result<Response, AppError> {
    let Some(volunteer) = db::volunteers::get(&pool, volunteer_id).await? else {
        return Ok(redirect_with_error(
            "/volunteers",
            "NOT_FOUND",
            "Volunteer not found",
        ));
    };

    Ok(success(volunteer, "Update the volunteer's phone number").into_response())
}

pub async fn update_phone(
    State(pool): State<SqlitePool>,
    Path(volunteer_id): Path<i64>,
    Form(form): Form<UpdatePhoneForm>,
) -> Result<Response, AppError> {
    let Some(volunteer) = db::volunteers::get(&pool, volunteer_id).await? else {
        return Ok(redirect_with_error(
            "/volunteers",
            "NOT_FOUND",
            "Volunteer not found",
        ));
    };

    let new_phone = form.phone.trim();

    if new_phone.is_empty() {
        return Err(AppError::FormValidation {
            messages: vec!["Phone number is required".to_string()],
            fields: json!({ "phone": new_phone }),
        });
    }
    if !validate_phone(new_phone) {
        return Err(AppError::FormValidation {
            messages: vec!["Please enter a valid phone number".to_string()],
            fields: json!({ "phone": new_phone }),
        });
    }

    let rows_affected = db::volunteers::update_phone(&pool, volunteer_id, new_phone).await?;

    if rows_affected > 0 {
        Ok(redirect_with_message(
            "/volunteers",
            format!(
                "Phone number updated successfully for {} {}",
                volunteer.first_name, volunteer.last_name
            ),
        ))
    } else {
        // Existence was checked above, so zero rows means a concurrent
        // delete won the race and the change was not applied.
        Ok(error_response(
            "UPDATE_FAILED",
            "Error updating phone number. Please try again.",
            None,
            StatusCode::CONFLICT,
        ))
    }
}

#[derive(Debug, Deserialize)]
pub struct SkillSearchParams {
    #[serde(default)]
    pub skill: String,
}

/// Volunteers whose skills match a name substring, strongest first.
pub async fn search_by_skill(
    State(pool): State<SqlitePool>,
    Query(params): Query<SkillSearchParams>,
) -> Result<Response, AppError> {
    let skill = params.skill.trim();
    if skill.is_empty() {
        return Err(AppError::ValidationError(
            "A skill name to search for is required".to_string(),
        ));
    }

    let volunteers = db::reports::search_volunteers_by_skill(&pool, skill).await?;

    Ok(success(
        volunteers,
        format!("Volunteers with skills matching '{skill}'"),
    )
    .into_response())
}
