use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use super::{check_length, ApiError};
use crate::state::{new_id, AppState, Customer};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomerBody {
    name: String,
    phone: String,
    #[serde(default)]
    is_gold: bool,
}

impl CustomerBody {
    fn validate(&self) -> Result<(), ApiError> {
        check_length("name", &self.name, 5, 50)?;
        check_length("phone", &self.phone, 5, 50)
    }
}

pub async fn list_customers(State(state): State<AppState>) -> Json<Vec<Customer>> {
    let inner = state.inner.read().await;
    let mut customers: Vec<Customer> = inner.customers.values().cloned().collect();
    customers.sort_by(|a, b| a.name.cmp(&b.name));
    Json(customers)
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    let inner = state.inner.read().await;
    inner
        .customers
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("customer"))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(body): Json<CustomerBody>,
) -> Result<Json<Customer>, ApiError> {
    body.validate()?;
    let customer = Customer {
        id: new_id(),
        name: body.name,
        is_gold: body.is_gold,
        phone: body.phone,
    };

    let mut inner = state.inner.write().await;
    inner.customers.insert(customer.id.clone(), customer.clone());
    Ok(Json(customer))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CustomerBody>,
) -> Result<Json<Customer>, ApiError> {
    body.validate()?;
    let mut inner = state.inner.write().await;

    let customer = inner
        .customers
        .get_mut(&id)
        .ok_or_else(|| ApiError::not_found("customer"))?;
    customer.name = body.name;
    customer.is_gold = body.is_gold;
    customer.phone = body.phone;
    Ok(Json(customer.clone()))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    let mut inner = state.inner.write().await;
    inner
        .customers
        .remove(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("customer"))
}
