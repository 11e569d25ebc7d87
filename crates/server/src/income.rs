//! Income tools

use api_types::{
    DateRangeQuery, Status,
    income::{IncomeEdit, IncomeGet, IncomeNew, IncomeResponse, IncomeView},
    tool::{Created, MessageResponse},
};
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use engine::{DateRange, Income, IncomePatch, NewIncome};

use crate::{ServerError, server::ServerState};

fn income_view(income: Income) -> IncomeView {
    IncomeView {
        id: income.id,
        date: income.date,
        amount: income.amount,
        source: income.source,
        note: income.note,
    }
}

pub async fn add_income(
    State(state): State<ServerState>,
    payload: Result<Json<IncomeNew>, JsonRejection>,
) -> Result<Json<Created>, ServerError> {
    let Json(payload) = payload?;
    let id = state
        .engine
        .add_income(NewIncome {
            date: payload.date,
            amount: payload.amount,
            source: payload.source,
            note: payload.note.unwrap_or_default(),
        })
        .await?;

    Ok(Json(Created {
        status: Status::Ok,
        id,
    }))
}

pub async fn list_income(
    State(state): State<ServerState>,
    payload: Result<Json<DateRangeQuery>, JsonRejection>,
) -> Result<Json<Vec<IncomeView>>, ServerError> {
    let Json(payload) = payload?;
    let income = state
        .engine
        .list_income(&DateRange::new(payload.start_date, payload.end_date))
        .await?;

    Ok(Json(income.into_iter().map(income_view).collect()))
}

pub async fn get_income(
    State(state): State<ServerState>,
    payload: Result<Json<IncomeGet>, JsonRejection>,
) -> Result<Json<IncomeResponse>, ServerError> {
    let Json(payload) = payload?;
    let income = state.engine.income(payload.income_id).await?;

    Ok(Json(IncomeResponse {
        status: Status::Ok,
        income: income_view(income),
    }))
}

pub async fn edit_income(
    State(state): State<ServerState>,
    payload: Result<Json<IncomeEdit>, JsonRejection>,
) -> Result<Json<MessageResponse>, ServerError> {
    let Json(payload) = payload?;
    let id = payload.income_id;
    state
        .engine
        .update_income(
            id,
            IncomePatch {
                date: payload.date,
                amount: payload.amount,
                source: payload.source,
                note: payload.note,
            },
        )
        .await?;

    Ok(Json(MessageResponse::ok(format!(
        "Income ID {id} updated successfully"
    ))))
}

pub async fn delete_income(
    State(state): State<ServerState>,
    payload: Result<Json<IncomeGet>, JsonRejection>,
) -> Result<Json<MessageResponse>, ServerError> {
    let Json(payload) = payload?;
    let id = payload.income_id;
    state.engine.delete_income(id).await?;

    Ok(Json(MessageResponse::ok(format!(
        "Income ID {id} deleted successfully"
    ))))
}
