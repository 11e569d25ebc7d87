//! Summary and cashflow tools

use api_types::{
    DateRangeQuery,
    report::{
        CashflowStatus, CategoryTotalView, NetCashflowView, SourceTotalView, Summarize,
        SummarizeIncome,
    },
};
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use engine::DateRange;

use crate::{ServerError, server::ServerState};

pub async fn summarize(
    State(state): State<ServerState>,
    payload: Result<Json<Summarize>, JsonRejection>,
) -> Result<Json<Vec<CategoryTotalView>>, ServerError> {
    let Json(payload) = payload?;
    let totals = state
        .engine
        .summarize_expenses(
            &DateRange::new(payload.start_date, payload.end_date),
            payload.category.as_deref(),
        )
        .await?;

    Ok(Json(
        totals
            .into_iter()
            .map(|total| CategoryTotalView {
                category: total.category,
                total_amount: total.total_amount,
            })
            .collect(),
    ))
}

pub async fn summarize_income(
    State(state): State<ServerState>,
    payload: Result<Json<SummarizeIncome>, JsonRejection>,
) -> Result<Json<Vec<SourceTotalView>>, ServerError> {
    let Json(payload) = payload?;
    let totals = state
        .engine
        .summarize_income(
            &DateRange::new(payload.start_date, payload.end_date),
            payload.source.as_deref(),
        )
        .await?;

    Ok(Json(
        totals
            .into_iter()
            .map(|total| SourceTotalView {
                source: total.source,
                total_amount: total.total_amount,
            })
            .collect(),
    ))
}

pub async fn net_cashflow(
    State(state): State<ServerState>,
    payload: Result<Json<DateRangeQuery>, JsonRejection>,
) -> Result<Json<NetCashflowView>, ServerError> {
    let Json(payload) = payload?;
    let report = state
        .engine
        .net_cashflow(&DateRange::new(payload.start_date, payload.end_date))
        .await?;

    Ok(Json(NetCashflowView {
        start_date: report.start_date,
        end_date: report.end_date,
        total_income: report.total_income,
        total_expenses: report.total_expenses,
        net_cashflow: report.net_cashflow,
        status: match report.status {
            engine::CashflowStatus::Positive => CashflowStatus::Positive,
            engine::CashflowStatus::Negative => CashflowStatus::Negative,
        },
    }))
}
