//! Expense tools

use api_types::{
    DateRangeQuery, Status,
    expense::{
        BulkDeleteResponse, ExpenseBulkDelete, ExpenseEdit, ExpenseGet, ExpenseNew,
        ExpenseResponse, ExpenseView,
    },
    tool::{Created, MessageResponse},
};
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use engine::{DateRange, Expense, ExpensePatch, NewExpense};

use crate::{ServerError, server::ServerState};

fn expense_view(expense: Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        date: expense.date,
        amount: expense.amount,
        category: expense.category,
        subcategory: expense.subcategory,
        note: expense.note,
    }
}

/// Handle requests for recording a new expense
pub async fn add_expense(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<Json<Created>, ServerError> {
    let Json(payload) = payload?;
    let id = state
        .engine
        .add_expense(NewExpense {
            date: payload.date,
            amount: payload.amount,
            category: payload.category,
            subcategory: payload.subcategory.unwrap_or_default(),
            note: payload.note.unwrap_or_default(),
        })
        .await?;

    Ok(Json(Created {
        status: Status::Ok,
        id,
    }))
}

pub async fn list_expenses(
    State(state): State<ServerState>,
    payload: Result<Json<DateRangeQuery>, JsonRejection>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let Json(payload) = payload?;
    let expenses = state
        .engine
        .list_expenses(&DateRange::new(payload.start_date, payload.end_date))
        .await?;

    Ok(Json(expenses.into_iter().map(expense_view).collect()))
}

pub async fn get_expense(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseGet>, JsonRejection>,
) -> Result<Json<ExpenseResponse>, ServerError> {
    let Json(payload) = payload?;
    let expense = state.engine.expense(payload.expense_id).await?;

    Ok(Json(ExpenseResponse {
        status: Status::Ok,
        expense: expense_view(expense),
    }))
}

/// Handle partial edits. Only the fields present in the body are written.
pub async fn edit_expense(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseEdit>, JsonRejection>,
) -> Result<Json<MessageResponse>, ServerError> {
    let Json(payload) = payload?;
    let id = payload.expense_id;
    state
        .engine
        .update_expense(
            id,
            ExpensePatch {
                date: payload.date,
                amount: payload.amount,
                category: payload.category,
                subcategory: payload.subcategory,
                note: payload.note,
            },
        )
        .await?;

    Ok(Json(MessageResponse::ok(format!(
        "Expense ID {id} updated successfully"
    ))))
}

pub async fn delete_expense(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseGet>, JsonRejection>,
) -> Result<Json<MessageResponse>, ServerError> {
    let Json(payload) = payload?;
    let id = payload.expense_id;
    state.engine.delete_expense(id).await?;

    Ok(Json(MessageResponse::ok(format!(
        "Expense ID {id} deleted successfully"
    ))))
}

pub async fn bulk_delete_expenses(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseBulkDelete>, JsonRejection>,
) -> Result<Json<BulkDeleteResponse>, ServerError> {
    let Json(payload) = payload?;
    let deleted_count = state
        .engine
        .bulk_delete_expenses(&payload.expense_ids)
        .await?;

    Ok(Json(BulkDeleteResponse {
        status: Status::Ok,
        deleted_count,
        message: format!("Successfully deleted {deleted_count} expense(s)"),
    }))
}
