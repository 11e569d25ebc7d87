use sea_orm::{
    DatabaseTransaction, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, prelude::*,
    sea_query::Expr,
};

use crate::{
    CashflowStatus, CategoryTotal, DateRange, NetCashflow, ResultEngine, SourceTotal, expenses,
    income, util::round_money,
};

use super::{Engine, with_tx};

impl Engine {
    /// Sum expenses per category inside `range`, ordered by category.
    ///
    /// `category` restricts the result to one category. An empty string is
    /// treated as no filter.
    pub async fn summarize_expenses(
        &self,
        range: &DateRange,
        category: Option<&str>,
    ) -> ResultEngine<Vec<CategoryTotal>> {
        with_tx!(self, |db_tx| {
            let mut query = expenses::Entity::find()
                .select_only()
                .column(expenses::Column::Category)
                .column_as(Expr::col(expenses::Column::Amount).sum(), "total_amount")
                .filter(expenses::Column::Date.between(range.start.as_str(), range.end.as_str()));
            if let Some(category) = category.filter(|c| !c.is_empty()) {
                query = query.filter(expenses::Column::Category.eq(category));
            }

            let totals = query
                .group_by(expenses::Column::Category)
                .order_by_asc(expenses::Column::Category)
                .into_model::<CategoryTotal>()
                .all(&db_tx)
                .await?;
            Ok(totals)
        })
    }

    /// Sum income per source inside `range`, ordered by source.
    pub async fn summarize_income(
        &self,
        range: &DateRange,
        source: Option<&str>,
    ) -> ResultEngine<Vec<SourceTotal>> {
        with_tx!(self, |db_tx| {
            let mut query = income::Entity::find()
                .select_only()
                .column(income::Column::Source)
                .column_as(Expr::col(income::Column::Amount).sum(), "total_amount")
                .filter(income::Column::Date.between(range.start.as_str(), range.end.as_str()));
            if let Some(source) = source.filter(|s| !s.is_empty()) {
                query = query.filter(income::Column::Source.eq(source));
            }

            let totals = query
                .group_by(income::Column::Source)
                .order_by_asc(income::Column::Source)
                .into_model::<SourceTotal>()
                .all(&db_tx)
                .await?;
            Ok(totals)
        })
    }

    /// Total income minus total expenses inside `range`.
    ///
    /// Both totals are read in the same transaction. A ledger with no rows in
    /// the range counts as `0.0`.
    pub async fn net_cashflow(&self, range: &DateRange) -> ResultEngine<NetCashflow> {
        with_tx!(self, |db_tx| {
            let total_income = income_total(&db_tx, range).await?;
            let total_expenses = expenses_total(&db_tx, range).await?;
            let net = total_income - total_expenses;

            let status = if net >= 0.0 {
                CashflowStatus::Positive
            } else {
                CashflowStatus::Negative
            };

            Ok(NetCashflow {
                start_date: range.start.clone(),
                end_date: range.end.clone(),
                total_income: round_money(total_income),
                total_expenses: round_money(total_expenses),
                net_cashflow: round_money(net),
                status,
            })
        })
    }
}

async fn income_total(db_tx: &DatabaseTransaction, range: &DateRange) -> ResultEngine<f64> {
    let total: Option<Option<f64>> = income::Entity::find()
        .select_only()
        .column_as(Expr::col(income::Column::Amount).sum(), "total")
        .filter(income::Column::Date.between(range.start.as_str(), range.end.as_str()))
        .into_tuple()
        .one(db_tx)
        .await?;
    Ok(total.flatten().unwrap_or(0.0))
}

async fn expenses_total(db_tx: &DatabaseTransaction, range: &DateRange) -> ResultEngine<f64> {
    let total: Option<Option<f64>> = expenses::Entity::find()
        .select_only()
        .column_as(Expr::col(expenses::Column::Amount).sum(), "total")
        .filter(expenses::Column::Date.between(range.start.as_str(), range.end.as_str()))
        .into_tuple()
        .one(db_tx)
        .await?;
    Ok(total.flatten().unwrap_or(0.0))
}
