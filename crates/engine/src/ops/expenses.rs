use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    DateRange, EngineError, Expense, ExpensePatch, LedgerKind, NewExpense, ResultEngine, expenses,
};

use super::{DELETE_BATCH_SIZE, Engine, with_tx};

impl Engine {
    /// Record a new expense and return the id assigned by the store.
    pub async fn add_expense(&self, expense: NewExpense) -> ResultEngine<i64> {
        with_tx!(self, |db_tx| {
            let model: expenses::ActiveModel = expense.into();
            let id = expenses::Entity::insert(model)
                .exec(&db_tx)
                .await?
                .last_insert_id;
            tracing::debug!(id, "expense created");
            Ok(id)
        })
    }

    /// Return a snapshot of one expense.
    pub async fn expense(&self, id: i64) -> ResultEngine<Expense> {
        with_tx!(self, |db_tx| {
            let model = expenses::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::not_found(LedgerKind::Expense, id))?;
            Ok(Expense::from(model))
        })
    }

    /// Expenses dated inside `range` (both bounds included), in insertion order.
    pub async fn list_expenses(&self, range: &DateRange) -> ResultEngine<Vec<Expense>> {
        with_tx!(self, |db_tx| {
            let models = expenses::Entity::find()
                .filter(expenses::Column::Date.between(range.start.as_str(), range.end.as_str()))
                .order_by_asc(expenses::Column::Id)
                .all(&db_tx)
                .await?;
            Ok(models.into_iter().map(Expense::from).collect())
        })
    }

    /// Overwrite the fields present in `patch`, leaving the others untouched.
    ///
    /// An empty patch is rejected before any statement runs.
    pub async fn update_expense(&self, id: i64, patch: ExpensePatch) -> ResultEngine<()> {
        if patch.is_empty() {
            return Err(EngineError::InvalidInput(
                "No fields to update".to_string(),
            ));
        }
        let fields = patch.fields();

        with_tx!(self, |db_tx| {
            // The UPDATE is the first statement so the transaction starts as a
            // writer and waits on the busy timeout instead of failing.
            let result = expenses::Entity::update_many()
                .set(patch.into_active_model())
                .filter(expenses::Column::Id.eq(id))
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(EngineError::not_found(LedgerKind::Expense, id));
            }
            tracing::debug!(id, ?fields, "expense updated");
            Ok(())
        })
    }

    pub async fn delete_expense(&self, id: i64) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let result = expenses::Entity::delete_by_id(id).exec(&db_tx).await?;
            if result.rows_affected == 0 {
                return Err(EngineError::not_found(LedgerKind::Expense, id));
            }
            tracing::debug!(id, "expense deleted");
            Ok(())
        })
    }

    /// Delete every expense whose id is in `ids` and return how many existed.
    ///
    /// Unknown ids are ignored. Long id lists are deleted in batches inside the
    /// same transaction, so the call stays all or nothing.
    pub async fn bulk_delete_expenses(&self, ids: &[i64]) -> ResultEngine<u64> {
        if ids.is_empty() {
            return Err(EngineError::InvalidInput(
                "No expense IDs provided".to_string(),
            ));
        }

        with_tx!(self, |db_tx| {
            let mut deleted = 0;
            for batch in ids.chunks(DELETE_BATCH_SIZE) {
                let result = expenses::Entity::delete_many()
                    .filter(expenses::Column::Id.is_in(batch.iter().copied()))
                    .exec(&db_tx)
                    .await?;
                deleted += result.rows_affected;
            }
            tracing::debug!(requested = ids.len(), deleted, "expenses deleted");
            Ok(deleted)
        })
    }
}
