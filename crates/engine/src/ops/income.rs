use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    DateRange, EngineError, Income, IncomePatch, LedgerKind, NewIncome, ResultEngine, income,
};

use super::{DELETE_BATCH_SIZE, Engine, with_tx};

impl Engine {
    /// Record a new income and return the id assigned by the store.
    pub async fn add_income(&self, record: NewIncome) -> ResultEngine<i64> {
        with_tx!(self, |db_tx| {
            let model: income::ActiveModel = record.into();
            let id = income::Entity::insert(model)
                .exec(&db_tx)
                .await?
                .last_insert_id;
            tracing::debug!(id, "income created");
            Ok(id)
        })
    }

    /// Return a snapshot of one income record.
    pub async fn income(&self, id: i64) -> ResultEngine<Income> {
        with_tx!(self, |db_tx| {
            let model = income::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::not_found(LedgerKind::Income, id))?;
            Ok(Income::from(model))
        })
    }

    /// Income dated inside `range` (both bounds included), in insertion order.
    pub async fn list_income(&self, range: &DateRange) -> ResultEngine<Vec<Income>> {
        with_tx!(self, |db_tx| {
            let models = income::Entity::find()
                .filter(income::Column::Date.between(range.start.as_str(), range.end.as_str()))
                .order_by_asc(income::Column::Id)
                .all(&db_tx)
                .await?;
            Ok(models.into_iter().map(Income::from).collect())
        })
    }

    /// Overwrite the fields present in `patch`, leaving the others untouched.
    ///
    /// An empty patch is rejected before any statement runs.
    pub async fn update_income(&self, id: i64, patch: IncomePatch) -> ResultEngine<()> {
        if patch.is_empty() {
            return Err(EngineError::InvalidInput(
                "No fields to update".to_string(),
            ));
        }
        let fields = patch.fields();

        with_tx!(self, |db_tx| {
            // The UPDATE is the first statement so the transaction starts as a
            // writer and waits on the busy timeout instead of failing.
            let result = income::Entity::update_many()
                .set(patch.into_active_model())
                .filter(income::Column::Id.eq(id))
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(EngineError::not_found(LedgerKind::Income, id));
            }
            tracing::debug!(id, ?fields, "income updated");
            Ok(())
        })
    }

    pub async fn delete_income(&self, id: i64) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let result = income::Entity::delete_by_id(id).exec(&db_tx).await?;
            if result.rows_affected == 0 {
                return Err(EngineError::not_found(LedgerKind::Income, id));
            }
            tracing::debug!(id, "income deleted");
            Ok(())
        })
    }

    /// Delete every income record whose id is in `ids` and return how many existed.
    ///
    /// Unknown ids are ignored. Long id lists are deleted in batches inside the
    /// same transaction, so the call stays all or nothing.
    pub async fn bulk_delete_income(&self, ids: &[i64]) -> ResultEngine<u64> {
        if ids.is_empty() {
            return Err(EngineError::InvalidInput(
                "No income IDs provided".to_string(),
            ));
        }

        with_tx!(self, |db_tx| {
            let mut deleted = 0;
            for batch in ids.chunks(DELETE_BATCH_SIZE) {
                let result = income::Entity::delete_many()
                    .filter(income::Column::Id.is_in(batch.iter().copied()))
                    .exec(&db_tx)
                    .await?;
                deleted += result.rows_affected;
            }
            tracing::debug!(requested = ids.len(), deleted, "income deleted");
            Ok(deleted)
        })
    }
}
