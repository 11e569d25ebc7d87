//! The module contains the `Expense` record and its table.

use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};

/// An outflow of money.
///
/// `date` is kept as written by the caller (`YYYY-MM-DD` by convention) and is
/// only ever compared as a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub subcategory: String,
    pub note: String,
}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            amount: model.amount,
            category: model.category,
            subcategory: model.subcategory,
            note: model.note,
        }
    }
}

/// Fields needed to record a new expense. The id is assigned by the store.
#[derive(Clone, Debug, Default)]
pub struct NewExpense {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub subcategory: String,
    pub note: String,
}

impl NewExpense {
    pub fn new(date: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            amount,
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

impl From<NewExpense> for ActiveModel {
    fn from(value: NewExpense) -> Self {
        Self {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(value.date),
            amount: ActiveValue::Set(value.amount),
            category: ActiveValue::Set(value.category),
            subcategory: ActiveValue::Set(value.subcategory),
            note: ActiveValue::Set(value.note),
        }
    }
}

/// Field-level edit of an expense.
///
/// `None` leaves the column untouched, `Some("")` clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpensePatch {
    pub date: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub note: Option<String>,
}

impl ExpensePatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.subcategory.is_none()
            && self.note.is_none()
    }

    /// Names of the columns the patch touches, for logging.
    pub(crate) fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.date.is_some() {
            fields.push("date");
        }
        if self.amount.is_some() {
            fields.push("amount");
        }
        if self.category.is_some() {
            fields.push("category");
        }
        if self.subcategory.is_some() {
            fields.push("subcategory");
        }
        if self.note.is_some() {
            fields.push("note");
        }
        fields
    }

    pub(crate) fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            date: self.date.map_or(ActiveValue::NotSet, ActiveValue::Set),
            amount: self.amount.map_or(ActiveValue::NotSet, ActiveValue::Set),
            category: self.category.map_or(ActiveValue::NotSet, ActiveValue::Set),
            subcategory: self.subcategory.map_or(ActiveValue::NotSet, ActiveValue::Set),
            note: self.note.map_or(ActiveValue::NotSet, ActiveValue::Set),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub date: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub category: String,
    pub subcategory: String,
    pub note: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
