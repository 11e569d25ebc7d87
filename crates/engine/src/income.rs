//! The module contains the `Income` record and its table.

use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};

/// An inflow of money, labelled by where it came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    pub date: String,
    pub amount: f64,
    pub source: String,
    pub note: String,
}

impl From<Model> for Income {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            amount: model.amount,
            source: model.source,
            note: model.note,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NewIncome {
    pub date: String,
    pub amount: f64,
    pub source: String,
    pub note: String,
}

impl NewIncome {
    pub fn new(date: impl Into<String>, amount: f64, source: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            amount,
            source: source.into(),
            note: String::new(),
        }
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

impl From<NewIncome> for ActiveModel {
    fn from(value: NewIncome) -> Self {
        Self {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(value.date),
            amount: ActiveValue::Set(value.amount),
            source: ActiveValue::Set(value.source),
            note: ActiveValue::Set(value.note),
        }
    }
}

/// Field-level edit of an income record. Same rules as `ExpensePatch`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncomePatch {
    pub date: Option<String>,
    pub amount: Option<f64>,
    pub source: Option<String>,
    pub note: Option<String>,
}

impl IncomePatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.amount.is_none() && self.source.is_none() && self.note.is_none()
    }

    pub(crate) fn fields(&self) -> Vec<&'static str> {
        [
            ("date", self.date.is_some()),
            ("amount", self.amount.is_some()),
            ("source", self.source.is_some()),
            ("note", self.note.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }

    pub(crate) fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            date: self.date.map_or(ActiveValue::NotSet, ActiveValue::Set),
            amount: self.amount.map_or(ActiveValue::NotSet, ActiveValue::Set),
            source: self.source.map_or(ActiveValue::NotSet, ActiveValue::Set),
            note: self.note.map_or(ActiveValue::NotSet, ActiveValue::Set),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "income")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub date: String,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub source: String,
    pub note: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
