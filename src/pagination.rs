//! Composition of [`PaginationConditions`] onto a lazy query.
//!
//! [`apply_pagination_conditions`] layers offset, cursor bounds, date windows,
//! ordering and limit onto any [`QueryHandle`] in a fixed order, so the same
//! conditions always produce the same query shape. It never fails and never
//! touches the database; errors only appear when the caller executes the
//! result.

use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select, Value};

use crate::request::{PaginationConditions, SortOrder};

/// Comparison used by a [`Predicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// `column > value`
    Above,
    /// `column < value`
    Below,
    /// `column >= value`
    AtLeast,
    /// `column <= value`
    AtMost,
}

/// A single `column <op> value` filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate<C> {
    pub column: C,
    pub bound: Bound,
    pub value: Value,
}

impl<C> Predicate<C> {
    pub fn new(column: C, bound: Bound, value: impl Into<Value>) -> Self {
        Self {
            column,
            bound,
            value: value.into(),
        }
    }
}

impl<C: ColumnTrait> Predicate<C> {
    pub fn into_expr(self) -> SimpleExpr {
        match self.bound {
            Bound::Above => self.column.gt(self.value),
            Bound::Below => self.column.lt(self.value),
            Bound::AtLeast => self.column.gte(self.value),
            Bound::AtMost => self.column.lte(self.value),
        }
    }
}

/// Identity and timestamp columns of a listable table.
pub trait PaginatedColumns: Copy {
    /// Monotonic key used for cursor bounds and the default sort.
    fn id() -> Self;
    fn created_at() -> Self;
    fn updated_at() -> Self;
}

/// A chainable, unexecuted query.
///
/// Every method consumes the handle and returns the extended one. Filters
/// added through [`QueryHandle::with_where`] are ANDed with whatever the
/// handle already carries.
pub trait QueryHandle: Sized {
    type Column: PaginatedColumns;

    fn with_offset(self, offset: u64) -> Self;
    fn with_where(self, predicate: Predicate<Self::Column>) -> Self;
    fn with_order(self, column: Self::Column, order: SortOrder) -> Self;
    fn with_limit(self, limit: u64) -> Self;
}

impl<E> QueryHandle for Select<E>
where
    E: EntityTrait,
    E::Column: PaginatedColumns,
{
    type Column = E::Column;

    fn with_offset(self, offset: u64) -> Self {
        self.offset(offset)
    }

    fn with_where(self, predicate: Predicate<E::Column>) -> Self {
        self.filter(predicate.into_expr())
    }

    fn with_order(self, column: E::Column, order: SortOrder) -> Self {
        self.order_by(column, order.into())
    }

    fn with_limit(self, limit: u64) -> Self {
        self.limit(limit)
    }
}

/// Layer `conditions` onto `query`.
///
/// Order of composition: offset, `id >`, `id <`, `created_at >=`,
/// `created_at <=`, `updated_at >=`, `updated_at <=`, a single order clause
/// (default `id DESC`), limit. Offset and limit are only applied when
/// strictly positive.
pub fn apply_pagination_conditions<Q: QueryHandle>(
    mut query: Q,
    conditions: &PaginationConditions<Q::Column>,
) -> Q {
    let id = Q::Column::id();
    let created_at = Q::Column::created_at();
    let updated_at = Q::Column::updated_at();

    if let Some(offset) = positive(conditions.offset) {
        query = query.with_offset(offset);
    }

    if let Some(value) = conditions.greater_than_id {
        query = query.with_where(Predicate::new(id, Bound::Above, value));
    }
    if let Some(value) = conditions.less_than_id {
        query = query.with_where(Predicate::new(id, Bound::Below, value));
    }

    if let Some(value) = conditions.created_after {
        query = query.with_where(Predicate::new(created_at, Bound::AtLeast, value));
    }
    if let Some(value) = conditions.created_before {
        query = query.with_where(Predicate::new(created_at, Bound::AtMost, value));
    }
    if let Some(value) = conditions.updated_after {
        query = query.with_where(Predicate::new(updated_at, Bound::AtLeast, value));
    }
    if let Some(value) = conditions.updated_before {
        query = query.with_where(Predicate::new(updated_at, Bound::AtMost, value));
    }

    let sort_by = conditions.sort_by.unwrap_or(id);
    let order = conditions.order.unwrap_or_default();
    query = query.with_order(sort_by, order);

    if let Some(limit) = positive(conditions.limit) {
        query = query.with_limit(limit);
    }

    query
}

// Zero and negative counts mean "not set".
fn positive(value: Option<i64>) -> Option<u64> {
    value.filter(|v| *v > 0).map(|v| v as u64)
}
