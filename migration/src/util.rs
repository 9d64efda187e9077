use sea_orm_migration::{prelude::*, schema::*};

/// Builds a two-column association table keyed by both foreign keys
#[allow(clippy::too_many_arguments)]
pub(crate) fn junction_table<T, L, R>(
    table: T,
    left_col: T,
    left_table: L,
    left_id: L,
    right_col: T,
    right_table: R,
    right_id: R,
    fk_names: (&str, &str),
) -> TableCreateStatement
where
    T: Iden + Copy + 'static,
    L: Iden + 'static,
    R: Iden + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(integer(left_col))
        .col(integer(right_col))
        .primary_key(Index::create().col(left_col).col(right_col))
        .foreign_key(
            ForeignKey::create()
                .name(fk_names.0)
                .from(table, left_col)
                .to(left_table, left_id),
        )
        .foreign_key(
            ForeignKey::create()
                .name(fk_names.1)
                .from(table, right_col)
                .to(right_table, right_id),
        )
        .to_owned()
}
