//! Tests for the sort dispatcher and strategy family

#[cfg(test)]
mod tests {
    use crate::error::QueryError;
    use crate::query::sorting::{DefaultSort, NullSort, Sort, SortStrategy};
    use crate::sql::{Driver, OrderClause, SelectQuery};
    use ordex_model::{Direction, EntityDef, PivotDef, RelationDef, RelationKind};

    static TAG: EntityDef = EntityDef {
        table: "tags",
        key: "id",
        sortable_columns: &["id", "label"],
        relations: &[],
    };

    static PROFILE: EntityDef = EntityDef {
        table: "profiles",
        key: "id",
        sortable_columns: &["id", "bio", "updated_at"],
        relations: &[],
    };

    static AUTHOR: EntityDef = EntityDef {
        table: "authors",
        key: "id",
        sortable_columns: &["id", "name", "email", "created_at"],
        relations: &[
            (
                "posts",
                RelationDef {
                    kind: RelationKind::HasMany,
                    related: &POST,
                    foreign_key: "author_id",
                    local_key: "id",
                    pivot: None,
                },
            ),
            (
                "latest_post",
                RelationDef {
                    kind: RelationKind::HasOne,
                    related: &POST,
                    foreign_key: "author_id",
                    local_key: "id",
                    pivot: None,
                },
            ),
            (
                "profile",
                RelationDef {
                    kind: RelationKind::HasOne,
                    related: &PROFILE,
                    foreign_key: "author_id",
                    local_key: "id",
                    pivot: None,
                },
            ),
        ],
    };

    static POST: EntityDef = EntityDef {
        table: "posts",
        key: "id",
        sortable_columns: &["id", "title", "views", "published_at"],
        relations: &[
            (
                "author",
                RelationDef {
                    kind: RelationKind::BelongsTo,
                    related: &AUTHOR,
                    foreign_key: "author_id",
                    local_key: "id",
                    pivot: None,
                },
            ),
            (
                "tags",
                RelationDef {
                    kind: RelationKind::BelongsToMany,
                    related: &TAG,
                    foreign_key: "id",
                    local_key: "id",
                    pivot: Some(PivotDef {
                        table: "post_tag",
                        parent_key: "post_id",
                        related_key: "tag_id",
                    }),
                },
            ),
            (
                "attachments",
                RelationDef {
                    kind: RelationKind::None,
                    related: &TAG,
                    foreign_key: "id",
                    local_key: "id",
                    pivot: None,
                },
            ),
        ],
    };

    fn authors(driver: Driver) -> SelectQuery {
        SelectQuery::new(driver, "authors")
    }

    fn posts(driver: Driver) -> SelectQuery {
        SelectQuery::new(driver, "posts")
    }

    fn sorted_sql(
        entity: &'static EntityDef,
        field: &str,
        column: &str,
        query: SelectQuery,
    ) -> String {
        Sort::new(entity, field, column, query)
            .unwrap()
            .apply()
            .unwrap()
            .to_sql()
    }

    #[test]
    fn direct_column_ascending_uses_null_fallback_off_postgres() {
        let sql = sorted_sql(&AUTHOR, "name", "name", authors(Driver::MySql));
        assert!(
            sql.ends_with("ORDER BY (name IS NULL), name ASC"),
            "unexpected sql: {sql}"
        );
    }

    #[test]
    fn direct_column_descending_keeps_null_fallback() {
        let sql = sorted_sql(&AUTHOR, "name:desc", "name", authors(Driver::Sqlite));
        assert!(
            sql.ends_with("ORDER BY (name IS NULL), name DESC"),
            "unexpected sql: {sql}"
        );
    }

    #[test]
    fn direct_column_on_postgres_orders_nulls_last() {
        let sql = sorted_sql(&AUTHOR, "name", "name", authors(Driver::Postgres));
        assert!(
            sql.ends_with("ORDER BY name ASC NULLS LAST"),
            "unexpected sql: {sql}"
        );
    }

    #[test]
    fn belongs_to_sorts_through_a_scalar_subquery() {
        let sql = sorted_sql(&POST, "author.name:desc", "name", posts(Driver::Postgres));
        assert!(
            sql.contains("ORDER BY author.name IS NULL, "),
            "missing null precedence clause: {sql}"
        );
        assert!(
            sql.contains(
                "(SELECT authors.name FROM authors \
                 WHERE authors.id = posts.author_id \
                 ORDER BY authors.name DESC LIMIT 1) DESC"
            ),
            "missing correlated subquery: {sql}"
        );
    }

    #[test]
    fn has_one_sorts_through_a_scalar_subquery() {
        let sql = sorted_sql(&AUTHOR, "latest_post.title", "title", authors(Driver::Postgres));
        assert!(
            sql.contains(
                "(SELECT posts.title FROM posts \
                 WHERE posts.author_id = authors.id \
                 ORDER BY posts.title ASC LIMIT 1) ASC"
            ),
            "missing correlated subquery: {sql}"
        );
    }

    #[test]
    fn has_many_generates_the_same_ordering_as_has_one() {
        let one = Sort::new(
            &AUTHOR,
            "latest_post.title",
            "title",
            authors(Driver::Postgres),
        )
        .unwrap()
        .apply()
        .unwrap();
        let many = Sort::new(&AUTHOR, "posts.title", "title", authors(Driver::Postgres))
            .unwrap()
            .apply()
            .unwrap();

        // Same subquery fragment; only the null-precedence path differs.
        assert_eq!(one.order_clauses().len(), 2);
        assert_eq!(one.order_clauses()[1], many.order_clauses()[1]);
        assert_eq!(
            one.order_clauses()[0],
            OrderClause::Raw("latest_post.title IS NULL".to_string())
        );
        assert_eq!(
            many.order_clauses()[0],
            OrderClause::Raw("posts.title IS NULL".to_string())
        );
    }

    #[test]
    fn many_to_many_ascending_aggregates_with_min() {
        let sql = sorted_sql(&POST, "tags.label", "label", posts(Driver::Postgres));
        assert!(
            sql.contains("JOIN post_tag ON post_tag.post_id = posts.id"),
            "missing pivot join: {sql}"
        );
        assert!(
            sql.contains("JOIN tags ON tags.id = post_tag.tag_id"),
            "missing related join: {sql}"
        );
        assert!(sql.contains("GROUP BY posts.id"), "missing grouping: {sql}");
        assert!(
            sql.contains("ORDER BY tags.label IS NULL, MIN(tags.label) ASC"),
            "unexpected ordering: {sql}"
        );
    }

    #[test]
    fn many_to_many_descending_aggregates_with_max() {
        let sql = sorted_sql(&POST, "tags.label:desc", "label", posts(Driver::Postgres));
        assert!(
            sql.contains("MAX(tags.label) DESC"),
            "unexpected ordering: {sql}"
        );
    }

    #[test]
    fn unknown_relation_column_is_rejected() {
        let result = Sort::new(&POST, "author.secret", "secret", posts(Driver::Postgres));
        assert!(matches!(result, Err(QueryError::FieldNotSupported(_))));
    }

    #[test]
    fn unknown_direct_column_is_rejected() {
        let result = Sort::new(&POST, "secret", "secret", posts(Driver::Postgres));
        assert!(matches!(result, Err(QueryError::FieldNotSupported(_))));
    }

    #[test]
    fn undeclared_relation_is_rejected() {
        let result = Sort::new(&POST, "editor.name", "name", posts(Driver::Postgres));
        assert!(matches!(
            result,
            Err(QueryError::RelationshipNotSupported(_))
        ));
    }

    #[test]
    fn relation_without_usable_kind_is_rejected_on_apply() {
        let sort = Sort::new(&POST, "attachments.label", "label", posts(Driver::Postgres))
            .expect("column validates against the related entity");
        assert!(matches!(
            sort.apply(),
            Err(QueryError::RelationshipNotSupported(_))
        ));
    }

    #[test]
    fn identical_inputs_render_identical_sql() {
        let run = || sorted_sql(&POST, "author.name:desc", "name", posts(Driver::Postgres));
        assert_eq!(run(), run());
    }

    #[test]
    fn default_sort_orders_without_null_handling() {
        let query = DefaultSort {
            column: "posts.id",
            direction: Direction::Asc,
        }
        .apply(posts(Driver::Postgres));
        assert_eq!(
            query.to_sql(),
            "SELECT posts.* FROM posts ORDER BY posts.id ASC"
        );
    }

    #[test]
    fn null_sort_is_usable_standalone() {
        let query = NullSort {
            column: "views",
            direction: Direction::Desc,
        }
        .apply(posts(Driver::MySql));
        assert_eq!(
            query.to_sql(),
            "SELECT posts.* FROM posts ORDER BY (views IS NULL), views DESC"
        );
    }
}
