//! Selection-set fragments that can be spliced into queries.

/// The `complexity` selection, reporting the query's cost.
#[must_use]
pub const fn add_complexity() -> &'static str {
    r"
    complexity {
        before
        query
        after
        reset_in_x_seconds
    }
    "
}

/// Columns of a board.
#[must_use]
pub const fn add_columns() -> &'static str {
    r"
    columns {
        id
        title
        type
        settings_str
    }
    "
}

/// Groups of a board.
#[must_use]
pub const fn add_groups() -> &'static str {
    r"
    groups {
        id
        title
        color
        position
    }
    "
}

/// Column values of an item, with the type-specific fields of the common
/// column types.
#[must_use]
pub const fn add_column_values() -> &'static str {
    r"
    column_values {
        id
        column {
            title
            settings_str
        }
        type
        text
        value
        ... on BoardRelationValue {
            display_value
            linked_item_ids
        }
        ... on CheckboxValue {
            checked
        }
        ... on CountryValue {
            country {
                name
            }
        }
        ... on DateValue {
            date
            time
        }
        ... on LocationValue {
            lat
            lng
            address
        }
        ... on MirrorValue {
            display_value
            mirrored_items {
                linked_item {
                    id
                    name
                }
            }
        }
        ... on PeopleValue {
            persons_and_teams {
                id
                kind
            }
        }
    }
    "
}

/// Subitems of an item.
#[must_use]
pub const fn add_subitems() -> &'static str {
    r"
    subitems {
        id
        name
        url
        state
    }
    "
}

/// The latest 100 updates of an item, with assets and replies.
#[must_use]
pub const fn add_updates() -> &'static str {
    r"
    updates (limit: 100) {
        id
        text_body
        body
        creator_id
        assets {
            id
            name
            file_extension
            url
            public_url
        }
        replies {
            id
            text_body
        }
    }
    "
}

/// Returns the complexity fragment when `with_complexity` is set.
pub(crate) const fn complexity(with_complexity: bool) -> &'static str {
    if with_complexity {
        add_complexity()
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::helpers::graphql_parse;

    #[test]
    fn test_each_addon_is_a_valid_selection() {
        for addon in [
            add_complexity(),
            add_columns(),
            add_groups(),
            add_column_values(),
            add_subitems(),
            add_updates(),
        ] {
            let query = format!("query {{ boards {{ {addon} }} }}");
            assert!(graphql_parse(&query).is_ok(), "invalid addon: {addon}");
        }
    }

    #[test]
    fn test_complexity_switch() {
        assert_eq!(complexity(false), "");
        assert!(complexity(true).contains("reset_in_x_seconds"));
    }
}
