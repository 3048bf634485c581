//! Identifiers and enumerations used in query arguments.
//!
//! Enum values render bare through [`Display`](std::fmt::Display) (the
//! form GraphQL enum arguments take) and serialize as JSON strings (the
//! form string arguments take).

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A monday.com identifier.
///
/// monday.com accepts IDs both as numbers and as strings of digits. The
/// variant decides how the ID is rendered in a query.
///
/// # Example
///
/// ```rust
/// use monday_async::graphql::types::Id;
///
/// assert_eq!(Id::from(1234_u64).to_string(), "1234");
/// assert_eq!(Id::from("topics").to_string(), "topics");
/// assert_eq!(serde_json::to_string(&Id::from("1234")).unwrap(), r#""1234""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// A numeric ID, rendered as a number.
    Int(u64),
    /// A string ID, rendered as a string.
    Str(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(id) => f.write_str(id),
        }
    }
}

impl From<u64> for Id {
    fn from(id: u64) -> Self {
        Self::Int(id)
    }
}

impl From<u32> for Id {
    fn from(id: u32) -> Self {
        Self::Int(u64::from(id))
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

impl From<&Id> for Id {
    fn from(id: &Id) -> Self {
        id.clone()
    }
}

/// Declares a GraphQL enum with its wire values.
macro_rules! graphql_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Returns the value sent to the API.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

graphql_enum! {
    /// Events a webhook can subscribe to.
    WebhookEventType {
        /// Any column value changed.
        ChangeColumnValue => "change_column_value",
        /// A status column changed.
        ChangeStatusColumnValue => "change_status_column_value",
        /// A subitem column value changed.
        ChangeSubitemColumnValue => "change_subitem_column_value",
        /// A specific column changed.
        ChangeSpecificColumnValue => "change_specific_column_value",
        /// An item name changed.
        ChangeName => "change_name",
        /// An item was created.
        CreateItem => "create_item",
        /// An item was archived.
        ItemArchived => "item_archived",
        /// An item was deleted.
        ItemDeleted => "item_deleted",
        /// An item moved to any group.
        ItemMovedToAnyGroup => "item_moved_to_any_group",
        /// An item moved to a specific group.
        ItemMovedToSpecificGroup => "item_moved_to_specific_group",
        /// An item was restored.
        ItemRestored => "item_restored",
        /// A subitem was created.
        CreateSubitem => "create_subitem",
        /// A subitem name changed.
        ChangeSubitemName => "change_subitem_name",
        /// A subitem moved.
        MoveSubitem => "move_subitem",
        /// A subitem was archived.
        SubitemArchived => "subitem_archived",
        /// A subitem was deleted.
        SubitemDeleted => "subitem_deleted",
        /// A column was created.
        CreateColumn => "create_column",
        /// An update was posted.
        CreateUpdate => "create_update",
        /// An update was edited.
        EditUpdate => "edit_update",
        /// An update was deleted.
        DeleteUpdate => "delete_update",
        /// An update was posted on a subitem.
        CreateSubitemUpdate => "create_subitem_update",
    }
}

graphql_enum! {
    /// What a notification refers to.
    TargetType {
        /// An update or reply.
        Post => "Post",
        /// An item or board.
        Project => "Project",
    }
}

graphql_enum! {
    /// Which users a users query returns.
    #[derive(Default)]
    UserKind {
        /// Every user.
        #[default]
        All => "all",
        /// Members and viewers.
        NonGuests => "non_guests",
        /// Guests only.
        Guests => "guests",
        /// Users who accepted their invitation.
        NonPending => "non_pending",
    }
}

graphql_enum! {
    /// Workspace visibility.
    WorkspaceKind {
        /// Visible to all members.
        Open => "open",
        /// Visible to invited members only.
        Closed => "closed",
    }
}

graphql_enum! {
    /// Lifecycle state filter.
    #[derive(Default)]
    State {
        /// Every state.
        All => "all",
        /// Active objects.
        #[default]
        Active => "active",
        /// Archived objects.
        Archived => "archived",
        /// Deleted objects.
        Deleted => "deleted",
    }
}

graphql_enum! {
    /// Subscription role on a board or workspace.
    #[derive(Default)]
    SubscriberKind {
        /// A subscriber.
        #[default]
        Subscriber => "subscriber",
        /// An owner.
        Owner => "owner",
    }
}

graphql_enum! {
    /// Folder colors.
    #[derive(Default)]
    FolderColor {
        DoneGreen => "DONE_GREEN",
        BrightGreen => "BRIGHT_GREEN",
        WorkingOrange => "WORKING_ORANGE",
        DarkOrange => "DARK_ORANGE",
        Sunset => "SUNSET",
        StuckRed => "STUCK_RED",
        DarkRed => "DARK_RED",
        SofiaPink => "SOFIA_PINK",
        Lipstick => "LIPSTICK",
        Purple => "PURPLE",
        DarkPurple => "DARK_PURPLE",
        Indigo => "INDIGO",
        BrightBlue => "BRIGHT_BLUE",
        Aquamarine => "AQUAMARINE",
        ChiliBlue => "CHILI_BLUE",
        /// No color.
        #[default]
        Null => "NULL",
    }
}

graphql_enum! {
    /// Board visibility.
    #[derive(Default)]
    BoardKind {
        /// Visible to all members.
        #[default]
        Public => "public",
        /// Visible to invited members only.
        Private => "private",
        /// Shareable with guests.
        Share => "share",
    }
}

graphql_enum! {
    /// Board attributes that can be updated.
    BoardAttributes {
        Name => "name",
        Description => "description",
        Communication => "communication",
    }
}

graphql_enum! {
    /// What a board duplicate contains.
    DuplicateBoardType {
        /// Structure only.
        WithStructure => "duplicate_board_with_structure",
        /// Structure and items.
        WithPulses => "duplicate_board_with_pulses",
        /// Structure, items and updates.
        WithPulsesAndUpdates => "duplicate_board_with_pulses_and_updates",
    }
}

graphql_enum! {
    /// Placement of a new group relative to another.
    PositionRelative {
        BeforeAt => "before_at",
        AfterAt => "after_at",
    }
}

graphql_enum! {
    /// Column types.
    ColumnType {
        AutoNumber => "auto_number",
        Checkbox => "checkbox",
        Country => "country",
        ColorPicker => "color_picker",
        CreationLog => "creation_log",
        Date => "date",
        Dependency => "dependency",
        Dropdown => "dropdown",
        Email => "email",
        File => "file",
        Hour => "hour",
        ItemId => "item_id",
        LastUpdated => "last_updated",
        Link => "link",
        Location => "location",
        LongText => "long_text",
        Numbers => "numbers",
        People => "people",
        Phone => "phone",
        Progress => "progress",
        Rating => "rating",
        Status => "status",
        Team => "team",
        Tags => "tags",
        Text => "text",
        Timeline => "timeline",
        TimeTracking => "time_tracking",
        Vote => "vote",
        Week => "week",
        WorldClock => "world_clock",
    }
}

graphql_enum! {
    /// Group attributes that can be updated.
    GroupAttributes {
        Title => "title",
        Color => "color",
        RelativePositionAfter => "relative_position_after",
        RelativePositionBefore => "relative_position_before",
    }
}

graphql_enum! {
    /// Color names accepted when updating a group's color.
    GroupUpdateColors {
        DarkGreen => "dark-green",
        Orange => "orange",
        Blue => "blue",
        Red => "red",
        Green => "green",
        Grey => "grey",
        DarkBlue => "dark-blue",
        Yellow => "yellow",
        LimeGreen => "lime-green",
        Purple => "purple",
        DarkPurple => "dark_purple",
        Brown => "brown",
        DarkRed => "dark-red",
        TrolleyGrey => "trolley-grey",
        DarkOrange => "dark-orange",
        DarkPink => "dark-pik",
        Turquoise => "turquoise",
        LightPink => "light-pink",
    }
}

graphql_enum! {
    /// Hex colors accepted when creating a group.
    GroupColors {
        DarkGreen => "#037f4c",
        Orange => "#fdab3d",
        Blue => "#579bfc",
        Red => "#e2445c",
        Green => "#00c875",
        Grey => "#c4c4c4",
        TrolleyGrey => "#808080",
        DarkBlue => "#0086c0",
        LimeGreen => "#9cd326",
        Yellow => "#ffcb00",
        Purple => "#a25ddc",
        DarkPurple => "#784bdl",
        Brown => "#7f5347",
        DarkRed => "#bb3354",
        DarkOrange => "#ff642e",
        DarkPink => "#ff158a",
        Turquoise => "#66ccff",
        LightPink => "#ff5ac4",
    }
}

graphql_enum! {
    /// Board ordering.
    BoardsOrderBy {
        CreatedAt => "created_at",
        UsedAt => "used_at",
    }
}

graphql_enum! {
    /// How the rules of an items query combine.
    #[derive(Default)]
    ItemsQueryOperator {
        #[default]
        And => "and",
        Or => "or",
    }
}

graphql_enum! {
    /// Sort direction of an items query.
    #[derive(Default)]
    ItemsOrderByDirection {
        #[default]
        Ascending => "asc",
        Descending => "desc",
    }
}

graphql_enum! {
    /// Comparison of an items query rule.
    #[derive(Default)]
    ItemsQueryRuleOperator {
        #[default]
        AnyOf => "any_of",
        NotAnyOf => "not_any_of",
        IsEmpty => "is_empty",
        IsNotEmpty => "is_not_empty",
        GreaterThan => "greater_than",
        GreaterThanOrEquals => "greater_than_or_equals",
        LowerThan => "lower_than",
        LowerThanOrEqual => "lower_than_or_equal",
        Between => "between",
        NotContainsText => "not_contains_text",
        ContainsText => "contains_text",
        ContainsTerms => "contains_terms",
        StartsWith => "starts_with",
        EndsWith => "ends_with",
        WithinTheNext => "within_the_next",
        WithinTheLast => "within_the_last",
    }
}

graphql_enum! {
    /// Account roles.
    BaseRoleName {
        Admin => "ADMIN",
        Member => "MEMBER",
        Guest => "GUEST",
        ViewOnly => "VIEW_ONLY",
    }
}

graphql_enum! {
    /// monday.com products users can be invited to.
    Product {
        Core => "core",
        Crm => "crm",
        Dev => "dev",
        Forms => "forms",
        Knowledge => "knowledge",
        Service => "service",
        Whiteboard => "whiteboard",
        Workflows => "workflows",
        WorkManagement => "work_management",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_by_variant() {
        assert_eq!(serde_json::to_string(&Id::from(5_u64)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Id::from("5")).unwrap(), r#""5""#);
    }

    #[test]
    fn test_id_deserializes_numbers_and_strings() {
        let ids: Vec<Id> = serde_json::from_str(r#"[12, "34"]"#).unwrap();
        assert_eq!(ids, vec![Id::Int(12), Id::Str("34".to_string())]);
    }

    #[test]
    fn test_enum_display_is_bare_value() {
        assert_eq!(UserKind::NonGuests.to_string(), "non_guests");
        assert_eq!(TargetType::Project.to_string(), "Project");
        assert_eq!(FolderColor::Null.to_string(), "NULL");
        assert_eq!(
            DuplicateBoardType::WithPulsesAndUpdates.as_str(),
            "duplicate_board_with_pulses_and_updates"
        );
    }

    #[test]
    fn test_enum_serializes_as_string() {
        assert_eq!(
            serde_json::to_string(&GroupColors::DarkGreen).unwrap(),
            r##""#037f4c""##
        );
        assert_eq!(
            serde_json::to_string(&GroupUpdateColors::LimeGreen).unwrap(),
            r#""lime-green""#
        );
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(UserKind::default(), UserKind::All);
        assert_eq!(State::default(), State::Active);
        assert_eq!(FolderColor::default(), FolderColor::Null);
        assert_eq!(ItemsQueryOperator::default(), ItemsQueryOperator::And);
        assert_eq!(
            ItemsQueryRuleOperator::default(),
            ItemsQueryRuleOperator::AnyOf
        );
    }
}
