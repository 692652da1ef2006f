//! Static catalog of the app's UI icon references.
//!
//! A plain mapping from symbolic name to platform asset identifier. Constant
//! data only; rendering is the caller's concern.

/// Symbolic names for the icons the app uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Bell,
    BooksVertical,
    Calendar,
    Clock,
    ClockArrowCirclePath,
    Checkmark,
    CheckmarkCircle,
    CheckmarkCircleFill,
    ChevronBack,
    Circle,
    InfoCircle,
    ListDash,
    Person,
    PlusCircle,
    Repeat,
}

impl Icon {
    /// Every icon in the catalog.
    pub const ALL: [Icon; 15] = [
        Icon::Bell,
        Icon::BooksVertical,
        Icon::Calendar,
        Icon::Clock,
        Icon::ClockArrowCirclePath,
        Icon::Checkmark,
        Icon::CheckmarkCircle,
        Icon::CheckmarkCircleFill,
        Icon::ChevronBack,
        Icon::Circle,
        Icon::InfoCircle,
        Icon::ListDash,
        Icon::Person,
        Icon::PlusCircle,
        Icon::Repeat,
    ];

    /// Platform asset identifier for this icon.
    pub const fn asset_name(self) -> &'static str {
        match self {
            Icon::Bell => "bell",
            Icon::BooksVertical => "books.vertical",
            Icon::Calendar => "calendar",
            Icon::Clock => "clock",
            Icon::ClockArrowCirclePath => "clock.arrow.2.circlepath",
            Icon::Checkmark => "checkmark",
            Icon::CheckmarkCircle => "checkmark.circle",
            Icon::CheckmarkCircleFill => "checkmark.circle.fill",
            Icon::ChevronBack => "chevron.backward",
            Icon::Circle => "circle",
            Icon::InfoCircle => "info.circle",
            Icon::ListDash => "list.dash",
            Icon::Person => "person",
            Icon::PlusCircle => "plus.circle",
            Icon::Repeat => "repeat",
        }
    }

    /// Look an icon up by its asset identifier.
    pub fn from_asset_name(name: &str) -> Option<Icon> {
        Icon::ALL.into_iter().find(|icon| icon.asset_name() == name)
    }
}
