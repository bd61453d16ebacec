//! Catalog icon lookup by name, with `Database` as the fallback.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Database,
    ShoppingCart,
    Users,
    Activity,
    BookOpen,
    Film,
    Music,
    Globe,
    Heart,
    TrendingUp,
    Briefcase,
    MessageSquare,
    Plane,
    Car,
    Trophy,
}

impl IconKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "ShoppingCart" => Self::ShoppingCart,
            "Users" => Self::Users,
            "Activity" => Self::Activity,
            "BookOpen" => Self::BookOpen,
            "Film" => Self::Film,
            "Music" => Self::Music,
            "Globe" => Self::Globe,
            "Heart" => Self::Heart,
            "TrendingUp" => Self::TrendingUp,
            "Briefcase" => Self::Briefcase,
            "MessageSquare" => Self::MessageSquare,
            "Plane" => Self::Plane,
            "Car" => Self::Car,
            "Trophy" => Self::Trophy,
            _ => Self::Database,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Database => "\u{1F5C4}",
            Self::ShoppingCart => "\u{1F6D2}",
            Self::Users => "\u{1F465}",
            Self::Activity => "\u{1F4C8}",
            Self::BookOpen => "\u{1F4D6}",
            Self::Film => "\u{1F3AC}",
            Self::Music => "\u{1F3B5}",
            Self::Globe => "\u{1F310}",
            Self::Heart => "\u{2764}",
            Self::TrendingUp => "\u{1F4C8}",
            Self::Briefcase => "\u{1F4BC}",
            Self::MessageSquare => "\u{1F4AC}",
            Self::Plane => "\u{2708}",
            Self::Car => "\u{1F697}",
            Self::Trophy => "\u{1F3C6}",
        }
    }
}
