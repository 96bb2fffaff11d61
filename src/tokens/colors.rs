//! Color tokens: semantic hues with a 50–900 scale, plus semantic aliases.
//!
//! Colors are always addressed by meaning (`primary`, `danger`, ...), never
//! by raw hex at the call site.

token_enum! {
    /// A semantic color family.
    pub enum Hue in "color hue" {
        Primary => "primary",
        Secondary => "secondary",
        Danger => "danger",
        Warning => "warning",
        Success => "success",
        Gray => "gray",
    }
}

token_enum! {
    /// A lightness step within a hue.
    pub enum Scale in "color scale" {
        S50 => "50",
        S100 => "100",
        S200 => "200",
        S300 => "300",
        S400 => "400",
        S500 => "500",
        S600 => "600",
        S700 => "700",
        S800 => "800",
        S900 => "900",
    }
}

impl Hue {
    /// The semantic hues shown as swatches (every hue except gray).
    pub const SEMANTIC: &'static [Hue] = &[
        Hue::Primary,
        Hue::Secondary,
        Hue::Danger,
        Hue::Warning,
        Hue::Success,
    ];
}

impl Scale {
    /// The numeric step (50, 100, ..., 900).
    pub const fn step(self) -> u16 {
        match self {
            Scale::S50 => 50,
            Scale::S100 => 100,
            Scale::S200 => 200,
            Scale::S300 => 300,
            Scale::S400 => 400,
            Scale::S500 => 500,
            Scale::S600 => 600,
            Scale::S700 => 700,
            Scale::S800 => 800,
            Scale::S900 => 900,
        }
    }

    /// Light steps need dark foreground text when used as a swatch.
    pub const fn is_light(self) -> bool {
        self.step() <= 300
    }
}

pub const WHITE: &str = "#FFFFFF";
pub const BLACK: &str = "#000000";
pub const TRANSPARENT: &str = "transparent";

const PRIMARY: [&str; 10] = [
    "#EFF6FF", "#DBEAFE", "#BFDBFE", "#93C5FD", "#60A5FA", "#3B82F6", "#2563EB", "#1D4ED8",
    "#1E40AF", "#1E3A8A",
];
const SECONDARY: [&str; 10] = [
    "#F8FAFC", "#F1F5F9", "#E2E8F0", "#CBD5E1", "#94A3B8", "#64748B", "#475569", "#334155",
    "#1E293B", "#0F172A",
];
const DANGER: [&str; 10] = [
    "#FEF2F2", "#FEE2E2", "#FECACA", "#FCA5A5", "#F87171", "#EF4444", "#DC2626", "#B91C1C",
    "#991B1B", "#7F1D1D",
];
const WARNING: [&str; 10] = [
    "#FFFBEB", "#FEF3C7", "#FDE68A", "#FCD34D", "#FBBF24", "#F59E0B", "#D97706", "#B45309",
    "#92400E", "#78350F",
];
const SUCCESS: [&str; 10] = [
    "#F0FDF4", "#DCFCE7", "#BBF7D0", "#86EFAC", "#4ADE80", "#22C55E", "#16A34A", "#15803D",
    "#166534", "#14532D",
];
const GRAY: [&str; 10] = [
    "#F9FAFB", "#F3F4F6", "#E5E7EB", "#D1D5DB", "#9CA3AF", "#6B7280", "#4B5563", "#374151",
    "#1F2937", "#111827",
];

/// Resolve `colors.<hue>[<scale>]`.
pub const fn color(hue: Hue, scale: Scale) -> &'static str {
    let table = match hue {
        Hue::Primary => &PRIMARY,
        Hue::Secondary => &SECONDARY,
        Hue::Danger => &DANGER,
        Hue::Warning => &WARNING,
        Hue::Success => &SUCCESS,
        Hue::Gray => &GRAY,
    };
    table[scale as usize]
}

/// Semantic aliases over the raw palette, grouped by usage.
pub mod semantic {
    use super::{color, Hue, Scale, WHITE};

    pub mod text {
        use super::*;

        pub const PRIMARY: &str = color(Hue::Gray, Scale::S900);
        pub const SECONDARY: &str = color(Hue::Gray, Scale::S600);
        pub const TERTIARY: &str = color(Hue::Gray, Scale::S500);
        pub const DISABLED: &str = color(Hue::Gray, Scale::S400);
        pub const INVERSE: &str = WHITE;
    }

    pub mod bg {
        use super::*;

        pub const PRIMARY: &str = WHITE;
        pub const SECONDARY: &str = color(Hue::Gray, Scale::S50);
        pub const TERTIARY: &str = color(Hue::Gray, Scale::S100);
        pub const INVERSE: &str = color(Hue::Gray, Scale::S900);
    }

    pub mod border {
        use super::*;

        pub const LIGHT: &str = color(Hue::Gray, Scale::S200);
        pub const DEFAULT: &str = color(Hue::Gray, Scale::S300);
        pub const STRONG: &str = color(Hue::Gray, Scale::S400);
    }

    pub mod interactive {
        use super::*;

        pub const HOVER: &str = color(Hue::Gray, Scale::S100);
        pub const ACTIVE: &str = color(Hue::Gray, Scale::S200);
        pub const FOCUS: &str = color(Hue::Primary, Scale::S500);
    }

    /// Resolve `semanticColors.<group>.<name>` from string keys.
    pub fn by_key(group: &str, name: &str) -> Option<&'static str> {
        let value = match (group, name) {
            ("text", "primary") => text::PRIMARY,
            ("text", "secondary") => text::SECONDARY,
            ("text", "tertiary") => text::TERTIARY,
            ("text", "disabled") => text::DISABLED,
            ("text", "inverse") => text::INVERSE,
            ("bg", "primary") => bg::PRIMARY,
            ("bg", "secondary") => bg::SECONDARY,
            ("bg", "tertiary") => bg::TERTIARY,
            ("bg", "inverse") => bg::INVERSE,
            ("border", "light") => border::LIGHT,
            ("border", "default") => border::DEFAULT,
            ("border", "strong") => border::STRONG,
            ("interactive", "hover") => interactive::HOVER,
            ("interactive", "active") => interactive::ACTIVE,
            ("interactive", "focus") => interactive::FOCUS,
            _ => return None,
        };
        Some(value)
    }
}
