//! Typography tokens: families, sizes, weights, line heights, letter spacing,
//! and pre-composed presets.

token_enum! {
    #[derive(Default)]
    pub enum FontFamily in "font family" {
        #[default]
        Sans => "sans",
        Korean => "korean",
        Display => "display",
        Mono => "mono",
        Serif => "serif",
    }
}

token_enum! {
    #[derive(Default)]
    pub enum FontSize in "font size" {
        Xs => "xs",
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        X2l => "2xl",
        X3l => "3xl",
        X4l => "4xl",
        X5l => "5xl",
    }
}

token_enum! {
    #[derive(Default)]
    pub enum FontWeight in "font weight" {
        Light => "light",
        #[default]
        Regular => "regular",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
        Extrabold => "extrabold",
    }
}

token_enum! {
    #[derive(Default)]
    pub enum LineHeight in "line height" {
        Tight => "tight",
        Snug => "snug",
        #[default]
        Normal => "normal",
        Relaxed => "relaxed",
        Loose => "loose",
    }
}

token_enum! {
    pub enum LetterSpacing in "letter spacing" {
        Tighter => "tighter",
        Tight => "tight",
        Normal => "normal",
        Wide => "wide",
        Wider => "wider",
        Widest => "widest",
    }
}

token_enum! {
    /// A pre-composed typography bundle, selected as a unit.
    pub enum TypographyPreset in "typography preset" {
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        BodyLarge => "bodyLarge",
        Body => "body",
        BodySmall => "bodySmall",
        Korean => "korean",
        Caption => "caption",
        Code => "code",
        Article => "article",
    }
}

impl FontFamily {
    pub const fn value(self) -> &'static str {
        match self {
            FontFamily::Sans => {
                "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif"
            }
            FontFamily::Korean => "\"Pretendard\", \"Apple SD Gothic Neo\", \"Noto Sans KR\", sans-serif",
            FontFamily::Display => "\"Inter\", \"SF Pro Display\", -apple-system, sans-serif",
            FontFamily::Mono => {
                "ui-monospace, SFMono-Regular, \"SF Mono\", Menlo, Consolas, \"Liberation Mono\", monospace"
            }
            FontFamily::Serif => "ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif",
        }
    }
}

impl FontSize {
    pub const fn value(self) -> &'static str {
        match self {
            FontSize::Xs => "0.75rem",
            FontSize::Sm => "0.875rem",
            FontSize::Md => "1rem",
            FontSize::Lg => "1.125rem",
            FontSize::Xl => "1.25rem",
            FontSize::X2l => "1.5rem",
            FontSize::X3l => "1.875rem",
            FontSize::X4l => "2.25rem",
            FontSize::X5l => "3rem",
        }
    }

    /// Nominal pixel size at a 16px root.
    pub const fn px(self) -> u16 {
        match self {
            FontSize::Xs => 12,
            FontSize::Sm => 14,
            FontSize::Md => 16,
            FontSize::Lg => 18,
            FontSize::Xl => 20,
            FontSize::X2l => 24,
            FontSize::X3l => 30,
            FontSize::X4l => 36,
            FontSize::X5l => 48,
        }
    }
}

impl FontWeight {
    pub const fn value(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Extrabold => 800,
        }
    }
}

impl LineHeight {
    pub const fn value(self) -> f32 {
        match self {
            LineHeight::Tight => 1.25,
            LineHeight::Snug => 1.375,
            LineHeight::Normal => 1.5,
            LineHeight::Relaxed => 1.75,
            LineHeight::Loose => 2.0,
        }
    }
}

impl LetterSpacing {
    pub const fn value(self) -> &'static str {
        match self {
            LetterSpacing::Tighter => "-0.05em",
            LetterSpacing::Tight => "-0.025em",
            LetterSpacing::Normal => "0",
            LetterSpacing::Wide => "0.025em",
            LetterSpacing::Wider => "0.05em",
            LetterSpacing::Widest => "0.1em",
        }
    }
}

/// The typography values a preset fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetBundle {
    pub family: FontFamily,
    pub size: FontSize,
    pub weight: FontWeight,
    pub line_height: LineHeight,
    pub letter_spacing: Option<LetterSpacing>,
}

impl TypographyPreset {
    pub const fn bundle(self) -> PresetBundle {
        use FontFamily as F;
        use FontSize as S;
        use FontWeight as W;
        use LineHeight as L;

        let (family, size, weight, line_height, letter_spacing) = match self {
            TypographyPreset::H1 => (F::Display, S::X4l, W::Bold, L::Tight, Some(LetterSpacing::Tight)),
            TypographyPreset::H2 => (F::Display, S::X3l, W::Bold, L::Tight, Some(LetterSpacing::Tight)),
            TypographyPreset::H3 => (F::Display, S::X2l, W::Semibold, L::Snug, None),
            TypographyPreset::H4 => (F::Display, S::Xl, W::Semibold, L::Normal, None),
            TypographyPreset::BodyLarge => (F::Sans, S::Lg, W::Regular, L::Relaxed, None),
            TypographyPreset::Body => (F::Sans, S::Md, W::Regular, L::Normal, None),
            TypographyPreset::BodySmall => (F::Sans, S::Sm, W::Regular, L::Normal, None),
            TypographyPreset::Korean => (F::Korean, S::Md, W::Regular, L::Relaxed, None),
            TypographyPreset::Caption => (F::Sans, S::Xs, W::Regular, L::Normal, None),
            TypographyPreset::Code => (F::Mono, S::Sm, W::Regular, L::Normal, None),
            TypographyPreset::Article => (F::Serif, S::Lg, W::Regular, L::Loose, None),
        };
        PresetBundle {
            family,
            size,
            weight,
            line_height,
            letter_spacing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h1_preset() {
        let b = TypographyPreset::H1.bundle();
        assert_eq!(b.size.value(), "2.25rem");
        assert_eq!(b.weight.value(), 700);
        assert_eq!(b.line_height.value(), 1.25);
        assert_eq!(b.letter_spacing, Some(LetterSpacing::Tight));
    }

    #[test]
    fn presets_without_letter_spacing() {
        assert_eq!(TypographyPreset::Body.bundle().letter_spacing, None);
        assert_eq!(TypographyPreset::Code.bundle().family, FontFamily::Mono);
    }

    #[test]
    fn camel_case_preset_keys() {
        assert_eq!("bodySmall".parse::<TypographyPreset>(), Ok(TypographyPreset::BodySmall));
        assert!("body-small".parse::<TypographyPreset>().is_err());
    }

    #[test]
    fn defaults() {
        assert_eq!(FontFamily::default(), FontFamily::Sans);
        assert_eq!(FontSize::default(), FontSize::Md);
        assert_eq!(FontWeight::default(), FontWeight::Regular);
        assert_eq!(LineHeight::default(), LineHeight::Normal);
    }

    #[test]
    fn size_px_matches_rem() {
        for &size in FontSize::ALL {
            let rem: f32 = size.value().trim_end_matches("rem").parse().unwrap();
            assert_eq!((rem * 16.0) as u16, size.px(), "{size}");
        }
    }
}
