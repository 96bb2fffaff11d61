//! Token path lookup: `colors.primary[500]`, `typography.fontSize.lg`, ...
//!
//! Paths are lexed with logos and resolved segment by segment through the
//! typed token enums, so an unknown key fails with the same
//! [`TokenError::UnknownKey`] a `FromStr` parse would produce.
//!
//! Token priority in logos: longest match wins, so `2xl` lexes as a single
//! [`PathToken::Segment`] and `"2xl"` as a [`PathToken::Quoted`].

use std::str::FromStr;

use logos::Logos;

use super::colors::{self, Hue, Scale};
use super::interaction::{Animation, Duration, Easing, Transition};
use super::radii::{Radius, Shape};
use super::shadows::Shadow;
use super::spacing::Spacing;
use super::typography::{FontFamily, FontSize, FontWeight, LetterSpacing, LineHeight, TypographyPreset};
use super::{TokenError, TokenValue};

/// Token produced by the path lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum PathToken {
    /// Quoted key inside brackets: `"2xl"` or `'2xl'`.
    #[regex(r#""[^"]*""#)]
    #[regex(r"'[^']*'")]
    Quoted,

    /// Bare key: `colors`, `primary`, `500`, `2xl`, `hover-scale`.
    #[regex(r"[a-zA-Z0-9_-]+")]
    Segment,

    #[token(".")]
    Dot,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,
}

/// Split a token path into its key segments.
///
/// Accepts `a.b.c`, `a[b]`, `a["b"]` and any mix of them.
pub fn parse_path(path: &str) -> Result<Vec<String>, TokenError> {
    let invalid = |message: String| TokenError::InvalidPath {
        path: path.to_owned(),
        message,
    };

    let mut lexer = PathToken::lexer(path);
    let mut segments = Vec::new();
    let mut expect_key = true;

    while let Some(result) = lexer.next() {
        let token = result.map_err(|_| invalid(format!("unexpected `{}`", lexer.slice())))?;
        match token {
            PathToken::Segment if expect_key => {
                segments.push(lexer.slice().to_owned());
                expect_key = false;
            }
            PathToken::Dot if !expect_key => expect_key = true,
            PathToken::BracketOpen if !expect_key => {
                let key = match lexer.next() {
                    Some(Ok(PathToken::Segment)) => lexer.slice().to_owned(),
                    Some(Ok(PathToken::Quoted)) => {
                        let quoted = lexer.slice();
                        quoted[1..quoted.len() - 1].to_owned()
                    }
                    _ => return Err(invalid("expected a key after `[`".into())),
                };
                match lexer.next() {
                    Some(Ok(PathToken::BracketClose)) => {}
                    _ => return Err(invalid("unclosed `[`".into())),
                }
                segments.push(key);
            }
            _ => return Err(invalid(format!("unexpected `{}`", lexer.slice()))),
        }
    }

    if segments.is_empty() {
        return Err(invalid("empty path".into()));
    }
    if expect_key {
        return Err(invalid("trailing `.`".into()));
    }
    Ok(segments)
}

/// Resolve a token path to its literal value.
///
/// ```
/// use tokenkit::tokens::{lookup, TokenValue};
///
/// assert_eq!(lookup("colors.primary[500]").unwrap(), TokenValue::Text("#3B82F6"));
/// assert!(lookup("colors.primary[550]").is_err());
/// ```
pub fn lookup(path: &str) -> Result<TokenValue, TokenError> {
    let segments = parse_path(path)?;
    let mut cursor = Cursor {
        path,
        rest: segments.iter(),
    };
    let category = cursor.next_str("a token category")?;

    let value = match category {
        "colors" => {
            let key = cursor.next_str("a color hue")?;
            match key {
                "white" => TokenValue::Text(colors::WHITE),
                "black" => TokenValue::Text(colors::BLACK),
                "transparent" => TokenValue::Text(colors::TRANSPARENT),
                hue => {
                    let hue: Hue = hue.parse()?;
                    let scale: Scale = cursor.next("a color scale")?;
                    TokenValue::Text(colors::color(hue, scale))
                }
            }
        }
        "semanticColors" => {
            let group = cursor.next_str("a semantic color group")?;
            let name = cursor.next_str("a semantic color name")?;
            let value = colors::semantic::by_key(group, name).ok_or_else(|| {
                TokenError::UnknownKey {
                    category: "semantic color",
                    key: format!("{group}.{name}"),
                }
            })?;
            TokenValue::Text(value)
        }
        "spacing" => TokenValue::Text(cursor.next::<Spacing>("a spacing step")?.value()),
        "typography" => match cursor.next_str("a typography scale")? {
            "fontFamily" => TokenValue::Text(cursor.next::<FontFamily>("a font family")?.value()),
            "fontSize" => TokenValue::Text(cursor.next::<FontSize>("a font size")?.value()),
            "fontWeight" => TokenValue::Weight(cursor.next::<FontWeight>("a font weight")?.value()),
            "lineHeight" => TokenValue::Ratio(cursor.next::<LineHeight>("a line height")?.value()),
            "letterSpacing" => {
                TokenValue::Text(cursor.next::<LetterSpacing>("a letter spacing")?.value())
            }
            other => return Err(unknown("typography scale", other)),
        },
        "typographyPresets" => {
            let preset = cursor.next::<TypographyPreset>("a typography preset")?.bundle();
            match cursor.next_str("a preset field")? {
                "fontFamily" => TokenValue::Text(preset.family.value()),
                "fontSize" => TokenValue::Text(preset.size.value()),
                "fontWeight" => TokenValue::Weight(preset.weight.value()),
                "lineHeight" => TokenValue::Ratio(preset.line_height.value()),
                "letterSpacing" => match preset.letter_spacing {
                    Some(spacing) => TokenValue::Text(spacing.value()),
                    None => return Err(unknown("preset field", "letterSpacing")),
                },
                other => return Err(unknown("preset field", other)),
            }
        }
        "radii" => TokenValue::Text(cursor.next::<Radius>("a radius")?.value()),
        "shapePresets" => TokenValue::Text(cursor.next::<Shape>("a shape")?.radius().value()),
        "interaction" => match cursor.next_str("an interaction scale")? {
            "duration" => TokenValue::Text(cursor.next::<Duration>("a duration")?.value()),
            "easing" => TokenValue::Text(cursor.next::<Easing>("an easing")?.value()),
            "transition" => TokenValue::Text(cursor.next::<Transition>("a transition")?.value()),
            other => return Err(unknown("interaction scale", other)),
        },
        "animations" => {
            let animation: Animation = cursor.next("an animation")?;
            match cursor.next_str("an animation field")? {
                "keyframes" => TokenValue::Text(animation.keyframes()),
                "animation" => TokenValue::Text(animation.shorthand()),
                other => return Err(unknown("animation field", other)),
            }
        }
        "shadows" => TokenValue::Text(cursor.next::<Shadow>("a shadow")?.value()),
        other => return Err(TokenError::UnknownCategory(other.to_owned())),
    };

    cursor.finish()?;
    tracing::trace!(path, %value, "resolved token path");
    Ok(value)
}

fn unknown(category: &'static str, key: &str) -> TokenError {
    TokenError::UnknownKey {
        category,
        key: key.to_owned(),
    }
}

/// Walks the parsed segments of one path.
struct Cursor<'a> {
    path: &'a str,
    rest: std::slice::Iter<'a, String>,
}

impl<'a> Cursor<'a> {
    fn next_str(&mut self, expected: &'static str) -> Result<&'a str, TokenError> {
        self.rest
            .next()
            .map(String::as_str)
            .ok_or_else(|| TokenError::Incomplete {
                path: self.path.to_owned(),
                expected,
            })
    }

    fn next<T>(&mut self, expected: &'static str) -> Result<T, TokenError>
    where
        T: FromStr<Err = TokenError>,
    {
        self.next_str(expected)?.parse()
    }

    fn finish(mut self) -> Result<(), TokenError> {
        match self.rest.next() {
            None => Ok(()),
            Some(extra) => Err(TokenError::InvalidPath {
                path: self.path.to_owned(),
                message: format!("unexpected segment `{extra}` after a token value"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_path ───────────────────────────────────────────────────

    #[test]
    fn dotted_and_bracketed() {
        assert_eq!(
            parse_path("colors.primary[500]").unwrap(),
            vec!["colors", "primary", "500"]
        );
        assert_eq!(parse_path("spacing['2xl']").unwrap(), vec!["spacing", "2xl"]);
        assert_eq!(parse_path(r#"radii["2xl"]"#).unwrap(), vec!["radii", "2xl"]);
        assert_eq!(parse_path("radii.2xl").unwrap(), vec!["radii", "2xl"]);
    }

    #[test]
    fn rejects_malformed_paths() {
        for bad in ["", "colors.", ".colors", "colors..primary", "colors[500", "colors[]", "colors primary", "colors/primary"] {
            assert!(
                matches!(parse_path(bad), Err(TokenError::InvalidPath { .. })),
                "{bad:?} should be invalid"
            );
        }
    }

    // ── lookup ───────────────────────────────────────────────────────

    #[test]
    fn color_lookup_matches_constant() {
        assert_eq!(
            lookup("colors.primary[500]").unwrap(),
            TokenValue::Text(colors::color(Hue::Primary, Scale::S500))
        );
        assert_eq!(lookup("colors.white").unwrap(), TokenValue::Text("#FFFFFF"));
    }

    #[test]
    fn typed_values() {
        assert_eq!(lookup("typography.fontWeight.bold").unwrap(), TokenValue::Weight(700));
        assert_eq!(lookup("typography.lineHeight.snug").unwrap(), TokenValue::Ratio(1.375));
        assert_eq!(lookup("typographyPresets.h1.fontSize").unwrap(), TokenValue::Text("2.25rem"));
        assert_eq!(lookup("interaction.duration.fast").unwrap(), TokenValue::Text("120ms"));
        assert_eq!(lookup("shapePresets.pill").unwrap(), TokenValue::Text("9999px"));
        assert_eq!(lookup("semanticColors.text.primary").unwrap(), TokenValue::Text("#111827"));
    }

    #[test]
    fn animation_fields() {
        assert_eq!(
            lookup("animations.fadeIn.animation").unwrap(),
            TokenValue::Text("fadeIn 200ms cubic-bezier(0, 0, 0.2, 1)")
        );
        assert!(lookup("animations.slideUp.keyframes")
            .unwrap()
            .as_str()
            .is_some_and(|k| k.starts_with("@keyframes slideUp")));
        assert!(matches!(
            lookup("animations.fadeIn.duration"),
            Err(TokenError::UnknownKey { .. })
        ));
    }

    #[test]
    fn unknown_key_fails_fast() {
        assert_eq!(
            lookup("colors.primary[550]"),
            Err(TokenError::UnknownKey {
                category: "color scale",
                key: "550".into()
            })
        );
        assert_eq!(
            lookup("colors.tertiary[500]"),
            Err(TokenError::UnknownKey {
                category: "color hue",
                key: "tertiary".into()
            })
        );
        assert!(matches!(
            lookup("typographyPresets.body.letterSpacing"),
            Err(TokenError::UnknownKey { .. })
        ));
    }

    #[test]
    fn unknown_category() {
        assert_eq!(
            lookup("borders.thin"),
            Err(TokenError::UnknownCategory("borders".into()))
        );
    }

    #[test]
    fn incomplete_and_overlong_paths() {
        assert!(matches!(
            lookup("colors.primary"),
            Err(TokenError::Incomplete { expected: "a color scale", .. })
        ));
        assert!(matches!(
            lookup("spacing.md.extra"),
            Err(TokenError::InvalidPath { .. })
        ));
    }
}
