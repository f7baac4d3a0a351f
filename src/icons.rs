//! Icon references and the glyph table they resolve through.
//!
//! Content records only carry an [`Icon`]; the SVG data lives here so the
//! content model stays independent of how icons are drawn.

use std::fmt;
use std::str::FromStr;

use log::warn;
use yew::prelude::*;

use crate::error::ContentError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Heart,
    Users,
    BookOpen,
    Sun,
    ShieldCheck,
    Mail,
    Phone,
    MapPin,
    ArrowRight,
    GraduationCap,
    Sprout,
    HandHeart,
    Quote,
}

impl Icon {
    pub const ALL: [Icon; 13] = [
        Icon::Heart,
        Icon::Users,
        Icon::BookOpen,
        Icon::Sun,
        Icon::ShieldCheck,
        Icon::Mail,
        Icon::Phone,
        Icon::MapPin,
        Icon::ArrowRight,
        Icon::GraduationCap,
        Icon::Sprout,
        Icon::HandHeart,
        Icon::Quote,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Icon::Heart => "heart",
            Icon::Users => "users",
            Icon::BookOpen => "book-open",
            Icon::Sun => "sun",
            Icon::ShieldCheck => "shield-check",
            Icon::Mail => "mail",
            Icon::Phone => "phone",
            Icon::MapPin => "map-pin",
            Icon::ArrowRight => "arrow-right",
            Icon::GraduationCap => "graduation-cap",
            Icon::Sprout => "sprout",
            Icon::HandHeart => "hand-heart",
            Icon::Quote => "quote",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Icon::ALL
            .iter()
            .copied()
            .find(|icon| icon.name() == wanted)
            .ok_or_else(|| ContentError::UnknownIcon(s.to_string()))
    }
}

/// One SVG primitive on a 24x24 stroked canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32, rx: f32 },
}

pub type Glyph = &'static [Shape];

const PLACEHOLDER: Glyph = &[
    Shape::Circle { cx: 12.0, cy: 12.0, r: 10.0 },
    Shape::Path("M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"),
    Shape::Path("M12 17h.01"),
];

static GLYPHS: &[(Icon, Glyph)] = &[
    (Icon::Heart, &[Shape::Path(
        "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
    )]),
    (Icon::Users, &[
        Shape::Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
        Shape::Circle { cx: 9.0, cy: 7.0, r: 4.0 },
        Shape::Path("M22 21v-2a4 4 0 0 0-3-3.87"),
        Shape::Path("M16 3.13a4 4 0 0 1 0 7.75"),
    ]),
    (Icon::BookOpen, &[
        Shape::Path("M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"),
        Shape::Path("M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"),
    ]),
    (Icon::Sun, &[
        Shape::Circle { cx: 12.0, cy: 12.0, r: 4.0 },
        Shape::Path("M12 2v2"),
        Shape::Path("M12 20v2"),
        Shape::Path("m4.93 4.93 1.41 1.41"),
        Shape::Path("m17.66 17.66 1.41 1.41"),
        Shape::Path("M2 12h2"),
        Shape::Path("M20 12h2"),
        Shape::Path("m6.34 17.66-1.41 1.41"),
        Shape::Path("m19.07 4.93-1.41 1.41"),
    ]),
    (Icon::ShieldCheck, &[
        Shape::Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10"),
        Shape::Path("m9 12 2 2 4-4"),
    ]),
    (Icon::Mail, &[
        Shape::Rect { x: 2.0, y: 4.0, width: 20.0, height: 16.0, rx: 2.0 },
        Shape::Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
    ]),
    (Icon::Phone, &[Shape::Path(
        "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
    )]),
    (Icon::MapPin, &[
        Shape::Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
        Shape::Circle { cx: 12.0, cy: 10.0, r: 3.0 },
    ]),
    (Icon::ArrowRight, &[Shape::Path("M5 12h14"), Shape::Path("m12 5 7 7-7 7")]),
    (Icon::GraduationCap, &[
        Shape::Path("M22 10v6M2 10l10-5 10 5-10 5z"),
        Shape::Path("M6 12v5c3 3 9 3 12 0v-5"),
    ]),
    (Icon::Sprout, &[
        Shape::Path("M7 20h10"),
        Shape::Path("M10 20c5.5-2.5.8-6.4 3-10"),
        Shape::Path("M9.5 9.4c1.1.8 1.8 2.2 2.3 3.7-2 .4-3.5.4-4.8-.3-1.2-.6-2.3-1.9-3-4.2 2.8-.5 4.4 0 5.5.8z"),
        Shape::Path("M14.1 6a7 7 0 0 0-1.1 4c1.9-.1 3.3-.6 4.3-1.4 1-1 1.6-2.3 1.7-4.6-2.7.1-4 1-4.9 2z"),
    ]),
    (Icon::HandHeart, &[
        Shape::Path("M11 14h2a2 2 0 1 0 0-4h-3c-.6 0-1.1.2-1.4.6L3 16"),
        Shape::Path("m7 20 1.6-1.4c.3-.4.8-.6 1.4-.6h4c1.1 0 2.1-.4 2.8-1.2l4.6-4.4a2 2 0 0 0-2.75-2.91l-4.2 3.9"),
        Shape::Path("m2 15 6 6"),
        Shape::Path("M19.5 8.5c.7-.7 1.5-1.6 1.5-2.7A2.73 2.73 0 0 0 16 4a2.78 2.78 0 0 0-5 1.8c0 1.2.8 2 1.5 2.8L16 12Z"),
    ]),
    (Icon::Quote, &[
        Shape::Path("M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z"),
        Shape::Path("M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z"),
    ]),
];

fn lookup_in(table: &[(Icon, Glyph)], icon: Icon) -> Result<Glyph, ContentError> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == icon)
        .map(|(_, glyph)| *glyph)
        .ok_or_else(|| ContentError::UnknownIcon(icon.name().to_string()))
}

/// Glyph for `icon`, or the placeholder when the table has no entry.
pub fn resolve(icon: Icon) -> Glyph {
    resolve_in(GLYPHS, icon)
}

fn resolve_in(table: &[(Icon, Glyph)], icon: Icon) -> Glyph {
    match lookup_in(table, icon) {
        Ok(glyph) => glyph,
        Err(err) => {
            warn!("{}, drawing placeholder", err);
            PLACEHOLDER
        }
    }
}

fn shape_html(shape: &Shape) -> Html {
    match *shape {
        Shape::Path(d) => html! { <path d={d} /> },
        Shape::Circle { cx, cy, r } => html! {
            <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
        },
        Shape::Rect { x, y, width, height, rx } => html! {
            <rect
                x={x.to_string()}
                y={y.to_string()}
                width={width.to_string()}
                height={height.to_string()}
                rx={rx.to_string()}
            />
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    let glyph = resolve(props.icon);

    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon={props.icon.name()}
            class={classes!("icon", props.class.clone())}
        >
            { for glyph.iter().map(shape_html) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_a_glyph() {
        for icon in Icon::ALL {
            let glyph = lookup_in(GLYPHS, icon).unwrap_or_else(|e| panic!("{}", e));
            assert!(!glyph.is_empty(), "{} has an empty glyph", icon);
        }
    }

    #[test]
    fn table_has_no_duplicates() {
        for icon in Icon::ALL {
            let count = GLYPHS.iter().filter(|(i, _)| *i == icon).count();
            assert_eq!(count, 1, "{} appears {} times", icon, count);
        }
    }

    #[test]
    fn names_parse_back() {
        for icon in Icon::ALL {
            assert_eq!(icon.name().parse::<Icon>(), Ok(icon));
        }
        assert_eq!(" Book-Open ".parse::<Icon>(), Ok(Icon::BookOpen));
    }

    #[test]
    fn unknown_name_is_a_content_error() {
        assert_eq!(
            "church".parse::<Icon>(),
            Err(ContentError::UnknownIcon("church".to_string()))
        );
    }

    #[test]
    fn missing_table_entry_falls_back_to_placeholder() {
        assert!(lookup_in(&[], Icon::Heart).is_err());
        assert_eq!(resolve_in(&[], Icon::Heart), PLACEHOLDER);
        assert_ne!(resolve(Icon::Heart), PLACEHOLDER);
    }
}
