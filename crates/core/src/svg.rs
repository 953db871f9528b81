//! Procedural SVG compositor.
//!
//! Builds a self-contained 500x500 SVG document from a [`TraitSet`]. Layers,
//! bottom to top:
//!
//! 1. linear gradient background (`color1 -> color2 -> accent`)
//! 2. radial overlay (ethereal style only)
//! 3. tiled pattern overlay
//! 4. the main shape, centred
//! 5. rotated secondary disc (dynamic style only)
//! 6. translucent accent scatter (8 circles for vibrant, otherwise 4)
//! 7. glow ring (mystical style only)
//!
//! Everything except the accent scatter and the element-id suffix is a pure
//! function of the traits. Those two draw from the caller's [`Rng`];
//! [`render_image`] uses thread-local entropy, [`render_image_with`] lets a
//! caller pass a seeded generator for byte-identical output.

use std::f64::consts::PI;

use rand::Rng;

use crate::catalog::{HexColor, Pattern, Shape, Style};
use crate::traits::TraitSet;

// ---------------------------------------------------------------------------
// Canvas constants
// ---------------------------------------------------------------------------

/// Width and height of the canvas in user units.
pub const CANVAS_SIZE: u32 = 500;
/// Width and height of one pattern tile.
pub const TILE_SIZE: u32 = 20;
/// Nominal radius of the main shape.
pub const SHAPE_SIZE: f64 = 140.0;

const CENTER: f64 = CANVAS_SIZE as f64 / 2.0;
const SHAPE_OPACITY: f64 = 0.85;
const PATTERN_OVERLAY_OPACITY: f64 = 0.3;

const ACCENT_COUNT: usize = 4;
const ACCENT_COUNT_VIBRANT: usize = 8;

/// Tile drawn for a pattern name that is not in the catalog.
fn default_tile(color: &HexColor) -> String {
    format!(r#"<circle cx="10" cy="10" r="1" fill="{color}" opacity="0.5" />"#)
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Render `traits` using thread-local entropy for the cosmetic layer.
pub fn render_image(traits: &TraitSet) -> String {
    render_image_with(traits, &mut rand::rng())
}

/// Render `traits`, drawing accent positions and element ids from `rng`.
pub fn render_image_with<R: Rng + ?Sized>(traits: &TraitSet, rng: &mut R) -> String {
    let TraitSet {
        shape,
        pattern,
        color1,
        color2,
        accent,
        style,
        ..
    } = traits;

    let suffix = format!("{:08x}", rng.random::<u32>());
    let gradient_id = format!("grad-{suffix}");
    let radial_id = format!("grad-{suffix}-radial");
    let pattern_id = format!("pattern-{suffix}");
    let glow_id = format!("glow-{suffix}");

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg width="{CANVAS_SIZE}" height="{CANVAS_SIZE}" viewBox="0 0 {CANVAS_SIZE} {CANVAS_SIZE}" xmlns="http://www.w3.org/2000/svg">"#
    ));
    svg.push('\n');

    // Definitions
    svg.push_str("  <defs>\n");
    svg.push_str(&format!(
        r#"    <linearGradient id="{gradient_id}" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{color1};stop-opacity:1" />
      <stop offset="50%" style="stop-color:{color2};stop-opacity:0.8" />
      <stop offset="100%" style="stop-color:{accent};stop-opacity:1" />
    </linearGradient>
"#
    ));
    svg.push_str(&format!(
        r#"    <radialGradient id="{radial_id}" cx="50%" cy="50%" r="50%">
      <stop offset="0%" style="stop-color:{color1};stop-opacity:0.8" />
      <stop offset="100%" style="stop-color:{color2};stop-opacity:1" />
    </radialGradient>
"#
    ));
    svg.push_str(&format!(
        r#"    <pattern id="{pattern_id}" patternUnits="userSpaceOnUse" width="{TILE_SIZE}" height="{TILE_SIZE}">
      {}
    </pattern>
"#,
        pattern_tile(*pattern, accent)
    ));
    if *style == Style::Mystical {
        svg.push_str(&format!(
            r#"    <filter id="{glow_id}">
      <feGaussianBlur stdDeviation="4" result="coloredBlur" />
      <feMerge>
        <feMergeNode in="coloredBlur" />
        <feMergeNode in="SourceGraphic" />
      </feMerge>
    </filter>
"#
        ));
    }
    svg.push_str("  </defs>\n");

    // Background
    svg.push_str(&format!(
        r#"  <rect id="background" width="{CANVAS_SIZE}" height="{CANVAS_SIZE}" fill="url(#{gradient_id})" />"#
    ));
    svg.push('\n');

    if *style == Style::Ethereal {
        svg.push_str(&format!(
            r#"  <rect width="{CANVAS_SIZE}" height="{CANVAS_SIZE}" fill="url(#{radial_id})" opacity="0.6" />"#
        ));
        svg.push('\n');
    }

    // Pattern overlay
    svg.push_str(&format!(
        r#"  <rect width="{CANVAS_SIZE}" height="{CANVAS_SIZE}" fill="url(#{pattern_id})" opacity="{PATTERN_OVERLAY_OPACITY}" />"#
    ));
    svg.push('\n');

    // Main shape
    svg.push_str(&format!(
        r#"  <g id="main-shape" transform="translate({c},{c})">
    {}
  </g>
"#,
        shape_element(*shape, accent, SHAPE_SIZE),
        c = num(CENTER),
    ));

    if *style == Style::Dynamic {
        svg.push_str(&format!(
            r#"  <g transform="translate({c},{c}) rotate(45)"><circle r="80" fill="{color1}" opacity="0.4" /></g>"#,
            c = num(CENTER),
        ));
        svg.push('\n');
    }

    let accent_count = if *style == Style::Vibrant {
        ACCENT_COUNT_VIBRANT
    } else {
        ACCENT_COUNT
    };
    svg.push_str(&accent_elements(accent, accent_count, rng));

    if *style == Style::Mystical {
        svg.push_str(&format!(
            r#"  <g transform="translate({c},{c})" filter="url(#{glow_id})">
    <circle r="160" stroke="{accent}" stroke-width="2" fill="none" opacity="0.6" />
  </g>
"#,
            c = num(CENTER),
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

// ---------------------------------------------------------------------------
// Pattern tiles
// ---------------------------------------------------------------------------

/// The single primitive drawn inside one 20x20 pattern tile.
pub fn pattern_tile(pattern: Pattern, color: &HexColor) -> String {
    match pattern {
        Pattern::Dots => {
            format!(r#"<circle cx="10" cy="10" r="2" fill="{color}" opacity="0.6" />"#)
        }
        Pattern::Lines => format!(
            r#"<line x1="0" y1="10" x2="20" y2="10" stroke="{color}" stroke-width="1" opacity="0.6" />"#
        ),
        Pattern::Grid => format!(
            r#"<rect x="0" y="0" width="20" height="20" fill="none" stroke="{color}" stroke-width="1" opacity="0.4" />"#
        ),
        Pattern::Waves => format!(
            r#"<path d="M0,10 Q5,5 10,10 T20,10" stroke="{color}" stroke-width="2" fill="none" opacity="0.6" />"#
        ),
        Pattern::Spiral => format!(
            r#"<path d="M10,2 Q18,10 10,18 Q2,10 10,2" stroke="{color}" stroke-width="1" fill="none" opacity="0.6" />"#
        ),
        Pattern::Fractal => format!(
            r#"<polygon points="10,2 6,18 18,18" stroke="{color}" stroke-width="1" fill="none" opacity="0.5" />"#
        ),
        Pattern::Organic => format!(
            r#"<path d="M10,4 C15,4 16,9 14,12 C12,16 6,16 5,11 C4,7 6,4 10,4 Z" fill="{color}" opacity="0.4" />"#
        ),
        Pattern::Geometric => format!(
            r#"<polygon points="10,3 17,10 10,17 3,10" stroke="{color}" stroke-width="1" fill="none" opacity="0.5" />"#
        ),
        Pattern::Flowing => format!(
            r#"<path d="M0,5 C7,0 13,20 20,15" stroke="{color}" stroke-width="1.5" fill="none" opacity="0.5" />"#
        ),
        Pattern::Structured => format!(
            r#"<path d="M10,4 L10,16 M4,10 L16,10" stroke="{color}" stroke-width="1" fill="none" opacity="0.5" />"#
        ),
    }
}

/// Like [`pattern_tile`] but keyed by catalog name; unknown names get a
/// faint dot instead of an error.
pub fn pattern_tile_for_name(name: &str, color: &HexColor) -> String {
    match name.parse::<Pattern>() {
        Ok(pattern) => pattern_tile(pattern, color),
        Err(_) => default_tile(color),
    }
}

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

/// Markup for the main shape, drawn around the origin of its group.
pub fn shape_element(shape: Shape, color: &HexColor, size: f64) -> String {
    let opacity = num(SHAPE_OPACITY);
    let s = num(size);

    match shape {
        Shape::Circle => format!(r#"<circle r="{s}" fill="{color}" opacity="{opacity}" />"#),
        Shape::Hexagon => {
            let points = polygon_points(6, 60.0, |_| size);
            format!(r#"<polygon points="{points}" fill="{color}" opacity="{opacity}" />"#)
        }
        Shape::Pentagon => {
            let points = polygon_points(5, 72.0, |_| size);
            format!(r#"<polygon points="{points}" fill="{color}" opacity="{opacity}" />"#)
        }
        Shape::Star => {
            let points =
                polygon_points(10, 36.0, |i| if i % 2 == 0 { size } else { size * 0.5 });
            format!(r#"<polygon points="{points}" fill="{color}" opacity="{opacity}" />"#)
        }
        Shape::Diamond => format!(
            r#"<polygon points="0,-{s} {s},0 0,{s} -{s},0" fill="{color}" opacity="{opacity}" />"#
        ),
        Shape::Triangle => {
            let dx = num(size * 0.866);
            let dy = num(size / 2.0);
            format!(
                r#"<polygon points="0,-{s} {dx},{dy} -{dx},{dy}" fill="{color}" opacity="{opacity}" />"#
            )
        }
        Shape::Spiral => {
            let mut d = String::from("M0,0");
            for i in 0..100 {
                let angle = f64::from(i) * 0.1;
                let radius = f64::from(i) * 1.5;
                d.push_str(&format!(
                    " L{},{}",
                    num(radius * angle.cos()),
                    num(radius * angle.sin())
                ));
            }
            format!(
                r#"<path d="{d}" stroke="{color}" stroke-width="4" fill="none" opacity="{opacity}" />"#
            )
        }
        Shape::Wave => {
            let half = num(size / 2.0);
            format!(
                r#"<path d="M-{s},-20 Q-{half},{s} 0,0 T{s},20" stroke="{color}" stroke-width="8" fill="none" opacity="{opacity}" />"#
            )
        }
        Shape::Infinity => {
            let near = num(size * 0.5);
            let lift = num(size * 0.6);
            format!(
                r#"<path d="M0,0 C{near},-{lift} {s},-{lift} {s},0 C{s},{lift} {near},{lift} 0,0 C-{near},-{lift} -{s},-{lift} -{s},0 C-{s},{lift} -{near},{lift} 0,0 Z" stroke="{color}" stroke-width="10" fill="none" opacity="{opacity}" />"#
            )
        }
        Shape::Mandala => {
            let mut elements = String::new();
            for ring in 0..3u32 {
                let ring_radius = size * (0.3 + f64::from(ring) * 0.35);
                let dot_radius = 5 + ring * 3;
                let ring_opacity = num(SHAPE_OPACITY * (1.0 - f64::from(ring) * 0.2));
                for i in 0..8u32 {
                    let angle = f64::from(i * 45).to_radians();
                    elements.push_str(&format!(
                        r#"<circle cx="{}" cy="{}" r="{dot_radius}" fill="{color}" opacity="{ring_opacity}" />"#,
                        num(ring_radius * angle.cos()),
                        num(ring_radius * angle.sin()),
                    ));
                }
            }
            elements
        }
    }
}

/// Vertices of a polygon with `count` corners, vertex `i` at
/// `(i * step_deg - 90)` degrees and radius `radius(i)`.
fn polygon_points(count: u32, step_deg: f64, radius: impl Fn(u32) -> f64) -> String {
    (0..count)
        .map(|i| {
            let angle = (f64::from(i) * step_deg - 90.0) * PI / 180.0;
            let r = radius(i);
            format!("{},{}", num(r * angle.cos()), num(r * angle.sin()))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Accent scatter
// ---------------------------------------------------------------------------

fn accent_elements<R: Rng + ?Sized>(color: &HexColor, count: usize, rng: &mut R) -> String {
    let mut elements = String::new();
    for _ in 0..count {
        let x = rng.random_range(50.0..450.0);
        let y = rng.random_range(50.0..450.0);
        let radius = rng.random_range(5.0..20.0);
        let opacity = rng.random_range(0.2..0.6);
        elements.push_str(&format!(
            r#"  <circle class="accent" cx="{}" cy="{}" r="{}" fill="{color}" opacity="{}" />"#,
            num(x),
            num(y),
            num(radius),
            num(opacity),
        ));
        elements.push('\n');
    }
    elements
}

// ---------------------------------------------------------------------------
// Number formatting
// ---------------------------------------------------------------------------

/// Format a coordinate with at most three decimals; `-0` prints as `0`.
fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::catalog::{Background, HexColor};

    fn traits(shape: Shape, pattern: Pattern, style: Style) -> TraitSet {
        TraitSet {
            background: Background::Cosmic,
            shape,
            pattern,
            color1: HexColor::parse("#0984e3").unwrap(),
            color2: HexColor::parse("#74b9ff").unwrap(),
            accent: HexColor::parse("#fdcb6e").unwrap(),
            style,
        }
    }

    fn assert_well_formed(svg: &str) {
        assert!(svg.starts_with("<svg "), "must open with the root element");
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<svg").count(), 1);
        assert!(svg.contains(r#"width="500" height="500""#));
        assert_eq!(svg.matches(r#"id="background""#).count(), 1);
        assert_eq!(svg.matches(r#"id="main-shape""#).count(), 1);
        assert_eq!(svg.matches("<g").count(), svg.matches("</g>").count());
        assert_eq!(svg.matches("<defs>").count(), 1);
        assert_eq!(svg.matches("</defs>").count(), 1);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }

    #[test]
    fn every_shape_and_style_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for shape in Shape::ALL {
            for style in Style::ALL {
                let svg = render_image_with(&traits(*shape, Pattern::Dots, *style), &mut rng);
                assert_well_formed(&svg);
            }
        }
    }

    #[test]
    fn every_pattern_is_well_formed() {
        for pattern in Pattern::ALL {
            let svg = render_image(&traits(Shape::Circle, *pattern, Style::Bold));
            assert_well_formed(&svg);
        }
    }

    #[test]
    fn seeded_rng_gives_identical_documents() {
        let t = traits(Shape::Star, Pattern::Grid, Style::Vibrant);
        let a = render_image_with(&t, &mut StdRng::seed_from_u64(42));
        let b = render_image_with(&t, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn vibrant_style_scatters_eight_accents() {
        let svg = render_image(&traits(Shape::Circle, Pattern::Dots, Style::Vibrant));
        assert_eq!(svg.matches(r#"class="accent""#).count(), 8);
        let svg = render_image(&traits(Shape::Circle, Pattern::Dots, Style::Serene));
        assert_eq!(svg.matches(r#"class="accent""#).count(), 4);
    }

    #[test]
    fn style_specific_layers_appear_only_for_their_style() {
        let ethereal = render_image(&traits(Shape::Circle, Pattern::Dots, Style::Ethereal));
        assert!(ethereal.contains(r#"-radial)" opacity="0.6""#));

        let dynamic = render_image(&traits(Shape::Circle, Pattern::Dots, Style::Dynamic));
        assert!(dynamic.contains("rotate(45)"));

        let mystical = render_image(&traits(Shape::Circle, Pattern::Dots, Style::Mystical));
        assert!(mystical.contains("<filter id=\"glow-"));
        assert!(mystical.contains(r#"<circle r="160""#));

        let plain = render_image(&traits(Shape::Circle, Pattern::Dots, Style::Minimalist));
        assert!(!plain.contains("rotate(45)"));
        assert!(!plain.contains("<filter"));
        assert!(!plain.contains(r#"-radial)" opacity"#));
    }

    #[test]
    fn accents_stay_inside_the_canvas_margin() {
        let mut rng = StdRng::seed_from_u64(3);
        let accent = HexColor::parse("#ffffff").unwrap();
        let markup = accent_elements(&accent, 200, &mut rng);
        for line in markup.lines() {
            let cx: f64 = attr(line, "cx").parse().unwrap();
            let r: f64 = attr(line, "r").parse().unwrap();
            let opacity: f64 = attr(line, "opacity").parse().unwrap();
            assert!((50.0..=450.0).contains(&cx));
            assert!((5.0..=20.0).contains(&r));
            assert!((0.2..=0.6).contains(&opacity));
        }
    }

    fn attr<'a>(line: &'a str, name: &str) -> &'a str {
        let key = format!(" {name}=\"");
        let start = line.find(&key).unwrap() + key.len();
        let end = line[start..].find('"').unwrap() + start;
        &line[start..end]
    }

    #[test]
    fn hexagon_vertices_start_at_the_top() {
        let color = HexColor::parse("#000000").unwrap();
        let markup = shape_element(Shape::Hexagon, &color, 140.0);
        assert!(markup.contains(r#"points="0,-140 121.244,-70 121.244,70 0,140 -121.244,70 -121.244,-70""#));
    }

    #[test]
    fn star_alternates_outer_and_inner_radius() {
        let color = HexColor::parse("#000000").unwrap();
        let markup = shape_element(Shape::Star, &color, 100.0);
        assert!(markup.starts_with(r#"<polygon points="0,-100 29.389,-40.451 "#));
    }

    #[test]
    fn diamond_and_triangle_use_fixed_vertices() {
        let color = HexColor::parse("#000000").unwrap();
        assert!(shape_element(Shape::Diamond, &color, 140.0)
            .contains(r#"points="0,-140 140,0 0,140 -140,0""#));
        assert!(shape_element(Shape::Triangle, &color, 140.0)
            .contains(r#"points="0,-140 121.24,70 -121.24,70""#));
    }

    #[test]
    fn spiral_accumulates_one_hundred_segments() {
        let color = HexColor::parse("#000000").unwrap();
        let markup = shape_element(Shape::Spiral, &color, 140.0);
        assert_eq!(markup.matches(" L").count(), 100);
        assert!(markup.contains(r#"d="M0,0 L0,0 L1.493,0.15 "#));
    }

    #[test]
    fn mandala_draws_three_rings_of_eight() {
        let color = HexColor::parse("#000000").unwrap();
        let markup = shape_element(Shape::Mandala, &color, 140.0);
        assert_eq!(markup.matches("<circle").count(), 24);
        assert_eq!(markup.matches(r#"r="5""#).count(), 8);
        assert_eq!(markup.matches(r##"r="11" fill="#000000" opacity="0.51""##).count(), 8);
        assert!(markup.starts_with(r#"<circle cx="42" cy="0" r="5""#));
    }

    #[test]
    fn infinity_is_a_closed_path() {
        let color = HexColor::parse("#000000").unwrap();
        let markup = shape_element(Shape::Infinity, &color, 140.0);
        assert!(markup.starts_with("<path d=\"M0,0 C70,-84 140,-84 140,0"));
        assert!(markup.contains(" Z\""));
    }

    #[test]
    fn every_pattern_has_its_own_tile() {
        let color = HexColor::parse("#123456").unwrap();
        let tiles: std::collections::HashSet<String> = Pattern::ALL
            .iter()
            .map(|p| pattern_tile(*p, &color))
            .collect();
        assert_eq!(tiles.len(), Pattern::ALL.len());
        assert!(!tiles.contains(&default_tile(&color)));
    }

    #[test]
    fn unknown_pattern_name_falls_back_to_faint_dot() {
        let color = HexColor::parse("#123456").unwrap();
        assert_eq!(
            pattern_tile_for_name("paisley", &color),
            r##"<circle cx="10" cy="10" r="1" fill="#123456" opacity="0.5" />"##
        );
        assert_eq!(
            pattern_tile_for_name("grid", &color),
            pattern_tile(Pattern::Grid, &color)
        );
    }

    #[test]
    fn num_trims_and_normalises_zero() {
        assert_eq!(num(140.0), "140");
        assert_eq!(num(-0.0000001), "0");
        assert_eq!(num(121.2435565298), "121.244");
        assert_eq!(num(0.85), "0.85");
    }
}
