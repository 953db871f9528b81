//! Trait selection: turns a seed into a fully-populated [`TraitSet`].

use serde::{Deserialize, Serialize};

use crate::catalog::{Background, HexColor, Palette, Pattern, Shape, Style, PALETTES};
use crate::error::CoreError;
use crate::prng::SeededRng;

/// The seven visual choices that fully describe an artifact's image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitSet {
    pub background: Background,
    pub shape: Shape,
    pub pattern: Pattern,
    pub color1: HexColor,
    pub color2: HexColor,
    pub accent: HexColor,
    pub style: Style,
}

/// A [`TraitSet`] together with the palette its colors were drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitSelection {
    pub traits: TraitSet,
    pub palette: &'static Palette,
}

/// Select traits for `seed`.
///
/// Draw order is palette, background, shape, pattern, color1, color2,
/// accent, style. Changing it changes every existing seed's artifact.
pub fn select_traits_with_palette(seed: &str) -> Result<TraitSelection, CoreError> {
    let mut rng = SeededRng::new(seed);

    let palette = rng.pick(&PALETTES).unwrap_or(&PALETTES[0]);

    let background = *rng
        .pick(Background::ALL)
        .ok_or_else(|| empty_catalog("background"))?;
    let shape = *rng.pick(Shape::ALL).ok_or_else(|| empty_catalog("shape"))?;
    let pattern = *rng
        .pick(Pattern::ALL)
        .ok_or_else(|| empty_catalog("pattern"))?;
    let color1 = palette.color(rng.pick_index(palette.colors.len()))?;
    let color2 = palette.color(rng.pick_index(palette.colors.len()))?;
    let accent = palette.color(rng.pick_index(palette.colors.len()))?;
    let style = *rng.pick(Style::ALL).ok_or_else(|| empty_catalog("style"))?;

    Ok(TraitSelection {
        traits: TraitSet {
            background,
            shape,
            pattern,
            color1,
            color2,
            accent,
            style,
        },
        palette,
    })
}

/// Select traits for `seed`, discarding the palette.
pub fn select_traits(seed: &str) -> Result<TraitSet, CoreError> {
    select_traits_with_palette(seed).map(|selection| selection.traits)
}

fn empty_catalog(category: &str) -> CoreError {
    CoreError::Internal(format!("{category} catalog is empty"))
}
