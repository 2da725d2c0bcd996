//! Background resolution.

use crate::types::{Background, BgMode, Colour, InkMode};

/// Resolve a background mode into a fill and a contrasting ink mode.
///
/// Never touches the random stream, so the same seed gives the same shapes
/// on every background.
pub fn resolve_background(mode: &BgMode) -> (Background, InkMode) {
    match mode {
        BgMode::OffWhite => (solid(Colour::rgb(0.98, 0.98, 0.97)), InkMode::Dark),
        BgMode::LightGray => (solid(Colour::grey(0.92)), InkMode::Dark),
        BgMode::Dark => (solid(Colour::grey(0.08)), InkMode::Light),
        BgMode::Gradient => (
            Background::Gradient {
                top: Colour::grey(0.95),
                bottom: Colour::grey(0.75),
            },
            InkMode::Dark,
        ),
        BgMode::Unknown(_) => (solid(Colour::WHITE), InkMode::Dark),
    }
}

fn solid(colour: Colour) -> Background {
    Background::Solid { colour }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ink_contrast() {
        assert_eq!(resolve_background(&BgMode::Dark).1, InkMode::Light);
        for mode in [BgMode::OffWhite, BgMode::LightGray, BgMode::Gradient] {
            assert_eq!(resolve_background(&mode).1, InkMode::Dark, "{}", mode);
        }
        assert_eq!(resolve_background(&BgMode::parse("neon")).1, InkMode::Dark);
    }

    #[test]
    fn test_fills() {
        assert_eq!(
            resolve_background(&BgMode::OffWhite).0,
            solid(Colour::rgb(0.98, 0.98, 0.97))
        );
        assert_eq!(
            resolve_background(&BgMode::Dark).0,
            solid(Colour::grey(0.08))
        );
        assert_eq!(
            resolve_background(&BgMode::parse("???")).0,
            solid(Colour::WHITE)
        );
    }

    #[test]
    fn test_gradient_is_lighter_at_top() {
        let (bg, _) = resolve_background(&BgMode::Gradient);
        assert!(bg.colour_at(1.0).r > bg.colour_at(0.0).r);
    }
}
