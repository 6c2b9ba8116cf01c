use crate::{
    canvas::Rgb,
    error::{AssetError, AssetResult},
    gradient::GradientTones,
};

/// Per-channel offsets applied to the base color for the gradient's top
/// tone (brighter) and bottom tone (darker).
const TOP_OFFSETS: [f64; 3] = [0.12, 0.10, 0.08];
const BOTTOM_OFFSETS: [f64; 3] = [0.06, 0.10, 0.06];

/// Immutable brand configuration shared by the gradient and the icon
/// composer.
///
/// Deserializable so the CLI can swap in a custom theme JSON; the default is
/// the ClassNotes teal brand.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    /// Base brand color as fractional RGB intensities in [0, 1].
    pub base_rgb: [f64; 3],
    pub title: String,
    pub tagline: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base_rgb: [0.200, 0.604, 0.737],
            title: "ClassNotes".to_string(),
            tagline: "Share & request class notes".to_string(),
        }
    }
}

impl Theme {
    pub fn validate(&self) -> AssetResult<()> {
        for (i, &c) in self.base_rgb.iter().enumerate() {
            if !c.is_finite() || !(0.0..=1.0).contains(&c) {
                return Err(AssetError::validation(format!(
                    "base_rgb[{i}] must be a fraction in [0, 1], got {c}"
                )));
            }
        }
        if self.title.is_empty() {
            return Err(AssetError::validation("title must not be empty"));
        }
        Ok(())
    }

    /// The gradient's top and bottom tones. This is the only place the
    /// derivation formula lives.
    pub fn tones(&self) -> GradientTones {
        let mut top = [0u8; 3];
        let mut bottom = [0u8; 3];
        for c in 0..3 {
            top[c] = ((self.base_rgb[c] + TOP_OFFSETS[c]) * 255.0).clamp(0.0, 255.0) as u8;
            bottom[c] = ((self.base_rgb[c] - BOTTOM_OFFSETS[c]) * 255.0).clamp(0.0, 255.0) as u8;
        }
        GradientTones { top, bottom }
    }

    /// Base color quantized to 8-bit channels.
    pub fn base_rgb8(&self) -> Rgb {
        let mut out = [0u8; 3];
        for c in 0..3 {
            out[c] = (self.base_rgb[c] * 255.0).clamp(0.0, 255.0) as u8;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_validates() {
        Theme::default().validate().unwrap();
    }

    #[test]
    fn default_tones_match_reference_constants() {
        let t = Theme::default().tones();
        assert_eq!(t.top, [81, 179, 208]);
        assert_eq!(t.bottom, [35, 128, 172]);
    }

    #[test]
    fn tones_clamp_at_channel_bounds() {
        let theme = Theme {
            base_rgb: [1.0, 0.0, 0.99],
            ..Theme::default()
        };
        let t = theme.tones();
        assert_eq!(t.top[0], 255);
        assert_eq!(t.bottom[1], 0);
        assert_eq!(t.top[2], 255);
    }

    #[test]
    fn out_of_range_base_is_rejected() {
        let mut theme = Theme::default();
        theme.base_rgb[1] = 1.2;
        assert!(theme.validate().is_err());
        theme.base_rgb[1] = f64::NAN;
        assert!(theme.validate().is_err());
    }

    #[test]
    fn theme_round_trips_through_json() {
        let theme = Theme::default();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back.base_rgb, theme.base_rgb);
        assert_eq!(back.title, theme.title);
        assert_eq!(back.tagline, theme.tagline);
    }
}
