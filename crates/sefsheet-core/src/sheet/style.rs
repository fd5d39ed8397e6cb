//! Cell style attributes.
//!
//! Styles are presentation data carried for the rendering layer; the engine
//! never reads them and style changes never trigger recalculation.

/// Font weight of a cell's text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font slant of a cell's text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Visual attributes of one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellStyle {
    pub font_family: String,
    pub font_size: u8,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub underline: bool,
    /// Text color as a hex string, e.g. "#000000".
    pub color: String,
    /// Background color as a hex string.
    pub background_color: String,
}

impl Default for CellStyle {
    fn default() -> Self {
        CellStyle {
            font_family: "Inter".to_string(),
            font_size: 14,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            underline: false,
            color: "#000000".to_string(),
            background_color: "#FFFFFF".to_string(),
        }
    }
}

/// A partial style update; `None` fields leave the current value alone.
#[derive(Clone, Debug, Default)]
pub struct StylePatch {
    pub font_family: Option<String>,
    pub font_size: Option<u8>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub underline: Option<bool>,
    pub color: Option<String>,
    pub background_color: Option<String>,
}

impl CellStyle {
    /// Merge a patch into this style.
    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(family) = &patch.font_family {
            self.font_family = family.clone();
        }
        if let Some(size) = patch.font_size {
            self.font_size = size;
        }
        if let Some(weight) = patch.font_weight {
            self.font_weight = weight;
        }
        if let Some(style) = patch.font_style {
            self.font_style = style;
        }
        if let Some(underline) = patch.underline {
            self.underline = underline;
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(background) = &patch.background_color {
            self.background_color = background.clone();
        }
    }
}
