//! Document-level geometry and typography.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::de::{flexible_f32, flexible_u32};
use crate::geometry::{PageSize, Size};
use crate::section::{Section, SectionKind};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Unknown page size '{0}'")]
    UnknownPageSize(String),

    #[error("Column count must be at least 1 (field '{0}')")]
    ZeroColumns(&'static str),

    #[error("'{field}' must be positive, got {value}")]
    InvalidDimension { field: &'static str, value: f32 },

    #[error("Highlight opacity must be within 0..=1, got {0}")]
    InvalidOpacity(f32),

    #[error("Margins leave no room on a {width}x{height} mm page")]
    NoPrintableArea { width: f32, height: f32 },

    #[error("A {cell} mm cell does not fit the {available} mm printable height")]
    CellTooTall { cell: f32, available: f32 },
}

fn default_image_width() -> f32 {
    25.0
}

fn default_index_columns() -> u32 {
    6
}

/// Everything the composer needs besides the roster itself.
///
/// Lengths are millimetres; `font_size` is points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    #[serde(deserialize_with = "flexible_f32")]
    pub top_margin: f32,
    #[serde(deserialize_with = "flexible_f32")]
    pub left_margin: f32,
    #[serde(deserialize_with = "flexible_f32")]
    pub bottom_margin: f32,
    #[serde(deserialize_with = "flexible_f32")]
    pub right_margin: f32,
    pub page_size: String,
    #[serde(deserialize_with = "flexible_u32")]
    pub number_of_columns: u32,
    #[serde(deserialize_with = "flexible_f32")]
    pub padding: f32,
    #[serde(deserialize_with = "flexible_f32")]
    pub gutter: f32,
    #[serde(deserialize_with = "flexible_f32")]
    pub image_padding: f32,
    #[serde(deserialize_with = "flexible_f32", default = "default_image_width")]
    pub image_width: f32,
    #[serde(deserialize_with = "flexible_f32")]
    pub column_height: f32,
    #[serde(deserialize_with = "flexible_f32")]
    pub font_size: f32,
    pub font_family: String,
    #[serde(deserialize_with = "flexible_f32")]
    pub line_height: f32,
    #[serde(deserialize_with = "flexible_f32")]
    pub highlight_opacity: f32,
    #[serde(deserialize_with = "flexible_u32", default = "default_index_columns")]
    pub index_columns: u32,
    pub sections: Vec<Section>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        let roster = Section {
            show: true,
            header: "Membership Directory".into(),
            list_name: "Members".into(),
            phones: true,
            phone_count: 1,
            email: true,
            address: true,
            city: true,
            state: true,
            postal_code: true,
            country: true,
            ..Section::default()
        };
        let children = Section {
            kind: Some(SectionKind::Children),
            show: true,
            header: "Children".into(),
            age: true,
            birthday: true,
            ..Section::default()
        };
        let index = Section {
            kind: Some(SectionKind::Index),
            show: true,
            header: "Membership by First Name".into(),
            columns: 3,
            ..Section::default()
        };

        Self {
            top_margin: 6.0,
            left_margin: 4.0,
            bottom_margin: 6.0,
            right_margin: 4.0,
            page_size: "Letter".into(),
            number_of_columns: 3,
            padding: 8.0,
            gutter: 4.0,
            image_padding: 4.0,
            image_width: default_image_width(),
            column_height: 22.0,
            font_size: 7.0,
            font_family: "Arial".into(),
            line_height: 3.0,
            highlight_opacity: 0.06,
            index_columns: default_index_columns(),
            sections: vec![roster, children, index],
        }
    }
}

impl DirectoryConfig {
    pub fn page(&self) -> Result<PageSize, ConfigError> {
        PageSize::from_name(&self.page_size)
            .ok_or_else(|| ConfigError::UnknownPageSize(self.page_size.clone()))
    }

    pub fn page_dimensions(&self) -> Result<Size, ConfigError> {
        Ok(self.page()?.dimensions_mm())
    }

    /// Checks the whole configuration before anything is drawn.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let page = self.page_dimensions()?;

        if self.number_of_columns == 0 {
            return Err(ConfigError::ZeroColumns("number_of_columns"));
        }
        if self.index_columns == 0 {
            return Err(ConfigError::ZeroColumns("index_columns"));
        }

        for (field, value) in [
            ("font_size", self.font_size),
            ("line_height", self.line_height),
            ("column_height", self.column_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }
        for (field, value) in [
            ("top_margin", self.top_margin),
            ("left_margin", self.left_margin),
            ("bottom_margin", self.bottom_margin),
            ("right_margin", self.right_margin),
            ("padding", self.padding),
            ("gutter", self.gutter),
            ("image_padding", self.image_padding),
            ("image_width", self.image_width),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }

        if !(0.0..=1.0).contains(&self.highlight_opacity) {
            return Err(ConfigError::InvalidOpacity(self.highlight_opacity));
        }

        let printable_width = page.width - self.left_margin - self.right_margin
            - (self.number_of_columns as f32 - 1.0) * self.gutter;
        let printable_height = page.height - self.top_margin - self.bottom_margin;
        if printable_width <= 0.0 || printable_height <= 0.0 {
            return Err(ConfigError::NoPrintableArea {
                width: page.width,
                height: page.height,
            });
        }

        let cell = self.column_height + self.padding;
        if cell > printable_height {
            return Err(ConfigError::CellTooTall {
                cell,
                available: printable_height,
            });
        }

        Ok(())
    }

    /// Sections paired with the composer that draws them, in document order.
    pub fn sections_by_kind(&self) -> impl Iterator<Item = (SectionKind, &Section)> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, s)| (s.kind_at(i), s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DirectoryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_columns_rejected() {
        let config = DirectoryConfig {
            number_of_columns: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroColumns("number_of_columns"))
        );
    }

    #[test]
    fn test_unknown_page_size_rejected() {
        let config = DirectoryConfig {
            page_size: "Folio".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownPageSize(name)) if name == "Folio"
        ));
    }

    #[test]
    fn test_opacity_out_of_range() {
        let config = DirectoryConfig {
            highlight_opacity: 1.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidOpacity(1.5)));
    }

    #[test]
    fn test_cell_taller_than_page() {
        let config = DirectoryConfig {
            column_height: 400.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::CellTooTall { .. })));
    }

    #[test]
    fn test_persisted_string_numbers() {
        let json = r#"{
            "top_margin": "6", "left_margin": "4", "bottom_margin": "6", "right_margin": "4",
            "page_size": "Letter", "number_of_columns": "3", "padding": "8", "gutter": "4",
            "image_padding": "4", "column_height": "22", "font_size": "7",
            "font_family": "Arial", "line_height": "3", "highlight_opacity": "0.06",
            "sections": [{"show": true, "header": "Members", "phone_count": "2"}]
        }"#;
        let config: DirectoryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.number_of_columns, 3);
        assert_eq!(config.image_width, 25.0);
        assert_eq!(config.index_columns, 6);
        assert_eq!(config.sections[0].phone_count, 2);
        assert!(config.validate().is_ok());
    }
}
