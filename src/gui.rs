//! GUI modules

use std::{
    hash::{DefaultHasher, Hash, Hasher},
    str::FromStr,
};

use eframe::egui;

use crate::error::FolioResult;

pub mod dividend_board;
pub mod gallery_overlay;
pub mod portfolio_viewer;

/// Emerald accent shared by the portfolio pages and the dividends board
pub(crate) static ACCENT: egui::Color32 = egui::Color32::from_rgb(52, 211, 153);

/// Top-level page of the portfolio viewer
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, strum::Display, strum::EnumIter, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Contact,

    #[strum(serialize = "dividends", to_string = "PSE Dividends")]
    Dividends,
}

pub fn section_from_str(s: &str) -> FolioResult<Section> {
    Section::from_str(s).map_err(|err| err.into())
}

pub(crate) fn str_to_color(s: &str) -> egui::Color32 {
    let mut hasher = DefaultHasher::new();
    s.hash(&mut hasher);
    let hash = hasher.finish();

    let hue = (hash % 360) as f64;
    let saturation = 0.8;
    let lightness = 1.0;

    let (r, g, b) = hsv::hsv_to_rgb(hue, saturation, lightness);

    egui::Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_str() {
        assert_eq!(section_from_str("home").unwrap(), Section::Home);
        assert_eq!(section_from_str("Projects").unwrap(), Section::Projects);
        assert_eq!(section_from_str("DIVIDENDS").unwrap(), Section::Dividends);
        assert!(section_from_str("blog").is_err());

        assert_eq!(Section::Dividends.to_string(), "PSE Dividends");
        assert_eq!(Section::About.to_string(), "About");
    }
}
