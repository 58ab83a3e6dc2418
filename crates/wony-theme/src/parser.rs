//! CSS palette parser using lightningcss
//!
//! A palette file is a stylesheet whose `.light` and `.dark` rules declare
//! custom properties holding colors. Everything else in the sheet is ignored.

use std::collections::HashMap;
use thiserror::Error;

use lightningcss::printer::PrinterOptions;
use lightningcss::properties::Property;
use lightningcss::properties::custom::TokenOrValue;
use lightningcss::rules::CssRule;
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use lightningcss::traits::ToCss;

use crate::{Color, Palette, Theme, ThemeMode};

#[derive(Error, Debug)]
pub enum ThemeParseError {
    #[error("CSS parse error: {0}")]
    CssError(String),

    #[error("Invalid color for {name}: {value}")]
    InvalidColor { name: String, value: String },

    #[error("Missing palette rule: .{0}")]
    MissingPalette(ThemeMode),

    #[error("Unknown theme mode: {0}")]
    UnknownMode(String),
}

/// Helper to get PrinterOptions (since it doesn't implement Copy)
fn opts() -> PrinterOptions<'static> {
    PrinterOptions::default()
}

/// Parse any supported CSS color value
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if value.starts_with('#') {
        parse_hex_color(value)
    } else if value.starts_with("rgb") {
        parse_rgb_color(value)
    } else {
        parse_named_color(value)
    }
}

/// CSS named colors the palettes are likely to use
fn parse_named_color(name: &str) -> Option<Color> {
    let (r, g, b) = match name.to_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "orange" => (255, 165, 0),
        "gold" => (255, 215, 0),
        "pink" => (255, 192, 203),
        "gray" | "grey" => (128, 128, 128),
        "transparent" => return Some(Color::rgba(0.0, 0.0, 0.0, 0.0)),
        _ => return None,
    };
    Some(Color::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0))
}

fn hex_byte(digits: &str) -> Option<f32> {
    u8::from_str_radix(digits, 16).ok().map(|v| v as f32 / 255.0)
}

/// Parse a hex color (#rgb, #rrggbb, #rrggbbaa)
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = hex_byte(&hex[0..1].repeat(2))?;
            let g = hex_byte(&hex[1..2].repeat(2))?;
            let b = hex_byte(&hex[2..3].repeat(2))?;
            Some(Color::rgb(r, g, b))
        }
        6 => Some(Color::rgb(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
        )),
        8 => Some(Color::rgba(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            hex_byte(&hex[6..8])?,
        )),
        _ => None,
    }
}

/// Parse rgb(r, g, b) or rgba(r, g, b, a)
pub fn parse_rgb_color(input: &str) -> Option<Color> {
    let input = input.trim();

    let (is_rgba, inner) = if let Some(rest) = input.strip_prefix("rgba(") {
        (true, rest.strip_suffix(')')?)
    } else if let Some(rest) = input.strip_prefix("rgb(") {
        (false, rest.strip_suffix(')')?)
    } else {
        return None;
    };

    let parts: Vec<f32> = inner
        .split(',')
        .map(|s| s.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .ok()?;

    // Normalize 0-255 to 0-1
    let channel = |v: f32| if v > 1.0 { v / 255.0 } else { v };

    match (is_rgba, parts.as_slice()) {
        (true, [r, g, b, a]) => Some(Color::rgba(channel(*r), channel(*g), channel(*b), *a)),
        (false, [r, g, b]) => Some(Color::rgb(channel(*r), channel(*g), channel(*b))),
        _ => None,
    }
}

/// Collect the custom properties of a style rule as `name -> value text`
fn extract_custom_properties(
    rule: &lightningcss::rules::style::StyleRule,
) -> HashMap<String, String> {
    let mut custom = HashMap::new();

    for decl in &rule.declarations.declarations {
        if let Property::Custom(prop) = decl {
            let name = prop.name.as_ref().trim_start_matches("--").to_string();
            let mut value_parts = Vec::new();
            for token_or_value in &prop.value.0 {
                match token_or_value {
                    TokenOrValue::Token(token) => {
                        if let Ok(s) = token.to_css_string(opts()) {
                            value_parts.push(s);
                        }
                    }
                    TokenOrValue::Color(color) => {
                        if let Ok(s) = color.to_css_string(opts()) {
                            value_parts.push(s);
                        }
                    }
                    TokenOrValue::Length(len) => {
                        if let Ok(s) = len.to_css_string(opts()) {
                            value_parts.push(s);
                        }
                    }
                    _ => {}
                }
            }
            if !value_parts.is_empty() {
                custom.insert(name, value_parts.join("").trim().to_string());
            }
        }
    }

    custom
}

/// Get selector string from a style rule
fn get_selector_string(rule: &lightningcss::rules::style::StyleRule) -> String {
    rule.selectors.to_css_string(opts()).unwrap_or_default()
}

fn mode_for_selector(selector: &str) -> Option<ThemeMode> {
    match selector.trim() {
        ".light" | ":root" => Some(ThemeMode::Light),
        ".dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

/// Parse a palette stylesheet into a Theme
///
/// Both `.light` and `.dark` rules must be present. Repeated rules for the
/// same mode merge, later declarations winning.
pub fn parse_theme(css: &str) -> Result<Theme, ThemeParseError> {
    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| ThemeParseError::CssError(format!("{:?}", e)))?;

    let mut light: Option<Palette> = None;
    let mut dark: Option<Palette> = None;

    for rule in &stylesheet.rules.0 {
        if let CssRule::Style(style_rule) = rule {
            let selector = get_selector_string(style_rule);
            let Some(mode) = mode_for_selector(&selector) else {
                log::debug!("Ignoring palette rule {:?}", selector);
                continue;
            };

            let palette = match mode {
                ThemeMode::Light => light.get_or_insert_with(Palette::new),
                ThemeMode::Dark => dark.get_or_insert_with(Palette::new),
            };

            for (name, value) in extract_custom_properties(style_rule) {
                let color = parse_color(&value).ok_or_else(|| ThemeParseError::InvalidColor {
                    name: name.clone(),
                    value: value.clone(),
                })?;
                palette.insert(name, color);
            }
        }
    }

    Ok(Theme {
        light: light.ok_or(ThemeParseError::MissingPalette(ThemeMode::Light))?,
        dark: dark.ok_or(ThemeParseError::MissingPalette(ThemeMode::Dark))?,
    })
}
