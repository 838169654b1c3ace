//! Map style resolution.
//!
//! A style can be given either as a short name of one of the mapbox styles (e.g. `"dark-v9"`) or
//! as a full URL. See <https://www.mapbox.com/maps/> for the list of the available styles.

/// Style used when the chart spec does not name one.
pub const DEFAULT_MAP_STYLE: &str = "light-v9";

const STYLE_BASE_URL: &str = "mapbox://styles/mapbox/";
const URL_PREFIXES: [&str; 3] = ["http://", "https://", "mapbox://"];

/// Converts a short map style name into the full URL of the style. Strings that are already URLs
/// are returned unchanged.
///
/// `None` and the empty string resolve to [`DEFAULT_MAP_STYLE`].
///
/// ```
/// use mapdeck::style::resolve_style_url;
///
/// assert_eq!(resolve_style_url(Some("dark-v9")), "mapbox://styles/mapbox/dark-v9");
/// assert_eq!(resolve_style_url(Some("https://example.com/style.json")), "https://example.com/style.json");
/// assert_eq!(resolve_style_url(None), "mapbox://styles/mapbox/light-v9");
/// ```
pub fn resolve_style_url(style: Option<&str>) -> String {
    let style = style
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_MAP_STYLE);

    if URL_PREFIXES.iter().any(|prefix| style.starts_with(prefix)) {
        return style.to_string();
    }

    format!("{STYLE_BASE_URL}{style}")
}
