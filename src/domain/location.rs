// SPDX-License-Identifier: MPL-2.0
//! Location tags and the badges they resolve to.
//!
//! A tag is a `"system|code"` string carried verbatim from the item store.
//! Only the `nyc_mta` system is known; unknown systems or station codes
//! resolve to no badge at all.

/// Raw location tag, e.g. `"nyc_mta|14th_6th_irt"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationTag(String);

/// A subway line bullet: its letter or digit and its signage colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBullet {
    pub line: &'static str,
    /// Background colour as `0xRRGGBB`.
    pub background: u32,
    /// Whether the glyph is drawn in black (yellow lines) rather than white.
    pub dark_glyph: bool,
}

/// Resolved, displayable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationBadge {
    pub name: &'static str,
    pub lines: Vec<LineBullet>,
    pub map_url: &'static str,
}

const NYC_MTA: &str = "nyc_mta";

/// (code, station name, comma-separated lines, map link)
const NYC_MTA_STATIONS: &[(&str, &str, &str, &str)] = &[
    ("116th_8th_ind", "116 Street", "B,C", "https://maps.app.goo.gl/iBWtMuSwJkeWCdVE6"),
    ("14th_6th_bmt", "6 Avenue", "L", "https://maps.app.goo.gl/mLoC56CjYEUZ8uyq9"),
    ("14th_6th_irt", "14 Street", "1,2,3", "https://maps.app.goo.gl/vW373pkXUTQRmwn5A"),
    ("23rd_8th_ind", "23 Street", "C,E", "https://maps.app.goo.gl/ukxduoRrgyJtm3UKA"),
    ("51st_st", "51 Street", "6", "https://maps.app.goo.gl/jL7hxLpKnsxKjWFe8"),
    ("77th_st_irt", "77 Street", "6", "https://maps.app.goo.gl/a3AjbbxA71N8jC8b6"),
    ("carroll_st", "Carroll Street", "F,G", "https://maps.app.goo.gl/QBWjdAwKrEwXaN4a9"),
    ("dyckman_ind", "Dyckman Street", "A", "https://maps.app.goo.gl/CxTkByPynRGk9CAd9"),
    ("elmhurst", "Elmhurst Avenue", "M,R", "https://maps.app.goo.gl/Aseo9eyMTWwzBnYM7"),
    ("halsey_canarsie", "Halsey Street", "L", "https://maps.app.goo.gl/XdmKPigSas1jpdcA9"),
    ("west_4th", "West 4 Street", "A,C,E,B,D,F,M", "https://maps.app.goo.gl/szF3tauihixngssUA"),
];

fn bullet(line: &'static str) -> Option<LineBullet> {
    let (background, dark_glyph) = match line {
        "1" | "2" | "3" => (0xEE352E, false),
        "4" | "5" | "6" => (0x00933C, false),
        "7" => (0xB933AD, false),
        "A" | "C" | "E" => (0x0039A6, false),
        "S" => (0x808183, false),
        "B" | "D" | "F" | "M" => (0xFF6319, false),
        "G" => (0x6CBE45, false),
        "J" | "Z" => (0x996633, false),
        "L" => (0xA7A9AC, false),
        "N" | "Q" | "R" | "W" => (0xFCCC0A, true),
        "T" => (0x00ADD0, false),
        _ => return None,
    };
    Some(LineBullet {
        line,
        background,
        dark_glyph,
    })
}

impl LocationTag {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the tag into a badge, or `None` if nothing is supported.
    ///
    /// # Example
    ///
    /// ```
    /// use iced_review::domain::location::LocationTag;
    ///
    /// let badge = LocationTag::new("NYC_MTA|carroll_st").resolve().unwrap();
    /// assert_eq!(badge.name, "Carroll Street");
    /// assert_eq!(badge.lines.len(), 2);
    ///
    /// assert!(LocationTag::new("tokyo|shibuya").resolve().is_none());
    /// ```
    #[must_use]
    pub fn resolve(&self) -> Option<LocationBadge> {
        let lowered = self.0.to_lowercase();
        let mut parts = lowered.split('|');
        let system = parts.next()?;
        let code = parts.next()?;

        if system != NYC_MTA {
            return None;
        }

        let &(_, name, lines, map_url) = NYC_MTA_STATIONS
            .iter()
            .find(|(station, ..)| *station == code)?;

        Some(LocationBadge {
            name,
            lines: lines.split(',').filter_map(bullet).collect(),
            map_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_station() {
        let badge = LocationTag::new("nyc_mta|west_4th").resolve().unwrap();
        assert_eq!(badge.name, "West 4 Street");
        let lines: Vec<_> = badge.lines.iter().map(|b| b.line).collect();
        assert_eq!(lines, ["A", "C", "E", "B", "D", "F", "M"]);
        assert!(badge.map_url.starts_with("https://"));
    }

    #[test]
    fn unknown_station_has_no_badge() {
        assert!(LocationTag::new("nyc_mta|nowhere").resolve().is_none());
    }

    #[test]
    fn missing_code_has_no_badge() {
        assert!(LocationTag::new("nyc_mta").resolve().is_none());
    }

    #[test]
    fn yellow_lines_use_dark_glyphs() {
        let badge = LocationTag::new("nyc_mta|elmhurst").resolve().unwrap();
        let r = badge.lines.iter().find(|b| b.line == "R").unwrap();
        assert!(r.dark_glyph);
        assert_eq!(r.background, 0xFCCC0A);
        let m = badge.lines.iter().find(|b| b.line == "M").unwrap();
        assert!(!m.dark_glyph);
    }
}
