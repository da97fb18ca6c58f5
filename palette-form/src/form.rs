//! Questionnaire form data and the JSON payload built from it

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Names of the questionnaire's form fields
pub mod fields {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const LANGUAGE: &str = "language";
    pub const PRIVACY_CONSENT: &str = "privacy_consent";
    pub const NEWSLETTER_CONSENT: &str = "newsletter_consent";
    pub const HAIR_COLOR: &str = "hair_color";
    pub const SKIN_TONE: &str = "skin_tone";
    pub const EYE_COLOR: &str = "eye_color";
    pub const VEIN_COLOR: &str = "vein_color";
    pub const JEWELRY_PREFERENCE: &str = "jewelry_preference";
    pub const COLORS_WORN: &str = "colors_worn";
    pub const COLORS_AVOIDED: &str = "colors_avoided";
    pub const COLOR_FEEDBACK: &str = "color_feedback";
}

/// Ordered list of `(name, value)` entries, the way a browser collects a form
///
/// A name appears once per submitted control, so checkbox groups and
/// multi-selects produce repeated entries. Unchecked checkboxes produce none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` body
    ///
    /// `name[]` is treated as `name`. Pairs that fail to decode are skipped.
    pub fn parse_urlencoded(body: &str) -> Self {
        let mut form = Self::new();

        for pair in body.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if let (Some(key), Some(value)) = (decode_component(key), decode_component(value)) {
                let name = key.strip_suffix("[]").unwrap_or(&key);
                form.append(name, &value);
            } else {
                log::debug!("Skipping undecodable form pair: {}", pair);
            }
        }

        form
    }

    pub fn append(&mut self, name: &str, value: &str) {
        self.entries.push((name.to_string(), value.to_string()));
    }

    /// Replace all values of `name` with a single value
    pub fn set(&mut self, name: &str, value: &str) {
        match self.entries.iter().position(|(n, _)| n == name) {
            Some(first) => {
                self.entries[first].1 = value.to_string();
                let mut index = 0;
                self.entries.retain(|(n, _)| {
                    let keep = index <= first || n != name;
                    index += 1;
                    keep
                });
            }
            None => self.append(name, value),
        }
    }

    pub fn delete(&mut self, name: &str) {
        self.entries.retain(|(n, _)| n != name);
    }

    /// First value of `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value of `name`, in form order
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Checkbox state: present with a truthy value (`on` is what browsers send)
    pub fn is_checked(&self, name: &str) -> bool {
        matches!(self.get(name), Some("on" | "true" | "1"))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|s| s.into_owned())
}

/// Questionnaire answers as posted to the submission endpoint
///
/// Absent single values serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub language: Option<String>,

    pub privacy_consent: bool,
    pub newsletter_consent: bool,

    pub hair_color: Option<String>,
    pub skin_tone: Option<String>,
    pub eye_color: Option<String>,
    pub vein_color: Option<String>,
    pub jewelry_preference: Option<String>,
    pub colors_worn: Vec<String>,
    pub colors_avoided: Vec<String>,
    pub color_feedback: Option<String>,
}

impl SubmissionPayload {
    /// Collect the payload from raw form values, without validation
    pub fn from_form(form: &FormData) -> Self {
        let single = |name: &str| form.get(name).map(str::to_string);
        let many = |name: &str| {
            form.get_all(name)
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        Self {
            first_name: single(fields::FIRST_NAME),
            last_name: single(fields::LAST_NAME),
            email: single(fields::EMAIL),
            language: single(fields::LANGUAGE),
            privacy_consent: form.is_checked(fields::PRIVACY_CONSENT),
            newsletter_consent: form.is_checked(fields::NEWSLETTER_CONSENT),
            hair_color: single(fields::HAIR_COLOR),
            skin_tone: single(fields::SKIN_TONE),
            eye_color: single(fields::EYE_COLOR),
            vein_color: single(fields::VEIN_COLOR),
            jewelry_preference: single(fields::JEWELRY_PREFERENCE),
            colors_worn: many(fields::COLORS_WORN),
            colors_avoided: many(fields::COLORS_AVOIDED),
            color_feedback: single(fields::COLOR_FEEDBACK),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
