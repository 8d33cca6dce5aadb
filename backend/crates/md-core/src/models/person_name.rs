/// First/last name pair derived from a single display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

impl PersonName {
    /// Split on the first space: the first token becomes the first name and
    /// everything after it the last name. Returns `None` for a blank name.
    pub fn split(display_name: &str) -> Option<Self> {
        let trimmed = display_name.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (first, last) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

        Some(Self {
            first_name: first.to_string(),
            last_name: last.to_string(),
        })
    }

    /// Join back into a display name, skipping empty parts
    pub fn join(first_name: Option<&str>, last_name: Option<&str>) -> String {
        [first_name.unwrap_or(""), last_name.unwrap_or("")]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
