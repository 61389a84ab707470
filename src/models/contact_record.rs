//! Contact details discovered for one provider website.

/// Contact channels found while crawling one start URL.
///
/// Any list may be empty when nothing was found on that channel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactRecord {
    /// The website the crawl started from
    pub url: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub whatsapps: Vec<String>,
    pub telegrams: Vec<String>,
    pub facebooks: Vec<String>,
    pub instagrams: Vec<String>,
}

impl ContactRecord {
    /// An empty record for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Channel lists paired with their display label, in digest order.
    pub fn channels(&self) -> [(&'static str, &[String]); 6] {
        [
            ("Email", self.emails.as_slice()),
            ("Phone", self.phones.as_slice()),
            ("WhatsApp", self.whatsapps.as_slice()),
            ("Telegram", self.telegrams.as_slice()),
            ("Facebook", self.facebooks.as_slice()),
            ("Instagram", self.instagrams.as_slice()),
        ]
    }

    /// True when at least one channel has a value.
    pub fn has_contacts(&self) -> bool {
        self.channels().iter().any(|(_, values)| !values.is_empty())
    }

    /// `"Channel: value"` pairs across all channels; empty channels yield nothing.
    pub fn contact_pairs(&self) -> Vec<String> {
        self.channels()
            .iter()
            .flat_map(|(label, values)| values.iter().map(move |v| format!("{}: {}", label, v)))
            .collect()
    }

    /// Fold another record for the same site into this one.
    ///
    /// Values already present are skipped, so repeated pages of one site do
    /// not repeat the same address.
    pub fn absorb(&mut self, other: ContactRecord) {
        extend_unique(&mut self.emails, other.emails);
        extend_unique(&mut self.phones, other.phones);
        extend_unique(&mut self.whatsapps, other.whatsapps);
        extend_unique(&mut self.telegrams, other.telegrams);
        extend_unique(&mut self.facebooks, other.facebooks);
        extend_unique(&mut self.instagrams, other.instagrams);
    }
}

fn extend_unique(target: &mut Vec<String>, values: Vec<String>) {
    for value in values {
        if !target.contains(&value) {
            target.push(value);
        }
    }
}
