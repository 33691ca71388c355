//! Narrative section extraction from Federal Register style text.
//!
//! Each section is described by one row of [`SECTION_RULES`]: the label that
//! opens it and the boundary that closes it. Rules are evaluated
//! independently, so sections are found regardless of their order in the
//! document and a missing label only affects its own field.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Named sections of a rulemaking document preamble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Addresses,
    Dates,
    Contact,
    SupplementaryInformation,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Summary,
        Section::Addresses,
        Section::Dates,
        Section::Contact,
        Section::SupplementaryInformation,
    ];

    /// Header label as it appears in the document.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Summary => "SUMMARY",
            Section::Addresses => "ADDRESSES",
            Section::Dates => "DATES",
            Section::Contact => "FOR FURTHER INFORMATION CONTACT",
            Section::SupplementaryInformation => "SUPPLEMENTARY INFORMATION",
        }
    }
}

/// Where a section's text stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEnd {
    /// Two consecutive line breaks.
    BlankLine,
    /// The `[[Page` marker of the next page.
    PageBreak,
}

impl SectionEnd {
    fn pattern(&self) -> &'static str {
        match self {
            SectionEnd::BlankLine => r"\r?\n\r?\n",
            SectionEnd::PageBreak => r"\[\[Page",
        }
    }
}

/// One extraction rule.
pub struct SectionRule {
    pub section: Section,
    pub end: SectionEnd,
    /// Require whitespace (or start of text) before the label.
    pub leading_space: bool,
    regex: Regex,
}

impl SectionRule {
    fn new(section: Section, end: SectionEnd, leading_space: bool) -> Self {
        let lead = if leading_space { r"(?:^|\s)" } else { "" };
        let pattern = format!(
            r"{}{}:[ \t]*(?s:(.*?)){}",
            lead,
            regex::escape(section.label()),
            end.pattern()
        );
        Self {
            section,
            end,
            leading_space,
            regex: Regex::new(&pattern).unwrap(),
        }
    }

    /// First match of this rule in `text`, trimmed.
    pub fn extract(&self, text: &str) -> Option<String> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}

pub static SECTION_RULES: LazyLock<Vec<SectionRule>> = LazyLock::new(|| {
    vec![
        SectionRule::new(Section::Summary, SectionEnd::BlankLine, false),
        SectionRule::new(Section::Addresses, SectionEnd::BlankLine, true),
        SectionRule::new(Section::Dates, SectionEnd::BlankLine, false),
        SectionRule::new(Section::Contact, SectionEnd::BlankLine, false),
        SectionRule::new(
            Section::SupplementaryInformation,
            SectionEnd::PageBreak,
            false,
        ),
    ]
});

/// Sections pulled out of a document's narrative text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeSections {
    pub summary: Option<String>,
    pub addresses: Option<String>,
    pub dates: Option<String>,
    pub contact: Option<String>,
    pub sup_info: Option<String>,
}

impl NarrativeSections {
    pub fn get(&self, section: Section) -> Option<&str> {
        match section {
            Section::Summary => self.summary.as_deref(),
            Section::Addresses => self.addresses.as_deref(),
            Section::Dates => self.dates.as_deref(),
            Section::Contact => self.contact.as_deref(),
            Section::SupplementaryInformation => self.sup_info.as_deref(),
        }
    }

    fn set(&mut self, section: Section, value: Option<String>) {
        let slot = match section {
            Section::Summary => &mut self.summary,
            Section::Addresses => &mut self.addresses,
            Section::Dates => &mut self.dates,
            Section::Contact => &mut self.contact,
            Section::SupplementaryInformation => &mut self.sup_info,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.get(*s).is_none())
    }
}

/// Extract a single section.
pub fn extract_section(text: &str, section: Section) -> Option<String> {
    SECTION_RULES
        .iter()
        .find(|rule| rule.section == section)
        .and_then(|rule| rule.extract(text))
}

/// Extract all five sections.
pub fn extract_sections(text: &str) -> NarrativeSections {
    let mut sections = NarrativeSections::default();
    for rule in SECTION_RULES.iter() {
        sections.set(rule.section, rule.extract(text));
    }
    sections
}
