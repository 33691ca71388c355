//! Text extraction helpers: CFR references and narrative sections.

mod cfr;
mod html;
mod sections;

pub use cfr::{extract_cfr_parts, CFR_PREFIX};
pub use html::{looks_like_html, narrative_text};
pub use sections::{
    extract_section, extract_sections, NarrativeSections, Section, SectionEnd, SectionRule,
    SECTION_RULES,
};
