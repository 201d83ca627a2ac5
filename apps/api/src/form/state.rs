//! The per-session resume form: personal info, the fixed section list, the
//! job description, workflow status and the stored LaTeX document.
//!
//! Everything here is synchronous and never suspends. The async enhancement
//! orchestrator composes the `begin_*` / `complete_*` / `abort_*` transitions
//! around its service calls so no lock is held while waiting.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::document::latex::{render_document, PLACEHOLDER_DOCUMENT};
use crate::form::workflow::{Rejection, WorkflowStatus};
use crate::models::{default_sections, PersonalInfo, PersonalInfoField, Section};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeForm {
    personal_info: PersonalInfo,
    sections: Vec<Section>,
    job_description: String,
    status: WorkflowStatus,
    /// Section ids with a redo pass in flight.
    re_enhancing: BTreeSet<String>,
    document: String,
    #[serde(skip)]
    document_rendered: bool,
}

impl Default for ResumeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeForm {
    pub fn new() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            sections: default_sections(),
            job_description: String::new(),
            status: WorkflowStatus::Idle,
            re_enhancing: BTreeSet::new(),
            document: PLACEHOLDER_DOCUMENT.to_string(),
            document_rendered: false,
        }
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn status(&self) -> WorkflowStatus {
        self.status
    }

    pub fn is_re_enhancing(&self, id: &str) -> bool {
        self.re_enhancing.contains(id)
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    // ── Setters ────────────────────────────────────────────────────────────

    pub fn set_personal_info_field(&mut self, field: PersonalInfoField, value: String) {
        self.personal_info.set(field, value);
    }

    /// Replaces the raw content of one section. Returns false for an unknown id.
    pub fn set_section_content(&mut self, id: &str, content: String) -> bool {
        match self.sections.iter_mut().find(|s| s.id == id) {
            Some(section) => {
                section.content = content;
                true
            }
            None => false,
        }
    }

    pub fn set_job_description(&mut self, text: String) {
        self.job_description = text;
    }

    /// Stores a hand-edited document. Kept until the next explicit render.
    pub fn set_document(&mut self, latex: String) {
        self.document = latex;
    }

    /// Re-renders the document from current state, overwriting any edits.
    pub fn regenerate_document(&mut self) -> &str {
        self.document = render_document(&self.personal_info, &self.sections);
        self.document_rendered = true;
        &self.document
    }

    // ── Enhance-all transitions ────────────────────────────────────────────

    pub fn has_content(&self) -> bool {
        self.sections.iter().any(|s| !s.content.is_empty())
    }

    /// Moves `Idle -> Enhancing` and returns the sections to enhance.
    pub fn begin_enhance_all(&mut self) -> Result<Vec<Section>, Rejection> {
        match self.status {
            WorkflowStatus::Enhancing => return Err(Rejection::AlreadyEnhancing),
            WorkflowStatus::Enhanced => return Err(Rejection::AlreadyEnhanced),
            WorkflowStatus::Idle => {}
        }
        if !self.has_content() {
            return Err(Rejection::NoContent);
        }

        self.status = WorkflowStatus::Enhancing;
        Ok(self.sections.clone())
    }

    /// Writes every enhanced text in one step and moves to `Enhanced`.
    ///
    /// `results` pairs section ids with their new text. Renders the document
    /// if it has never been rendered; a stored document is otherwise left alone.
    pub fn complete_enhance_all(&mut self, results: Vec<(String, String)>) {
        if self.status != WorkflowStatus::Enhancing {
            return;
        }

        for (id, text) in results {
            if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
                section.enhanced = text;
            }
        }
        self.status = WorkflowStatus::Enhanced;

        if !self.document_rendered {
            self.regenerate_document();
        }
    }

    /// Drops a failed pass back to `Idle` without touching sections.
    pub fn abort_enhance_all(&mut self) {
        if self.status == WorkflowStatus::Enhancing {
            self.status = WorkflowStatus::Idle;
        }
    }

    // ── Single-section redo transitions ────────────────────────────────────

    /// Marks one section as re-enhancing and returns a snapshot of it.
    ///
    /// `Ok(None)` means the id is unknown; nothing changed.
    pub fn begin_re_enhance(&mut self, id: &str) -> Result<Option<Section>, Rejection> {
        let Some(section) = self.section(id).cloned() else {
            return Ok(None);
        };
        if self.status != WorkflowStatus::Enhanced {
            return Err(Rejection::NotEnhanced);
        }
        if !self.re_enhancing.insert(id.to_string()) {
            return Err(Rejection::SectionBusy(id.to_string()));
        }
        Ok(Some(section))
    }

    pub fn complete_re_enhance(&mut self, id: &str, text: String) {
        if !self.re_enhancing.remove(id) {
            return;
        }
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
            section.enhanced = text;
        }
    }

    pub fn abort_re_enhance(&mut self, id: &str) {
        self.re_enhancing.remove(id);
    }

    /// Clears all enhanced text and returns to `Idle` so a fresh pass can run.
    pub fn reset_enhancements(&mut self) -> Result<(), Rejection> {
        if self.status == WorkflowStatus::Enhancing {
            return Err(Rejection::AlreadyEnhancing);
        }
        if !self.re_enhancing.is_empty() {
            return Err(Rejection::ReEnhancePending);
        }

        for section in &mut self.sections {
            section.enhanced.clear();
        }
        self.status = WorkflowStatus::Idle;
        Ok(())
    }
}
