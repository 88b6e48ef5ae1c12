//! Builds a whole directory document from configuration and roster.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate, NaiveDateTime};
use rollbook_layout::{LayoutEngine, OverrideResolver, SectionStats, roster_people};
use rollbook_render_core::Surface;
use rollbook_render_lopdf::LopdfSurface;
use rollbook_traits::{
    DirectoryResourceProvider, OverrideStore, ResourceProvider, StaticCountryTable,
    WinAnsiTransliterator,
};
use rollbook_types::{DirectoryConfig, Household, Section, SectionKind};

use crate::config::{Roster, config_from_file};
use crate::error::PipelineError;
use crate::store::JsonOverrideStore;
use crate::thumbnails::register_thumbnails;

/// Parses `YYYY-MM-DD` into noon of that day.
pub fn parse_render_date(text: &str) -> Result<NaiveDateTime, PipelineError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .ok_or_else(|| PipelineError::InvalidDate(text.to_string()))
}

/// A builder for creating a `Directory`.
#[derive(Default)]
pub struct DirectoryBuilder {
    config: Option<DirectoryConfig>,
    roster: Option<Roster>,
    override_store: Option<Box<dyn OverrideStore>>,
    resources: Option<Box<dyn ResourceProvider>>,
    render_time: Option<NaiveDateTime>,
    title: Option<String>,
}

impl DirectoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: DirectoryConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        Ok(self.with_config(config_from_file(path)?))
    }

    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn with_roster_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        Ok(self.with_roster(Roster::from_file(path)?))
    }

    /// Source of per-person display overrides. Read once, in `build`.
    pub fn with_override_store(mut self, store: impl OverrideStore + 'static) -> Self {
        self.override_store = Some(Box::new(store));
        self
    }

    pub fn with_override_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_override_store(JsonOverrideStore::new(path.as_ref()))
    }

    /// Where `<person id>.jpg` portraits are read from.
    pub fn with_resource_provider(mut self, provider: impl ResourceProvider + 'static) -> Self {
        self.resources = Some(Box::new(provider));
        self
    }

    pub fn with_image_dir<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_resource_provider(DirectoryResourceProvider::new(path.as_ref()))
    }

    /// Fixes the time ages and the `As of` stamp are computed against.
    /// Defaults to the local time at `build`.
    pub fn with_render_time(mut self, time: NaiveDateTime) -> Self {
        self.render_time = Some(time);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Validates the configuration and loads overrides. Nothing is drawn yet.
    pub fn build(self) -> Result<Directory, PipelineError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let resolver = match &self.override_store {
            Some(store) => OverrideResolver::from_store(store.as_ref()),
            None => OverrideResolver::empty(),
        };

        let render_time = self
            .render_time
            .unwrap_or_else(|| Local::now().naive_local());
        let mut roster = self.roster.unwrap_or_default();
        roster.derive_status(render_time.date());
        log::info!(
            "Directory with {} sections over {} households, {} overrides",
            config.sections.len(),
            roster.household_count(),
            resolver.len()
        );

        Ok(Directory {
            config,
            roster,
            resolver,
            resources: self.resources,
            render_time,
            title: self.title,
        })
    }
}

/// What one configured section produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionReport {
    pub header: String,
    pub kind: SectionKind,
    pub stats: SectionStats,
}

/// A configured directory, ready to render.
pub struct Directory {
    config: DirectoryConfig,
    roster: Roster,
    resolver: OverrideResolver,
    resources: Option<Box<dyn ResourceProvider>>,
    render_time: NaiveDateTime,
    title: Option<String>,
}

impl Directory {
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Renders every visible section into one PDF.
    pub fn generate(&self) -> Result<Vec<u8>, PipelineError> {
        let mut surface = LopdfSurface::new(self.config.page_dimensions()?);
        if let Some(title) = &self.title {
            surface = surface.with_title(title.clone());
        }
        let reports = self.render_into(&mut surface)?;
        log::info!("Rendered {} sections", reports.len());
        Ok(Box::new(surface).finish()?)
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PipelineError> {
        let bytes = self.generate()?;
        fs::write(path.as_ref(), &bytes)?;
        log::info!(
            "Wrote {} bytes to '{}'",
            bytes.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Draws the visible sections, in configuration order, onto `surface`.
    /// The surface is left open for the caller to finish.
    pub fn render_into(&self, surface: &mut dyn Surface) -> Result<Vec<SectionReport>, PipelineError> {
        let plan = self.section_plan()?;

        if let Some(resources) = &self.resources {
            let shown = plan
                .iter()
                .filter(|(_, kind, _)| *kind == SectionKind::Roster)
                .flat_map(|&(section, _, households)| {
                    roster_people(&self.resolver, households, section)
                });
            register_thumbnails(surface, resources.as_ref(), shown);
        }

        let mut engine = LayoutEngine::new(
            surface,
            &self.config,
            &self.resolver,
            &StaticCountryTable,
            &WinAnsiTransliterator,
            self.render_time,
        )?;

        let mut reports = Vec::with_capacity(plan.len());
        for (section, kind, households) in plan {
            let stats = match kind {
                SectionKind::Roster => engine.compose_roster(households, section)?,
                SectionKind::Index => engine.compose_index(households, section)?,
                SectionKind::Children => engine.compose_children(households, section)?,
            };
            reports.push(SectionReport {
                header: section.header.clone(),
                kind,
                stats,
            });
        }
        Ok(reports)
    }

    /// Visible sections paired with their kind and household list.
    fn section_plan(&self) -> Result<Vec<(&Section, SectionKind, &[Household])>, PipelineError> {
        let default_list = self
            .config
            .sections
            .first()
            .map(|s| s.list_name.as_str())
            .filter(|name| !name.is_empty())
            .or_else(|| self.roster.lists.keys().next().map(String::as_str))
            .unwrap_or_default();

        let mut plan = Vec::new();
        for (position, section) in self.config.sections.iter().enumerate() {
            if !section.show {
                log::debug!("Section '{}' is hidden", section.header);
                continue;
            }
            let list = if section.list_name.is_empty() {
                default_list
            } else {
                section.list_name.as_str()
            };
            let households =
                self.roster
                    .list(list)
                    .ok_or_else(|| PipelineError::MissingList {
                        section: section.header.clone(),
                        list: list.to_string(),
                    })?;
            plan.push((section, section.kind_at(position), households));
        }
        Ok(plan)
    }
}
