//! The live editing session.
//!
//! A `Studio` owns exactly one `ProductModel` and the current view index.
//! Every mutation goes through it so the view always stays inside
//! `[0, total_views)` after the feature page count changes.

use log::{info, warn};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::assistant::{generate_model, AssistantRequest, GenerativeService};
use crate::export::{
    build_manifest, export_single, run_export, ExportMode, ExportReport, ManifestEntry,
};
use crate::host::{Downloader, LogNotifier, Notice, Notifier, Snapshotter};
use crate::layout::{router_for, SectionRef, ViewRouter};
use crate::model::{default_model, ProductModel};
use crate::{MockupConfig, Result};

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub struct Studio {
    model: ProductModel,
    current_view: usize,
    config: MockupConfig,
    notifier: Arc<dyn Notifier>,
}

impl Studio {
    /// Start from the default snapshot on the main view.
    pub fn new(config: MockupConfig) -> Result<Self> {
        Self::with_model(default_model(), config)
    }

    /// Start from `model`; empty or repeated item ids are replaced.
    pub fn with_model(model: ProductModel, config: MockupConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            model: model.with_unique_ids(),
            current_view: 0,
            config,
            notifier: Arc::new(LogNotifier),
        })
    }

    /// Route user-visible notices somewhere other than the log.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn model(&self) -> &ProductModel {
        &self.model
    }

    pub fn config(&self) -> &MockupConfig {
        &self.config
    }

    pub fn router(&self) -> ViewRouter {
        router_for(&self.model, &self.config)
    }

    pub fn current_view(&self) -> usize {
        self.current_view
    }

    pub fn current_section(&self) -> SectionRef {
        self.router().section_at(self.current_view)
    }

    /// Move to `view`, clamped to the last view.
    pub fn select_view(&mut self, view: usize) -> SectionRef {
        let router = self.router();
        self.current_view = router.clamp(view);
        router.section_at(self.current_view)
    }

    /// Move to the canonical view of `section`, if it exists.
    pub fn select_section(&mut self, section: SectionRef) -> Option<usize> {
        let index = self.router().try_index_of(section)?;
        self.current_view = index;
        Some(index)
    }

    /// Apply an edit and keep the current view in range.
    pub fn apply<F>(&mut self, edit: F)
    where
        F: FnOnce(&ProductModel) -> ProductModel,
    {
        let next = edit(&self.model);
        self.replace_model(next);
    }

    /// Replace the whole model, keeping the current view where possible.
    pub fn replace_model(&mut self, model: ProductModel) {
        self.model = model.with_unique_ids();
        self.current_view = self.router().clamp(self.current_view);
    }

    /// Back to the default snapshot on the main view.
    pub fn reset(&mut self) {
        info!("resetting to default content");
        self.model = default_model();
        self.current_view = 0;
    }

    pub fn manifest(&self, mode: ExportMode) -> Vec<ManifestEntry> {
        build_manifest(&self.model, mode, &self.config, now_ms())
    }

    /// Export the current view right away. Failures raise a notice.
    pub async fn export_current(
        &self,
        snapshotter: &dyn Snapshotter,
        downloader: &dyn Downloader,
    ) -> Result<()> {
        let entries = self.manifest(ExportMode::Single(self.current_view));
        match entries.first() {
            Some(entry) => {
                export_single(entry, snapshotter, downloader, self.notifier.as_ref()).await
            }
            None => Ok(()),
        }
    }

    /// Export every view in canonical order, throttled and best effort.
    pub async fn export_all(
        &self,
        snapshotter: &dyn Snapshotter,
        downloader: &dyn Downloader,
    ) -> ExportReport {
        let entries = self.manifest(ExportMode::All);
        run_export(&entries, snapshotter, downloader, &self.config.export).await
    }

    /// Replace the model with generated content.
    ///
    /// On any failure the current model is kept and exactly one notice is
    /// raised; the error is returned as well.
    pub async fn run_assistant(
        &mut self,
        service: &dyn GenerativeService,
        request: &AssistantRequest,
    ) -> Result<()> {
        match generate_model(service, request, self.config.fallback).await {
            Ok(model) => {
                self.replace_model(model);
                Ok(())
            }
            Err(e) => {
                warn!("assistant flow aborted: {}", e);
                self.notifier.notify(Notice::AssistantFailed {
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }
}
