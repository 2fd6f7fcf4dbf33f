//! Batch processing of the artboard selection.
//!
//! Each selected artboard is planned on a snapshot and committed to the
//! document only when its whole transition succeeded, so one failing
//! artboard never leaves half-applied edits or affects the others. The
//! selection is cleared once every artboard has been awaited.

use iconmask_model::{Artboard, ArtboardId, Document, LegacyMigrationMode, MaskOptions};
use tracing::{Instrument, debug, info, info_span, warn};

use crate::color_source::LibraryLoads;
use crate::migration::{LegacyMaskMigration, MigrationAdapter};
use crate::properties::{MaskProperties, mask_properties};
use crate::services::{LibraryService, SelectionSource, VectorFlattener};
use crate::state_machine::MaskStateMachine;
use crate::transition::{MaskBranch, MaskTransition};
use crate::{ColorRequest, MaskError, Result};

/// Outcome for one artboard that was committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtboardOutcome {
    pub artboard: ArtboardId,
    pub branch: MaskBranch,
}

/// An artboard that failed and was left untouched.
#[derive(Debug)]
pub struct ArtboardFailure {
    pub artboard: ArtboardId,
    pub error: MaskError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ArtboardOutcome>,
    pub failures: Vec<ArtboardFailure>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn committed_count(&self) -> usize {
        self.outcomes.len()
    }

    fn record(&mut self, artboard: ArtboardId, result: Result<MaskTransition>) {
        match result {
            Ok(transition) => self.outcomes.push(ArtboardOutcome {
                artboard,
                branch: transition.branch,
            }),
            Err(error) => {
                warn!(artboard = %artboard, %error, "mask operation failed");
                self.failures.push(ArtboardFailure { artboard, error });
            }
        }
    }
}

/// Drives the state machine over a document with injected host services.
pub struct MaskOrchestrator<L, F, M = LegacyMaskMigration> {
    libraries: L,
    flattener: F,
    migrator: M,
    options: MaskOptions,
}

impl<L, F> MaskOrchestrator<L, F, LegacyMaskMigration>
where
    L: LibraryService,
    F: VectorFlattener,
{
    pub fn new(libraries: L, flattener: F, options: MaskOptions) -> Self {
        Self {
            libraries,
            flattener,
            migrator: LegacyMaskMigration,
            options,
        }
    }
}

impl<L, F, M> MaskOrchestrator<L, F, M>
where
    L: LibraryService,
    F: VectorFlattener,
    M: MigrationAdapter,
{
    /// Swap the legacy migrator for another adapter.
    pub fn with_migrator<N: MigrationAdapter>(self, migrator: N) -> MaskOrchestrator<L, F, N> {
        MaskOrchestrator {
            libraries: self.libraries,
            flattener: self.flattener,
            migrator,
            options: self.options,
        }
    }

    pub fn options(&self) -> &MaskOptions {
        &self.options
    }

    pub fn libraries(&self) -> &L {
        &self.libraries
    }

    fn state_machine(&self) -> MaskStateMachine<'_, L, F> {
        MaskStateMachine::new(&self.libraries, &self.flattener, &self.options)
    }

    fn library_loads(&self) -> LibraryLoads {
        LibraryLoads::new(self.options.cache_library_loads)
    }

    /// Color every selected artboard with `request`, then clear the
    /// selection.
    pub async fn apply_to_selection<S: SelectionSource>(
        &self,
        document: &mut Document,
        selection: &mut S,
        request: &ColorRequest,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        let mut loads = self.library_loads();
        for artboard in selection.selected_artboards() {
            let span = info_span!("artboard", id = %artboard);
            let result = self
                .apply_to_artboard(document, &artboard, request, &mut loads)
                .instrument(span)
                .await;
            report.record(artboard, result);
        }
        selection.clear_selection();
        info!(
            committed = report.committed_count(),
            failed = report.failures.len(),
            "applied color to selection"
        );
        report
    }

    /// Remove color from every selected artboard, then clear the selection.
    pub fn remove_from_selection<S: SelectionSource>(
        &self,
        document: &mut Document,
        selection: &mut S,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        for artboard in selection.selected_artboards() {
            let _guard = info_span!("artboard", id = %artboard).entered();
            let result = self.remove_from_artboard(document, &artboard);
            report.record(artboard, result);
        }
        selection.clear_selection();
        info!(
            committed = report.committed_count(),
            failed = report.failures.len(),
            "removed color from selection"
        );
        report
    }

    /// Plan and commit one artboard. The document's artboard is replaced only
    /// after every command succeeded on a copy.
    pub async fn apply_to_artboard(
        &self,
        document: &mut Document,
        id: &ArtboardId,
        request: &ColorRequest,
        loads: &mut LibraryLoads,
    ) -> Result<MaskTransition> {
        let snapshot = snapshot(document, id)?;
        let transition = self
            .state_machine()
            .plan_apply(&snapshot, document, request, loads)
            .await?;
        commit(document, snapshot, &transition)?;
        Ok(transition)
    }

    pub fn remove_from_artboard(
        &self,
        document: &mut Document,
        id: &ArtboardId,
    ) -> Result<MaskTransition> {
        let snapshot = snapshot(document, id)?;
        let transition = self.state_machine().plan_remove(&snapshot);
        commit(document, snapshot, &transition)?;
        Ok(transition)
    }

    /// Resolve the color configured on artboard `id`, upgrading legacy
    /// metadata on the way when migration is enabled.
    pub async fn mask_properties(
        &self,
        document: &mut Document,
        id: &ArtboardId,
    ) -> Result<Option<MaskProperties>> {
        let mut snapshot = snapshot(document, id)?;
        let migrator = match self.options.legacy_migration {
            LegacyMigrationMode::Upgrade => Some(&self.migrator),
            LegacyMigrationMode::Skip => None,
        };
        let mut loads = self.library_loads();
        let properties = mask_properties(
            &mut snapshot,
            document,
            &self.libraries,
            migrator,
            &mut loads,
        )
        .await;

        // A completed upgrade is persisted even when resolving it failed.
        let live = document
            .artboard_mut(id)
            .ok_or_else(|| MaskError::ArtboardNotFound {
                artboard: id.clone(),
            })?;
        if live.metadata != snapshot.metadata {
            debug!(artboard = %id, "persisting migrated metadata");
            live.metadata = snapshot.metadata;
        }
        properties
    }
}

fn snapshot(document: &Document, id: &ArtboardId) -> Result<Artboard> {
    document
        .artboard(id)
        .cloned()
        .ok_or_else(|| MaskError::ArtboardNotFound {
            artboard: id.clone(),
        })
}

fn commit(
    document: &mut Document,
    mut updated: Artboard,
    transition: &MaskTransition,
) -> Result<()> {
    transition.commit(&mut updated)?;
    let live = document
        .artboard_mut(&transition.artboard)
        .ok_or_else(|| MaskError::ArtboardNotFound {
            artboard: transition.artboard.clone(),
        })?;
    *live = updated;
    Ok(())
}
