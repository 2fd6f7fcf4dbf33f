//! The mask/color state machine.
//!
//! An artboard is in one of three states, derived from its structure and its
//! metadata record:
//!
//! - [`MaskState::NoMask`]: raw icon.
//! - [`MaskState::StrokeTinted`]: a stroke-based icon whose borders carry the
//!   color.
//! - [`MaskState::Masked`]: the icon is a clipping mask for a trailing color
//!   layer.
//!
//! Every transition is planned against a snapshot and returned as a
//! [`MaskTransition`]; nothing here mutates the live artboard.
//!
//! # Apply
//!
//! 1. Stroke and no clipping mask: tint every enabled border.
//! 2. Clipping mask present: remove it, then build the new one.
//! 3. Otherwise flatten the artwork if needed and build the mask.
//! 4. Register the request's color source as the new metadata record.

use iconmask_model::{
    Artboard, ArtboardCommand, ClippingMaskMode, ColorReference, Document, MaskMetadata,
    MaskOptions,
};
use tracing::{debug, warn};

use crate::color_source::{ColorResolver, LibraryLoads};
use crate::metadata_store::{read_mask_metadata, register_mask};
use crate::services::{LibraryService, VectorFlattener};
use crate::transition::{MaskBranch, MaskTransition};
use crate::{ColorRequest, MaskError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum MaskState {
    NoMask,
    StrokeTinted,
    /// `reference` is `None` for legacy artboards whose record has not been
    /// migrated yet.
    Masked { reference: Option<ColorReference> },
}

/// Derive the state of `artboard` from its layers and metadata.
///
/// The clipping-mask flag decides whether the artboard is masked; metadata
/// only tells where the color comes from.
///
/// # Errors
///
/// Fails when a stored picker color or id cannot be decoded.
pub fn mask_state(artboard: &Artboard) -> Result<MaskState> {
    let metadata = read_mask_metadata(artboard);
    if artboard.has_clipping_mask() {
        return Ok(MaskState::Masked {
            reference: metadata.reference()?,
        });
    }
    if artboard.icon_has_stroke() && !metadata.is_empty() {
        return Ok(MaskState::StrokeTinted);
    }
    Ok(MaskState::NoMask)
}

pub struct MaskStateMachine<'a, L, F> {
    libraries: &'a L,
    flattener: &'a F,
    options: &'a MaskOptions,
}

impl<'a, L: LibraryService, F: VectorFlattener> MaskStateMachine<'a, L, F> {
    pub fn new(libraries: &'a L, flattener: &'a F, options: &'a MaskOptions) -> Self {
        Self {
            libraries,
            flattener,
            options,
        }
    }

    /// Plan the removal of whatever color `artboard` carries.
    ///
    /// Removal is idempotent: planning it on an already raw icon yields no
    /// commands and an empty record. Missing companion pieces of a mask are
    /// skipped with a warning.
    pub fn plan_remove(&self, artboard: &Artboard) -> MaskTransition {
        let mut commands = Vec::new();
        let branch = if artboard.icon_has_stroke() && !artboard.has_clipping_mask() {
            let color = self.options.stroke_reset_color;
            commands.extend(
                artboard
                    .stroked_layer_paths()
                    .into_iter()
                    .map(|path| ArtboardCommand::TintBorders { path, color }),
            );
            MaskBranch::StrokeReset
        } else if let Some(icon) = artboard.icon_layer().filter(|icon| icon.has_clipping_mask) {
            commands.push(ArtboardCommand::SetIconClippingMask {
                enabled: false,
                mode: ClippingMaskMode::default(),
            });
            match icon.style.first_fill_color() {
                Some(color) => commands.push(ArtboardCommand::ReplaceIconFills { color }),
                None => warn!(
                    artboard = %artboard.id,
                    "masked icon has no fill to restore"
                ),
            }
            if artboard.mask_layer().is_some() {
                commands.push(ArtboardCommand::RemoveLastLayer);
            } else {
                warn!(artboard = %artboard.id, "clipping mask without a mask layer");
            }
            MaskBranch::MaskRemoved
        } else {
            MaskBranch::Unchanged
        };
        debug!(artboard = %artboard.id, ?branch, "planned mask removal");
        MaskTransition {
            artboard: artboard.id.clone(),
            branch,
            commands,
            metadata: MaskMetadata::empty(),
        }
    }

    /// Plan coloring `artboard` with `request`.
    ///
    /// Library symbols are imported into `document` while planning; the
    /// artboard itself is only read.
    ///
    /// # Errors
    ///
    /// Any error leaves the artboard as it was: no commands are returned and
    /// no metadata is written.
    pub async fn plan_apply(
        &self,
        artboard: &Artboard,
        document: &mut Document,
        request: &ColorRequest,
        loads: &mut LibraryLoads,
    ) -> Result<MaskTransition> {
        let icon = artboard
            .icon_layer()
            .ok_or_else(|| MaskError::structural(&artboard.id, "artboard has no icon layer"))?;
        let mut resolver = ColorResolver::new(self.libraries, loads);
        let mut commands = Vec::new();

        let branch = if artboard.icon_has_stroke() && !artboard.has_clipping_mask() {
            let color = resolver.stroke_color(request, document).await?;
            commands.extend(
                artboard
                    .stroked_layer_paths()
                    .into_iter()
                    .map(|path| ArtboardCommand::TintBorders { path, color }),
            );
            MaskBranch::StrokeTinted
        } else {
            let branch = if artboard.has_clipping_mask() {
                commands.extend(self.plan_remove(artboard).commands);
                MaskBranch::Reapplied
            } else if !icon.is_mask_ready() {
                let layer = self.flattener.flatten_to_maskable(icon).await?;
                commands.push(ArtboardCommand::ReplaceIconLayer { layer });
                MaskBranch::FlattenedAndApplied
            } else {
                MaskBranch::Applied
            };

            // Removal and flattening never resize the artboard.
            let mut mask = resolver
                .mask_layer(request, artboard.size, document)
                .await?;
            mask.name = self.options.mask_layer_name.clone();
            commands.push(ArtboardCommand::DisableIconFills);
            commands.push(ArtboardCommand::AppendLayer { layer: mask });
            commands.push(ArtboardCommand::SetIconClippingMask {
                enabled: true,
                mode: ClippingMaskMode::Alpha,
            });
            branch
        };

        debug!(artboard = %artboard.id, ?branch, "planned mask application");
        Ok(MaskTransition {
            artboard: artboard.id.clone(),
            branch,
            commands,
            metadata: register_mask(request),
        })
    }
}
