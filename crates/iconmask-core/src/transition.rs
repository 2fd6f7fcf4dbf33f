//! Planned mask transitions and how hosts commit them.

use iconmask_model::{
    Artboard, ArtboardCommand, ArtboardId, MaskMetadata, MetadataBackend, ModelError,
};

use crate::Result;
use crate::metadata_store::write_mask_metadata;

/// Which path a transition took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskBranch {
    /// Stroke-based icon recolored in place.
    StrokeTinted,
    /// Existing mask torn down and a new one built.
    Reapplied,
    /// Mask built on artwork that was already mask-ready.
    Applied,
    /// Artwork flattened, then masked.
    FlattenedAndApplied,
    /// Stroke reset to the default color.
    StrokeReset,
    /// Mask layer removed and the icon fill restored.
    MaskRemoved,
    /// Nothing to remove.
    Unchanged,
}

/// Applies planned commands to a live artboard.
pub trait HostAdapter: MetadataBackend {
    fn apply_command(&mut self, command: &ArtboardCommand) -> std::result::Result<(), ModelError>;
}

impl HostAdapter for Artboard {
    fn apply_command(&mut self, command: &ArtboardCommand) -> std::result::Result<(), ModelError> {
        Artboard::apply_command(self, command)
    }
}

/// Structural commands plus the metadata record that must hold afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskTransition {
    pub artboard: ArtboardId,
    pub branch: MaskBranch,
    pub commands: Vec<ArtboardCommand>,
    pub metadata: MaskMetadata,
}

impl MaskTransition {
    /// Replays the commands, then writes the metadata record last.
    ///
    /// # Errors
    ///
    /// Fails on the first command the host rejects; metadata is not written
    /// in that case.
    pub fn commit<H: HostAdapter + ?Sized>(&self, host: &mut H) -> Result<()> {
        for command in &self.commands {
            host.apply_command(command)?;
        }
        write_mask_metadata(host, &self.metadata);
        Ok(())
    }
}
