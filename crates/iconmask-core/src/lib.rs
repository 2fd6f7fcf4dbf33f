pub mod color_source;
pub mod error;
pub mod logging;
pub mod metadata_store;
pub mod migration;
pub mod orchestrator;
pub mod properties;
pub mod services;
pub mod state_machine;
pub mod transition;

pub use color_source::{ColorRequest, ColorResolver, LibraryLoads, SymbolRef};
pub use error::{MaskError, Result};
pub use metadata_store::{
    clear_mask_metadata, read_mask_metadata, register_mask, write_mask_metadata,
};
pub use migration::{LegacyMaskMigration, MigrationAdapter, MigrationOutcome};
pub use orchestrator::{ArtboardFailure, ArtboardOutcome, BatchReport, MaskOrchestrator};
pub use properties::{MaskProperties, mask_properties};
pub use services::{LibraryService, SelectionSource, VectorFlattener};
pub use state_machine::{MaskState, MaskStateMachine, mask_state};
pub use transition::{HostAdapter, MaskBranch, MaskTransition};
