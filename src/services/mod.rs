pub mod palette_store;
pub mod pixelize;

pub use palette_store::PaletteCatalog;
pub use pixelize::{output_file_names, RenderJob, RenderService, RenderedFile};
