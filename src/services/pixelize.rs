//! Batch rendering: one source image through one or more algorithms to PNG.

use crate::error::RenderError;
use crate::models::palette::{slugify, NamedPalette};
use crate::rendering::encode_canvas;
use pixel_dither::{Algorithm, CropMode, GridSize, Palette, Pixelizer, SourceImage, DISPLAY_SIZE};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings shared by every algorithm in a batch.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub palette_name: String,
    pub palette: Palette,
    pub grid_size: GridSize,
    pub algorithms: Vec<Algorithm>,
    pub crop: CropMode,
    pub display_size: u32,
    /// Write only the native-size image
    pub no_upscale: bool,
}

impl RenderJob {
    pub fn new(named: &NamedPalette, palette: Palette) -> Self {
        Self {
            palette_name: named.name.clone(),
            palette,
            grid_size: GridSize::DEFAULT,
            algorithms: vec![Algorithm::default()],
            crop: CropMode::Stretch,
            display_size: DISPLAY_SIZE,
            no_upscale: false,
        }
    }
}

/// A file written by the render service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub algorithm: Algorithm,
    pub bytes: usize,
}

/// Preview and base file names for one algorithm.
///
/// `pixelized-<algo>-<W>x<W>-<palette>.png` and
/// `pixelized-base-<algo>-<W>x<W>-<palette>.png`.
pub fn output_file_names(
    algorithm: Algorithm,
    grid_size: GridSize,
    palette_name: &str,
) -> (String, String) {
    let stem = format!(
        "{}-{grid_size}-{}.png",
        slugify(algorithm.key()),
        slugify(palette_name)
    );
    (format!("pixelized-{stem}"), format!("pixelized-base-{stem}"))
}

/// Renders jobs into an output directory.
pub struct RenderService {
    output_dir: PathBuf,
}

impl RenderService {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render every algorithm of `job`, in parallel, and write the PNGs.
    ///
    /// Files are returned in algorithm order, preview before base.
    pub fn render(
        &self,
        source: &SourceImage,
        job: &RenderJob,
    ) -> Result<Vec<RenderedFile>, RenderError> {
        fs::create_dir_all(&self.output_dir)?;

        tracing::info!(
            algorithms = job.algorithms.len(),
            grid = %job.grid_size,
            palette = %job.palette_name,
            "Rendering"
        );

        let per_algorithm = job
            .algorithms
            .par_iter()
            .map(|&algorithm| self.render_one(source, job, algorithm))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(per_algorithm.into_iter().flatten().collect())
    }

    fn render_one(
        &self,
        source: &SourceImage,
        job: &RenderJob,
        algorithm: Algorithm,
    ) -> Result<Vec<RenderedFile>, RenderError> {
        let result = Pixelizer::new(job.palette.clone())
            .grid_size(job.grid_size)
            .algorithm(algorithm)
            .crop(job.crop)
            .display_size(job.display_size)
            .pixelize(source);

        let (preview_name, base_name) =
            output_file_names(algorithm, job.grid_size, &job.palette_name);

        let mut files = Vec::with_capacity(2);
        if !job.no_upscale {
            files.push(self.write(&preview_name, algorithm, encode_canvas(&result.preview)?)?);
        }
        files.push(self.write(&base_name, algorithm, encode_canvas(&result.base)?)?);
        Ok(files)
    }

    fn write(
        &self,
        name: &str,
        algorithm: Algorithm,
        png: Vec<u8>,
    ) -> Result<RenderedFile, RenderError> {
        let path = self.output_dir.join(name);
        fs::write(&path, &png)?;
        tracing::debug!(path = %path.display(), bytes = png.len(), "Wrote PNG");
        Ok(RenderedFile {
            path,
            algorithm,
            bytes: png.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_file_names() {
        let (preview, base) =
            output_file_names(Algorithm::FloydSteinberg, GridSize::new(64).unwrap(), "Cozy 8");
        assert_eq!(preview, "pixelized-floyd-steinberg-64x64-cozy-8.png");
        assert_eq!(base, "pixelized-base-floyd-steinberg-64x64-cozy-8.png");
    }

    #[test]
    fn test_output_file_names_multi_word_keys() {
        let (preview, _) =
            output_file_names(Algorithm::DualColor, GridSize::DEFAULT, "Black & White");
        assert_eq!(
            preview,
            "pixelized-dual-color-dithering-32x32-black-&-white.png"
        );
    }

    #[test]
    fn test_render_job_defaults() {
        let named = NamedPalette::new("Mono", vec!["#000000".to_string(), "#ffffff".to_string()]);
        let job = RenderJob::new(&named, named.to_palette().unwrap());
        assert_eq!(job.palette_name, "Mono");
        assert_eq!(job.grid_size.get(), 32);
        assert_eq!(job.algorithms, vec![Algorithm::Standard]);
        assert_eq!(job.display_size, 640);
        assert!(!job.no_upscale);
    }

    #[test]
    fn test_render_service_output_dir() {
        let service = RenderService::new("out/pixels");
        assert_eq!(service.output_dir(), Path::new("out/pixels"));
    }
}
