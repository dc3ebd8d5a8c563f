//! KMZ exporter.
//!
//! Packages the KML document and rendered symbol images into a deflated
//! zip archive held in memory.

use std::io::{Cursor, Write};
use std::path::Path;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::catalog::StyleCatalog;
use super::document::assemble;
use super::images::{ExportFile, Rasterizer, collect_images};
use crate::error::Result;
use crate::kml::write_document;
use crate::model::Layer;

/// Archive path of the KML document.
pub const DOCUMENT_PATH: &str = "doc.kml";

/// Highest deflate level.
pub const MAX_COMPRESSION_LEVEL: i64 = 9;

/// Configuration for KMZ export.
#[derive(Debug, Clone)]
pub struct KmzConfig {
    /// Deflate level (0-9, default 9).
    pub compression_level: Option<i64>,
    /// `<scale>` of marker icons.
    pub icon_scale: f32,
    /// Seed for the default style color. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for KmzConfig {
    fn default() -> Self {
        Self {
            compression_level: None,
            icon_scale: 0.8,
            seed: None,
        }
    }
}

/// Layer to KMZ exporter.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use kmzkit::export::KmzExporter;
/// use kmzkit::{Feature, Geometry, Layer, MarkerSymbol, Symbol};
///
/// let marker: Arc<Symbol> = Arc::new(MarkerSymbol::default().into());
/// let layer = Layer::new("poi").with_features(vec![
///     Feature::new(Geometry::point(-122.08, 37.42))
///         .with_attribute("Name", "Office")
///         .with_symbol(marker),
/// ]);
///
/// let mut rasterize = |_: &Symbol| std::fs::read("marker.png");
/// let kmz = KmzExporter::new().export(&layer, &mut rasterize)?;
/// std::fs::write("poi.kmz", kmz)?;
/// # Ok::<(), kmzkit::Error>(())
/// ```
pub struct KmzExporter {
    config: KmzConfig,
}

impl KmzExporter {
    /// Create a new exporter with default configuration.
    pub fn new() -> Self {
        Self {
            config: KmzConfig::default(),
        }
    }

    /// Configure the exporter with custom settings.
    pub fn with_config(mut self, config: KmzConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &KmzConfig {
        &self.config
    }

    /// Export a layer to KMZ bytes.
    ///
    /// Either the complete archive is returned or an error; nothing
    /// partial escapes.
    pub fn export<R>(&self, layer: &Layer, rasterizer: &mut R) -> Result<Vec<u8>>
    where
        R: Rasterizer + ?Sized,
    {
        let catalog = StyleCatalog::collect(&layer.features);
        debug!(
            "Layer {:?}: {} features, {} distinct symbols",
            layer.id,
            layer.features.len(),
            catalog.len()
        );

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let doc = assemble(
            &layer.id,
            &layer.features,
            &catalog,
            self.config.icon_scale,
            &mut rng,
        );

        let document = ExportFile {
            title: layer.id.clone(),
            path: DOCUMENT_PATH.to_string(),
            data: write_document(&doc).into_bytes(),
        };
        let images = collect_images(&catalog, rasterizer)?;

        let level = self
            .config
            .compression_level
            .unwrap_or(MAX_COMPRESSION_LEVEL);
        let kmz = pack(&document, &images, level)?;

        info!(
            "Exported layer {:?} to KMZ ({} entries, {} bytes)",
            layer.id,
            images.len() + 1,
            kmz.len()
        );
        Ok(kmz)
    }

    /// Export a layer and write the archive to `writer`.
    ///
    /// Nothing is written unless export succeeds.
    pub fn export_to_writer<R, W>(
        &self,
        layer: &Layer,
        rasterizer: &mut R,
        mut writer: W,
    ) -> Result<()>
    where
        R: Rasterizer + ?Sized,
        W: Write,
    {
        let kmz = self.export(layer, rasterizer)?;
        writer.write_all(&kmz)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for KmzExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a layer to a KMZ file on disk with default configuration.
///
/// The file is only created once the archive has been built.
pub fn write_kmz<R, P>(layer: &Layer, rasterizer: &mut R, path: P) -> Result<()>
where
    R: Rasterizer + ?Sized,
    P: AsRef<Path>,
{
    let kmz = KmzExporter::new().export(layer, rasterizer)?;
    std::fs::write(path, kmz)?;
    Ok(())
}

/// Zip the document followed by the images, each deflated at `level`.
pub fn pack(document: &ExportFile, images: &[ExportFile], level: i64) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let deflated = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(level));

    for file in std::iter::once(document).chain(images) {
        zip.start_file(file.path.as_str(), deflated)?;
        zip.write_all(&file.data)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
