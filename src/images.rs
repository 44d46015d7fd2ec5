//! The fixed set of KPI images shown by the carousel.

/// Source path of the image that carries the exchange-rate table.
pub const RATE_IMAGE_SOURCE: &str = "images/dollar_graph.png";

/// Static record describing one carousel image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Resource path, relative to the assets directory.
    pub source: &'static str,
    /// Accessible description shown alongside the image.
    pub label: &'static str,
}

impl ImageDescriptor {
    pub const fn new(source: &'static str, label: &'static str) -> Self {
        Self { source, label }
    }

    /// True when this image should be accompanied by the exchange-rate table.
    ///
    /// Matches on the source path, never on the position in the carousel.
    pub fn is_rate_image(&self) -> bool {
        self.source == RATE_IMAGE_SOURCE
    }
}

static KPI_IMAGES: [ImageDescriptor; 3] = [
    ImageDescriptor::new("images/employment_graph.png", "Tasa de Empleo"),
    ImageDescriptor::new("images/inflation_graph.png", "IPC Histórico"),
    ImageDescriptor::new(RATE_IMAGE_SOURCE, "Evolución USD"),
];

/// The carousel's images, in display order.
pub fn kpi_images() -> &'static [ImageDescriptor] {
    &KPI_IMAGES
}
