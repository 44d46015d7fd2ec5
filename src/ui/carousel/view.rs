use crate::images::ImageDescriptor;
use crate::rates::ExchangeRateRecord;

/// Element handles a carousel writes to.
///
/// The controller is the only caller and always calls from the UI thread.
pub trait CarouselView {
    /// Image element: set its source and accessible label.
    fn show_image(&mut self, image: &ImageDescriptor);

    /// Table container: show or hide. Hiding never clears rows.
    fn set_table_visible(&mut self, visible: bool);

    /// Table body: drop every existing row, then append `rows` in order.
    /// Cell values are plain text.
    fn replace_rows(&mut self, rows: &[ExchangeRateRecord]);
}
