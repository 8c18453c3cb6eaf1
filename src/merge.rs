use crate::canvas::Canvas;
use crate::input::InputImage;
use crate::raster::COMPONENTS_PER_DOT;

/// Copies the mask selected components of every dot of `input` into the
/// canvas. Dots are matched by their linear row-major index, so the input
/// starts at the top-left dot of the canvas.
pub fn merge_channel(input: &InputImage, canvas: &mut Canvas) {
    let source = input.image();
    if source.number_of_dots() > canvas.image().number_of_dots() {
        panic!(
            "input image is bigger than canvas: input {}x{}, canvas {}x{}",
            source.width(),
            source.height(),
            canvas.width(),
            canvas.height()
        );
    }

    let routes: Vec<(usize, usize)> = input.mask().routes().collect();
    if routes.is_empty() {
        return;
    }
    let source_dots = source.dots().chunks_exact(COMPONENTS_PER_DOT);
    let canvas_dots = canvas.dots_mut().chunks_exact_mut(COMPONENTS_PER_DOT);
    for (source_dot, canvas_dot) in source_dots.zip(canvas_dots) {
        for &(source_index, destination_index) in &routes {
            canvas_dot[destination_index] = source_dot[source_index];
        }
    }
}

/// Merges the inputs one after another, later inputs overwrite the
/// channels earlier ones wrote.
pub fn merge_all(inputs: &[InputImage], canvas: &mut Canvas) {
    for input in inputs {
        log::debug!(
            "Merging '{}' with mask '{}'",
            input.path().display(),
            input.mask()
        );
        merge_channel(input, canvas);
    }
}
