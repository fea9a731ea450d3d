//! Target grid size for ASCII rendering.

/// Character grid size for a source image of `img_width` x `img_height` pixels.
///
/// Terminal glyphs are roughly twice as tall as they are wide. The width is
/// halved, and the height is then derived from the *source* aspect ratio
/// rather than the halved one, so width shrinks more than height does.
///
/// - `char_width = floor(img_width / 2)`
/// - `char_height = floor(char_width / (img_width / img_height))`
///
/// Both divisions use `f32` like the rest of the sampling pipeline.
///
/// # Example
/// ```
/// use foo_ascii::ascii::target_dimensions;
/// // 4:2 source -> 2 columns, 1 row
/// assert_eq!(target_dimensions(4, 2), (2, 1));
/// ```
pub fn target_dimensions(img_width: u32, img_height: u32) -> (u32, u32) {
    if img_width == 0 || img_height == 0 {
        return (0, 0);
    }

    let img_aspect = img_width as f32 / img_height as f32;
    let char_width = img_width / 2;
    let char_height = (char_width as f32 / img_aspect) as u32;

    (char_width, char_height)
}
