//! Savegame serialization: tile the grid into 9x9 blocks and emit one
//! paintable sign component per block inside the fixed vehicle template.
//!
//! The output format must match the consuming application exactly, so the
//! header, component, and footer templates are compile-time constants and
//! the only interpolated values are plain numerics (no escaping needed).
//! The reference output is a single unbroken line; all line breaks are
//! stripped as the final step.

use crate::grid::{PixelGrid, BLOCK_SIZE, SAMPLES_PER_BLOCK};

/// Document declaration and vehicle container up to the opening of the
/// components list. Two fixed 4x4 identity transforms, empty placement
/// offset, empty authors list.
const HEADER: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<vehicle data_version="2" is_advanced="true" is_static="false" bodies_id="2">"#,
    r#"<editor_placement_offset x="0" y="0" z="0"/>"#,
    r#"<authors/>"#,
    r#"<bodies><body unique_id="2">"#,
    r#"<initial_local_transform 00="1" 01="0" 02="0" 03="0" 10="0" 11="1" 12="0" 13="0" 20="0" 21="0" 22="1" 23="0" 30="0" 31="0" 32="0" 33="1"/>"#,
    r#"<local_transform 00="1" 01="0" 02="0" 03="0" 10="0" 11="1" 12="0" 13="0" 20="0" 21="0" 22="1" 23="0" 30="0" 31="0" 32="0" 33="1"/>"#,
    r#"<components>"#,
);

/// Closes the components list, body, and bodies, and declares the empty
/// logic-link section.
const FOOTER: &str = r#"</components></body></bodies><logic_node_links/></vehicle>"#;

/// One sign component. Orientation is the identity, base and additive colors
/// are opaque white, scale is fixed, the single logic slot is disabled. The
/// middle position coordinate is always zero: it is the unused vertical axis
/// of the sign coordinate system.
fn push_component(text: &mut String, block_x: usize, block_y: usize, colors: &str) {
    text.push_str(&format!(
        concat!(
            r#"<c d="sign_na" t="0">"#,
            r#"<o r="1,0,0,0,1,0,0,0,1" bc="FFFFFFFF" ac="FFFFFFFF" sc="6" custom_name="">"#,
            r#"<vp x="{x}" y="0" z="{z}"/>"#,
            r#"<logic_slots><slot value="false"/></logic_slots>"#,
            "{colors}",
            r#"</o></c>"#,
        ),
        x = block_x,
        z = block_y,
        colors = colors,
    ));
}

/// Serialize a normalized grid into the complete savegame text.
///
/// Block order is deterministic: block X outer ascending, block Y inner
/// ascending. Within a block, samples are emitted in raster order with
/// local x outer and local y inner; the sample's tag index is
/// `local_x + 9 * local_y`.
pub fn serialize(grid: &PixelGrid) -> String {
    debug_assert_eq!(grid.width() % BLOCK_SIZE, 0);
    debug_assert_eq!(grid.height() % BLOCK_SIZE, 0);

    let blocks_x = grid.width() / BLOCK_SIZE;
    let blocks_y = grid.height() / BLOCK_SIZE;

    // ~36 bytes per color entry plus the component wrapper
    let mut text =
        String::with_capacity(HEADER.len() + FOOTER.len() + blocks_x * blocks_y * (SAMPLES_PER_BLOCK * 40 + 200));
    text.push_str(HEADER);

    let mut colors = String::with_capacity(SAMPLES_PER_BLOCK * 40);
    for block_x in 0..blocks_x {
        for block_y in 0..blocks_y {
            colors.clear();
            for local_x in 0..BLOCK_SIZE {
                for local_y in 0..BLOCK_SIZE {
                    let pixel =
                        grid.get(block_x * BLOCK_SIZE + local_x, block_y * BLOCK_SIZE + local_y);
                    let tag = local_x + BLOCK_SIZE * local_y;
                    colors.push_str(&format!(
                        r#"<cc{tag} r="{r}" g="{g}" b="{b}" a="255"/>"#,
                        tag = tag,
                        r = pixel.r,
                        g = pixel.g,
                        b = pixel.b,
                    ));
                }
            }
            push_component(&mut text, block_x, block_y, &colors);
        }
    }

    text.push_str(FOOTER);

    // The consumer is whitespace-insensitive, but the reference output is
    // one unbroken line.
    text.retain(|c| c != '\n' && c != '\r');
    text
}
